use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One partial to load: which server endpoint, into which target label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRequest {
    pub endpoint: String,
    pub target: String,
}

impl FragmentRequest {
    pub fn new(endpoint: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            target: target.into(),
        }
    }

    pub fn path(&self) -> String {
        format!("/partial/{}", self.endpoint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Requesting,
    ShowingSpinner,
    Loaded,
    Errored,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Errored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadOutcome {
    Loaded,
    /// `status` is `None` when the request never got an HTTP answer.
    Errored { status: Option<u16> },
}

impl LoadOutcome {
    pub fn state(&self) -> LoadState {
        match self {
            LoadOutcome::Loaded => LoadState::Loaded,
            LoadOutcome::Errored { .. } => LoadState::Errored,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub request: FragmentRequest,
    pub outcome: LoadOutcome,
    pub spinner_shown: bool,
    pub views_updated: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Which hidden form field a tag is submitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagField {
    Tag,
    SearchTag,
}

impl TagField {
    pub fn field_name(&self) -> &'static str {
        match self {
            TagField::Tag => "tag",
            TagField::SearchTag => "searchTag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub field: TagField,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    KeyDown { key: String },
}

impl UiEvent {
    pub fn key(key: impl Into<String>) -> Self {
        UiEvent::KeyDown { key: key.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub handled: bool,
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(default_prevented: bool) -> Self {
        Self {
            handled: true,
            default_prevented,
        }
    }
}
