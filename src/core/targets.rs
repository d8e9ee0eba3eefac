use crate::domain::ports::ViewHandle;
use std::collections::HashMap;
use std::sync::Arc;

/// Views grouped by target label. A label may name any number of views.
#[derive(Clone, Default)]
pub struct TargetRegistry {
    targets: HashMap<String, Vec<Arc<dyn ViewHandle>>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, label: impl Into<String>, view: Arc<dyn ViewHandle>) {
        self.targets.entry(label.into()).or_default().push(view);
    }

    pub fn with_view(mut self, label: impl Into<String>, view: Arc<dyn ViewHandle>) -> Self {
        self.register(label, view);
        self
    }

    /// Every view registered under `label`, in registration order. Unknown labels are empty.
    pub fn views(&self, label: &str) -> Vec<Arc<dyn ViewHandle>> {
        self.targets.get(label).cloned().unwrap_or_default()
    }

    /// Total number of registered views across all labels.
    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .targets
            .iter()
            .map(|(label, views)| (label.as_str(), views.len()))
            .collect();
        f.debug_struct("TargetRegistry").field("targets", &counts).finish()
    }
}
