use crate::core::{Clipboard, TextInput, ViewHandle};
use crate::utils::error::{Result, UiError};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct ViewState {
    content: String,
    visible: bool,
    value: String,
    history: Vec<String>,
}

/// In-memory page region. Keeps every content it was given, in order.
#[derive(Debug)]
pub struct MemoryView {
    state: Mutex<ViewState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::with_content("")
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            state: Mutex::new(ViewState {
                content: content.to_string(),
                visible: true,
                value: String::new(),
                history: Vec::new(),
            }),
        }
    }

    pub fn hidden() -> Self {
        let view = Self::new();
        view.set_visible(false);
        view
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn history(&self) -> Vec<String> {
        self.state().history.clone()
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHandle for MemoryView {
    fn set_content(&self, html: &str) {
        let mut state = self.state();
        state.content = html.to_string();
        state.history.push(html.to_string());
    }

    fn content(&self) -> String {
        self.state().content.clone()
    }

    fn set_visible(&self, visible: bool) {
        self.state().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }
}

impl TextInput for MemoryView {
    fn value(&self) -> String {
        self.state().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state().value = value.to_string();
    }
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn writes(&self) -> MutexGuard<'_, Vec<String>> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn contents(&self) -> Option<String> {
        self.writes().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(UiError::Clipboard {
                message: "clipboard is not available".to_string(),
            });
        }
        self.writes().push(text.to_string());
        Ok(())
    }
}
