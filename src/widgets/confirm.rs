use crate::core::ViewHandle;
use std::sync::Arc;

/// Two-step confirmation: the initial button swaps for the real action.
pub struct ConfirmToggle {
    initial: Arc<dyn ViewHandle>,
    primary: Arc<dyn ViewHandle>,
}

impl ConfirmToggle {
    pub fn new(initial: Arc<dyn ViewHandle>, primary: Arc<dyn ViewHandle>) -> Self {
        Self { initial, primary }
    }

    pub fn prime(&self) {
        self.initial.set_visible(false);
        self.primary.set_visible(true);
    }

    pub fn cancel(&self) {
        self.initial.set_visible(true);
        self.primary.set_visible(false);
    }
}
