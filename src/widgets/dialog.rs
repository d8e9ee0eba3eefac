use crate::core::ViewHandle;
use std::sync::Arc;

/// The collapsible "new bookmark" form with its show and hide buttons.
pub struct NewDialogue {
    form: Arc<dyn ViewHandle>,
    show_button: Arc<dyn ViewHandle>,
    hide_button: Arc<dyn ViewHandle>,
}

impl NewDialogue {
    pub fn new(
        form: Arc<dyn ViewHandle>,
        show_button: Arc<dyn ViewHandle>,
        hide_button: Arc<dyn ViewHandle>,
    ) -> Self {
        Self {
            form,
            show_button,
            hide_button,
        }
    }

    pub fn show(&self) {
        self.set_open(true);
    }

    pub fn hide(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        self.form.set_visible(open);
        self.show_button.set_visible(!open);
        self.hide_button.set_visible(open);
    }

    pub fn is_open(&self) -> bool {
        self.form.is_visible()
    }
}
