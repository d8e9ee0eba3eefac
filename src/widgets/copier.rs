use crate::core::{Clipboard, TextInput, ViewHandle};
use crate::utils::error::Result;
use std::sync::Arc;

/// A field that can be shown and read, like a (possibly hidden) textarea.
pub trait CopySource: ViewHandle + TextInput {}

impl<T: ViewHandle + TextInput> CopySource for T {}

pub struct TextCopier {
    text: Arc<dyn CopySource>,
}

impl TextCopier {
    pub fn new(text: Arc<dyn CopySource>) -> Self {
        Self { text }
    }

    /// Copies the field's value. The field is shown for the duration of the
    /// copy and its visibility restored afterwards, even if the copy fails.
    pub fn copy(&self, clipboard: &dyn Clipboard) -> Result<()> {
        let was_visible = self.text.is_visible();
        self.text.set_visible(true);
        let result = clipboard.write_text(&self.text.value());
        self.text.set_visible(was_visible);
        result
    }
}
