use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A handle to one rendered page region.
pub trait ViewHandle: Send + Sync {
    fn set_content(&self, html: &str);
    fn content(&self) -> String;
    fn set_visible(&self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// A form control whose value can be read and replaced.
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Body of a successful `GET /partial/{endpoint}`; any other answer is
    /// `UiError::FragmentFetchFailed`.
    async fn fetch(&self, endpoint: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn spinner_delay(&self) -> Duration;
    fn spinner_html(&self) -> &str;
    fn error_html(&self) -> &str;
}
