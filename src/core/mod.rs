pub mod deferred;
pub mod partial_loader;
pub mod targets;

pub use crate::domain::model::{FragmentRequest, LoadOutcome, LoadReport, LoadState};
pub use crate::domain::ports::{Clipboard, ConfigProvider, FragmentSource, TextInput, ViewHandle};
pub use crate::utils::error::Result;
