pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod widgets;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpFragmentSource, MemoryClipboard, MemoryView};
pub use crate::config::{LoaderSettings, TomlConfig};
pub use crate::core::{partial_loader::PartialLoader, targets::TargetRegistry};
pub use crate::domain::model::{FragmentRequest, LoadOutcome, LoadReport, LoadState};
pub use crate::utils::error::{Result, UiError};
