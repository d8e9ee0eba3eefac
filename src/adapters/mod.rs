// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod memory;

pub use http::HttpFragmentSource;
pub use memory::{MemoryClipboard, MemoryView};
