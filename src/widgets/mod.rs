// Page helpers bound to UI events: visibility toggles, tag list, clipboard.

pub mod bookmarklet;
pub mod confirm;
pub mod copier;
pub mod dialog;
pub mod tagger;

pub use bookmarklet::BookmarkletCopier;
pub use confirm::ConfirmToggle;
pub use copier::TextCopier;
pub use dialog::NewDialogue;
pub use tagger::BookmarkTagger;
