use crate::core::{Clipboard, TextInput};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::sync::Arc;
use url::Url;

const SCRIPT_TEMPLATE: &str = r#"javascript:(()=>{
let auth = {{AUTH}};
let name = window.prompt("Name", document.title);
if (name == null) { return; }
let url = window.prompt("URL", window.location.href);
if (url == null) { return; }
let description = window.prompt("Description", "Type some stuff here");
if (description == null) { return; }
let tags = [];
while (true) {
let got = window.prompt("Add tag?", "");
if (got == null || got == "") { break; }
tags.push(got);
}
let queryUrl = {{QUERY_URL}};
try {
fetch(queryUrl, {
method: "POST",
headers: {"Authorization": auth},
body: JSON.stringify({name: name, url: url, description: description, tags: tags}),
})} catch(e) {
alert("Failed to create bookmark!\n" + String(e))
}})()"#;

/// `{scheme}://{host}[:{port}]/api/newbookmark`; default ports are left out.
pub fn new_bookmark_url(origin: &Url) -> String {
    let port = origin
        .port()
        .map(|p| format!(":{}", p))
        .unwrap_or_default();
    format!(
        "{}://{}{}/api/newbookmark",
        origin.scheme(),
        origin.host_str().unwrap_or_default(),
        port
    )
}

/// JSON string literal that is also a valid JS literal: U+2028 and U+2029 end a
/// line in pre-ES2019 engines, so they are escaped as well.
fn js_string_literal(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

pub fn bookmarklet_script(api_key: &str, origin: &Url) -> Result<String> {
    validate_non_empty_string("key", api_key)?;
    let auth = js_string_literal(&format!("Bearer {}", api_key))?;
    let query_url = js_string_literal(&new_bookmark_url(origin))?;
    Ok(SCRIPT_TEMPLATE
        .replace("{{AUTH}}", &auth)
        .replace("{{QUERY_URL}}", &query_url))
}

/// Copies a bookmarklet for the API key typed into `key`.
pub struct BookmarkletCopier {
    key: Arc<dyn TextInput>,
    origin: Url,
}

impl BookmarkletCopier {
    pub fn new(key: Arc<dyn TextInput>, origin: Url) -> Self {
        Self { key, origin }
    }

    pub fn script(&self) -> Result<String> {
        bookmarklet_script(&self.key.value(), &self.origin)
    }

    pub fn copy(&self, clipboard: &dyn Clipboard) -> Result<()> {
        let script = self.script()?;
        clipboard.write_text(&script)?;
        tracing::info!(origin = %self.origin, "Bookmarklet copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryClipboard, MemoryView};

    #[test]
    fn test_default_port_is_omitted() {
        let origin = Url::parse("https://bookmarks.example.com/index.html").unwrap();
        assert_eq!(
            new_bookmark_url(&origin),
            "https://bookmarks.example.com/api/newbookmark"
        );

        let origin = Url::parse("http://example.com:80/").unwrap();
        assert_eq!(new_bookmark_url(&origin), "http://example.com/api/newbookmark");
    }

    #[test]
    fn test_explicit_port_is_kept() {
        let origin = Url::parse("http://localhost:8080/index.html").unwrap();
        assert_eq!(
            new_bookmark_url(&origin),
            "http://localhost:8080/api/newbookmark"
        );
    }

    #[test]
    fn test_script_embeds_key_and_endpoint() {
        let origin = Url::parse("http://localhost:8080").unwrap();
        let script = bookmarklet_script("abc123", &origin).unwrap();

        assert!(script.starts_with("javascript:(()=>{"));
        assert!(script.ends_with("}})()"));
        assert!(script.contains(r#"let auth = "Bearer abc123";"#));
        assert!(script.contains(r#"let queryUrl = "http://localhost:8080/api/newbookmark";"#));
        assert!(script.contains(r#"headers: {"Authorization": auth},"#));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn test_key_is_a_string_literal() {
        let origin = Url::parse("http://localhost:8080").unwrap();
        let script = bookmarklet_script(r#"a"b"#, &origin).unwrap();
        assert!(script.contains(r#"let auth = "Bearer a\"b";"#));
    }

    #[test]
    fn test_line_separators_are_escaped() {
        let origin = Url::parse("http://localhost:8080").unwrap();
        let script = bookmarklet_script("a\u{2028}b\u{2029}c", &origin).unwrap();
        assert!(script.contains(r#"let auth = "Bearer a\u2028b\u2029c";"#));
        assert!(!script.contains('\u{2028}'));
        assert!(!script.contains('\u{2029}'));
    }

    #[test]
    fn test_empty_key_rejected() {
        let origin = Url::parse("http://localhost:8080").unwrap();
        assert!(bookmarklet_script("", &origin).is_err());
    }

    #[test]
    fn test_copy_writes_script_to_clipboard() {
        let key = Arc::new(MemoryView::new());
        key.set_value("k-1");
        let copier =
            BookmarkletCopier::new(key, Url::parse("https://marks.example.org").unwrap());
        let clipboard = MemoryClipboard::new();

        copier.copy(&clipboard).unwrap();

        let copied = clipboard.contents().unwrap();
        assert!(copied.contains("Bearer k-1"));
        assert!(copied.contains("https://marks.example.org/api/newbookmark"));
    }
}
