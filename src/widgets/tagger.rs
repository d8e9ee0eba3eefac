use crate::core::{TextInput, ViewHandle};
use crate::domain::model::{EventOutcome, Tag, TagField, UiEvent};
use std::sync::Arc;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_tag(tag: &Tag) -> String {
    let name = html_escape(&tag.name);
    format!(
        r#"<span class=taglist__tag data-controller="tag" data-tag-target="self">
    <input type=hidden name="{field}" readonly=readonly value="{name}">
        {name}
        <button class=link data-action="click->tag#remove" type=button>×</button>
        &nbsp;
</span>"#,
        field = tag.field.field_name(),
        name = name,
    )
}

pub fn render_tags(tags: &[Tag]) -> String {
    tags.iter().map(render_tag).collect::<Vec<_>>().join("\n")
}

/// Builds the tag list of the bookmark and search forms from a text input.
///
/// Markup already in the list view when the tagger is created is kept in
/// front of the tags added here.
pub struct BookmarkTagger {
    tag_name: Arc<dyn TextInput>,
    tag_list: Arc<dyn ViewHandle>,
    existing: String,
    tags: Vec<Tag>,
}

impl BookmarkTagger {
    pub fn new(tag_name: Arc<dyn TextInput>, tag_list: Arc<dyn ViewHandle>) -> Self {
        let existing = tag_list.content();
        Self {
            tag_name,
            tag_list,
            existing,
            tags: Vec::new(),
        }
    }

    pub fn add_tag(&mut self, event: &UiEvent) -> EventOutcome {
        self.add(event, TagField::Tag)
    }

    pub fn add_search_tag(&mut self, event: &UiEvent) -> EventOutcome {
        self.add(event, TagField::SearchTag)
    }

    // Only Enter submits from the keyboard; it must not also submit the form.
    fn add(&mut self, event: &UiEvent, field: TagField) -> EventOutcome {
        let default_prevented = match event {
            UiEvent::KeyDown { key } if key == "Enter" => true,
            UiEvent::KeyDown { .. } => return EventOutcome::ignored(),
            UiEvent::Click => false,
        };

        let name = self.tag_name.value();
        if !name.is_empty() {
            self.tag_name.set_value("");
            tracing::debug!(field = field.field_name(), tag = %name, "Adding tag");
            self.tags.push(Tag { field, name });
            self.render();
        }

        EventOutcome::handled(default_prevented)
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<Tag> {
        if index >= self.tags.len() {
            return None;
        }
        let removed = self.tags.remove(index);
        self.render();
        Some(removed)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn render(&self) {
        let rendered = render_tags(&self.tags);
        let html = if self.existing.is_empty() {
            rendered
        } else if rendered.is_empty() {
            self.existing.clone()
        } else {
            format!("{}\n{}", self.existing, rendered)
        };
        self.tag_list.set_content(&html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryView;

    fn tagger() -> (Arc<MemoryView>, Arc<MemoryView>, BookmarkTagger) {
        let input = Arc::new(MemoryView::new());
        let list = Arc::new(MemoryView::new());
        let tagger = BookmarkTagger::new(input.clone(), list.clone());
        (input, list, tagger)
    }

    #[test]
    fn test_click_adds_tag_and_clears_input() {
        let (input, list, mut tagger) = tagger();
        input.set_value("rust");

        let outcome = tagger.add_tag(&UiEvent::Click);

        assert_eq!(outcome, EventOutcome::handled(false));
        assert_eq!(input.value(), "");
        assert_eq!(tagger.tags().len(), 1);
        assert!(list.content().contains(r#"name="tag""#));
        assert!(list.content().contains(r#"value="rust""#));
    }

    #[test]
    fn test_enter_prevents_default() {
        let (input, list, mut tagger) = tagger();
        input.set_value("news");

        let outcome = tagger.add_search_tag(&UiEvent::key("Enter"));

        assert!(outcome.default_prevented);
        assert!(list.content().contains(r#"name="searchTag""#));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let (input, list, mut tagger) = tagger();
        input.set_value("ru");

        let outcome = tagger.add_tag(&UiEvent::key("s"));

        assert_eq!(outcome, EventOutcome::ignored());
        assert_eq!(input.value(), "ru");
        assert!(tagger.tags().is_empty());
        assert!(list.history().is_empty());
    }

    #[test]
    fn test_empty_input_adds_nothing() {
        let (_input, list, mut tagger) = tagger();
        let outcome = tagger.add_tag(&UiEvent::key("Enter"));
        assert!(outcome.handled);
        assert!(tagger.tags().is_empty());
        assert!(list.history().is_empty());
    }

    #[test]
    fn test_names_are_escaped() {
        let (input, list, mut tagger) = tagger();
        input.set_value(r#""><script>alert(1)</script>"#);

        tagger.add_tag(&UiEvent::Click);

        let html = list.content();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert_eq!(tagger.tags()[0].name, r#""><script>alert(1)</script>"#);
    }

    #[test]
    fn test_remove_tag() {
        let (input, list, mut tagger) = tagger();
        for name in ["a", "b", "c"] {
            input.set_value(name);
            tagger.add_tag(&UiEvent::Click);
        }

        let removed = tagger.remove_tag(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(tagger.tags().len(), 2);
        assert!(!list.content().contains(r#"value="b""#));
        assert!(tagger.remove_tag(5).is_none());
    }

    #[test]
    fn test_existing_markup_is_kept() {
        let input = Arc::new(MemoryView::new());
        let list = Arc::new(MemoryView::with_content("<span>server</span>"));
        let mut tagger = BookmarkTagger::new(input.clone(), list.clone());

        input.set_value("x");
        tagger.add_tag(&UiEvent::Click);
        assert!(list.content().starts_with("<span>server</span>\n"));

        tagger.remove_tag(0);
        assert_eq!(list.content(), "<span>server</span>");
    }
}
