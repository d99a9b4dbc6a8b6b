//! # Document Assembler
//!
//! Maps the in-memory document onto the flat persisted template and back.
//!
//! Body pages are stored as one string, joined with [`PAGE_BREAK`]:
//!
//! ```text
//! pages ["A", "B"]  ⇄  bodyContent "A<!-- PAGE_BREAK -->B"
//! ```
//!
//! Page identities are never persisted; every load assigns fresh ones.

use pagecraft_template::Template;

use crate::{Document, DocumentMode, LayoutConfig, PageCollection, PageIdGenerator};

/// Marker between consecutive pages in `bodyContent`
pub const PAGE_BREAK: &str = "<!-- PAGE_BREAK -->";

/// Join page bodies in order
pub fn join_pages<'a, I>(contents: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    contents.into_iter().collect::<Vec<_>>().join(PAGE_BREAK)
}

/// Split a persisted body into page contents
///
/// A body without the marker is a single page; an empty body is one empty
/// page. Never returns an empty list.
pub fn split_pages(body: &str) -> Vec<String> {
    body.split(PAGE_BREAK).map(str::to_string).collect()
}

/// Build the page sequence for a persisted body
pub fn deserialize_pages(body: &str, ids: PageIdGenerator) -> PageCollection {
    PageCollection::from_contents(ids, split_pages(body))
}

/// Write the document into a copy of `base`
///
/// Identity and creation time come from `base`; `updatedAt` is bumped.
pub fn serialize(document: &Document, base: &Template) -> Template {
    let mut template = base.clone();
    template.name = document.name().to_string();
    template.header_content = document.header().content().to_string();
    template.footer_content = document.footer().content().to_string();
    template.header_height = document.header().stored_height();
    template.footer_height = document.footer().stored_height();
    template.body_content = join_pages(document.pages().contents());
    template.touch();
    template
}

/// Rebuild a document from a persisted template
pub fn deserialize(template: &Template, mode: DocumentMode, config: LayoutConfig) -> Document {
    Document::from_template(template, mode, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages() {
        assert_eq!(join_pages(["A", "B"]), "A<!-- PAGE_BREAK -->B");
        assert_eq!(join_pages(["only"]), "only");
    }

    #[test]
    fn test_split_without_marker_is_single_page() {
        assert_eq!(split_pages("<p>whole</p>"), vec!["<p>whole</p>"]);
    }

    #[test]
    fn test_split_empty_is_one_empty_page() {
        assert_eq!(split_pages(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_empty_pages() {
        let body = format!("A{}{}C", PAGE_BREAK, PAGE_BREAK);
        assert_eq!(split_pages(&body), vec!["A", "", "C"]);
    }

    #[test]
    fn test_round_trip_contents() {
        let pages = vec!["<p>one</p>", "", "<h1>three</h1><p>x</p>", "four"];
        let joined = join_pages(pages.iter().copied());
        assert_eq!(split_pages(&joined), pages);
    }

    #[test]
    fn test_deserialize_pages_assigns_fresh_ids() {
        let collection = deserialize_pages("A<!-- PAGE_BREAK -->B", PageIdGenerator::new("t"));
        assert_eq!(collection.contents(), vec!["A", "B"]);

        let ids = collection.ids();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_serialize_deserialize_document() {
        let mut base = Template::new("Notes");
        base.header_content = "<p>H</p>".to_string();
        base.footer_height = 12.0;
        base.body_content = join_pages(["one", "two", "three"]);

        let doc = deserialize(&base, DocumentMode::BodyEditable, LayoutConfig::default());
        assert_eq!(doc.pages().len(), 3);

        let saved = serialize(&doc, &base);
        assert_eq!(saved.body_content, base.body_content);
        assert_eq!(saved.header_content, "<p>H</p>");
        assert_eq!(saved.footer_height, 12.0);
        assert!(saved.updated_at >= base.updated_at);
    }
}
