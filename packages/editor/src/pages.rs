//! # Page Collection
//!
//! Ordered body pages. Position in the sequence is the page number; it is
//! never stored on a page and shifts whenever pages are added or removed.
//!
//! Invariant: there is always at least one page.

use crc32fast::Hasher;
use std::fmt;

use crate::RegionContentStore;

/// Opaque page identity, unique for the lifetime of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive an id seed from a template id using CRC32
pub fn page_id_seed(template_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(template_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential page id generator scoped to one document
#[derive(Debug, Clone)]
pub struct PageIdGenerator {
    seed: String,
    count: u32,
}

impl PageIdGenerator {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn next_id(&mut self) -> PageId {
        self.count += 1;
        PageId(format!("{}-page-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// One body page
#[derive(Debug, Clone)]
pub struct Page {
    id: PageId,
    body: RegionContentStore,
}

impl Page {
    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn body_content(&self) -> &str {
        self.body.content()
    }

    pub fn store(&self) -> &RegionContentStore {
        &self.body
    }

    pub(crate) fn store_mut(&mut self) -> &mut RegionContentStore {
        &mut self.body
    }
}

#[derive(Debug, Clone)]
pub struct PageCollection {
    pages: Vec<Page>,
    ids: PageIdGenerator,
}

impl PageCollection {
    /// Single empty page
    pub fn new(ids: PageIdGenerator) -> Self {
        Self::from_contents(ids, Vec::new())
    }

    /// One page per content string, each with a fresh identity
    ///
    /// An empty list still yields one empty page.
    pub fn from_contents(mut ids: PageIdGenerator, contents: Vec<String>) -> Self {
        let mut pages: Vec<Page> = contents
            .into_iter()
            .map(|content| Page {
                id: ids.next_id(),
                body: RegionContentStore::new(content),
            })
            .collect();

        if pages.is_empty() {
            pages.push(Page {
                id: ids.next_id(),
                body: RegionContentStore::default(),
            });
        }

        Self { pages, ids }
    }

    /// Insert an empty page after `after_index`, or append with `None`
    ///
    /// Out-of-range indexes append. Returns the new page's id.
    pub fn add_page(&mut self, after_index: Option<usize>) -> PageId {
        let page = Page {
            id: self.ids.next_id(),
            body: RegionContentStore::default(),
        };
        let id = page.id.clone();

        let insert_at = match after_index {
            Some(index) if index < self.pages.len() => index + 1,
            _ => self.pages.len(),
        };
        self.pages.insert(insert_at, page);

        tracing::debug!(page = %id, position = insert_at + 1, total = self.pages.len(), "added page");
        id
    }

    /// Remove a page unless it is the only one left
    ///
    /// Returns the index it occupied, or `None` when nothing was removed.
    pub fn delete_page(&mut self, id: &PageId) -> Option<usize> {
        if self.pages.len() <= 1 {
            tracing::debug!(page = %id, "refusing to delete the last page");
            return None;
        }

        let index = self.index_of(id)?;
        self.pages.remove(index);
        tracing::debug!(page = %id, index, total = self.pages.len(), "deleted page");
        Some(index)
    }

    /// Record new body content emitted by a page's surface
    ///
    /// Identity and position are unchanged. Returns `true` when the content
    /// actually changed; unknown ids are ignored.
    pub fn update_page_content(&mut self, id: &PageId, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(page) => page.body.record_emitted(content),
            None => {
                tracing::debug!(page = %id, "ignoring content for unknown page");
                false
            }
        }
    }

    pub fn get(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| &p.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn index_of(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    /// 1-based page number of `id` in the current order
    pub fn page_number(&self, id: &PageId) -> Option<usize> {
        self.index_of(id).map(|index| index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|p| p.id.clone()).collect()
    }

    /// Body contents in page order
    pub fn contents(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.body_content()).collect()
    }

    pub fn first(&self) -> &Page {
        &self.pages[0]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> PageCollection {
        PageCollection::new(PageIdGenerator::new("doc"))
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(page_id_seed("template-1"), page_id_seed("template-1"));
        assert_ne!(page_id_seed("template-1"), page_id_seed("template-2"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = PageIdGenerator::new("abc");

        let id1 = ids.next_id();
        let id2 = ids.next_id();

        assert_eq!(id1.as_str(), "abc-page-1");
        assert_eq!(id2.as_str(), "abc-page-2");
        assert!(id1.as_str().starts_with(ids.seed()));
    }

    #[test]
    fn test_starts_with_one_empty_page() {
        let pages = collection();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.first().body_content(), "");
    }

    #[test]
    fn test_add_page_appends() {
        let mut pages = collection();
        let first = pages.first().id().clone();
        let second = pages.add_page(None);

        assert_eq!(pages.ids(), vec![first, second.clone()]);
        assert_eq!(pages.page_number(&second), Some(2));
    }

    #[test]
    fn test_add_page_after_index() {
        let mut pages = collection();
        let p1 = pages.first().id().clone();
        let p2 = pages.add_page(None);
        let inserted = pages.add_page(Some(0));

        assert_eq!(pages.ids(), vec![p1, inserted, p2.clone()]);
        assert_eq!(pages.page_number(&p2), Some(3));
    }

    #[test]
    fn test_add_page_out_of_range_appends() {
        let mut pages = collection();
        let id = pages.add_page(Some(42));
        assert_eq!(pages.index_of(&id), Some(1));
    }

    #[test]
    fn test_delete_last_page_is_noop() {
        let mut pages = collection();
        let only = pages.first().id().clone();

        assert_eq!(pages.delete_page(&only), None);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.first().id(), &only);
    }

    #[test]
    fn test_delete_renumbers() {
        let mut pages = collection();
        let p1 = pages.first().id().clone();
        let p2 = pages.add_page(None);
        let p3 = pages.add_page(None);

        assert_eq!(pages.delete_page(&p1), Some(0));
        assert_eq!(pages.page_number(&p2), Some(1));
        assert_eq!(pages.page_number(&p3), Some(2));
        assert_eq!(pages.page_number(&p1), None);
    }

    #[test]
    fn test_delete_unknown_page() {
        let mut pages = collection();
        pages.add_page(None);
        let mut other = PageIdGenerator::new("other");

        assert_eq!(pages.delete_page(&other.next_id()), None);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_update_page_content_keeps_position() {
        let mut pages = collection();
        let p1 = pages.first().id().clone();
        let p2 = pages.add_page(None);

        assert!(pages.update_page_content(&p2, "B"));
        assert!(!pages.update_page_content(&p2, "B"));

        assert_eq!(pages.contents(), vec!["", "B"]);
        assert_eq!(pages.index_of(&p1), Some(0));
        assert_eq!(pages.index_of(&p2), Some(1));
        assert_eq!(pages.get(&p2).unwrap().store().last_emitted(), Some("B"));
    }

    #[test]
    fn test_from_empty_contents() {
        let pages = PageCollection::from_contents(PageIdGenerator::new("doc"), vec![]);
        assert_eq!(pages.len(), 1);
    }
}
