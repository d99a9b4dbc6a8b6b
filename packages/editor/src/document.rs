//! # Document
//!
//! In-memory composition of one shared header, an ordered list of body
//! pages and one shared footer.
//!
//! ## Lifecycle
//!
//! ```text
//! Template → from_template → edit → to_template → Template
//!               ↓                        ↑
//!          split pages              join pages
//! ```
//!
//! Every page renders the same header and footer; only body content is
//! per page.

use pagecraft_template::{
    Template, DEFAULT_FOOTER_HEIGHT, DEFAULT_HEADER_HEIGHT, MAX_REGION_HEIGHT, MIN_REGION_HEIGHT,
};

use uuid::Uuid;

use crate::assembler;
use crate::{
    page_id_seed, DocumentMode, EditingSurface, HeightConstraint, LayoutConfig, PageCollection,
    PageId, PageIdGenerator, RegionContentStore, RegionKind, SurfaceId, SyncOutcome,
};

/// Header or footer region shared by all pages
#[derive(Debug, Clone)]
pub struct Region {
    kind: RegionKind,
    store: RegionContentStore,
    locked: bool,
    stored_height: f64,
    constraint: HeightConstraint,
}

impl Region {
    pub fn new(
        kind: RegionKind,
        content: impl Into<String>,
        stored_height: f64,
        mode: DocumentMode,
        config: &LayoutConfig,
    ) -> Self {
        Self {
            kind,
            store: RegionContentStore::new(content),
            locked: mode.is_locked(kind),
            stored_height: clamp_stored_height(kind, stored_height),
            constraint: HeightConstraint::new(kind, config),
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        self.store.content()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Height the user last chose (percent of page)
    pub fn stored_height(&self) -> f64 {
        self.stored_height
    }

    /// Height actually displayed; never smaller than the content needs
    pub fn effective_height(&self) -> f64 {
        self.constraint.effective_height(self.stored_height)
    }

    pub fn min_height_pct(&self) -> f64 {
        self.constraint.min_height_pct()
    }

    pub fn constraint(&self) -> &HeightConstraint {
        &self.constraint
    }

    pub fn store(&self) -> &RegionContentStore {
        &self.store
    }
}

fn clamp_stored_height(kind: RegionKind, height: f64) -> f64 {
    if height.is_finite() {
        return height.clamp(MIN_REGION_HEIGHT, MAX_REGION_HEIGHT);
    }
    match kind {
        RegionKind::Header => DEFAULT_HEADER_HEIGHT,
        RegionKind::Footer => DEFAULT_FOOTER_HEIGHT,
        RegionKind::Body => MIN_REGION_HEIGHT,
    }
}

/// Editable multi-page document
#[derive(Debug, Clone)]
pub struct Document {
    /// Increments on every content, height or page-structure change
    pub version: u64,

    saved_version: u64,
    name: String,
    mode: DocumentMode,
    header: Region,
    footer: Region,
    pages: PageCollection,
    zoom: u32,
    config: LayoutConfig,
}

impl Document {
    /// Empty single-page document with default region heights
    pub fn new(name: impl Into<String>, mode: DocumentMode, config: LayoutConfig) -> Self {
        let template = Template::new(name);
        Self::from_template(&template, mode, config)
    }

    /// Build a document from a persisted template
    ///
    /// Malformed bodies degrade to a single page; heights are clamped to the
    /// persisted domain. Every load draws fresh page ids.
    pub fn from_template(template: &Template, mode: DocumentMode, config: LayoutConfig) -> Self {
        let nonce = Uuid::new_v4();
        let ids = PageIdGenerator::new(page_id_seed(&format!("{}:{}", template.id, nonce)));
        let pages = assembler::deserialize_pages(&template.body_content, ids);

        tracing::debug!(
            template = %template.id,
            pages = pages.len(),
            ?mode,
            "loaded document"
        );

        Self {
            version: 0,
            saved_version: 0,
            name: template.name.clone(),
            mode,
            header: Region::new(
                RegionKind::Header,
                template.header_content.clone(),
                template.header_height,
                mode,
                &config,
            ),
            footer: Region::new(
                RegionKind::Footer,
                template.footer_content.clone(),
                template.footer_height,
                mode,
                &config,
            ),
            pages,
            zoom: config.zoom_default,
            config,
        }
    }

    /// Persist into a copy of `base`, keeping its id and creation time
    pub fn to_template(&self, base: &Template) -> Template {
        assembler::serialize(self, base)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.version += 1;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn mode(&self) -> DocumentMode {
        self.mode
    }

    /// Switch which region class is editable
    pub fn set_mode(&mut self, mode: DocumentMode) {
        self.mode = mode;
        self.header.locked = mode.is_locked(RegionKind::Header);
        self.footer.locked = mode.is_locked(RegionKind::Footer);
    }

    pub fn header(&self) -> &Region {
        &self.header
    }

    pub fn footer(&self) -> &Region {
        &self.footer
    }

    /// Header or footer; `None` for body
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        match kind {
            RegionKind::Header => Some(&self.header),
            RegionKind::Footer => Some(&self.footer),
            RegionKind::Body => None,
        }
    }

    pub fn region_mut(&mut self, kind: RegionKind) -> Option<&mut Region> {
        match kind {
            RegionKind::Header => Some(&mut self.header),
            RegionKind::Footer => Some(&mut self.footer),
            RegionKind::Body => None,
        }
    }

    pub fn is_locked(&self, kind: RegionKind) -> bool {
        self.mode.is_locked(kind)
    }

    pub fn pages(&self) -> &PageCollection {
        &self.pages
    }

    /// Record content emitted by the header or footer surface
    pub fn record_region_content(&mut self, kind: RegionKind, content: impl Into<String>) -> bool {
        let Some(region) = self.region_mut(kind) else {
            return false;
        };
        let changed = region.store.record_emitted(content);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Adopt externally supplied header or footer content
    ///
    /// The surface, if attached, is updated without echoing the change back.
    pub fn reconcile_region_content(
        &mut self,
        kind: RegionKind,
        incoming: &str,
        surface: Option<&mut dyn EditingSurface>,
    ) -> Option<SyncOutcome> {
        let region = self.region_mut(kind)?;
        let changed = region.content() != incoming;
        let outcome = region.store.reconcile(incoming, surface);
        if changed {
            self.version += 1;
        }
        Some(outcome)
    }

    /// Adopt externally supplied body content for one page
    pub fn reconcile_page_content(
        &mut self,
        id: &PageId,
        incoming: &str,
        surface: Option<&mut dyn EditingSurface>,
    ) -> Option<SyncOutcome> {
        let page = self.pages.get_mut(id)?;
        let changed = page.body_content() != incoming;
        let outcome = page.store_mut().reconcile(incoming, surface);
        if changed {
            self.version += 1;
        }
        Some(outcome)
    }

    /// Push stored content into a newly attached surface
    pub fn attach_surface(
        &mut self,
        id: &SurfaceId,
        surface: &mut dyn EditingSurface,
    ) -> Option<SyncOutcome> {
        let store = match id {
            SurfaceId::Header => &mut self.header.store,
            SurfaceId::Footer => &mut self.footer.store,
            SurfaceId::Body(page_id) => self.pages.get_mut(page_id)?.store_mut(),
        };
        Some(store.attach(surface))
    }

    pub fn add_page(&mut self, after_index: Option<usize>) -> PageId {
        self.version += 1;
        self.pages.add_page(after_index)
    }

    /// Delete a page; the last remaining page is never removed
    pub fn delete_page(&mut self, id: &PageId) -> Option<usize> {
        let removed = self.pages.delete_page(id);
        if removed.is_some() {
            self.version += 1;
        }
        removed
    }

    pub fn update_page_content(&mut self, id: &PageId, content: impl Into<String>) -> bool {
        let changed = self.pages.update_page_content(id, content);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Store a clamped height preference and return the value stored
    ///
    /// Body has no height and is ignored (returns 0).
    pub fn set_region_height(&mut self, kind: RegionKind, requested_pct: f64) -> f64 {
        let Some(region) = self.region_mut(kind) else {
            return 0.0;
        };
        let height = region.constraint.clamp(requested_pct);
        if height != region.stored_height {
            region.stored_height = height;
            self.version += 1;
        }
        height
    }

    /// Displayed height of header or footer
    pub fn effective_height(&self, kind: RegionKind) -> f64 {
        self.region(kind)
            .map(Region::effective_height)
            .unwrap_or(0.0)
    }

    /// The surface reported a new rendered content height
    pub fn observe_rendered_height(&mut self, kind: RegionKind, height_px: f64) -> f64 {
        match self.region_mut(kind) {
            Some(region) => region.constraint.observe_content_height(height_px),
            None => 0.0,
        }
    }

    pub fn constraint(&self, kind: RegionKind) -> Option<&HeightConstraint> {
        self.region(kind).map(Region::constraint)
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: u32) -> u32 {
        self.zoom = self.config.clamp_zoom(zoom);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> u32 {
        self.set_zoom(self.zoom.saturating_add(self.config.zoom_step))
    }

    pub fn zoom_out(&mut self) -> u32 {
        self.set_zoom(self.zoom.saturating_sub(self.config.zoom_step))
    }

    pub fn is_dirty(&self) -> bool {
        self.version != self.saved_version
    }

    pub fn mark_saved(&mut self) {
        self.saved_version = self.version;
    }
}
