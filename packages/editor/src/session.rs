//! # Edit Session
//!
//! Owns one open document together with the live surfaces rendering it and
//! routes everything between them:
//!
//! ```text
//! SurfaceEvent ──► handle ──► Document / ActiveSurfaceTracker
//! FormatCommand ─► dispatch ─► active surface
//! pointer ───────► gestures ─► region height / image attrs
//! ```
//!
//! Surfaces are registered under a [`SurfaceId`]; a body surface is bound to
//! a page identity, so structural page changes never re-point a handle.

use std::collections::HashMap;

use pagecraft_template::Template;

use crate::{
    ActiveSurface, ActiveSurfaceTracker, Document, DocumentMode, EditingSurface, FormatCommand,
    GestureCommit, GestureUpdate, HandleEdge, ImageAttrs, ImageCorner, ImageSize, PageId, Point,
    RegionKind, ResizeGestureController, SurfaceEvent, SurfaceId, SyncOutcome,
};

/// Where a toolbar command went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Routed(SurfaceId),

    /// No active surface, or its handle is gone
    Dropped,
}

type SurfaceMap = HashMap<SurfaceId, Box<dyn EditingSurface>>;

fn surface_slot<'a>(
    surfaces: &'a mut SurfaceMap,
    id: &SurfaceId,
) -> Option<&'a mut dyn EditingSurface> {
    match surfaces.get_mut(id) {
        Some(surface) => Some(surface.as_mut() as &mut dyn EditingSurface),
        None => None,
    }
}

/// Single editing session over one document
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    document: Document,
    surfaces: SurfaceMap,
    tracker: ActiveSurfaceTracker,
    gestures: ResizeGestureController,
}

impl EditSession {
    pub fn new(id: impl Into<String>, document: Document) -> Self {
        let gestures = ResizeGestureController::new(document.config());
        Self {
            id: id.into(),
            document,
            surfaces: HashMap::new(),
            tracker: ActiveSurfaceTracker::new(),
            gestures,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn is_attached(&self, id: &SurfaceId) -> bool {
        self.surfaces.contains_key(id)
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Register a surface that finished initializing
    ///
    /// The surface receives the stored content and the current editability.
    /// Returns `false` for a body surface whose page no longer exists.
    pub fn attach_surface(&mut self, id: SurfaceId, mut surface: Box<dyn EditingSurface>) -> bool {
        let region = id.region();
        let Some(outcome) = self.document.attach_surface(&id, surface.as_mut()) else {
            tracing::debug!(surface = %id, "not attaching surface for unknown page");
            return false;
        };

        surface.set_editable(!self.document.is_locked(region));
        if region.has_height() {
            self.document
                .observe_rendered_height(region, surface.rendered_height());
        }

        if self.gestures.bound_surface() == Some(&id) {
            self.gestures.detach();
        }
        tracing::debug!(surface = %id, ?outcome, "surface attached");
        self.surfaces.insert(id, surface);
        true
    }

    /// Drop a surface handle; a gesture bound to it is torn down
    pub fn detach_surface(&mut self, id: &SurfaceId) -> Option<Box<dyn EditingSurface>> {
        let removed = self.surfaces.remove(id)?;
        let bound = self.gestures.bound_surface() == Some(id)
            || self.gestures.bound_region() == Some(id.region());
        if bound {
            self.gestures.detach();
        }
        tracing::debug!(surface = %id, "surface detached");
        Some(removed)
    }

    /// Apply one surface notification
    ///
    /// Returns `true` when the event changed document or focus state.
    pub fn handle(&mut self, event: SurfaceEvent) -> bool {
        match event {
            SurfaceEvent::Focus(id) => match self.active_for(&id) {
                Some(active) => self.tracker.focus(active, self.document.mode()),
                None => false,
            },
            SurfaceEvent::Changed { surface, content } => {
                let region = surface.region();
                if self.document.is_locked(region) {
                    tracing::debug!(%surface, "ignoring change from locked surface");
                    return false;
                }
                if !self.surfaces.contains_key(&surface) {
                    tracing::debug!(%surface, "ignoring change from detached surface");
                    return false;
                }
                match &surface {
                    SurfaceId::Body(page_id) => self.document.update_page_content(page_id, content),
                    _ => self.document.record_region_content(region, content),
                }
            }
            SurfaceEvent::Resized { surface, height_px } => {
                let region = surface.region();
                if !region.has_height() {
                    return false;
                }
                let before = self.document.effective_height(region);
                self.document.observe_rendered_height(region, height_px);
                self.document.effective_height(region) != before
            }
        }
    }

    fn active_for(&self, id: &SurfaceId) -> Option<ActiveSurface> {
        match id {
            SurfaceId::Header => Some(ActiveSurface::Header),
            SurfaceId::Footer => Some(ActiveSurface::Footer),
            SurfaceId::Body(page_id) => self
                .document
                .pages()
                .index_of(page_id)
                .map(ActiveSurface::Body),
        }
    }

    pub fn active_surface(&self) -> Option<ActiveSurface> {
        self.tracker.active()
    }

    /// Surface id of the active surface in the current page order
    pub fn active_surface_id(&self) -> Option<SurfaceId> {
        match self.tracker.active()? {
            ActiveSurface::Header => Some(SurfaceId::Header),
            ActiveSurface::Footer => Some(SurfaceId::Footer),
            ActiveSurface::Body(index) => self
                .document
                .pages()
                .at(index)
                .map(|page| SurfaceId::Body(page.id().clone())),
        }
    }

    /// Route a toolbar command to the active surface
    pub fn dispatch(&mut self, command: &FormatCommand) -> Dispatch {
        let Some(id) = self.active_surface_id() else {
            tracing::debug!(command = command.name(), "no active surface, dropping command");
            return Dispatch::Dropped;
        };
        match self.surfaces.get_mut(&id) {
            Some(surface) => {
                surface.apply_format(command);
                tracing::trace!(command = command.name(), surface = %id, "command routed");
                Dispatch::Routed(id)
            }
            None => Dispatch::Dropped,
        }
    }

    /// Flip which region class is editable
    pub fn set_mode(&mut self, mode: DocumentMode) {
        if mode == self.document.mode() {
            return;
        }
        self.gestures.detach();
        self.document.set_mode(mode);
        self.tracker.mode_changed(mode);
        for (id, surface) in self.surfaces.iter_mut() {
            surface.set_editable(mode.is_editable(id.region()));
        }
        tracing::info!(?mode, "document mode changed");
    }

    pub fn toggle_mode(&mut self) -> DocumentMode {
        let mode = self.document.mode().toggled();
        self.set_mode(mode);
        mode
    }

    /// Adopt header or footer content supplied from outside the surface
    pub fn set_region_content(&mut self, kind: RegionKind, content: &str) -> Option<SyncOutcome> {
        let id = match kind {
            RegionKind::Header => SurfaceId::Header,
            RegionKind::Footer => SurfaceId::Footer,
            RegionKind::Body => return None,
        };
        let surface = surface_slot(&mut self.surfaces, &id);
        self.document.reconcile_region_content(kind, content, surface)
    }

    /// Adopt body content for one page supplied from outside the surface
    pub fn set_page_content(&mut self, page_id: &PageId, content: &str) -> Option<SyncOutcome> {
        let id = SurfaceId::Body(page_id.clone());
        let surface = surface_slot(&mut self.surfaces, &id);
        self.document.reconcile_page_content(page_id, content, surface)
    }

    /// Insert an empty page after `after_index`, or append with `None`
    pub fn add_page(&mut self, after_index: Option<usize>) -> PageId {
        let id = self.document.add_page(after_index);
        if let Some(index) = self.document.pages().index_of(&id) {
            self.tracker.page_inserted(index);
        }
        id
    }

    /// Delete a page and drop its surface
    ///
    /// The last remaining page is never removed.
    pub fn delete_page(&mut self, page_id: &PageId) -> bool {
        let Some(index) = self.document.delete_page(page_id) else {
            return false;
        };
        self.tracker.page_removed(index);
        self.detach_surface(&SurfaceId::Body(page_id.clone()));
        true
    }

    /// Store a clamped height for an editable header or footer
    ///
    /// Locked regions keep their stored height, which is returned unchanged.
    pub fn set_region_height(&mut self, kind: RegionKind, requested_pct: f64) -> f64 {
        if self.document.is_locked(kind) {
            tracing::debug!(region = %kind, "ignoring height change on locked region");
            return self
                .document
                .region(kind)
                .map(|region| region.stored_height())
                .unwrap_or(0.0);
        }
        self.document.set_region_height(kind, requested_pct)
    }

    /// Press on a header or footer resize handle
    ///
    /// Locked regions and concurrent gestures refuse to start.
    pub fn begin_region_resize(&mut self, kind: RegionKind, pointer: Point) -> bool {
        if !kind.has_height() || self.document.is_locked(kind) {
            return false;
        }
        let current = self.document.effective_height(kind);
        self.gestures
            .begin_region(kind, HandleEdge::for_region(kind), pointer, current)
    }

    /// Press on an image corner handle inside an attached, editable surface
    pub fn begin_image_resize(
        &mut self,
        surface: SurfaceId,
        image_id: &str,
        attrs: ImageAttrs,
        current: ImageSize,
        corner: ImageCorner,
        pointer: Point,
    ) -> bool {
        if !self.surfaces.contains_key(&surface) || self.document.is_locked(surface.region()) {
            return false;
        }
        self.gestures
            .begin_image(surface, image_id, attrs, current, corner, pointer)
    }

    /// Feed a pointer move to the active gesture
    ///
    /// Region heights are stored live; image sizes are visual only until
    /// release.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<GestureUpdate> {
        let constraint = self
            .gestures
            .bound_region()
            .and_then(|region| self.document.constraint(region).cloned());
        let update = self.gestures.pointer_move(pointer, constraint.as_ref())?;

        if let GestureUpdate::RegionHeight { region, height_pct } = &update {
            self.document.set_region_height(*region, *height_pct);
        }
        Some(update)
    }

    /// Release the pointer and commit the gesture's final value
    pub fn pointer_release(&mut self) -> Option<GestureCommit> {
        let commit = self.gestures.release()?;
        match &commit {
            GestureCommit::RegionHeight { region, height_pct } => {
                self.document.set_region_height(*region, *height_pct);
            }
            GestureCommit::Image {
                surface,
                image_id,
                attrs,
            } => match self.surfaces.get_mut(surface) {
                Some(handle) => handle.set_image_attrs(image_id, attrs),
                None => tracing::warn!(%surface, image_id = %image_id, "image surface gone at release"),
            },
        }
        Some(commit)
    }

    /// Abandon the active gesture without committing
    pub fn cancel_gesture(&mut self) -> bool {
        self.gestures.detach()
    }

    pub fn gesture_active(&self) -> bool {
        self.gestures.is_active()
    }

    /// Replace the open document with a freshly loaded template
    ///
    /// Body surfaces are dropped since every load assigns new page ids;
    /// header and footer surfaces are reconciled with the loaded content.
    pub fn load_template(&mut self, template: &Template) {
        let mode = self.document.mode();
        let config = self.document.config().clone();
        self.gestures.detach();
        self.tracker.clear();
        self.document = Document::from_template(template, mode, config);
        self.surfaces
            .retain(|id, _| !matches!(id, SurfaceId::Body(_)));

        for kind in [RegionKind::Header, RegionKind::Footer] {
            let content = self
                .document
                .region(kind)
                .map(|region| region.content().to_string())
                .unwrap_or_default();
            self.set_region_content(kind, &content);
        }
        for (id, kind) in [
            (SurfaceId::Header, RegionKind::Header),
            (SurfaceId::Footer, RegionKind::Footer),
        ] {
            if let Some(surface) = self.surfaces.get(&id) {
                let height_px = surface.rendered_height();
                self.document.observe_rendered_height(kind, height_px);
            }
        }
        self.document.mark_saved();
        tracing::info!(template = %template.id, "template loaded into session");
    }

    /// Persist into a copy of `base` and mark the document clean
    pub fn save(&mut self, base: &Template) -> Template {
        let template = self.document.to_template(base);
        self.document.mark_saved();
        tracing::info!(template = %template.id, pages = self.document.pages().len(), "document saved");
        template
    }
}
