//! # Active Surface Tracking
//!
//! Toolbar commands go to "the active editor". Which surface that is depends
//! on focus and on the document mode: focus from a locked region class is
//! ignored so commands never reach a non-editable surface.

use serde::{Deserialize, Serialize};

use crate::RegionKind;

/// Which class of regions is editable
///
/// Exactly one class is editable at a time: header and footer together, or
/// the body pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentMode {
    /// Template authoring: header/footer editable, body locked
    HeaderFooterEditable,

    /// Document filling: body editable, header/footer locked
    BodyEditable,
}

impl DocumentMode {
    pub fn from_header_footer_locked(locked: bool) -> Self {
        if locked {
            DocumentMode::BodyEditable
        } else {
            DocumentMode::HeaderFooterEditable
        }
    }

    pub fn header_footer_locked(self) -> bool {
        matches!(self, DocumentMode::BodyEditable)
    }

    pub fn is_locked(self, region: RegionKind) -> bool {
        !self.is_editable(region)
    }

    pub fn is_editable(self, region: RegionKind) -> bool {
        match (self, region) {
            (DocumentMode::HeaderFooterEditable, RegionKind::Body) => false,
            (DocumentMode::HeaderFooterEditable, _) => true,
            (DocumentMode::BodyEditable, RegionKind::Body) => true,
            (DocumentMode::BodyEditable, _) => false,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DocumentMode::HeaderFooterEditable => DocumentMode::BodyEditable,
            DocumentMode::BodyEditable => DocumentMode::HeaderFooterEditable,
        }
    }
}

/// The surface currently receiving routed commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSurface {
    Header,
    Footer,

    /// Body of the page at this 0-based position
    Body(usize),
}

impl ActiveSurface {
    pub fn region(self) -> RegionKind {
        match self {
            ActiveSurface::Header => RegionKind::Header,
            ActiveSurface::Footer => RegionKind::Footer,
            ActiveSurface::Body(_) => RegionKind::Body,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSurfaceTracker {
    active: Option<ActiveSurface>,
}

impl ActiveSurfaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActiveSurface> {
        self.active
    }

    /// Handle a focus event
    ///
    /// Returns `true` if the surface became active. Focus from a locked
    /// region class leaves the state unchanged.
    pub fn focus(&mut self, surface: ActiveSurface, mode: DocumentMode) -> bool {
        if mode.is_locked(surface.region()) {
            tracing::debug!(?surface, ?mode, "ignoring focus from locked surface");
            return false;
        }
        self.active = Some(surface);
        true
    }

    /// The mode flipped; drop the active surface if it is no longer editable
    pub fn mode_changed(&mut self, mode: DocumentMode) {
        if let Some(active) = self.active {
            if mode.is_locked(active.region()) {
                self.active = None;
            }
        }
    }

    /// Keep the body index pointing at the same page after a removal
    pub fn page_removed(&mut self, index: usize) {
        if let Some(ActiveSurface::Body(active)) = self.active {
            if active == index {
                self.active = None;
            } else if active > index {
                self.active = Some(ActiveSurface::Body(active - 1));
            }
        }
    }

    /// Keep the body index pointing at the same page after an insertion
    pub fn page_inserted(&mut self, index: usize) {
        if let Some(ActiveSurface::Body(active)) = self.active {
            if active >= index {
                self.active = Some(ActiveSurface::Body(active + 1));
            }
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
