//! # Editing Surfaces
//!
//! The contract the core needs from an external rich-text engine, plus the
//! identifiers and events that flow between surfaces and the session.
//!
//! Surfaces never hold references to each other or to the document. They
//! report through [`SurfaceEvent`] values and the session talks back through
//! the [`EditingSurface`] trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FormatCommand, ImageAttrs, PageId};

/// Kind of region a surface edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Header,
    Body,
    Footer,
}

impl RegionKind {
    /// Header and footer carry a height; body fills what is left
    pub fn has_height(self) -> bool {
        !matches!(self, RegionKind::Body)
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Header => write!(f, "header"),
            RegionKind::Body => write!(f, "body"),
            RegionKind::Footer => write!(f, "footer"),
        }
    }
}

/// Identity of one live editing surface
///
/// Body surfaces are keyed by page identity, not position, so deleting an
/// earlier page does not re-point a handle at the wrong page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Header,
    Footer,
    Body(PageId),
}

impl SurfaceId {
    pub fn region(&self) -> RegionKind {
        match self {
            SurfaceId::Header => RegionKind::Header,
            SurfaceId::Footer => RegionKind::Footer,
            SurfaceId::Body(_) => RegionKind::Body,
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceId::Body(page_id) => write!(f, "body:{}", page_id),
            other => write!(f, "{}", other.region()),
        }
    }
}

/// External rich-text editing surface (one per region or page)
pub trait EditingSurface {
    /// Serialized markup currently rendered
    fn content(&self) -> String;

    /// Replace the rendered markup
    ///
    /// With `suppress_change_event` the surface must not report the
    /// replacement back as a content change.
    fn set_content(&mut self, content: &str, suppress_change_event: bool);

    fn set_editable(&mut self, editable: bool);

    /// Height of the rendered content in pixels
    fn rendered_height(&self) -> f64;

    /// Apply a toolbar command at the current selection
    fn apply_format(&mut self, command: &FormatCommand);

    /// Commit new attributes to an image node
    fn set_image_attrs(&mut self, image_id: &str, attrs: &ImageAttrs);
}

/// Notification from a surface to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The user focused the surface
    Focus(SurfaceId),

    /// The user changed the content
    Changed { surface: SurfaceId, content: String },

    /// The rendered content height changed
    Resized { surface: SurfaceId, height_px: f64 },
}

impl SurfaceEvent {
    pub fn surface(&self) -> &SurfaceId {
        match self {
            SurfaceEvent::Focus(surface) => surface,
            SurfaceEvent::Changed { surface, .. } => surface,
            SurfaceEvent::Resized { surface, .. } => surface,
        }
    }
}
