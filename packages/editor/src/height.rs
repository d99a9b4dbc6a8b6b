//! # Height Constraints
//!
//! Header and footer heights are percentages of a fixed reference page
//! height. The lower bound comes from the rendered content so a region can
//! never be dragged small enough to clip what it shows:
//!
//! ```text
//! content_pct    = max(min_px, content_px + padding_px) / page_px * 100
//! min_height_pct = min(max_pct, content_pct)
//! clamp(p)       = max(min_height_pct, min(max_pct, p))
//! ```
//!
//! The bound is recomputed only when the surface reports a size change,
//! not on every keystroke.

use crate::{LayoutConfig, RegionKind};

#[derive(Debug, Clone, PartialEq)]
pub struct HeightConstraint {
    region: RegionKind,
    page_height_px: f64,
    min_px: f64,
    max_pct: f64,
    padding_px: f64,
    content_px: f64,
    min_height_pct: f64,
}

impl HeightConstraint {
    pub fn new(region: RegionKind, config: &LayoutConfig) -> Self {
        let mut constraint = Self {
            region,
            page_height_px: config.page_height_px,
            min_px: config.min_region_px,
            max_pct: config.max_region_pct,
            padding_px: config.region_padding_px,
            content_px: 0.0,
            min_height_pct: 0.0,
        };
        constraint.recompute();
        constraint
    }

    pub fn region(&self) -> RegionKind {
        self.region
    }

    /// Record a new rendered content height and return the new lower bound
    pub fn observe_content_height(&mut self, content_px: f64) -> f64 {
        self.content_px = if content_px.is_finite() {
            content_px.max(0.0)
        } else {
            0.0
        };
        self.recompute();
        tracing::trace!(
            region = %self.region,
            content_px = self.content_px,
            min_height_pct = self.min_height_pct,
            "recomputed region minimum"
        );
        self.min_height_pct
    }

    fn recompute(&mut self) {
        if !self.region.has_height() || self.page_height_px <= 0.0 {
            self.min_height_pct = 0.0;
            return;
        }

        let content_px = self.min_px.max(self.content_px + self.padding_px);
        let content_pct = content_px / self.page_height_px * 100.0;
        self.min_height_pct = self.max_pct.min(content_pct);
    }

    /// Smallest height that keeps the content visible (always 0 for body)
    pub fn min_height_pct(&self) -> f64 {
        self.min_height_pct
    }

    pub fn max_pct(&self) -> f64 {
        self.max_pct
    }

    /// Bound a requested height into `[min_height_pct, max_pct]`
    pub fn clamp(&self, requested_pct: f64) -> f64 {
        if requested_pct.is_nan() {
            return self.min_height_pct;
        }
        self.min_height_pct.max(self.max_pct.min(requested_pct))
    }

    /// Height actually displayed for a stored preference
    ///
    /// A stored value smaller than the content needs is overridden, even if
    /// it was valid when the user chose it.
    pub fn effective_height(&self, stored_pct: f64) -> f64 {
        stored_pct.max(self.min_height_pct)
    }
}
