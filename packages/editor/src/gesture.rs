//! # Resize Gestures
//!
//! Turns press → move* → release pointer sequences into bounded region
//! heights or image sizes.
//!
//! Gestures are modal: while one is active every pointer move and release
//! belongs to it, and a second gesture cannot start. The gesture is torn
//! down exactly once, by [`release`](ResizeGestureController::release) or,
//! when its surface goes away mid-drag, by
//! [`detach`](ResizeGestureController::detach).
//!
//! Region deltas are measured against the fixed reference page height, not
//! the viewport, because region heights are percentages of the page.

use crate::{HeightConstraint, ImageAttrs, ImageSize, LayoutConfig, RegionKind, SurfaceId};

/// Pointer position in page pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which edge of a region carries the drag handle
///
/// The header's handle sits on its bottom edge, the footer's on its top
/// edge. Dragging a top handle upward grows the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEdge {
    Top,
    Bottom,
}

impl HandleEdge {
    /// Default handle placement for a region
    pub fn for_region(region: RegionKind) -> Self {
        match region {
            RegionKind::Footer => HandleEdge::Top,
            _ => HandleEdge::Bottom,
        }
    }
}

/// Corner handle of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCorner {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ImageCorner {
    /// East corners grow with rightward drags, west corners with leftward
    fn is_east(self) -> bool {
        matches!(self, ImageCorner::NorthEast | ImageCorner::SouthEast)
    }
}

#[derive(Debug, Clone)]
enum Gesture {
    Region {
        region: RegionKind,
        edge: HandleEdge,
        start_y: f64,
        start_pct: f64,
        current_pct: f64,
    },
    Image {
        surface: SurfaceId,
        image_id: String,
        attrs: ImageAttrs,
        corner: ImageCorner,
        start_x: f64,
        start: ImageSize,
        aspect_ratio: f64,
        current: ImageSize,
    },
}

/// Live value produced by a pointer move
#[derive(Debug, Clone, PartialEq)]
pub enum GestureUpdate {
    /// New stored height for a region; applied immediately
    RegionHeight { region: RegionKind, height_pct: f64 },

    /// Visual-only image size; nothing is committed until release
    ImageSize { surface: SurfaceId, size: ImageSize },
}

/// Final value produced by a release
#[derive(Debug, Clone, PartialEq)]
pub enum GestureCommit {
    RegionHeight {
        region: RegionKind,
        height_pct: f64,
    },

    /// Attributes to write onto the image node
    Image {
        surface: SurfaceId,
        image_id: String,
        attrs: ImageAttrs,
    },
}

#[derive(Debug, Clone)]
pub struct ResizeGestureController {
    page_height_px: f64,
    image_min_width_px: f64,
    image_max_width_px: f64,
    active: Option<Gesture>,
}

impl ResizeGestureController {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            page_height_px: config.page_height_px,
            image_min_width_px: config.image_min_width_px,
            image_max_width_px: config.image_max_width_px,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Surface an active image gesture is bound to
    pub fn bound_surface(&self) -> Option<&SurfaceId> {
        match &self.active {
            Some(Gesture::Image { surface, .. }) => Some(surface),
            _ => None,
        }
    }

    /// Region an active region gesture is resizing
    pub fn bound_region(&self) -> Option<RegionKind> {
        match &self.active {
            Some(Gesture::Region { region, .. }) => Some(*region),
            _ => None,
        }
    }

    /// Start resizing a header or footer
    ///
    /// Returns `false` if another gesture is in progress or the region has
    /// no height.
    pub fn begin_region(
        &mut self,
        region: RegionKind,
        edge: HandleEdge,
        pointer: Point,
        current_pct: f64,
    ) -> bool {
        if self.active.is_some() || !region.has_height() {
            return false;
        }

        self.active = Some(Gesture::Region {
            region,
            edge,
            start_y: pointer.y,
            start_pct: current_pct,
            current_pct,
        });
        tracing::debug!(%region, ?edge, current_pct, "region resize started");
        true
    }

    /// Start resizing an image from one of its corners
    ///
    /// The aspect ratio is fixed from `current` for the whole
    /// gesture.
    pub fn begin_image(
        &mut self,
        surface: SurfaceId,
        image_id: impl Into<String>,
        attrs: ImageAttrs,
        current: ImageSize,
        corner: ImageCorner,
        pointer: Point,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }

        let image_id = image_id.into();
        tracing::debug!(%surface, image_id = %image_id, ?corner, "image resize started");
        self.active = Some(Gesture::Image {
            surface,
            image_id,
            attrs,
            corner,
            start_x: pointer.x,
            start: current,
            aspect_ratio: current.aspect_ratio(),
            current,
        });
        true
    }

    /// Feed a pointer move to the active gesture
    ///
    /// `constraint` bounds region gestures; image gestures ignore it.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        constraint: Option<&HeightConstraint>,
    ) -> Option<GestureUpdate> {
        let page_height_px = self.page_height_px;
        let (min_width, max_width) = (self.image_min_width_px, self.image_max_width_px);

        match self.active.as_mut()? {
            Gesture::Region {
                region,
                edge,
                start_y,
                start_pct,
                current_pct,
            } => {
                let delta_pct = if page_height_px > 0.0 {
                    (pointer.y - *start_y) / page_height_px * 100.0
                } else {
                    0.0
                };
                let candidate = match edge {
                    HandleEdge::Bottom => *start_pct + delta_pct,
                    HandleEdge::Top => *start_pct - delta_pct,
                };
                *current_pct = match constraint {
                    Some(constraint) => constraint.clamp(candidate),
                    None => candidate,
                };
                tracing::trace!(%region, height_pct = *current_pct, "region resize move");

                Some(GestureUpdate::RegionHeight {
                    region: *region,
                    height_pct: *current_pct,
                })
            }
            Gesture::Image {
                surface,
                corner,
                start_x,
                start,
                aspect_ratio,
                current,
                ..
            } => {
                let delta_x = pointer.x - *start_x;
                let width = if corner.is_east() {
                    start.width + delta_x
                } else {
                    start.width - delta_x
                };
                let width = width.min(max_width).max(min_width);
                *current = ImageSize::new(width, width / *aspect_ratio);

                Some(GestureUpdate::ImageSize {
                    surface: surface.clone(),
                    size: *current,
                })
            }
        }
    }

    /// Finish the active gesture and return the value to commit
    pub fn release(&mut self) -> Option<GestureCommit> {
        let commit = match self.active.take()? {
            Gesture::Region {
                region,
                current_pct,
                ..
            } => GestureCommit::RegionHeight {
                region,
                height_pct: current_pct,
            },
            Gesture::Image {
                surface,
                image_id,
                attrs,
                current,
                ..
            } => GestureCommit::Image {
                surface,
                image_id,
                attrs: attrs.with_size(current),
            },
        };
        tracing::debug!(?commit, "resize gesture released");
        Some(commit)
    }

    /// Tear down the active gesture without committing anything
    ///
    /// Returns `true` if a gesture was active.
    pub fn detach(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            tracing::debug!("resize gesture detached");
        }
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageIdGenerator, RegionKind};

    fn config() -> LayoutConfig {
        LayoutConfig {
            page_height_px: 1000.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_bottom_handle_grows_downward() {
        let config = config();
        let mut gestures = ResizeGestureController::new(&config);
        let constraint = HeightConstraint::new(RegionKind::Header, &config);

        assert!(gestures.begin_region(
            RegionKind::Header,
            HandleEdge::Bottom,
            Point::new(0.0, 200.0),
            15.0
        ));

        let update = gestures.pointer_move(Point::new(0.0, 300.0), Some(&constraint));
        assert_eq!(
            update,
            Some(GestureUpdate::RegionHeight {
                region: RegionKind::Header,
                height_pct: 25.0
            })
        );
    }

    #[test]
    fn test_top_handle_grows_upward() {
        let config = config();
        let mut gestures = ResizeGestureController::new(&config);
        let constraint = HeightConstraint::new(RegionKind::Footer, &config);

        gestures.begin_region(
            RegionKind::Footer,
            HandleEdge::Top,
            Point::new(0.0, 900.0),
            10.0,
        );

        gestures.pointer_move(Point::new(0.0, 850.0), Some(&constraint));
        assert_eq!(
            gestures.release(),
            Some(GestureCommit::RegionHeight {
                region: RegionKind::Footer,
                height_pct: 15.0
            })
        );
        assert!(!gestures.is_active());
    }

    #[test]
    fn test_region_move_is_clamped() {
        let config = config();
        let mut gestures = ResizeGestureController::new(&config);
        let mut constraint = HeightConstraint::new(RegionKind::Header, &config);
        constraint.observe_content_height(148.0); // (148 + 32) / 1000 -> 18%

        gestures.begin_region(
            RegionKind::Header,
            HandleEdge::Bottom,
            Point::new(0.0, 0.0),
            20.0,
        );

        let shrink = gestures.pointer_move(Point::new(0.0, -500.0), Some(&constraint));
        match shrink {
            Some(GestureUpdate::RegionHeight { height_pct, .. }) => {
                assert!((height_pct - 18.0).abs() < 1e-9)
            }
            other => panic!("unexpected update: {:?}", other),
        }

        let grow = gestures.pointer_move(Point::new(0.0, 900.0), Some(&constraint));
        assert_eq!(
            grow,
            Some(GestureUpdate::RegionHeight {
                region: RegionKind::Header,
                height_pct: 40.0
            })
        );
    }

    #[test]
    fn test_body_cannot_be_resized() {
        let mut gestures = ResizeGestureController::new(&config());
        assert!(!gestures.begin_region(
            RegionKind::Body,
            HandleEdge::Bottom,
            Point::new(0.0, 0.0),
            0.0
        ));
        assert!(!gestures.is_active());
    }

    #[test]
    fn test_gestures_are_modal() {
        let mut gestures = ResizeGestureController::new(&config());
        assert!(gestures.begin_region(
            RegionKind::Header,
            HandleEdge::Bottom,
            Point::new(0.0, 0.0),
            15.0
        ));
        assert!(!gestures.begin_region(
            RegionKind::Footer,
            HandleEdge::Top,
            Point::new(0.0, 0.0),
            10.0
        ));
        assert_eq!(gestures.bound_region(), Some(RegionKind::Header));
    }

    #[test]
    fn test_release_and_detach_tear_down_once() {
        let mut gestures = ResizeGestureController::new(&config());
        gestures.begin_region(
            RegionKind::Header,
            HandleEdge::Bottom,
            Point::new(0.0, 0.0),
            15.0,
        );

        assert!(gestures.release().is_some());
        assert!(gestures.release().is_none());
        assert!(!gestures.detach());
        assert_eq!(gestures.pointer_move(Point::new(0.0, 10.0), None), None);
    }

    #[test]
    fn test_image_resize_keeps_aspect_ratio() {
        let mut gestures = ResizeGestureController::new(&config());
        let surface = SurfaceId::Body(PageIdGenerator::new("doc").next_id());

        gestures.begin_image(
            surface.clone(),
            "img-1",
            ImageAttrs::new("data:image/png;base64,AAAA"),
            ImageSize::new(300.0, 200.0),
            ImageCorner::SouthEast,
            Point::new(100.0, 100.0),
        );

        let update = gestures.pointer_move(Point::new(250.0, 400.0), None);
        assert_eq!(
            update,
            Some(GestureUpdate::ImageSize {
                surface: surface.clone(),
                size: ImageSize::new(450.0, 300.0)
            })
        );

        match gestures.release() {
            Some(GestureCommit::Image {
                image_id, attrs, ..
            }) => {
                assert_eq!(image_id, "img-1");
                assert_eq!(attrs.width, Some(450.0));
                assert_eq!(attrs.height, Some(300.0));
                assert_eq!(attrs.src, "data:image/png;base64,AAAA");
            }
            other => panic!("unexpected commit: {:?}", other),
        }
    }

    #[test]
    fn test_image_width_clamped() {
        let mut gestures = ResizeGestureController::new(&config());
        let surface = SurfaceId::Header;

        gestures.begin_image(
            surface,
            "img-2",
            ImageAttrs::new("logo.png"),
            ImageSize::new(100.0, 100.0),
            ImageCorner::NorthWest,
            Point::new(0.0, 0.0),
        );

        // West corner: dragging right shrinks
        match gestures.pointer_move(Point::new(500.0, 0.0), None) {
            Some(GestureUpdate::ImageSize { size, .. }) => {
                assert_eq!(size, ImageSize::new(50.0, 50.0))
            }
            other => panic!("unexpected update: {:?}", other),
        }

        match gestures.pointer_move(Point::new(-2000.0, 0.0), None) {
            Some(GestureUpdate::ImageSize { size, .. }) => {
                assert_eq!(size, ImageSize::new(700.0, 700.0))
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[test]
    fn test_release_without_move_commits_start_size() {
        let mut gestures = ResizeGestureController::new(&config());
        gestures.begin_image(
            SurfaceId::Footer,
            "img-3",
            ImageAttrs::new("sig.png"),
            ImageSize::new(120.0, 60.0),
            ImageCorner::SouthWest,
            Point::new(0.0, 0.0),
        );

        match gestures.release() {
            Some(GestureCommit::Image { attrs, .. }) => {
                assert_eq!(attrs.size(), Some(ImageSize::new(120.0, 60.0)))
            }
            other => panic!("unexpected commit: {:?}", other),
        }
    }
}
