//! Image node attributes and initial sizing

use serde::{Deserialize, Serialize};

use crate::LayoutConfig;

/// Width and height in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height; degenerate sizes report 1.0
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Attributes stored on an image node in the rich-text content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ImageAttrs {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            width: None,
            height: None,
        }
    }

    pub fn size(&self) -> Option<ImageSize> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(ImageSize { width, height }),
            _ => None,
        }
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.width = Some(size.width);
        self.height = Some(size.height);
        self
    }
}

/// Size an image gets once it loads
///
/// Stored dimensions win. Otherwise the natural size is used, capped at
/// `image_natural_max_width_px` with the natural aspect ratio kept. With
/// neither, the configured fallback size applies.
pub fn initial_size(
    stored: Option<ImageSize>,
    natural: Option<ImageSize>,
    config: &LayoutConfig,
) -> ImageSize {
    if let Some(size) = stored.filter(ImageSize::is_valid) {
        return size;
    }

    match natural.filter(ImageSize::is_valid) {
        Some(natural) => {
            let width = natural.width.min(config.image_natural_max_width_px);
            ImageSize::new(width, width / natural.aspect_ratio())
        }
        None => ImageSize::new(
            config.image_fallback_width_px,
            config.image_fallback_height_px,
        ),
    }
}
