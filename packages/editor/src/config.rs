use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::EditorError;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Page geometry and resize limits
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Reference page width (A4 at 96 DPI)
    pub page_width_px: f64,

    /// Reference page height (A4 at 96 DPI); region heights are percentages of this
    pub page_height_px: f64,

    /// Header/footer never shrink below this many pixels
    pub min_region_px: f64,

    /// Header/footer never grow beyond this percentage of the page
    pub max_region_pct: f64,

    /// Padding and borders around region content
    pub region_padding_px: f64,

    pub image_min_width_px: f64,
    pub image_max_width_px: f64,

    /// Widest an image may be when first inserted at natural size
    pub image_natural_max_width_px: f64,

    /// Size used before an image reports its natural dimensions
    pub image_fallback_width_px: f64,
    pub image_fallback_height_px: f64,

    pub zoom_min: u32,
    pub zoom_max: u32,
    pub zoom_step: u32,
    pub zoom_default: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_px: 794.0,
            page_height_px: 1123.0,
            min_region_px: 60.0,
            max_region_pct: 40.0,
            region_padding_px: 32.0,
            image_min_width_px: 50.0,
            image_max_width_px: 700.0,
            image_natural_max_width_px: 500.0,
            image_fallback_width_px: 300.0,
            image_fallback_height_px: 200.0,
            zoom_min: 25,
            zoom_max: 200,
            zoom_step: 10,
            zoom_default: 80,
        }
    }
}

impl LayoutConfig {
    /// Load `pagecraft.config.json` from a directory, falling back to defaults
    pub fn load(dir: &Path) -> Result<Self, EditorError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        tracing::debug!(?config, "loaded layout config");
        Ok(config)
    }

    /// Clamp a zoom level into the configured range
    pub fn clamp_zoom(&self, zoom: u32) -> u32 {
        zoom.max(self.zoom_min).min(self.zoom_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_height_px, 1123.0);
        assert_eq!(config.min_region_px, 60.0);
        assert_eq!(config.max_region_pct, 40.0);
        assert_eq!(config.region_padding_px, 32.0);
        assert_eq!(config.zoom_default, 80);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "pageHeightPx": 1000, "maxRegionPct": 30 }"#;

        let config = LayoutConfig::from_json(json).unwrap();
        assert_eq!(config.page_height_px, 1000.0);
        assert_eq!(config.max_region_pct, 30.0);
        assert_eq!(config.min_region_px, 60.0);
        assert_eq!(config.image_max_width_px, 700.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LayoutConfig::load(dir.path()).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "regionPaddingPx": 0 }"#,
        )
        .unwrap();

        let config = LayoutConfig::load(dir.path()).unwrap();
        assert_eq!(config.region_padding_px, 0.0);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(matches!(
            LayoutConfig::from_json("{ nope"),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_clamp_zoom() {
        let config = LayoutConfig::default();
        assert_eq!(config.clamp_zoom(5), 25);
        assert_eq!(config.clamp_zoom(90), 90);
        assert_eq!(config.clamp_zoom(500), 200);
    }
}
