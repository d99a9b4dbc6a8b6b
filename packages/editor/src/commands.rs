//! # Formatting Commands
//!
//! Toolbar commands routed to whichever surface is active. The core does not
//! interpret them; the rich-text engine behind the surface does.

use serde::{Deserialize, Serialize};

/// Font families offered by the toolbar
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Times New Roman",
    "Georgia",
    "Courier New",
    "Verdana",
];

/// Font sizes offered by the toolbar, in points
pub const FONT_SIZES: &[u32] = &[8, 10, 12, 14, 16, 18, 20, 24, 28, 32, 36, 48, 72];

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Command for the active editing surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FormatCommand {
    Undo,
    Redo,
    Bold,
    Italic,
    Underline,
    BulletList,
    OrderedList,
    Align(Alignment),
    FontFamily(String),
    FontSize(u32),

    /// Insert an image at the cursor; `src` is usually a data URL
    InsertImage {
        src: String,
        alt: Option<String>,
    },
}

impl FormatCommand {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Undo => "undo",
            FormatCommand::Redo => "redo",
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::BulletList => "bullet_list",
            FormatCommand::OrderedList => "ordered_list",
            FormatCommand::Align(_) => "align",
            FormatCommand::FontFamily(_) => "font_family",
            FormatCommand::FontSize(_) => "font_size",
            FormatCommand::InsertImage { .. } => "insert_image",
        }
    }
}
