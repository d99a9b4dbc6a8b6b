//! # Pagecraft Editor
//!
//! Region/page synchronization core for the Pagecraft paginated editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ template: persisted flat record (JSON)      │
//! └─────────────────────────────────────────────┘
//!                     ↓ assembler
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document + EditSession              │
//! │  - shared header / footer regions           │
//! │  - ordered body pages                       │
//! │  - echo-free content sync per surface       │
//! │  - bounded region heights                   │
//! │  - resize gestures, command routing         │
//! └─────────────────────────────────────────────┘
//!                     ↕ EditingSurface / SurfaceEvent
//! ┌─────────────────────────────────────────────┐
//! │ rich-text surfaces (one per region / page)  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: surfaces render it and report edits
//! 2. **No echoes**: content a surface emitted is never pushed back into it
//! 3. **Content wins**: a region is never displayed smaller than its content
//! 4. **One editable class**: header/footer or body, never both
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{
//!     Document, DocumentMode, EditSession, FormatCommand, LayoutConfig, SurfaceEvent, SurfaceId,
//! };
//!
//! let doc = Document::from_template(&template, DocumentMode::BodyEditable, LayoutConfig::default());
//! let mut session = EditSession::new("session-1", doc);
//!
//! session.attach_surface(SurfaceId::Header, Box::new(header_surface));
//! session.handle(SurfaceEvent::Focus(SurfaceId::Header));
//! session.dispatch(&FormatCommand::Bold);
//!
//! let saved = session.save(&template);
//! ```

mod active;
mod assembler;
mod commands;
mod config;
mod document;
mod errors;
mod gesture;
mod height;
mod image;
mod pages;
mod region_store;
mod session;
mod surface;

#[cfg(test)]
mod testing;

pub use active::{ActiveSurface, ActiveSurfaceTracker, DocumentMode};
pub use assembler::{
    deserialize, deserialize_pages, join_pages, serialize, split_pages, PAGE_BREAK,
};
pub use commands::{
    Alignment, FormatCommand, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FONT_FAMILIES, FONT_SIZES,
};
pub use config::{LayoutConfig, DEFAULT_CONFIG_NAME};
pub use document::{Document, Region};
pub use errors::EditorError;
pub use gesture::{
    GestureCommit, GestureUpdate, HandleEdge, ImageCorner, Point, ResizeGestureController,
};
pub use height::HeightConstraint;
pub use image::{initial_size, ImageAttrs, ImageSize};
pub use pages::{page_id_seed, Page, PageCollection, PageId, PageIdGenerator};
pub use region_store::{RegionContentStore, SyncOutcome};
pub use session::{Dispatch, EditSession};
pub use surface::{EditingSurface, RegionKind, SurfaceEvent, SurfaceId};

// Re-export the persisted record for convenience
pub use pagecraft_template::Template;
