//! # Pagecraft Template
//!
//! The persisted shape of a document template and the in-memory catalog
//! that creates, updates and duplicates templates.
//!
//! A template stores its body as one page-delimited string; splitting that
//! string into pages is the editor's job (`pagecraft-editor`).

mod catalog;
mod error;
mod template;

pub use catalog::TemplateCatalog;
pub use error::TemplateError;
pub use template::{
    Template, TemplatePatch, DEFAULT_FOOTER_HEIGHT, DEFAULT_HEADER_HEIGHT, DEFAULT_TEMPLATE_NAME,
    MAX_REGION_HEIGHT, MIN_REGION_HEIGHT,
};
