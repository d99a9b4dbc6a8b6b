//! Error types for the editor
//!
//! Only load/save boundaries return these. Editing operations themselves
//! clamp or ignore invalid input instead of failing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Template error: {0}")]
    Template(#[from] pagecraft_template::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
