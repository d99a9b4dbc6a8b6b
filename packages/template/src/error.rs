//! Error types for template decoding and catalog lookups

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template not found: {0}")]
    NotFound(String),
}
