//! # Template
//!
//! The persisted record behind a document: header, body and footer markup
//! plus the two region heights. Bodies hold every page joined by page-break
//! markers; ids are v4 UUIDs and timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TemplateError;

pub const DEFAULT_TEMPLATE_NAME: &str = "Untitled Template";

/// Header height given to a freshly created template (percent of page height)
pub const DEFAULT_HEADER_HEIGHT: f64 = 15.0;

/// Footer height given to a freshly created template (percent of page height)
pub const DEFAULT_FOOTER_HEIGHT: f64 = 10.0;

pub const MIN_REGION_HEIGHT: f64 = 0.0;
pub const MAX_REGION_HEIGHT: f64 = 50.0;

/// Persisted document template
///
/// Field names serialize in camelCase and timestamps as RFC 3339 strings,
/// which is the shape the outer persistence layer stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Serialized rich markup for the shared header
    #[serde(default)]
    pub header_content: String,

    /// Page-delimited concatenation of every body page
    #[serde(default)]
    pub body_content: String,

    /// Serialized rich markup for the shared footer
    #[serde(default)]
    pub footer_content: String,

    #[serde(default = "default_header_height")]
    pub header_height: f64,

    #[serde(default = "default_footer_height")]
    pub footer_height: f64,
}

fn default_header_height() -> f64 {
    DEFAULT_HEADER_HEIGHT
}

fn default_footer_height() -> f64 {
    DEFAULT_FOOTER_HEIGHT
}

impl Template {
    /// Create an empty template with a fresh id and default region heights
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            header_content: String::new(),
            body_content: String::new(),
            footer_content: String::new(),
            header_height: DEFAULT_HEADER_HEIGHT,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }

    /// Decode a single template, clamping heights into the persisted domain
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let template: Template = serde_json::from_str(json)?;
        Ok(template.normalized())
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bring both heights back into `0..=50`
    ///
    /// Non-finite values fall back to the creation defaults.
    pub fn normalized(mut self) -> Self {
        self.header_height = clamp_height(self.header_height, DEFAULT_HEADER_HEIGHT);
        self.footer_height = clamp_height(self.footer_height, DEFAULT_FOOTER_HEIGHT);
        self
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Copy with a fresh identity, fresh timestamps and a "(Copy)" suffix
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (Copy)", self.name),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

fn clamp_height(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_REGION_HEIGHT, MAX_REGION_HEIGHT)
    } else {
        fallback
    }
}

/// Partial update applied by the catalog
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_height: Option<f64>,
}

impl TemplatePatch {
    /// Patch that overwrites every editable field with `template`'s values
    pub fn from_template(template: &Template) -> Self {
        Self {
            name: Some(template.name.clone()),
            header_content: Some(template.header_content.clone()),
            body_content: Some(template.body_content.clone()),
            footer_content: Some(template.footer_content.clone()),
            header_height: Some(template.header_height),
            footer_height: Some(template.footer_height),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == TemplatePatch::default()
    }

    pub(crate) fn apply(self, template: &mut Template) {
        if let Some(name) = self.name {
            template.name = name;
        }
        if let Some(content) = self.header_content {
            template.header_content = content;
        }
        if let Some(content) = self.body_content {
            template.body_content = content;
        }
        if let Some(content) = self.footer_content {
            template.footer_content = content;
        }
        if let Some(height) = self.header_height {
            template.header_height = clamp_height(height, template.header_height);
        }
        if let Some(height) = self.footer_height {
            template.footer_height = clamp_height(height, template.footer_height);
        }
    }
}
