//! # Template Catalog
//!
//! In-memory list of templates in creation order. The catalog never touches
//! disk; the surrounding application stores the JSON it produces.

use crate::{Template, TemplateError, TemplatePatch, DEFAULT_TEMPLATE_NAME};

#[derive(Debug, Default, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from a JSON array of templates
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        Ok(Self {
            templates: templates.into_iter().map(Template::normalized).collect(),
        })
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(&self.templates)?)
    }

    /// Create and store a new empty template
    ///
    /// `None` uses the default "Untitled Template" name.
    pub fn create(&mut self, name: Option<&str>) -> &Template {
        let template = Template::new(name.unwrap_or(DEFAULT_TEMPLATE_NAME));
        tracing::debug!(id = %template.id, name = %template.name, "created template");
        self.templates.push(template);
        &self.templates[self.templates.len() - 1]
    }

    /// Insert or replace a template by id
    pub fn insert(&mut self, template: Template) {
        let template = template.normalized();
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Apply a patch and bump `updatedAt`
    ///
    /// Returns `None` when no template has that id.
    pub fn update(&mut self, id: &str, patch: TemplatePatch) -> Option<&Template> {
        let template = self.templates.iter_mut().find(|t| t.id == id)?;
        patch.apply(template);
        template.touch();
        tracing::debug!(id, "updated template");
        Some(template)
    }

    /// Store a copy of `id` with a fresh identity
    pub fn duplicate(&mut self, id: &str) -> Option<&Template> {
        let copy = self.get(id)?.duplicate();
        tracing::debug!(source = id, id = %copy.id, "duplicated template");
        self.templates.push(copy);
        self.templates.last()
    }

    /// Remove a template, returning it if it existed
    pub fn delete(&mut self, id: &str) -> Option<Template> {
        let pos = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Like [`get`](Self::get) but as an error for callers that propagate
    pub fn require(&self, id: &str) -> Result<&Template, TemplateError> {
        self.get(id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_uses_default_name() {
        let mut catalog = TemplateCatalog::new();
        let template = catalog.create(None);

        assert_eq!(template.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = TemplateCatalog::new();
        catalog.create(Some("Letter"));

        let patch = TemplatePatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert!(catalog.update("missing", patch).is_none());
        assert_eq!(catalog.iter().next().unwrap().name, "Letter");
    }

    #[test]
    fn test_update_bumps_timestamp() {
        let mut catalog = TemplateCatalog::new();
        let id = catalog.create(Some("Letter")).id.clone();
        let created = catalog.get(&id).unwrap().updated_at;

        let patch = TemplatePatch {
            body_content: Some("<p>Body</p>".to_string()),
            ..Default::default()
        };
        let updated = catalog.update(&id, patch).unwrap();

        assert_eq!(updated.body_content, "<p>Body</p>");
        assert!(updated.updated_at >= created);
    }

    #[test]
    fn test_delete_and_require() {
        let mut catalog = TemplateCatalog::new();
        let id = catalog.create(None).id.clone();

        assert!(catalog.require(&id).is_ok());
        assert!(catalog.delete(&id).is_some());
        assert!(catalog.delete(&id).is_none());
        assert!(matches!(
            catalog.require(&id),
            Err(TemplateError::NotFound(_))
        ));
    }
}
