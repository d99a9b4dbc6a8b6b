//! Catalog workflows as the template-management screen drives them

use pagecraft_template::{Template, TemplateCatalog, TemplatePatch};

#[test]
fn test_create_edit_duplicate_delete() -> anyhow::Result<()> {
    let mut catalog = TemplateCatalog::new();

    let id = catalog.create(Some("Clinic letterhead")).id.clone();

    // Save from the editor
    let patch = TemplatePatch {
        header_content: Some("<p>Dr. Smith</p>".to_string()),
        header_height: Some(22.0),
        ..Default::default()
    };
    catalog.update(&id, patch).expect("template exists");

    // Duplicate keeps content but not identity
    let copy_id = catalog.duplicate(&id).expect("template exists").id.clone();
    assert_ne!(copy_id, id);

    let copy = catalog.require(&copy_id)?;
    assert_eq!(copy.name, "Clinic letterhead (Copy)");
    assert_eq!(copy.header_content, "<p>Dr. Smith</p>");
    assert_eq!(copy.header_height, 22.0);

    // Original removal leaves the copy alone
    catalog.delete(&id);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(&copy_id).is_some());

    Ok(())
}

#[test]
fn test_catalog_json_preserves_order() -> anyhow::Result<()> {
    let mut catalog = TemplateCatalog::new();
    catalog.create(Some("First"));
    catalog.create(Some("Second"));
    catalog.create(Some("Third"));

    let json = catalog.to_json()?;
    let restored = TemplateCatalog::from_json(&json)?;

    let names: Vec<&str> = restored.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);

    Ok(())
}

#[test]
fn test_insert_replaces_by_id() {
    let mut catalog = TemplateCatalog::new();
    let mut template = Template::new("Draft");
    catalog.insert(template.clone());

    template.name = "Final".to_string();
    template.footer_height = 80.0;
    catalog.insert(template.clone());

    assert_eq!(catalog.len(), 1);
    let stored = catalog.get(&template.id).unwrap();
    assert_eq!(stored.name, "Final");
    assert_eq!(stored.footer_height, 50.0);
}

#[test]
fn test_full_patch_from_template() {
    let mut catalog = TemplateCatalog::new();
    let id = catalog.create(None).id.clone();

    let mut edited = catalog.get(&id).unwrap().clone();
    edited.name = "Edited".to_string();
    edited.body_content = "A<!-- PAGE_BREAK -->B".to_string();

    let patch = TemplatePatch::from_template(&edited);
    assert!(!patch.is_empty());

    let stored = catalog.update(&id, patch).unwrap();
    assert_eq!(stored.name, "Edited");
    assert_eq!(stored.body_content, "A<!-- PAGE_BREAK -->B");
}
