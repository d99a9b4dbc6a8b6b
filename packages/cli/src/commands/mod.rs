pub mod inspect;
pub mod new;
pub mod normalize;
pub mod pages;

pub use inspect::{inspect, InspectArgs};
pub use new::{new, NewArgs};
pub use normalize::{normalize, NormalizeArgs};
pub use pages::{pages, PagesArgs};

use anyhow::{Context, Result};
use pagecraft_editor::{Document, DocumentMode, LayoutConfig};
use pagecraft_template::Template;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path against the working directory
pub fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn read_template(path: &Path) -> Result<Template> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let template = Template::from_json(&json)
        .with_context(|| format!("{} is not a valid template", path.display()))?;
    tracing::debug!(id = %template.id, path = %path.display(), "read template");
    Ok(template)
}

pub fn write_template(path: &Path, template: &Template) -> Result<()> {
    std::fs::write(path, template.to_json()?)
        .with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}

/// Open a template file as a document using the layout config in `cwd`
pub fn open_document(cwd: &Path, file: &Path) -> Result<(Template, Document)> {
    let config = LayoutConfig::load(cwd)?;
    let template = read_template(&resolve(cwd, file))?;
    let document = Document::from_template(&template, DocumentMode::BodyEditable, config);
    Ok((template, document))
}
