use super::open_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{Document, RegionKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Template JSON file
    pub file: PathBuf,
}

/// One line per region and page, ready to print
pub fn summarize(document: &Document) -> Vec<String> {
    let mut lines = vec![format!("name: {}", document.name())];

    for kind in [RegionKind::Header, RegionKind::Footer] {
        if let Some(region) = document.region(kind) {
            lines.push(format!(
                "{}: {:.1}% stored, {:.1}% min, {} bytes",
                kind,
                region.stored_height(),
                region.min_height_pct(),
                region.content().len()
            ));
        }
    }

    let pages = document.pages();
    lines.push(format!("pages: {}", pages.len()));
    for (index, page) in pages.iter().enumerate() {
        lines.push(format!(
            "  page {}: {} bytes",
            index + 1,
            page.body_content().len()
        ));
    }
    lines
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let (template, document) = open_document(cwd, &args.file)?;

    println!("{} {}", "Template".bright_blue().bold(), template.id.dimmed());
    for line in summarize(&document) {
        println!("  {}", line);
    }
    Ok(())
}
