use super::{open_document, resolve, write_template};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_template::Template;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Template JSON file
    pub file: PathBuf,

    /// Write here instead of rewriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load a template through the editor core and write it back
pub fn normalize_file(cwd: &Path, input: &Path, output: &Path) -> Result<Template> {
    let (template, document) = open_document(cwd, input)?;
    let normalized = document.to_template(&template);
    write_template(&resolve(cwd, output), &normalized)?;
    Ok(normalized)
}

pub fn normalize(args: NormalizeArgs, cwd: &Path) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| args.file.clone());
    let template = normalize_file(cwd, &args.file, &output)?;

    println!(
        "{} Normalized {} → {}",
        "✓".green(),
        template.name.bright_white(),
        resolve(cwd, &output).display()
    );
    Ok(())
}
