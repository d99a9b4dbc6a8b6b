use super::{resolve, write_template};
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_template::{Template, DEFAULT_TEMPLATE_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template name
    #[arg(default_value = DEFAULT_TEMPLATE_NAME)]
    pub name: String,

    /// Output file
    #[arg(short, long, default_value = "template.json")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &Path) -> Result<()> {
    let path = resolve(cwd, &args.output);
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let template = Template::new(args.name);
    write_template(&path, &template)?;

    println!(
        "{} Created {} ({})",
        "✓".green(),
        template.name.bright_white(),
        path.display()
    );
    Ok(())
}
