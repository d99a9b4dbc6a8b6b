use super::open_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct PagesArgs {
    /// Template JSON file
    pub file: PathBuf,

    /// Only print this page (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,
}

pub fn pages(args: PagesArgs, cwd: &Path) -> Result<()> {
    let (_, document) = open_document(cwd, &args.file)?;
    let pages = document.pages();
    let total = pages.len();

    if let Some(number) = args.page {
        if number == 0 || number > total {
            anyhow::bail!("page {} out of range (1-{})", number, total);
        }
    }

    for (index, page) in pages.iter().enumerate() {
        let number = index + 1;
        if args.page.is_some_and(|wanted| wanted != number) {
            continue;
        }
        println!(
            "{}",
            format!("── Page {} of {} ──", number, total).bright_blue()
        );
        println!("{}", page.body_content());
    }
    Ok(())
}
