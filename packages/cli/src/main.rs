mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{inspect, new, normalize, pages, InspectArgs, NewArgs, NormalizeArgs, PagesArgs};

/// Pagecraft CLI - inspect and maintain paginated document templates
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log sync and layout decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty template file
    New(NewArgs),

    /// Show name, region heights and page sizes of a template
    Inspect(InspectArgs),

    /// Print the body of every page
    Pages(PagesArgs),

    /// Clamp heights and rewrite the page-delimited body
    Normalize(NormalizeArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::New(args) => new(args, &cwd),
            Command::Inspect(args) => inspect(args, &cwd),
            Command::Pages(args) => pages(args, &cwd),
            Command::Normalize(args) => normalize(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
