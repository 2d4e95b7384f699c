//! scopetheme - inspect how a TextMate theme styles a scope chain.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scopetheme::cli::{describe_style, load_theme_or_builtin, preview};

/// Resolve the style a theme assigns to a scope chain.
#[derive(Parser, Debug)]
#[command(name = "scopetheme", version, about)]
struct Cli {
    /// Theme JSON file (defaults to ~/.config/scopetheme/theme.json)
    #[arg(short = 't', long = "theme", value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Print the resolved style as JSON
    #[arg(long)]
    json: bool,

    /// Print this text rendered with the resolved style
    #[arg(short = 's', long = "sample", value_name = "TEXT")]
    sample: Option<String>,

    /// Scope chain, outermost first (e.g. source.python keyword.control)
    #[arg(value_name = "SCOPE")]
    scopes: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    scopetheme::metrics::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let theme =
        load_theme_or_builtin(cli.theme.as_deref()).context("Failed to load builtin theme")?;
    let style = theme.resolve(&cli.scopes);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&style)?);
    } else {
        println!("{}", describe_style(&style));
    }

    if let Some(sample) = &cli.sample {
        println!("{}", preview(&style, sample));
    }

    Ok(())
}
