//! Command line entry point: prints the bets page.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use betboard::{load_rows, mock_rows, render_page, ModeChoice, OutputMode, PageOptions, DEFAULT_WIDTH};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BETBOARD_LOG=debug`.
const LOG_ENV: &str = "BETBOARD_LOG";

#[derive(Debug, Parser)]
#[command(name = "betboard", version, about = "Show the bets made as a themed table")]
struct Cli {
    /// Rows file (.json, .yaml, .yml or .csv); the built-in sample when omitted
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Color mode: auto, light or dark
    #[arg(long, default_value = "auto")]
    mode: ModeChoice,

    /// Output mode: auto, term, text, term-debug, json, yaml or csv
    #[arg(long, value_name = "MODE", default_value = "auto")]
    output: OutputMode,

    /// Line width in columns; defaults to the terminal width
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,

    /// Hide the toolbar line
    #[arg(long)]
    no_toolbar: bool,

    /// Add a selection checkbox column
    #[arg(long)]
    checkbox_selection: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let rows = match &cli.data {
        Some(path) => load_rows(path)
            .with_context(|| format!("could not load rows from {}", path.display()))?,
        None => mock_rows(),
    };

    let options = PageOptions::new()
        .width(cli.width.map_or_else(terminal_width, usize::from))
        .output(cli.output)
        .toolbar(!cli.no_toolbar)
        .checkbox_selection(cli.checkbox_selection);

    let mode = cli.mode.resolve();
    let page = render_page(&rows, mode, &options).context("could not render page")?;
    print!("{}", page);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
