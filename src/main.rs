//! `stagefmt` - format a ruby-annotated script into stage-play markup.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stagefmt::config::Config;
use stagefmt::{convert_file, OutputFormat};

#[derive(Parser)]
#[command(name = "stagefmt")]
#[command(version, long_about = None)]
#[command(about = "Format ruby-annotated script text as stage-play markup")]
#[command(after_help = "ENVIRONMENT:
    STAGEFMT_STAGE_KEYWORDS    Extra comma-separated scene heading keywords
    STAGEFMT_DISCARD           Extra comma-separated noise substrings
    STAGEFMT_RULES             JSON rules file with the same two lists
    RUST_LOG                   Log filter (default: warn)")]
struct Cli {
    /// Input script (UTF-8 text with \ruby{BASE}{READING} annotations)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Write the classified blocks as JSON instead of markup
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the conversion summary
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Markup };

    let result = Config::load()
        .and_then(|config| convert_file(&cli.input, &cli.output, &config.rules(), format));

    match result {
        Ok(summary) => {
            if !cli.quiet {
                eprintln!("Wrote {}: {summary}", cli.output.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
