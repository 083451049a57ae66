//! sqlweave CLI
//!
//! Renders parameterized SQL statements described by JSON documents.

mod document;
mod error;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use sqlweave_core::Query;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::document::{DeleteDocument, SelectDocument, UpdateDocument};

/// Render parameterized SQL from JSON statement documents.
#[derive(Parser)]
#[command(name = "sqlweave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement document path; `-` or nothing reads stdin.
    #[arg(short, long, env = "SQLWEAVE_DOCUMENT", global = true)]
    document: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a SELECT statement.
    Select,
    /// Render an UPDATE statement.
    Update,
    /// Render a DELETE statement.
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The SQL text, then one comment line per bound value.
    Text,
    /// `{"sql": ..., "values": [...]}`.
    Json,
}

fn read_document(path: Option<&Path>) -> error::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading document");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("reading document from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn render_query(command: &Commands, text: &str) -> error::Result<Query> {
    match command {
        Commands::Select => serde_json::from_str::<SelectDocument>(text)?.to_query(),
        Commands::Update => serde_json::from_str::<UpdateDocument>(text)?.to_query(),
        Commands::Delete => serde_json::from_str::<DeleteDocument>(text)?.to_query(),
    }
}

fn format_query(query: &Query, format: Format) -> error::Result<String> {
    match format {
        Format::Text => {
            let mut out = format!("{query};");
            for (i, value) in query.values().iter().enumerate() {
                out.push_str(&format!("\n-- ?{} = {value}", i + 1));
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(query)?),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_document(cli.document.as_deref())?;
    let query = render_query(&cli.command, &text)?;
    println!("{}", format_query(&query, cli.format)?);

    Ok(())
}
