//! Command-line interface for fakeum
//!
//! # Usage Examples
//!
//! ```bash
//! # Rank every data type against free text (script-filter JSON on stdout)
//! fakeum query "mail"
//!
//! # Ten German/French street addresses as plain text
//! fakeum --locale de_DE --locale fr_FR --format text query "Address ✕ 10"
//!
//! # Which data types the active locales support
//! FAKEUM_LOCALES=en_GB,nl_NL fakeum types
//!
//! # Known locales and whether a built-in provider exists
//! fakeum locales
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fakeum::{Fakeum, Feedback, Overrides, Settings};
use fakeum_core::CATALOG;
use locale_generator::{is_available, KNOWN_LOCALES};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fakeum")]
#[command(about = "Generate fake test data in several locales")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML settings file
    #[arg(long, global = true, env = "FAKEUM_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Locale to generate data for (repeatable; overrides the settings file)
    #[arg(
        long = "locale",
        global = true,
        env = "FAKEUM_LOCALES",
        value_name = "ID",
        value_delimiter = ','
    )]
    locales: Vec<String>,

    /// Number of sentences in a generated paragraph
    #[arg(long, global = true, env = "LIPSUM_SENTENCES", value_name = "N")]
    paragraph_sentences: Option<usize>,

    /// Paste results directly instead of offering a paste modifier
    #[arg(
        long,
        global = true,
        env = "SNIPPET_MODE",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_snippet_mode
    )]
    snippet_mode: Option<bool>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a query and print the result feed
    Query {
        /// Free text, or `<type> ✕ <count>`
        #[arg(default_value = "")]
        query: String,
    },

    /// List the data types and whether the active locales support them
    Types,

    /// List known locales
    Locales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct TypeRow {
    name: &'static str,
    method: &'static str,
    supported: bool,
}

#[derive(Serialize)]
struct LocaleRow {
    id: &'static str,
    name: &'static str,
    available: bool,
    active: bool,
}

/// Any value, empty included, turns snippet mode on unless it spells false.
fn parse_snippet_mode(value: &str) -> Result<bool, std::convert::Infallible> {
    let value = value.trim().to_ascii_lowercase();
    Ok(!matches!(
        value.as_str(),
        "0" | "false" | "f" | "no" | "n" | "off"
    ))
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the feed
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let format = cli.format;

    match cli.command {
        Some(Commands::Query { query }) => run_query(&settings, &query, format),
        None => run_query(&settings, "", format),
        Some(Commands::Types) => list_types(settings, format),
        Some(Commands::Locales) => list_locales(&settings, format),
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let base = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {path:?}"))?,
        None => Settings::default(),
    };

    base.with_overrides(Overrides {
        locales: cli.locales.clone(),
        paragraph_sentences: cli.paragraph_sentences,
        snippet_mode: cli.snippet_mode,
    })
    .context("Invalid command-line settings")
}

fn run_query(settings: &Settings, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let snippet_mode = settings.snippet_mode;
    let engine = Fakeum::new(settings.clone());

    let feedback = match engine.resolve(query) {
        Ok(resolution) => Feedback::from_resolution(&resolution, snippet_mode),
        Err(e) => match Feedback::from_error(&e) {
            Some(feedback) => feedback,
            None => return Err(e).with_context(|| format!("Failed to resolve query {query:?}")),
        },
    };

    match format {
        OutputFormat::Json => {
            let json = feedback.to_json().context("Failed to serialize feed")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", feedback.to_text()),
    }
    Ok(())
}

fn list_types(settings: Settings, format: OutputFormat) -> anyhow::Result<()> {
    let engine = Fakeum::new(settings);
    let rows: Vec<TypeRow> = CATALOG
        .entries()
        .iter()
        .map(|entry| TypeRow {
            name: entry.display_name,
            method: entry.method_key,
            supported: engine.pool().supports(entry.method_key),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to serialize types")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for row in &rows {
                let mark = if row.supported { "yes" } else { "no" };
                println!("{:<28} {:<28} {}", row.name, row.method, mark);
            }
        }
    }
    Ok(())
}

fn list_locales(settings: &Settings, format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<LocaleRow> = KNOWN_LOCALES
        .iter()
        .map(|&(id, name)| LocaleRow {
            id,
            name,
            available: is_available(id),
            active: settings.locales.iter().any(|l| l == id),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rows).context("Failed to serialize locales")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for row in &rows {
                let mut flags = Vec::new();
                if row.available {
                    flags.push("built-in");
                }
                if row.active {
                    flags.push("active");
                }
                println!("{:<6} {:<26} {}", row.id, row.name, flags.join(", "));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_snippet_mode() {
        assert_eq!(parse_snippet_mode(""), Ok(true));
        assert_eq!(parse_snippet_mode("1"), Ok(true));
        assert_eq!(parse_snippet_mode("yes"), Ok(true));
        assert_eq!(parse_snippet_mode("anything"), Ok(true));
        assert_eq!(parse_snippet_mode("0"), Ok(false));
        assert_eq!(parse_snippet_mode(" False "), Ok(false));
        assert_eq!(parse_snippet_mode("off"), Ok(false));
    }

    #[test]
    fn test_snippet_mode_flag() {
        let cli = Cli::try_parse_from(["fakeum", "query", "City ✕ 1", "--snippet-mode"]).unwrap();
        assert_eq!(cli.snippet_mode, Some(true));
        assert!(matches!(cli.command, Some(Commands::Query { .. })));

        let cli = Cli::try_parse_from(["fakeum", "--snippet-mode=false", "types"]).unwrap();
        assert_eq!(cli.snippet_mode, Some(false));
    }

    #[test]
    fn test_empty_snippet_mode_env_enables_snippet_mode() {
        // Only this test touches SNIPPET_MODE
        std::env::set_var("SNIPPET_MODE", "");
        let result = Cli::try_parse_from(["fakeum", "query", "City ✕ 1"]);
        std::env::remove_var("SNIPPET_MODE");

        let cli = result.unwrap();
        assert_eq!(cli.snippet_mode, Some(true));
        let settings = load_settings(&cli).unwrap();
        assert!(settings.snippet_mode);
    }

    #[test]
    fn test_locale_flags() {
        let cli = Cli::try_parse_from([
            "fakeum",
            "--locale",
            "de_DE",
            "--locale",
            "fr_FR,nl_NL",
            "--format",
            "text",
            "locales",
        ])
        .unwrap();
        assert_eq!(cli.locales, vec!["de_DE", "fr_FR", "nl_NL"]);
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
