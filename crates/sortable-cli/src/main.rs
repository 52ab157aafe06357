//! sortable CLI: sort JSON records or print ordering expressions.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use sortable_core::config::{SortConfig, WhitelistFile};
use sortable_resolver::{FieldSortResolver, InMemory, Objects};
use sortable_web::SortLink;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortable")]
#[command(about = "Whitelist-driven sorting of records by a requested field and direction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a JSON array (or JSON lines) read from stdin
    Sort {
        /// Public field name to sort by
        #[arg(short, long)]
        field: String,

        /// Direction token (`asc` or `desc`); anything else leaves input order
        #[arg(short, long, default_value = "asc")]
        dir: String,

        /// YAML whitelist file
        #[arg(short, long)]
        whitelist: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the ordering expression for a field, e.g. `name DESC, id ASC`
    Expr {
        /// Public field name to sort by
        #[arg(short, long)]
        field: String,

        /// Direction token (`asc` or `desc`)
        #[arg(short, long, default_value = "asc")]
        dir: String,

        /// YAML whitelist file
        #[arg(short, long)]
        whitelist: Option<PathBuf>,

        /// Printed when the field is unknown or the direction invalid
        #[arg(long)]
        default: Option<String>,
    },

    /// Show the header link for a column given the current request
    Link {
        /// Request path, e.g. `/books/`
        #[arg(long)]
        path: String,

        /// Raw query string of the current request (without `?`)
        #[arg(long, default_value = "")]
        query: String,

        /// Column the header belongs to
        #[arg(long)]
        column: String,

        /// YAML whitelist file (only its `config` section is used)
        #[arg(short, long)]
        whitelist: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Sort {
            field,
            dir,
            whitelist,
            pretty,
        } => {
            let (resolver, _) = load_whitelist(whitelist.as_deref())?;
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading records from stdin")?;
            let records = parse_records(&input)?;
            let sorted = sort_records(&resolver, records, &field, &dir)?;
            let out = if pretty {
                serde_json::to_string_pretty(&sorted)?
            } else {
                serde_json::to_string(&sorted)?
            };
            writeln!(io::stdout(), "{}", out)?;
        }
        Commands::Expr {
            field,
            dir,
            whitelist,
            default,
        } => {
            let (resolver, _) = load_whitelist(whitelist.as_deref())?;
            if let Some(expr) = resolver.to_ordering_expression(&field, &dir, default.as_deref()) {
                writeln!(io::stdout(), "{}", expr)?;
            }
        }
        Commands::Link {
            path,
            query,
            column,
            whitelist,
        } => {
            let (_, config) = load_whitelist(whitelist.as_deref())?;
            let link = SortLink::build(&path, &query, &column, &config);
            writeln!(io::stdout(), "{}", serde_json::to_string(&link)?)?;
        }
    }
    Ok(())
}

/// Build the resolver and effective config.
///
/// Config precedence: defaults, then `SORTABLE_*` environment variables, then
/// the keys set in the whitelist file's `config` section.
fn load_whitelist(path: Option<&Path>) -> Result<(FieldSortResolver, SortConfig)> {
    let Some(path) = path else {
        return Ok((FieldSortResolver::unrestricted(), SortConfig::from_env()));
    };

    let src = fs::read_to_string(path)
        .with_context(|| format!("reading whitelist {}", path.display()))?;
    let file = WhitelistFile::from_yaml_str(&src)
        .with_context(|| format!("parsing whitelist {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        fields = file.fields.as_ref().map(Vec::len).unwrap_or(0),
        "loaded whitelist"
    );

    let config = effective_config(SortConfig::from_env(), &file);
    let resolver = FieldSortResolver::new(file.fields)?;
    Ok((resolver, config))
}

fn effective_config(mut base: SortConfig, file: &WhitelistFile) -> SortConfig {
    if let Some(overrides) = &file.config {
        base.apply_overrides(overrides);
    }
    base
}

/// Accept either one JSON array or newline-delimited JSON values.
///
/// Input starting with `[` is tried as a single array first; JSON lines whose
/// first value happens to be an array fall through to per-line parsing.
fn parse_records(input: &str) -> Result<Value> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        if let Ok(array) = serde_json::from_str::<Value>(trimmed) {
            return Ok(array);
        }
    }

    let items = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Value>(line).with_context(|| format!("parsing line {}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(items))
}

fn sort_records(resolver: &FieldSortResolver, records: Value, field: &str, dir: &str) -> Result<Value> {
    match resolver.sorted(InMemory::from_json(records), field, dir)? {
        Objects::Records(records) => Ok(Value::Array(records)),
        Objects::Unsupported(kind) => bail!("expected a list of records, got {}", kind),
        Objects::Query(never) => match never {},
    }
}
