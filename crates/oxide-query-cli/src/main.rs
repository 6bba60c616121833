//! oxide-query CLI
//!
//! Compiles or flattens a parameterized SQL template for a chosen dialect.

mod params;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_query::dialect::{DialectConfig, DialectKind};
use oxide_query::{ConnectionRegistry, SqlValue, Value, compile, flatten};

/// Render dialect-portable SQL statements.
#[derive(Parser)]
#[command(name = "oxide-query")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dialect to render for, when no configuration file is given.
    #[arg(short, long, default_value = "generic")]
    dialect: DialectKind,

    /// Table prefix (overrides the configured one).
    #[arg(short, long)]
    prefix: Option<String>,

    /// Connection registry JSON file.
    #[arg(short, long, env = "OXIDE_QUERY_CONFIG")]
    config: Option<PathBuf>,

    /// Connection name in the registry (the default if not specified).
    #[arg(long)]
    connection: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the template with every parameter inlined.
    Compile {
        /// SQL template with `?` and `:name` placeholders.
        template: String,

        /// Positional parameters as a JSON array.
        #[arg(long)]
        params: Option<String>,

        /// Named parameters as a JSON object.
        #[arg(long)]
        named: Option<String>,
    },

    /// Render the template with native placeholders and print the bind list.
    Flatten {
        /// SQL template with `?` and `:name` placeholders.
        template: String,

        /// Positional parameters as a JSON array.
        #[arg(long)]
        params: Option<String>,

        /// Named parameters as a JSON object.
        #[arg(long)]
        named: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout carries only the rendered SQL
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

    let dialect = resolve_dialect(&cli)?;
    debug!(dialect = %dialect.kind, prefix = %dialect.table_prefix, "resolved dialect");

    match cli.command {
        Commands::Compile {
            template,
            params,
            named,
        } => {
            let expr = params::expression(&template, params.as_deref(), named.as_deref())?;
            println!("{}", compile(&Value::from(expr), &dialect)?);
        }

        Commands::Flatten {
            template,
            params,
            named,
        } => {
            let expr = params::expression(&template, params.as_deref(), named.as_deref())?;
            let (sql, binds) = flatten(&Value::from(expr), &dialect)?;
            println!("{sql}");
            println!("{}", binds_to_json(&binds));
        }
    }

    Ok(())
}

fn resolve_dialect(cli: &Cli) -> anyhow::Result<DialectConfig> {
    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let registry = ConnectionRegistry::from_json(&json)?;
            match &cli.connection {
                Some(name) => registry.get(name)?.clone(),
                None => registry.default_config()?.clone(),
            }
        }
        None => DialectConfig::new(cli.dialect),
    };

    Ok(match &cli.prefix {
        Some(prefix) => config.with_prefix(prefix.as_str()),
        None => config,
    })
}

fn binds_to_json(binds: &[SqlValue]) -> serde_json::Value {
    binds
        .iter()
        .map(|bind| match bind {
            SqlValue::Null => serde_json::Value::Null,
            SqlValue::Bool(b) => serde_json::Value::Bool(*b),
            SqlValue::Int(i) => serde_json::Value::from(*i),
            SqlValue::Float(f) => serde_json::Value::from(*f),
            SqlValue::Text(s) => serde_json::Value::from(s.as_str()),
            SqlValue::Blob(bytes) => serde_json::Value::from(bytes.as_slice()),
        })
        .collect()
}
