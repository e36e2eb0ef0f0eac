//! tablescout: warehouse table exploration utilities.
//!
//! Eight subcommands sharing one trust boundary: every schema, table, and
//! column name passes the identifier allow-list before it reaches SQL text
//! or a file name, and sessions are read-only unless the subcommand
//! explicitly needs write access.
//!
//! Exploration results print to the console and accumulate in a Markdown
//! report per `(schema, table)` pair at the repository root.

mod commands;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tablescout_core::security::DEFAULT_SECRET_NAME;
use tablescout_core::{ReportPaths, SecretConfig, SecretsProvider, Warehouse, init_logging};

#[derive(Parser)]
#[command(name = "tablescout")]
#[command(about = "Warehouse table exploration utilities")]
#[command(version)]
#[command(long_about = "
tablescout - Warehouse table exploration utilities

Inspect tables in the warehouse: list schema, sample rows, compute column
statistics, run ad-hoc filtered queries, and apply DDL/migration files.
Every utility appends its results to a Markdown report per (schema, table)
pair at the repository root.

SECURITY:
- Schema, table, and column names are allow-list validated before any SQL
  or path interpolation
- Sessions are read-only; only migrate and ddl request write access
- Credentials come from Secrets Manager and are never stored or logged

EXAMPLES:
  tablescout schema core_finance arr_data
  tablescout sample core_finance arr_data 20
  tablescout query core_finance arr_data \"WHERE arr_current > 10000 LIMIT 5\"
  tablescout migrate migrations/005_summary_view.sql
")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Secrets Manager entry holding the warehouse credentials
    #[arg(
        long,
        env = "TABLESCOUT_SECRET_NAME",
        default_value = DEFAULT_SECRET_NAME,
        global = true
    )]
    secret_name: String,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect column metadata and write a fresh exploration report
    Schema { schema: String, table: String },

    /// Fetch sample rows and append them to the report
    Sample {
        schema: String,
        table: String,
        /// Number of rows; must be a positive integer
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Count the most frequent values of a column
    Distinct {
        schema: String,
        table: String,
        column: String,
    },

    /// Column statistics: counts, nulls, distincts, min/max
    Stats {
        schema: String,
        table: String,
        column: String,
    },

    /// Run SELECT * with an operator-supplied SQL fragment
    Query {
        schema: String,
        table: String,
        fragment: String,
    },

    /// Apply a multi-statement SQL migration file (write access)
    Migrate { file: PathBuf },

    /// Execute a SQL file as a single statement (write access)
    Ddl { file: PathBuf },

    /// Verify AWS credentials, secret shape, and warehouse connectivity
    Test,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("✗ {err}");
        process::exit(1);
    }

    if let Err(err) = run(cli).await {
        eprintln!("✗ {err}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> tablescout_core::Result<()> {
    let provider = SecretsProvider::new(SecretConfig {
        secret_name: cli.global.secret_name,
    });
    let warehouse = Warehouse::new(provider.clone());
    let reports = ReportPaths::discover();

    match cli.command {
        Command::Schema { schema, table } => {
            commands::schema::run(&warehouse, &reports, &schema, &table).await
        }
        Command::Sample {
            schema,
            table,
            limit,
        } => commands::sample::run(&warehouse, &reports, &schema, &table, &limit).await,
        Command::Distinct {
            schema,
            table,
            column,
        } => commands::distinct::run(&warehouse, &reports, &schema, &table, &column).await,
        Command::Stats {
            schema,
            table,
            column,
        } => commands::stats::run(&warehouse, &reports, &schema, &table, &column).await,
        Command::Query {
            schema,
            table,
            fragment,
        } => commands::query::run(&warehouse, &reports, &schema, &table, &fragment).await,
        Command::Migrate { file } => commands::migrate::run(&warehouse, &file).await,
        Command::Ddl { file } => commands::ddl::run(&warehouse, &file).await,
        Command::Test => commands::test::run(&warehouse, &provider).await,
    }
}
