//! structq CLI - read indexed struct records from PostgreSQL
//!
//! With no subcommand, fetches every MyComplexStruct with its `one` and
//! `two` relations, dumps them to stdout and exits. Also provides:
//! - `migrate`: create the tables
//! - `seed`: insert sample records
//! - `schema`: print the table DDL without connecting

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use structq_core::config::{self, Overrides, StructqConfig};
use structq_core::db::{migrations, ComplexStructRepo};
use structq_core::models::{NewMyOtherStruct, NewMyStruct};
use structq_core::{DatabaseConfig, OutputFormat, PgStore, Store};
use tracing::{debug, info};

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "structq",
    author,
    version,
    about = "Dump MyComplexStruct records with their relations from PostgreSQL"
)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum pool connections
    #[arg(long, env = "STRUCTQ_MAX_CONNECTIONS", global = true)]
    max_connections: Option<u32>,

    /// Seconds to wait for a connection before giving up
    #[arg(long, value_name = "SECS", env = "STRUCTQ_CONNECT_TIMEOUT", global = true)]
    connect_timeout: Option<u64>,

    /// Config file (default: ~/.structq/config.toml)
    #[arg(long, value_name = "PATH", env = "STRUCTQ_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch all records with relations and print them (default)
    Query(QueryArgs),
    /// Create the tables if they do not exist
    Migrate,
    /// Insert sample records with their relations
    Seed(SeedArgs),
    /// Print the table DDL
    Schema,
}

#[derive(Args, Debug, Default)]
struct QueryArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Debug)]
    format: FormatArg,
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Number of records to insert
    #[arg(long, default_value_t = 3)]
    count: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum FormatArg {
    #[default]
    Debug,
    Json,
    Pretty,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Debug => OutputFormat::Debug,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Pretty => OutputFormat::Pretty,
        }
    }
}

impl Cli {
    fn database_config(&self) -> Result<DatabaseConfig> {
        let file = StructqConfig::load(self.config.as_deref())?;
        let resolved = file.resolve(&Overrides {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            connect_timeout_secs: self.connect_timeout,
        })?;
        Ok(resolved)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so .env values feed clap's env fallbacks
    let env_files = config::load_dotenv();

    let mut cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    if env_files.is_empty() {
        debug!("No .env files found (current dir or ~/.structq)");
    } else {
        let sources: Vec<_> = env_files.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded environment from: {}", sources.join(", "));
    }

    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Query(QueryArgs::default()));

    match command {
        Commands::Query(args) => run_query(&cli, args.format.into()).await,
        Commands::Migrate => run_migrate(&cli).await,
        Commands::Seed(args) => run_seed(&cli, args.count).await,
        Commands::Schema => {
            for stmt in migrations::statements() {
                println!("{stmt};");
            }
            Ok(())
        }
    }
}

async fn connect(cli: &Cli) -> Result<PgStore> {
    let db = cli.database_config()?;
    PgStore::connect(&db)
        .await
        .context("Failed to connect to database")
}

async fn run_query(cli: &Cli, format: OutputFormat) -> Result<()> {
    let store = connect(cli).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    structq_core::run(store, &mut out, format)
        .await
        .context("Query failed")?;

    Ok(())
}

async fn run_migrate(cli: &Cli) -> Result<()> {
    let store = connect(cli).await?;

    let outcome = migrations::run(store.pool()).await;
    let closed = store.close().await;

    structq_core::settle(outcome, closed).context("Migration failed")
}

async fn run_seed(cli: &Cli, count: u32) -> Result<()> {
    let store = connect(cli).await?;

    let outcome = seed(&store, count).await;
    let closed = store.close().await;

    structq_core::settle(outcome, closed).context("Seeding failed")
}

async fn seed(store: &PgStore, count: u32) -> structq_core::Result<()> {
    migrations::run(store.pool()).await?;

    let repo = ComplexStructRepo::new(store.pool());
    for i in 0..i64::from(count) {
        let created = repo
            .insert(
                NewMyStruct { one: i, two: i * 2 },
                NewMyOtherStruct { value: i * i },
            )
            .await?;
        info!(record = ?created.record(), "Inserted");
    }

    let total = repo.count().await?;
    info!(total, "Seed complete");
    Ok(())
}
