use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rmigrate
/// CLI application to apply numbered SQL migrations to SQLite exactly once
#[derive(Parser)]
#[command(
    name = "rmigrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Apply numbered SQL migration files to a SQLite database exactly once",
    long_about = None
)]
pub struct Cli {
    /// YAML file providing defaults for --db, --migrations and --table
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic logging (same as RUST_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find the database, the scripts and the history table.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Path of the SQLite database file
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<String>,

    /// Directory containing <number>_<name>.sql files
    #[arg(long = "migrations", value_name = "DIR")]
    pub migrations: Option<String>,

    /// Name of the history table [default: schema_migrations]
    #[arg(long = "table", value_name = "NAME")]
    pub table: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify history and apply all pending migrations
    Up {
        #[command(flatten)]
        target: Target,

        #[arg(long = "dry-run", help = "List pending migrations without applying them")]
        dry_run: bool,
    },

    /// Verify history and show applied and pending migrations
    Status {
        #[command(flatten)]
        target: Target,

        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },
}

impl Commands {
    pub fn target(&self) -> &Target {
        match self {
            Commands::Up { target, .. } | Commands::Status { target, .. } => target,
        }
    }
}
