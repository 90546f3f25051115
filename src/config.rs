//! Application settings.
//!
//! Every setting can come from a command-line flag or its environment
//! variable; flags win.

use clap::Parser;
use document_gateway::MongoOpts;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone, Debug)]
pub struct DatabaseOpts {
    /// MongoDB connection string
    #[arg(
        long,
        default_value = "mongodb://localhost:27017",
        env = "MONGODB_URI"
    )]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, default_value = "crossy", env = "DATABASE_NAME")]
    pub database_name: String,
}

// CLI type → gateway library type conversion
impl From<&DatabaseOpts> for MongoOpts {
    fn from(opts: &DatabaseOpts) -> Self {
        Self {
            uri: opts.mongodb_uri.clone(),
            database: opts.database_name.clone(),
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct Settings {
    #[command(flatten)]
    pub database: DatabaseOpts,

    /// Directory submitted records are exported to
    #[arg(long, default_value = "data", env = "CROSSING_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug")
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Seed for reproducible record generation
    #[arg(long, env = "CROSSING_SEED")]
    pub seed: Option<u64>,
}

impl Settings {
    /// Log filter: `RUST_LOG` when set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.to_lowercase()))
    }
}
