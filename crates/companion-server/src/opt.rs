use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use companion_utils::args::llm::LlmArgs;

#[derive(Debug, Parser)]
#[command(name = "companion", about = "Learning companion api for AI/ML topics")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Start the http server
    Run(Run),
    /// Insert the sample topics if there are none yet
    Seed(Seed),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Db {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://companion.sqlite?mode=rwc")]
    pub(crate) database_url: String,

    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Auth {
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, help = "Secret used to sign access tokens")]
    pub(crate) jwt_secret: String,

    #[arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES", default_value_t = 30)]
    pub(crate) token_ttl_minutes: i64,

    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = ["http://localhost:3000".to_owned(), "http://localhost:5173".to_owned()]
    )]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "PORT")]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) auth: Auth,

    #[command(flatten)]
    pub(crate) llm: LlmArgs,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(long, help = "Insert the sample topics on startup if there are none")]
    pub(crate) seed: bool,

    #[arg(long = "sentry-dsn", env = "SENTRY_DSN", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        env = "ENVIRONMENT",
        default_value = "dev",
        help = "Set the environment used by sentry and opentelemetry"
    )]
    pub(crate) env: String,

    #[arg(long, env = "OTLP_ENDPOINT")]
    pub(crate) otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Seed {
    #[command(flatten)]
    pub(crate) db: Db,
}
