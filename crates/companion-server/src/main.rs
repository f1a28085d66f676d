use crate::opt::{Commands, Db, Run, Seed};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use companion_core::generation::{OpenAiGenerator, TextGenerator};
use companion_core::llm_config::LlmConfig;
use companion_db::sea_orm::{ConnectOptions, Database, DatabaseConnection};
use companion_utils::net::create_listener;
use std::env;
use std::error::Error;
use std::sync::Arc;

mod app;
mod auth;
mod db;
mod opt;
mod routes;
mod user;

pub(crate) struct InnerAppConfig {
    generator: Box<dyn TextGenerator>,
}

#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(generator: impl TextGenerator + 'static) -> Self {
        Self(Arc::new(InnerAppConfig {
            generator: Box::new(generator),
        }))
    }

    pub fn generator(&self) -> &dyn TextGenerator {
        self.0.generator.as_ref()
    }
}

async fn connect(db_options: &Db) -> Result<DatabaseConnection> {
    let conn = Database::connect(build_connect_options(db_options)).await?;
    companion_db::schema::create_tables(&conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create tables"))?;
    Ok(conn)
}

async fn run(opt: Run) -> Result<()> {
    let _guard = companion_utils::tracing::setup(
        companion_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .otlp_endpoint(opt.otlp_endpoint)
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env.clone())
            .build(),
    )?;

    let conn = connect(&opt.db).await?;
    if opt.seed {
        db::seed_topics(&conn).await?;
    }

    let llm_config = LlmConfig::try_from(opt.llm)?;
    if llm_config.get_key().is_none() {
        tracing::warn!("no llm api key configured, generation endpoints will fail");
    }
    tracing::info!(service = ?llm_config.service(), model = llm_config.get_model(), "using llm service");
    let app_config = AppConfig::new(OpenAiGenerator::new(llm_config));

    let Run { host, port, auth, .. } = opt;
    let app = app::create_app(app_config, &auth, conn)?;

    let listener = create_listener(host, port).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

async fn seed(opt: Seed) -> Result<()> {
    let _guard = companion_utils::tracing::setup(
        companion_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env("cli".to_owned())
            .build(),
    )?;

    let conn = connect(&opt.db).await?;
    db::seed_topics(&conn).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db) -> ConnectOptions {
    let mut pool_options = ConnectOptions::new(&db_options.database_url);
    if let Some(min_connections) = db_options.db_min_connections {
        pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        pool_options.max_connections(max_connections);
    }
    pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    pool_options
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
            Commands::Seed(o) => seed(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
