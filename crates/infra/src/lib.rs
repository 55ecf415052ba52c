mod config;
mod repos;

pub use config::Config;
pub use repos::{DeleteResult, IOccurrenceRepo, Repos};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

#[derive(Clone)]
pub struct QuorumContext {
    pub repos: Repos,
    pub config: Config,
}

impl QuorumContext {
    /// Context backed by plain in-memory collections, used by tests and
    /// local development without a database.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }

    async fn create_postgres(config: Config) -> Self {
        let connection_string = config
            .database_url
            .clone()
            .expect("DATABASE_URL env var to be present.");
        let repos = Repos::create_postgres(&connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self { repos, config }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> QuorumContext {
    QuorumContext::create_postgres(Config::new()).await
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string = Config::new()
        .database_url
        .expect("DATABASE_URL env var to be present.");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
