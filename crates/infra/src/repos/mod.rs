mod occurrence;
mod shared;

use occurrence::{InMemoryOccurrenceRepo, PostgresOccurrenceRepo};
pub use occurrence::IOccurrenceRepo;
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub occurrences: Arc<dyn IOccurrenceRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            occurrences: Arc::new(PostgresOccurrenceRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            occurrences: Arc::new(InMemoryOccurrenceRepo::new()),
        }
    }
}
