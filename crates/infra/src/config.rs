use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string for the backing store, read from the
    /// `DATABASE_URL` environment variable. Not required when running with
    /// the in-memory repositories.
    pub database_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            info!("Did not find DATABASE_URL environment variable. Only the in-memory repositories will be available.");
        }
        Self { database_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
