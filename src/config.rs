use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_path: String,
    pub listen_addr: String,
}

impl Settings {
    /// Defaults, then `trivia.toml` (or the file named by `TRIVIA_CONFIG`),
    /// then `TRIVIA_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("TRIVIA_CONFIG").unwrap_or_else(|_| "trivia".to_string());

        config::Config::builder()
            .set_default("database_path", "trivia.db")?
            .set_default("listen_addr", "0.0.0.0:8080")?
            .add_source(config::File::with_name(&file).required(false))
            .add_source(config::Environment::with_prefix("TRIVIA"))
            .build()?
            .try_deserialize()
    }
}
