use anyhow::{Context, Result};
use storage::services::scoring::{DEFAULT_BONUS_POINTS, ScoringRules};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub bonus_points: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            bonus_points: match std::env::var("BONUS_POINTS") {
                Ok(value) => value
                    .parse()
                    .context("BONUS_POINTS must be an integer")?,
                Err(_) => DEFAULT_BONUS_POINTS,
            },
        })
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            bonus_points: self.bonus_points,
        }
    }
}
