use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. "ES" or "DK"
    pub country_code: Option<String>,
}

impl Team {
    /// Flag image served by flagsapi.com, when the team has a country code
    pub fn flag_url(&self) -> Option<String> {
        self.country_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| format!("https://flagsapi.com/{}/flat/64.png", code.to_uppercase()))
    }
}
