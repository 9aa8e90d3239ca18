use axum::extract::FromRef;
use storage::{Database, services::scoring::ScoringRules};

use crate::middleware::auth::ApiKeys;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub api_keys: ApiKeys,
    pub rules: ScoringRules,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for ApiKeys {
    fn from_ref(state: &AppState) -> Self {
        state.api_keys.clone()
    }
}

impl FromRef<AppState> for ScoringRules {
    fn from_ref(state: &AppState) -> Self {
        state.rules
    }
}
