use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use super::handlers::{create_match, get_match, list_matches, record_result};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_match))
        .route("/:id/result", patch(record_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_matches))
        .route("/:id", get(get_match))
        .merge(protected)
}
