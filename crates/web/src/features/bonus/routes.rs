use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    add_question_choice, create_choice, create_question, get_question, list_choices,
    list_questions, set_correct_choice,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn question_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_question))
        .route("/:id/choices", post(add_question_choice))
        .route("/:id/set-correct", post(set_correct_choice))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_questions))
        .route("/:id", get(get_question))
        .merge(protected)
}

pub fn choice_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_choice))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_choices)).merge(protected)
}
