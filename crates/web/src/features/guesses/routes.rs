use axum::{Router, routing::get};

use super::handlers::{delete_guess, get_guess, list_guesses, submit_guess, update_guess};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_guesses).post(submit_guess))
        .route("/:id", get(get_guess).put(update_guess).delete(delete_guess))
}
