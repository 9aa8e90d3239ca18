use axum::{Router, routing::get};

use super::handlers::{delete_answer, get_answer, list_answers, submit_answer, update_answer};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_answers).post(submit_answer))
        .route(
            "/:id",
            get(get_answer).patch(update_answer).delete(delete_answer),
        )
}
