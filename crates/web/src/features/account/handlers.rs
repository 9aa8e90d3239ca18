use axum::Json;
use storage::models::Requester;

use crate::middleware::auth::Identity;

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "The identity the request was resolved to", body = Requester),
        (status = 401, description = "Neither a user id nor an administrator key")
    ),
    tag = "account"
)]
pub async fn get_me(Identity(requester): Identity) -> Json<Requester> {
    Json(requester)
}
