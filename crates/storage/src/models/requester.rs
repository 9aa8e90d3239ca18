use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity attached to an inbound request by the authentication layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Requester {
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl Requester {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_admin: false,
        }
    }

    pub fn admin() -> Self {
        Self {
            user_id: None,
            is_admin: true,
        }
    }

    pub fn is_owner_of(&self, owner: &str) -> bool {
        self.user_id.as_deref() == Some(owner)
    }
}
