use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Restricts a listing to one competition; absent means every competition
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct CompetitionFilter {
    pub competition: Option<Uuid>,
}
