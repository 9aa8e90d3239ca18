use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Team;

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_country_code"))]
    pub country_code: Option<String>,
}

/// Team as exposed to clients, with its derived flag image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub name: String,
    pub country_code: Option<String>,
    pub flag_url: Option<String>,
}

fn validate_country_code(code: &str) -> Result<(), validator::ValidationError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_country_code"))
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        let flag_url = team.flag_url();
        Self {
            team_id: team.team_id,
            name: team.name,
            country_code: team.country_code,
            flag_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_must_be_two_letters() {
        let valid = CreateTeamRequest {
            name: "Spain".to_string(),
            country_code: Some("ES".to_string()),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateTeamRequest {
            name: "Spain".to_string(),
            country_code: Some("ESP".to_string()),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_country_code_is_optional() {
        let request = CreateTeamRequest {
            name: "Kosovo".to_string(),
            country_code: None,
        };
        assert!(request.validate().is_ok());
    }
}
