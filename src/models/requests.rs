use crate::models::UserData;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to submit a user record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub coordinates: String,
    #[serde(alias = "user_data", rename = "userData")]
    pub user_data: UserData,
}

/// Query parameters for the nearby endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyQuery {
    #[serde(alias = "viewer_id", rename = "viewerId", default)]
    pub viewer_id: Option<uuid::Uuid>,
}
