use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;

/// Perfil de usuário, identificado por um `userId` textual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Corpo do PUT de perfil (o `userId` vem do path)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileRequest {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UpdateUserProfileRequest {
    pub fn into_profile(self, user_id: String) -> UserProfile {
        UserProfile {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            contact: self.contact,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

impl Entity for UserProfile {
    type Key = String;

    const NAME: &'static str = "user profile";
    const COLLECTION: &'static str = "user_profile";
    const ID_FIELD: &'static str = "userId";

    fn id(&self) -> &String {
        &self.user_id
    }
}
