use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;

/// Lembrete (armazenado na collection `reminder`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub reminder_id: i32,

    #[serde(default)]
    pub text: String,

    /// Quando o lembrete deve disparar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<DateTime<Utc>>,
}

/// Corpo do PUT: o id vem do path, um `reminderId` no corpo é ignorado
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReminderRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub schedule: Option<DateTime<Utc>>,
}

impl UpdateReminderRequest {
    pub fn into_reminder(self, reminder_id: i32) -> Reminder {
        Reminder {
            reminder_id,
            text: self.text,
            schedule: self.schedule,
        }
    }
}

impl Entity for Reminder {
    type Key = i32;

    const NAME: &'static str = "reminder";
    const COLLECTION: &'static str = "reminder";
    const ID_FIELD: &'static str = "reminderId";

    fn id(&self) -> &i32 {
        &self.reminder_id
    }
}
