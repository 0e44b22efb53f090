use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newz Service API",
        version = "1.0.0",
        description = "CRUD API for news, reminders and user profiles.\n\n**Status codes:** create answers 201 or 409 (duplicate id); read, update and delete answer 200 or 404 (unknown id). Error responses have no body."
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // News
        crate::api::news::get_all_news,
        crate::api::news::get_news,
        crate::api::news::create_news,
        crate::api::news::update_news,
        crate::api::news::delete_news,

        // Reminders
        crate::api::reminders::get_all_reminders,
        crate::api::reminders::get_reminder,
        crate::api::reminders::create_reminder,
        crate::api::reminders::update_reminder,
        crate::api::reminders::delete_reminder,

        // Users
        crate::api::users::get_all_users,
        crate::api::users::get_user,
        crate::api::users::register_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::News,
            crate::models::Reminder,
            crate::models::UserProfile,
            crate::models::UpdateNewsRequest,
            crate::models::UpdateReminderRequest,
            crate::models::UpdateUserProfileRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check and request counters."),
        (name = "News", description = "News articles keyed by integer newsId."),
        (name = "Reminders", description = "Reminders keyed by integer reminderId."),
        (name = "Users", description = "User profiles keyed by string userId."),
    )
)]
pub struct ApiDoc;
