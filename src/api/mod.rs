pub mod error;
pub mod health;
pub mod metrics;
pub mod news;
pub mod reminders;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, web, HttpResponse};

/// Route table shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Extractor failures answer with a bare status, like every other error:
        // an unparsable id names a resource that cannot exist.
        .app_data(web::PathConfig::default().error_handler(|err, _| {
            InternalError::from_response(err, HttpResponse::NotFound().finish()).into()
        }))
        .app_data(web::JsonConfig::default().error_handler(|err, _| {
            InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
        }))
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // News
        .service(
            web::scope("/api/v1/news")
                .route("", web::get().to(news::get_all_news))
                .route("", web::post().to(news::create_news))
                .route("/{news_id}", web::get().to(news::get_news))
                .route("/{news_id}", web::put().to(news::update_news))
                .route("/{news_id}", web::delete().to(news::delete_news)),
        )
        // Reminders
        .service(
            web::scope("/api/v1/reminder")
                .route("", web::get().to(reminders::get_all_reminders))
                .route("", web::post().to(reminders::create_reminder))
                .route("/{reminder_id}", web::get().to(reminders::get_reminder))
                .route("/{reminder_id}", web::put().to(reminders::update_reminder))
                .route("/{reminder_id}", web::delete().to(reminders::delete_reminder)),
        )
        // User profiles
        .service(
            web::scope("/api/v1/user")
                .route("", web::get().to(users::get_all_users))
                .route("", web::post().to(users::register_user))
                .route("/{user_id}", web::get().to(users::get_user))
                .route("/{user_id}", web::put().to(users::update_user))
                .route("/{user_id}", web::delete().to(users::delete_user)),
        );
}

#[cfg(test)]
mod tests;
