use actix_web::{web, HttpResponse};

use crate::models::{Reminder, UpdateReminderRequest};
use crate::services::{ReminderService, ServiceError};

/// GET /api/v1/reminder - Lista todos os lembretes
#[utoipa::path(
    get,
    path = "/api/v1/reminder",
    tag = "Reminders",
    responses(
        (status = 200, description = "All stored reminders", body = [Reminder])
    )
)]
pub async fn get_all_reminders(
    service: web::Data<ReminderService>,
) -> Result<HttpResponse, ServiceError> {
    let reminders = service.read_all().await?;
    Ok(HttpResponse::Ok().json(reminders))
}

/// GET /api/v1/reminder/{reminder_id} - Busca lembrete pelo id
#[utoipa::path(
    get,
    path = "/api/v1/reminder/{reminder_id}",
    tag = "Reminders",
    params(("reminder_id" = i32, Path, description = "Reminder identifier")),
    responses(
        (status = 200, description = "Reminder found", body = Reminder),
        (status = 404, description = "No reminder with this id")
    )
)]
pub async fn get_reminder(
    service: web::Data<ReminderService>,
    reminder_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let reminder = service.read(&reminder_id).await?;
    Ok(HttpResponse::Ok().json(reminder))
}

/// POST /api/v1/reminder - Cria lembrete
#[utoipa::path(
    post,
    path = "/api/v1/reminder",
    tag = "Reminders",
    request_body = Reminder,
    responses(
        (status = 201, description = "Reminder created", body = Reminder),
        (status = 409, description = "A reminder with this id already exists")
    )
)]
pub async fn create_reminder(
    service: web::Data<ReminderService>,
    body: web::Json<Reminder>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("⏰ POST /api/v1/reminder - reminderId {}", body.reminder_id);
    let created = service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/reminder/{reminder_id} - Atualiza lembrete
#[utoipa::path(
    put,
    path = "/api/v1/reminder/{reminder_id}",
    tag = "Reminders",
    params(("reminder_id" = i32, Path, description = "Reminder identifier")),
    request_body = UpdateReminderRequest,
    responses(
        (status = 200, description = "Reminder updated", body = Reminder),
        (status = 404, description = "No reminder with this id")
    )
)]
pub async fn update_reminder(
    service: web::Data<ReminderService>,
    reminder_id: web::Path<i32>,
    body: web::Json<UpdateReminderRequest>,
) -> Result<HttpResponse, ServiceError> {
    let reminder = body.into_inner().into_reminder(reminder_id.into_inner());

    let updated = service.update(reminder).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/reminder/{reminder_id} - Remove lembrete
#[utoipa::path(
    delete,
    path = "/api/v1/reminder/{reminder_id}",
    tag = "Reminders",
    params(("reminder_id" = i32, Path, description = "Reminder identifier")),
    responses(
        (status = 200, description = "Reminder deleted"),
        (status = 404, description = "No reminder with this id")
    )
)]
pub async fn delete_reminder(
    service: web::Data<ReminderService>,
    reminder_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(&reminder_id).await?;
    Ok(HttpResponse::Ok().finish())
}
