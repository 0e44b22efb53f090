use actix_web::{web, HttpResponse};

use crate::models::{UpdateUserProfileRequest, UserProfile};
use crate::services::{ServiceError, UserProfileService};

/// GET /api/v1/user - Lista todos os perfis
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = "Users",
    responses(
        (status = 200, description = "All user profiles", body = [UserProfile])
    )
)]
pub async fn get_all_users(
    service: web::Data<UserProfileService>,
) -> Result<HttpResponse, ServiceError> {
    let users = service.read_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/v1/user/{user_id} - Busca perfil pelo userId
#[utoipa::path(
    get,
    path = "/api/v1/user/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User profile found", body = UserProfile),
        (status = 404, description = "No profile with this userId")
    )
)]
pub async fn get_user(
    service: web::Data<UserProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let profile = service.read(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/v1/user - Registra perfil (userId deve ser único)
#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = "Users",
    request_body = UserProfile,
    responses(
        (status = 201, description = "User profile registered", body = UserProfile),
        (status = 400, description = "Empty userId"),
        (status = 409, description = "userId already registered")
    )
)]
pub async fn register_user(
    service: web::Data<UserProfileService>,
    body: web::Json<UserProfile>,
) -> Result<HttpResponse, ServiceError> {
    // Um userId vazio nunca poderia ser acessado por /api/v1/user/{user_id}
    if body.user_id.is_empty() {
        log::warn!("⚠️ POST /api/v1/user - empty userId rejected");
        return Ok(HttpResponse::BadRequest().finish());
    }

    log::info!("👤 POST /api/v1/user - registering {}", body.user_id);
    let created = service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/user/{user_id} - Atualiza perfil
#[utoipa::path(
    put,
    path = "/api/v1/user/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = UpdateUserProfileRequest,
    responses(
        (status = 200, description = "User profile updated", body = UserProfile),
        (status = 404, description = "No profile with this userId")
    )
)]
pub async fn update_user(
    service: web::Data<UserProfileService>,
    user_id: web::Path<String>,
    body: web::Json<UpdateUserProfileRequest>,
) -> Result<HttpResponse, ServiceError> {
    let profile = body.into_inner().into_profile(user_id.into_inner());

    let updated = service.update(profile).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/user/{user_id} - Remove perfil
#[utoipa::path(
    delete,
    path = "/api/v1/user/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User profile deleted"),
        (status = 404, description = "No profile with this userId")
    )
)]
pub async fn delete_user(
    service: web::Data<UserProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(&user_id).await?;
    Ok(HttpResponse::Ok().finish())
}
