use actix_web::{web, HttpResponse};

use crate::models::{News, UpdateNewsRequest};
use crate::services::{NewsService, ServiceError};

/// GET /api/v1/news - Lista todas as notícias
#[utoipa::path(
    get,
    path = "/api/v1/news",
    tag = "News",
    responses(
        (status = 200, description = "All stored news", body = [News])
    )
)]
pub async fn get_all_news(service: web::Data<NewsService>) -> Result<HttpResponse, ServiceError> {
    let news = service.read_all().await?;
    log::info!("📰 GET /api/v1/news - {} items", news.len());
    Ok(HttpResponse::Ok().json(news))
}

/// GET /api/v1/news/{news_id} - Busca notícia pelo id
#[utoipa::path(
    get,
    path = "/api/v1/news/{news_id}",
    tag = "News",
    params(("news_id" = i32, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News found", body = News),
        (status = 404, description = "No news with this id")
    )
)]
pub async fn get_news(
    service: web::Data<NewsService>,
    news_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let news = service.read(&news_id).await?;
    Ok(HttpResponse::Ok().json(news))
}

/// POST /api/v1/news - Cria notícia (newsId deve ser único)
#[utoipa::path(
    post,
    path = "/api/v1/news",
    tag = "News",
    request_body = News,
    responses(
        (status = 201, description = "News created", body = News),
        (status = 409, description = "A news with this id already exists")
    )
)]
pub async fn create_news(
    service: web::Data<NewsService>,
    body: web::Json<News>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("📝 POST /api/v1/news - newsId {}", body.news_id);
    let created = service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/v1/news/{news_id} - Atualiza notícia existente
///
/// O id do path prevalece sobre o `newsId` do corpo.
#[utoipa::path(
    put,
    path = "/api/v1/news/{news_id}",
    tag = "News",
    params(("news_id" = i32, Path, description = "News identifier")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "News updated", body = News),
        (status = 404, description = "No news with this id")
    )
)]
pub async fn update_news(
    service: web::Data<NewsService>,
    news_id: web::Path<i32>,
    body: web::Json<UpdateNewsRequest>,
) -> Result<HttpResponse, ServiceError> {
    let news = body.into_inner().into_news(news_id.into_inner());

    let updated = service.update(news).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/news/{news_id} - Remove notícia
#[utoipa::path(
    delete,
    path = "/api/v1/news/{news_id}",
    tag = "News",
    params(("news_id" = i32, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News deleted"),
        (status = 404, description = "No news with this id")
    )
)]
pub async fn delete_news(
    service: web::Data<NewsService>,
    news_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(&news_id).await?;
    Ok(HttpResponse::Ok().finish())
}
