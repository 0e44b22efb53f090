use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;

/// Notícia publicada (armazenada na collection `news`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub news_id: i32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Corpo do PUT: a notícia completa, sem `newsId` (o id vem do path)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub url_to_image: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateNewsRequest {
    pub fn into_news(self, news_id: i32) -> News {
        News {
            news_id,
            title: self.title,
            author: self.author,
            description: self.description,
            content: self.content,
            url: self.url,
            url_to_image: self.url_to_image,
            published_at: self.published_at,
        }
    }
}

impl Entity for News {
    type Key = i32;

    const NAME: &'static str = "news";
    const COLLECTION: &'static str = "news";
    const ID_FIELD: &'static str = "newsId";

    fn id(&self) -> &i32 {
        &self.news_id
    }
}
