// src/models/cms.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ---
// Carrossel da página inicial
// ---

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    pub id: Uuid,
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarouselItemPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    pub caption: Option<String>,

    #[validate(length(min = 1, message = "A URL da imagem é obrigatória."))]
    pub image_url: String,

    pub link_url: Option<String>,

    #[serde(default)]
    pub position: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarouselItemPayload {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

// ---
// Seções de conteúdo das páginas institucionais
// ---

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    pub id: Uuid,

    #[schema(example = "services")]
    pub page_slug: String,

    #[schema(example = "hero")]
    pub section_key: String,

    #[schema(example = "en")]
    pub language: String,

    pub title: String,
    pub body: String,
    pub position: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPageSectionPayload {
    #[validate(length(min = 1, message = "O slug da página é obrigatório."))]
    pub page_slug: String,

    #[validate(length(min = 1, message = "A chave da seção é obrigatória."))]
    pub section_key: String,

    #[validate(length(min = 2, max = 5, message = "O idioma deve ser um código como 'en' ou 'pt'."))]
    #[serde(default = "default_language")]
    pub language: String,

    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    #[validate(length(min = 1, message = "O corpo é obrigatório."))]
    pub body: String,

    #[serde(default)]
    pub position: i32,

    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_language() -> String {
    "en".to_string()
}

// ---
// Blog
// ---

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub author_name: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    #[validate(length(min = 1, message = "O slug é obrigatório."))]
    pub slug: String,

    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "O corpo é obrigatório."))]
    pub body: String,

    pub cover_image_url: Option<String>,

    #[validate(length(min = 1, message = "O autor é obrigatório."))]
    pub author_name: String,

    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostPayload {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub cover_image_url: Option<String>,
    pub author_name: Option<String>,
    pub is_published: Option<bool>,
}
