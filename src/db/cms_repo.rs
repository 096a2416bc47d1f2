// src/db/cms_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cms::{
        BlogPost, CarouselItem, CreateBlogPostPayload, CreateCarouselItemPayload, PageSection,
        UpdateBlogPostPayload, UpdateCarouselItemPayload, UpsertPageSectionPayload,
    },
};

const CAROUSEL_COLUMNS: &str =
    "id, title, caption, image_url, link_url, position, is_active, created_at, updated_at";

const SECTION_COLUMNS: &str = "id, page_slug, section_key, language, title, body, position, \
     is_published, created_at, updated_at";

const POST_COLUMNS: &str = "id, title, slug, excerpt, body, cover_image_url, author_name, \
     is_published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct CmsRepository {
    pool: PgPool,
}

impl CmsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Carrossel
    // ---

    pub async fn list_active_carousel(&self) -> Result<Vec<CarouselItem>, AppError> {
        let sql = format!(
            "SELECT {CAROUSEL_COLUMNS} FROM carousel_items
             WHERE is_active = TRUE
             ORDER BY position, created_at"
        );

        Ok(sqlx::query_as::<_, CarouselItem>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn list_all_carousel(&self) -> Result<Vec<CarouselItem>, AppError> {
        let sql = format!("SELECT {CAROUSEL_COLUMNS} FROM carousel_items ORDER BY position");

        Ok(sqlx::query_as::<_, CarouselItem>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn create_carousel_item(
        &self,
        payload: &CreateCarouselItemPayload,
    ) -> Result<CarouselItem, AppError> {
        let sql = format!(
            "INSERT INTO carousel_items (title, caption, image_url, link_url, position, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CAROUSEL_COLUMNS}"
        );

        Ok(sqlx::query_as::<_, CarouselItem>(&sql)
            .bind(&payload.title)
            .bind(&payload.caption)
            .bind(&payload.image_url)
            .bind(&payload.link_url)
            .bind(payload.position)
            .bind(payload.is_active)
            .fetch_one(&self.pool)
            .await?)
    }

    pub async fn update_carousel_item(
        &self,
        id: Uuid,
        payload: &UpdateCarouselItemPayload,
    ) -> Result<CarouselItem, AppError> {
        let sql = format!(
            "UPDATE carousel_items
             SET title = COALESCE($2, title),
                 caption = COALESCE($3, caption),
                 image_url = COALESCE($4, image_url),
                 link_url = COALESCE($5, link_url),
                 position = COALESCE($6, position),
                 is_active = COALESCE($7, is_active),
                 updated_at = now()
             WHERE id = $1
             RETURNING {CAROUSEL_COLUMNS}"
        );

        sqlx::query_as::<_, CarouselItem>(&sql)
            .bind(id)
            .bind(&payload.title)
            .bind(&payload.caption)
            .bind(&payload.image_url)
            .bind(&payload.link_url)
            .bind(payload.position)
            .bind(payload.is_active)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Item do carrossel".to_string()))
    }

    pub async fn delete_carousel_item(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM carousel_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item do carrossel".to_string()));
        }
        Ok(())
    }

    // ---
    // Seções de página
    // ---

    /// Seções publicadas de uma página em um idioma, com fallback para 'en'
    /// quando o idioma pedido não tem conteúdo.
    pub async fn list_page_sections(
        &self,
        page_slug: &str,
        language: &str,
    ) -> Result<Vec<PageSection>, AppError> {
        let sql = format!(
            "SELECT {SECTION_COLUMNS} FROM page_sections
             WHERE page_slug = $1 AND language = $2 AND is_published = TRUE
             ORDER BY position"
        );

        let sections = sqlx::query_as::<_, PageSection>(&sql)
            .bind(page_slug)
            .bind(language)
            .fetch_all(&self.pool)
            .await?;

        if !sections.is_empty() || language == "en" {
            return Ok(sections);
        }

        let fallback = sqlx::query_as::<_, PageSection>(&sql)
            .bind(page_slug)
            .bind("en")
            .fetch_all(&self.pool)
            .await?;

        Ok(fallback)
    }

    pub async fn list_all_sections(&self) -> Result<Vec<PageSection>, AppError> {
        let sql = format!(
            "SELECT {SECTION_COLUMNS} FROM page_sections ORDER BY page_slug, language, position"
        );

        Ok(sqlx::query_as::<_, PageSection>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Cria ou substitui a seção (page_slug, section_key, language).
    pub async fn upsert_section(
        &self,
        payload: &UpsertPageSectionPayload,
    ) -> Result<PageSection, AppError> {
        let sql = format!(
            "INSERT INTO page_sections
                 (page_slug, section_key, language, title, body, position, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (page_slug, section_key, language) DO UPDATE
             SET title = EXCLUDED.title,
                 body = EXCLUDED.body,
                 position = EXCLUDED.position,
                 is_published = EXCLUDED.is_published,
                 updated_at = now()
             RETURNING {SECTION_COLUMNS}"
        );

        Ok(sqlx::query_as::<_, PageSection>(&sql)
            .bind(&payload.page_slug)
            .bind(&payload.section_key)
            .bind(&payload.language)
            .bind(&payload.title)
            .bind(&payload.body)
            .bind(payload.position)
            .bind(payload.is_published)
            .fetch_one(&self.pool)
            .await?)
    }

    pub async fn delete_section(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM page_sections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Seção de página".to_string()));
        }
        Ok(())
    }

    // ---
    // Blog
    // ---

    pub async fn list_published_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM blog_posts
             WHERE is_published = TRUE
             ORDER BY published_at DESC NULLS LAST"
        );

        Ok(sqlx::query_as::<_, BlogPost>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn list_all_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts ORDER BY created_at DESC");

        Ok(sqlx::query_as::<_, BlogPost>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_published_post_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPost>, AppError> {
        let sql =
            format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1 AND is_published = TRUE");

        Ok(sqlx::query_as::<_, BlogPost>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn create_post(&self, payload: &CreateBlogPostPayload) -> Result<BlogPost, AppError> {
        let sql = format!(
            "INSERT INTO blog_posts
                 (title, slug, excerpt, body, cover_image_url, author_name, is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $7 THEN now() ELSE NULL END)
             RETURNING {POST_COLUMNS}"
        );

        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(&payload.title)
            .bind(&payload.slug)
            .bind(&payload.excerpt)
            .bind(&payload.body)
            .bind(&payload.cover_image_url)
            .bind(&payload.author_name)
            .bind(payload.is_published)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::UniqueConstraintViolation(
                            "Já existe um post com esse slug.".to_string(),
                        );
                    }
                }
                e.into()
            })
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        payload: &UpdateBlogPostPayload,
    ) -> Result<BlogPost, AppError> {
        // Publicar pela primeira vez carimba published_at; despublicar mantém
        let sql = format!(
            "UPDATE blog_posts
             SET title = COALESCE($2, title),
                 excerpt = COALESCE($3, excerpt),
                 body = COALESCE($4, body),
                 cover_image_url = COALESCE($5, cover_image_url),
                 author_name = COALESCE($6, author_name),
                 is_published = COALESCE($7, is_published),
                 published_at = CASE
                     WHEN COALESCE($7, is_published) AND published_at IS NULL THEN now()
                     ELSE published_at
                 END,
                 updated_at = now()
             WHERE id = $1
             RETURNING {POST_COLUMNS}"
        );

        sqlx::query_as::<_, BlogPost>(&sql)
            .bind(id)
            .bind(&payload.title)
            .bind(&payload.excerpt)
            .bind(&payload.body)
            .bind(&payload.cover_image_url)
            .bind(&payload.author_name)
            .bind(payload.is_published)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Post".to_string()))
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Post".to_string()));
        }
        Ok(())
    }
}
