// src/handlers/cms.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{PermManageContent, RequirePermission},
    },
    models::cms::{
        BlogPost, CarouselItem, CreateBlogPostPayload, CreateCarouselItemPayload, PageSection,
        UpdateBlogPostPayload, UpdateCarouselItemPayload, UpsertPageSectionPayload,
    },
};

// ---
// Carrossel
// ---

#[utoipa::path(
    get,
    path = "/api/carousel",
    tag = "CMS",
    responses((status = 200, description = "Itens ativos em ordem de exibição", body = [CarouselItem]))
)]
pub async fn list_carousel(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.cms_repo.list_active_carousel().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/admin/carousel",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Todos os itens do carrossel", body = [CarouselItem]))
)]
pub async fn list_all_carousel(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.cms_repo.list_all_carousel().await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/admin/carousel",
    tag = "CMS",
    security(("api_jwt" = [])),
    request_body = CreateCarouselItemPayload,
    responses((status = 201, description = "Item criado", body = CarouselItem))
)]
pub async fn create_carousel_item(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Json(payload): Json<CreateCarouselItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state.cms_repo.create_carousel_item(&payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// Também cobre a persistência da reordenação: o admin manda `position`
#[utoipa::path(
    put,
    path = "/api/admin/carousel/{id}",
    tag = "CMS",
    security(("api_jwt" = [])),
    request_body = UpdateCarouselItemPayload,
    responses(
        (status = 200, description = "Item atualizado", body = CarouselItem),
        (status = 404, description = "Item não encontrado")
    )
)]
pub async fn update_carousel_item(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCarouselItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state.cms_repo.update_carousel_item(id, &payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/admin/carousel/{id}",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 204, description = "Item removido"))
)]
pub async fn delete_carousel_item(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cms_repo.delete_carousel_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Seções de página
// ---

#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    tag = "CMS",
    responses((status = 200, description = "Seções publicadas da página, no idioma pedido", body = [PageSection]))
)]
pub async fn get_page(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sections = app_state
        .cms_repo
        .list_page_sections(&slug, &locale.0)
        .await?;

    Ok(Json(sections))
}

#[utoipa::path(
    get,
    path = "/api/admin/sections",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Todas as seções, todos os idiomas", body = [PageSection]))
)]
pub async fn list_all_sections(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
) -> Result<impl IntoResponse, AppError> {
    let sections = app_state.cms_repo.list_all_sections().await?;
    Ok(Json(sections))
}

#[utoipa::path(
    put,
    path = "/api/admin/sections",
    tag = "CMS",
    security(("api_jwt" = [])),
    request_body = UpsertPageSectionPayload,
    responses((status = 200, description = "Seção criada ou substituída", body = PageSection))
)]
pub async fn upsert_section(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Json(payload): Json<UpsertPageSectionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let section = app_state.cms_repo.upsert_section(&payload).await?;
    Ok(Json(section))
}

#[utoipa::path(
    delete,
    path = "/api/admin/sections/{id}",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 204, description = "Seção removida"))
)]
pub async fn delete_section(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cms_repo.delete_section(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Blog
// ---

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "CMS",
    responses((status = 200, description = "Posts publicados, mais recentes primeiro", body = [BlogPost]))
)]
pub async fn list_posts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = app_state.cms_repo.list_published_posts().await?;
    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "CMS",
    responses(
        (status = 200, description = "Post publicado", body = BlogPost),
        (status = 404, description = "Post não encontrado")
    )
)]
pub async fn get_post_by_slug(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = app_state
        .cms_repo
        .find_published_post_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;

    Ok(Json(post))
}

#[utoipa::path(
    get,
    path = "/api/admin/blog",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Todos os posts, inclusive rascunhos", body = [BlogPost]))
)]
pub async fn list_all_posts(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
) -> Result<impl IntoResponse, AppError> {
    let posts = app_state.cms_repo.list_all_posts().await?;
    Ok(Json(posts))
}

#[utoipa::path(
    post,
    path = "/api/admin/blog",
    tag = "CMS",
    security(("api_jwt" = [])),
    request_body = CreateBlogPostPayload,
    responses(
        (status = 201, description = "Post criado", body = BlogPost),
        (status = 409, description = "Slug já existe")
    )
)]
pub async fn create_post(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Json(payload): Json<CreateBlogPostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let post = app_state.cms_repo.create_post(&payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/{id}",
    tag = "CMS",
    security(("api_jwt" = [])),
    request_body = UpdateBlogPostPayload,
    responses(
        (status = 200, description = "Post atualizado", body = BlogPost),
        (status = 404, description = "Post não encontrado")
    )
)]
pub async fn update_post(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogPostPayload>,
) -> Result<impl IntoResponse, AppError> {
    let post = app_state.cms_repo.update_post(id, &payload).await?;
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/{id}",
    tag = "CMS",
    security(("api_jwt" = [])),
    responses((status = 204, description = "Post removido"))
)]
pub async fn delete_post(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageContent>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cms_repo.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
