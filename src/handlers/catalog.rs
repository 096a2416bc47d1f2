// src/handlers/catalog.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PermManageProducts, RequirePermission},
    models::catalog::{
        AdjustStockPayload, CreateProductPayload, Product, ProductFilter, UpdateProductPayload,
    },
};

// ---
// Rotas públicas (vitrine)
// ---

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    params(ProductFilter),
    responses((status = 200, description = "Produtos publicados", body = [Product]))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.catalog_repo.list_published(&filter).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{slug}",
    tag = "Catalog",
    responses(
        (status = 200, description = "Produto publicado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product_by_slug(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state
        .catalog_repo
        .find_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

    Ok(Json(product))
}

// ---
// Rotas de admin (exigem MANAGE_PRODUCTS)
// ---

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Catalog",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Todos os produtos, inclusive despublicados", body = [Product]))
)]
pub async fn list_all_products(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageProducts>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.catalog_repo.list_all().await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Catalog",
    security(("api_jwt" = [])),
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 409, description = "SKU ou slug já existem")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageProducts>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state.catalog_service.create_product(&payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = "Catalog",
    security(("api_jwt" = [])),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageProducts>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state.catalog_service.update_product(id, &payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = "Catalog",
    security(("api_jwt" = [])),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageProducts>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/products/{id}/stock",
    tag = "Catalog",
    security(("api_jwt" = [])),
    request_body = AdjustStockPayload,
    responses(
        (status = 200, description = "Produto com o novo saldo", body = Product),
        (status = 409, description = "Baixa maior que o saldo disponível")
    )
)]
pub async fn adjust_stock(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageProducts>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AdjustStockPayload>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state
        .catalog_service
        .adjust_stock(&app_state.db_pool, id, payload.delta, payload.reason.as_deref())
        .await?;

    Ok(Json(product))
}
