// src/handlers/sales.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{PermRecordSales, RequirePermission},
    },
    models::sales::{RecordSalePayload, Sale, SaleWithProduct, SalesFilter},
};

#[utoipa::path(
    post,
    path = "/api/admin/sales",
    tag = "Sales",
    security(("api_jwt" = [])),
    request_body = RecordSalePayload,
    responses(
        (status = 201, description = "Venda registrada, estoque baixado", body = Sale),
        (status = 409, description = "Estoque insuficiente")
    )
)]
pub async fn record_sale(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    _guard: RequirePermission<PermRecordSales>,
    Json(payload): Json<RecordSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let sale = app_state
        .sales_service
        .record_sale(user.0.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(sale)))
}

#[utoipa::path(
    get,
    path = "/api/admin/sales",
    tag = "Sales",
    security(("api_jwt" = [])),
    params(SalesFilter),
    responses((status = 200, description = "Vendas no período", body = [SaleWithProduct]))
)]
pub async fn list_sales(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermRecordSales>,
    Query(filter): Query<SalesFilter>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.sales_repo.list_sales(&filter).await?;
    Ok(Json(sales))
}
