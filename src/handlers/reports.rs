// src/handlers/reports.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PermViewReports, ReportAreaAccess, RequirePermission},
    models::sales::{ReportSummary, SalesChartEntry, TopProductEntry},
};

// A área de relatórios usa os dois mecanismos de propósito: o gate por
// lista de cargos na entrada da área e a permissão nomeada, que é a
// autoridade. Para os cargos padrão os dois coincidem.

#[utoipa::path(
    get,
    path = "/api/admin/reports/summary",
    tag = "Reports",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Indicadores do dia", body = ReportSummary))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _area: ReportAreaAccess,
    _guard: RequirePermission<PermViewReports>,
) -> Result<impl IntoResponse, AppError> {
    let (revenue_today, sales_today) = app_state.sales_repo.revenue_today().await?;
    let low_stock_products = app_state.catalog_repo.count_low_stock().await?;
    let pending_quotes = app_state.quote_repo.count_pending().await?;

    Ok(Json(ReportSummary {
        revenue_today,
        sales_today,
        low_stock_products,
        pending_quotes,
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/reports/sales-chart",
    tag = "Reports",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Receita por dia, últimos 30 dias", body = [SalesChartEntry]))
)]
pub async fn get_sales_chart(
    State(app_state): State<AppState>,
    _area: ReportAreaAccess,
    _guard: RequirePermission<PermViewReports>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.sales_repo.sales_last_30_days().await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/api/admin/reports/top-products",
    tag = "Reports",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Top 5 produtos por receita", body = [TopProductEntry]))
)]
pub async fn get_top_products(
    State(app_state): State<AppState>,
    _area: ReportAreaAccess,
    _guard: RequirePermission<PermViewReports>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.sales_repo.top_products().await?;
    Ok(Json(data))
}
