// src/models/sales.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// O que sai do banco (Tabela sales)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub sold_by: Uuid,
    pub notes: Option<String>,
    pub sold_at: DateTime<Utc>,
}

// Venda com o nome do produto, para a listagem do admin
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleWithProduct {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub sold_by: Uuid,
    pub notes: Option<String>,
    pub sold_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordSalePayload {
    pub product_id: Uuid,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantity: i32,

    /// Se omitido, usa o preço de tabela do produto.
    pub unit_price: Option<Decimal>,

    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SalesFilter {
    /// Formato YYYY-MM-DD (inclusivo)
    pub from: Option<NaiveDate>,
    /// Formato YYYY-MM-DD (inclusivo)
    pub to: Option<NaiveDate>,
}

// ---
// Relatórios
// ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub revenue_today: Decimal,
    pub sales_today: i64,
    pub low_stock_products: i64,
    pub pending_quotes: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesChartEntry {
    pub date: Option<String>,
    pub total: Option<Decimal>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_name: String,
    pub total_quantity: Option<i64>,
    pub total_revenue: Option<Decimal>,
}
