// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// O que sai do banco (Tabela products)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "PV-550-MONO")]
    pub sku: String,

    #[schema(example = "painel-solar-550w")]
    pub slug: String,

    #[schema(example = "Painel Solar 550W Monocristalino")]
    pub name: String,

    #[schema(example = "PAINEIS")]
    pub category: String,

    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,

    pub stock_quantity: i32,
    pub low_stock_threshold: i32,

    pub is_featured: bool,
    pub is_published: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O SKU é obrigatório."))]
    pub sku: String,

    #[validate(length(min = 1, message = "O slug é obrigatório."))]
    pub slug: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    pub description: Option<String>,

    #[validate(custom(function = validate_not_negative))]
    pub price: Decimal,

    pub image_url: Option<String>,

    #[serde(default)]
    pub stock_quantity: i32,

    #[serde(default)]
    pub low_stock_threshold: i32,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_published: bool,
}

// Atualização parcial: só o que vier preenchido é alterado
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,

    #[validate(custom(function = validate_not_negative))]
    pub price: Option<Decimal>,

    pub image_url: Option<String>,
    pub low_stock_threshold: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

// Ajuste manual de estoque (entrada de mercadoria, acerto de inventário)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStockPayload {
    /// Positivo dá entrada, negativo dá baixa.
    pub delta: i32,
    pub reason: Option<String>,
}

// Filtros da listagem pública
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    /// Busca textual em nome e descrição
    pub search: Option<String>,
}
