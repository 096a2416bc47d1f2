// src/models/quotes.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    New,
    Contacted,
    Closed,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::New => "NEW",
            QuoteStatus::Contacted => "CONTACTED",
            QuoteStatus::Closed => "CLOSED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NEW" => Some(QuoteStatus::New),
            "CONTACTED" => Some(QuoteStatus::Contacted),
            "CLOSED" => Some(QuoteStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub product_interest: Option<String>,
    pub message: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Payload público do formulário de orçamento. A validação campo a campo é
// feita pelo motor de formulários (src/forms), não pelo derive do validator:
// o frontend precisa dos erros por campo para exibir embaixo de cada input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestPayload {
    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub email: String,

    pub phone: Option<String>,
    pub product_interest: Option<String>,

    #[serde(default)]
    pub message: String,

    /// O site exige aceitar a política de contato antes de enviar.
    #[serde(default)]
    pub accept_contact: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteStatusPayload {
    pub status: QuoteStatus,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFilter {
    pub status: Option<QuoteStatus>,
}
