// src/models/staff.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: Uuid,
    pub full_name: String,

    #[schema(example = "Engenheiro de Geoprocessamento")]
    pub job_title: String,

    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub full_name: String,

    #[validate(length(min = 1, message = "O cargo é obrigatório."))]
    pub job_title: String,

    pub bio: Option<String>,
    pub photo_url: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffPayload {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}
