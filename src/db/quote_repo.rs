// src/db/quote_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::quotes::{QuoteFilter, QuoteRequest, QuoteStatus},
};

// O status chega como TEXT; a conversão para o enum fica concentrada aqui.
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: Uuid,
    customer_name: String,
    email: String,
    phone: Option<String>,
    product_interest: Option<String>,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuoteRow {
    fn into_quote(self) -> Result<QuoteRequest, AppError> {
        let status = QuoteStatus::from_str(&self.status).ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Status desconhecido '{}' no orçamento {}",
                self.status,
                self.id
            ))
        })?;

        Ok(QuoteRequest {
            id: self.id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            product_interest: self.product_interest,
            message: self.message,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const QUOTE_COLUMNS: &str = "id, customer_name, email, phone, product_interest, message, status, \
     created_at, updated_at";

#[derive(Clone)]
pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        customer_name: &str,
        email: &str,
        phone: Option<&str>,
        product_interest: Option<&str>,
        message: &str,
    ) -> Result<QuoteRequest, AppError> {
        let sql = format!(
            "INSERT INTO quote_requests (customer_name, email, phone, product_interest, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {QUOTE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(customer_name)
            .bind(email)
            .bind(phone)
            .bind(product_interest)
            .bind(message)
            .fetch_one(&self.pool)
            .await?;

        row.into_quote()
    }

    pub async fn list(&self, filter: &QuoteFilter) -> Result<Vec<QuoteRequest>, AppError> {
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quote_requests
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );

        let rows = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(QuoteRow::into_quote).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<QuoteRequest>, AppError> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quote_requests WHERE id = $1");

        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(QuoteRow::into_quote).transpose()
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, AppError> {
        let sql = format!(
            "UPDATE quote_requests
             SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {QUOTE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, QuoteRow>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Orçamento".to_string()))?;

        row.into_quote()
    }

    pub async fn count_pending(&self) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM quote_requests WHERE status = 'NEW'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
