// src/db/sales_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sales::{Sale, SaleWithProduct, SalesChartEntry, SalesFilter, TopProductEntry},
};

const SALE_COLUMNS: &str = "id, product_id, quantity, unit_price, total, sold_by, notes, sold_at";

#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_sale<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
        quantity: i32,
        unit_price: Decimal,
        total: Decimal,
        sold_by: Uuid,
        notes: Option<&str>,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "INSERT INTO sales (product_id, quantity, unit_price, total, sold_by, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SALE_COLUMNS}"
        );

        Ok(sqlx::query_as::<_, Sale>(&sql)
            .bind(product_id)
            .bind(quantity)
            .bind(unit_price)
            .bind(total)
            .bind(sold_by)
            .bind(notes)
            .fetch_one(executor)
            .await?)
    }

    pub async fn list_sales(&self, filter: &SalesFilter) -> Result<Vec<SaleWithProduct>, AppError> {
        let sales = sqlx::query_as::<_, SaleWithProduct>(
            "SELECT s.id, s.product_id, p.name AS product_name, s.quantity, s.unit_price,
                    s.total, s.sold_by, s.notes, s.sold_at
             FROM sales s
             JOIN products p ON p.id = s.product_id
             WHERE ($1::date IS NULL OR s.sold_at::date >= $1)
               AND ($2::date IS NULL OR s.sold_at::date <= $2)
             ORDER BY s.sold_at DESC",
        )
        .bind(filter.from)
        .bind(filter.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    // ---
    // Agregados dos relatórios
    // ---

    pub async fn revenue_today(&self) -> Result<(Decimal, i64), AppError> {
        let row: (Option<Decimal>, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(total), 0), COUNT(*)
             FROM sales
             WHERE sold_at::date = CURRENT_DATE",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((row.0.unwrap_or(Decimal::ZERO), row.1))
    }

    /// Receita por dia nos últimos 30 dias.
    pub async fn sales_last_30_days(&self) -> Result<Vec<SalesChartEntry>, AppError> {
        let data = sqlx::query_as::<_, SalesChartEntry>(
            "SELECT to_char(sold_at, 'YYYY-MM-DD') AS date,
                    SUM(total) AS total
             FROM sales
             WHERE sold_at >= (CURRENT_DATE - INTERVAL '30 days')
             GROUP BY 1
             ORDER BY 1 ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }

    /// Top 5 produtos por receita.
    pub async fn top_products(&self) -> Result<Vec<TopProductEntry>, AppError> {
        let data = sqlx::query_as::<_, TopProductEntry>(
            "SELECT p.name AS product_name,
                    SUM(s.quantity)::bigint AS total_quantity,
                    SUM(s.total) AS total_revenue
             FROM sales s
             JOIN products p ON p.id = s.product_id
             GROUP BY p.id, p.name
             ORDER BY total_revenue DESC
             LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(data)
    }
}
