// src/db/catalog_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{CreateProductPayload, Product, ProductFilter, UpdateProductPayload},
};

const PRODUCT_COLUMNS: &str = "id, sku, slug, name, category, description, price, image_url, \
     stock_quantity, low_stock_threshold, is_featured, is_published, created_at, updated_at";

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products
                 (sku, slug, name, category, description, price, image_url,
                  stock_quantity, low_stock_threshold, is_featured, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(&payload.sku)
            .bind(&payload.slug)
            .bind(&payload.name)
            .bind(&payload.category)
            .bind(&payload.description)
            .bind(payload.price)
            .bind(&payload.image_url)
            .bind(payload.stock_quantity)
            .bind(payload.low_stock_threshold)
            .bind(payload.is_featured)
            .bind(payload.is_published)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::UniqueConstraintViolation(
                            "Já existe um produto com esse SKU ou slug.".to_string(),
                        );
                    }
                }
                e.into()
            })
    }

    /// Listagem pública: apenas publicados, com filtros opcionais.
    pub async fn list_published(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE is_published = TRUE
               AND ($1::text IS NULL OR category = $1)
               AND ($2::bool IS NULL OR is_featured = $2)
               AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%'
                    OR description ILIKE '%' || $3 || '%')
             ORDER BY name"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(&filter.category)
            .bind(filter.featured)
            .bind(&filter.search)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Listagem do admin: tudo, inclusive despublicados.
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1 AND is_published = TRUE"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Trava a linha do produto dentro de uma transação de venda.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        payload: &UpdateProductPayload,
    ) -> Result<Product, AppError> {
        let sql = format!(
            "UPDATE products
             SET name = COALESCE($2, name),
                 category = COALESCE($3, category),
                 description = COALESCE($4, description),
                 price = COALESCE($5, price),
                 image_url = COALESCE($6, image_url),
                 low_stock_threshold = COALESCE($7, low_stock_threshold),
                 is_featured = COALESCE($8, is_featured),
                 is_published = COALESCE($9, is_published),
                 updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.category)
            .bind(&payload.description)
            .bind(payload.price)
            .bind(&payload.image_url)
            .bind(payload.low_stock_threshold)
            .bind(payload.is_featured)
            .bind(payload.is_published)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto".to_string()))
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produto".to_string()));
        }
        Ok(())
    }

    /// Soma `delta` ao estoque (positivo ou negativo) e devolve o produto.
    /// O CHECK de quantidade fica na camada de serviço, que valida antes.
    pub async fn apply_stock_delta<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        delta: i32,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "UPDATE products
             SET stock_quantity = stock_quantity + $2, updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(delta)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto".to_string()))
    }

    pub async fn count_low_stock(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM products
             WHERE is_published = TRUE AND stock_quantity <= low_stock_threshold",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
