// src/services/catalog_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{CreateProductPayload, Product, UpdateProductPayload},
    services::catalog_events::{CatalogEvent, CatalogEvents},
};

/// Regras de negócio do catálogo. As mutações passam por aqui para que o
/// evento correspondente seja publicado depois que o banco confirmar.
#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    events: CatalogEvents,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository, events: CatalogEvents) -> Self {
        Self { repo, events }
    }

    pub async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, AppError> {
        if payload.stock_quantity < 0 {
            return Err(AppError::ValidationError({
                let mut errors = validator::ValidationErrors::new();
                let mut err = validator::ValidationError::new("range");
                err.message = Some("O estoque inicial não pode ser negativo.".into());
                errors.add("stockQuantity".into(), err);
                errors
            }));
        }

        let product = self.repo.create_product(payload).await?;

        self.events.publish(CatalogEvent::ProductCreated {
            id: product.id,
            slug: product.slug.clone(),
        });

        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        payload: &UpdateProductPayload,
    ) -> Result<Product, AppError> {
        let product = self.repo.update_product(id, payload).await?;

        self.events.publish(CatalogEvent::ProductUpdated {
            id: product.id,
            slug: product.slug.clone(),
        });

        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_product(id).await?;
        self.events.publish(CatalogEvent::ProductDeleted { id });
        Ok(())
    }

    /// Ajuste manual de estoque. Baixa maior que o saldo é recusada; o ajuste
    /// roda em transação para travar a linha entre a leitura e a escrita.
    pub async fn adjust_stock(
        &self,
        pool: &sqlx::PgPool,
        id: Uuid,
        delta: i32,
        reason: Option<&str>,
    ) -> Result<Product, AppError> {
        let mut tx = pool.begin().await?;

        let current = self
            .repo
            .find_by_id_for_update(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        if current.stock_quantity + delta < 0 {
            return Err(AppError::InsufficientStock);
        }

        let product = self.repo.apply_stock_delta(&mut *tx, id, delta).await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %id,
            delta,
            reason = reason.unwrap_or("-"),
            stock = product.stock_quantity,
            "estoque ajustado"
        );

        self.events.publish(CatalogEvent::StockChanged {
            id: product.id,
            stock_quantity: product.stock_quantity,
        });

        Ok(product)
    }
}
