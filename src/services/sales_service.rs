// src/services/sales_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, SalesRepository},
    models::sales::{RecordSalePayload, Sale},
    services::catalog_events::{CatalogEvent, CatalogEvents},
};

#[derive(Clone)]
pub struct SalesService {
    sales_repo: SalesRepository,
    catalog_repo: CatalogRepository,
    events: CatalogEvents,
    pool: PgPool,
}

impl SalesService {
    pub fn new(
        sales_repo: SalesRepository,
        catalog_repo: CatalogRepository,
        events: CatalogEvents,
        pool: PgPool,
    ) -> Self {
        Self { sales_repo, catalog_repo, events, pool }
    }

    /// Registra uma venda em uma única transação: trava o produto, confere
    /// o saldo, dá baixa no estoque e grava a venda. Se qualquer passo
    /// falhar, o rollback desfaz tudo.
    pub async fn record_sale(
        &self,
        sold_by: Uuid,
        payload: &RecordSalePayload,
    ) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let product = self
            .catalog_repo
            .find_by_id_for_update(&mut *tx, payload.product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        if product.stock_quantity < payload.quantity {
            return Err(AppError::InsufficientStock);
        }

        // Preço informado vence; sem ele, vale o preço de tabela
        let unit_price = payload.unit_price.unwrap_or(product.price);
        let total = unit_price * Decimal::from(payload.quantity);

        let updated = self
            .catalog_repo
            .apply_stock_delta(&mut *tx, product.id, -payload.quantity)
            .await?;

        let sale = self
            .sales_repo
            .insert_sale(
                &mut *tx,
                product.id,
                payload.quantity,
                unit_price,
                total,
                sold_by,
                payload.notes.as_deref(),
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            sale_id = %sale.id,
            product_id = %product.id,
            quantity = payload.quantity,
            %total,
            "venda registrada"
        );

        if updated.stock_quantity <= updated.low_stock_threshold {
            tracing::warn!(
                product_id = %updated.id,
                stock = updated.stock_quantity,
                threshold = updated.low_stock_threshold,
                "produto abaixo do estoque mínimo"
            );
        }

        self.events.publish(CatalogEvent::StockChanged {
            id: updated.id,
            stock_quantity: updated.stock_quantity,
        });

        Ok(sale)
    }
}
