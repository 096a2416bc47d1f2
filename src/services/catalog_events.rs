// src/services/catalog_events.rs

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Mudança no catálogo, publicada após cada mutação confirmada no banco.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogEvent {
    ProductCreated { id: Uuid, slug: String },
    ProductUpdated { id: Uuid, slug: String },
    ProductDeleted { id: Uuid },
    StockChanged { id: Uuid, stock_quantity: i32 },
}

/// Canal de publicação/assinatura das mudanças de catálogo.
///
/// Semântica de entrega: melhor esforço, buffer limitado, sem replay.
/// Assinante lento que estourar
/// o buffer perde os eventos mais antigos (`RecvError::Lagged`) e continua
/// do ponto atual; quem precisa do estado exato relê o banco. Última
/// escrita vence.
#[derive(Debug, Clone)]
pub struct CatalogEvents {
    tx: broadcast::Sender<CatalogEvent>,
}

impl CatalogEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publica sem bloquear. Sem assinantes não é erro: o canal é
    /// infraestrutura de notificação, não o caminho de persistência.
    pub fn publish(&self, event: CatalogEvent) {
        tracing::debug!(?event, "evento de catálogo publicado");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CatalogEvents {
    fn default() -> Self {
        // 64 eventos cobrem um surto de edição em massa no admin
        Self::new(64)
    }
}

/// Assinante de log, instalado na subida do servidor.
pub fn spawn_log_subscriber(events: &CatalogEvents) {
    let mut rx = events.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => tracing::info!(?event, "catálogo alterado"),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "assinante de log perdeu eventos de catálogo");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_events() {
        let events = CatalogEvents::new(8);
        let mut rx = events.subscribe();

        let id = Uuid::new_v4();
        events.publish(CatalogEvent::StockChanged { id, stock_quantity: 3 });

        match rx.recv().await.unwrap() {
            CatalogEvent::StockChanged { id: got, stock_quantity } => {
                assert_eq!(got, id);
                assert_eq!(stock_quantity, 3);
            }
            other => panic!("evento inesperado: {other:?}"),
        }
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_not_an_error() {
        let events = CatalogEvents::new(8);
        events.publish(CatalogEvent::ProductDeleted { id: Uuid::new_v4() });
        assert_eq!(events.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn slow_subscriber_lags_instead_of_blocking_publisher() {
        let events = CatalogEvents::new(2);
        let mut rx = events.subscribe();

        for i in 0..5 {
            events.publish(CatalogEvent::StockChanged {
                id: Uuid::new_v4(),
                stock_quantity: i,
            });
        }

        // O buffer tem 2 posições: o assinante perdeu os 3 primeiros
        match rx.recv().await {
            Err(broadcast::error::RecvError::Lagged(missed)) => assert_eq!(missed, 3),
            other => panic!("esperava Lagged, veio {other:?}"),
        }
    }
}
