pub mod access_policy;
pub mod auth;
pub mod catalog_events;
pub mod catalog_service;
pub mod quote_pdf;
pub mod sales_service;

pub use access_policy::AccessPolicy;
pub use auth::AuthService;
pub use catalog_events::{CatalogEvent, CatalogEvents};
pub use catalog_service::CatalogService;
pub use quote_pdf::QuotePdfService;
pub use sales_service::SalesService;
