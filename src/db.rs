pub mod catalog_repo;
pub mod cms_repo;
pub mod quote_repo;
pub mod sales_repo;
pub mod staff_repo;
pub mod user_repo;

pub use catalog_repo::CatalogRepository;
pub use cms_repo::CmsRepository;
pub use quote_repo::QuoteRepository;
pub use sales_repo::SalesRepository;
pub use staff_repo::StaffRepository;
pub use user_repo::UserRepository;
