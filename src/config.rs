// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        CatalogRepository, CmsRepository, QuoteRepository, SalesRepository, StaffRepository,
        UserRepository,
    },
    services::{
        AccessPolicy, AuthService, CatalogEvents, CatalogService, QuotePdfService, SalesService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub access_policy: AccessPolicy,
    pub catalog_events: CatalogEvents,

    // Repositórios
    pub user_repo: UserRepository,
    pub catalog_repo: CatalogRepository,
    pub cms_repo: CmsRepository,
    pub staff_repo: StaffRepository,
    pub sales_repo: SalesRepository,
    pub quote_repo: QuoteRepository,

    // Serviços
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub sales_service: SalesService,
    pub quote_pdf_service: QuotePdfService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET deve ser definido"))?;

        let company_name =
            env::var("COMPANY_NAME").unwrap_or_else(|_| "GeoSolar".to_string());
        let site_url =
            env::var("PUBLIC_SITE_URL").unwrap_or_else(|_| "https://geosolar.example".to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let access_policy = AccessPolicy::default_policy();
        let catalog_events = CatalogEvents::default();

        let user_repo = UserRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let cms_repo = CmsRepository::new(db_pool.clone());
        let staff_repo = StaffRepository::new(db_pool.clone());
        let sales_repo = SalesRepository::new(db_pool.clone());
        let quote_repo = QuoteRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let catalog_service = CatalogService::new(catalog_repo.clone(), catalog_events.clone());
        let sales_service = SalesService::new(
            sales_repo.clone(),
            catalog_repo.clone(),
            catalog_events.clone(),
            db_pool.clone(),
        );
        let quote_pdf_service = QuotePdfService::new(company_name, site_url);

        Ok(Self {
            db_pool,
            access_policy,
            catalog_events,
            user_repo,
            catalog_repo,
            cms_repo,
            staff_repo,
            sales_repo,
            quote_repo,
            auth_service,
            catalog_service,
            sales_service,
            quote_pdf_service,
        })
    }
}
