// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Users / RBAC ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::list_permissions,

        // --- Catalog ---
        handlers::catalog::list_products,
        handlers::catalog::get_product_by_slug,
        handlers::catalog::list_all_products,
        handlers::catalog::create_product,
        handlers::catalog::update_product,
        handlers::catalog::delete_product,
        handlers::catalog::adjust_stock,

        // --- CMS ---
        handlers::cms::list_carousel,
        handlers::cms::list_all_carousel,
        handlers::cms::create_carousel_item,
        handlers::cms::update_carousel_item,
        handlers::cms::delete_carousel_item,
        handlers::cms::get_page,
        handlers::cms::list_all_sections,
        handlers::cms::upsert_section,
        handlers::cms::delete_section,
        handlers::cms::list_posts,
        handlers::cms::get_post_by_slug,
        handlers::cms::list_all_posts,
        handlers::cms::create_post,
        handlers::cms::update_post,
        handlers::cms::delete_post,

        // --- Staff ---
        handlers::staff::list_staff,
        handlers::staff::list_all_staff,
        handlers::staff::create_staff,
        handlers::staff::update_staff,
        handlers::staff::delete_staff,

        // --- Sales ---
        handlers::sales::record_sale,
        handlers::sales::list_sales,

        // --- Reports ---
        handlers::reports::get_summary,
        handlers::reports::get_sales_chart,
        handlers::reports::get_top_products,

        // --- Quotes ---
        handlers::quotes::create_quote,
        handlers::quotes::list_quotes,
        handlers::quotes::update_quote_status,
        handlers::quotes::download_quote_pdf,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,

            // --- RBAC ---
            models::rbac::Role,
            models::rbac::Permission,
            models::rbac::PermissionGrant,

            // --- Catalog ---
            models::catalog::Product,
            models::catalog::CreateProductPayload,
            models::catalog::UpdateProductPayload,
            models::catalog::AdjustStockPayload,

            // --- CMS ---
            models::cms::CarouselItem,
            models::cms::CreateCarouselItemPayload,
            models::cms::UpdateCarouselItemPayload,
            models::cms::PageSection,
            models::cms::UpsertPageSectionPayload,
            models::cms::BlogPost,
            models::cms::CreateBlogPostPayload,
            models::cms::UpdateBlogPostPayload,

            // --- Staff ---
            models::staff::StaffMember,
            models::staff::CreateStaffPayload,
            models::staff::UpdateStaffPayload,

            // --- Sales / Reports ---
            models::sales::Sale,
            models::sales::SaleWithProduct,
            models::sales::RecordSalePayload,
            models::sales::ReportSummary,
            models::sales::SalesChartEntry,
            models::sales::TopProductEntry,

            // --- Quotes ---
            models::quotes::QuoteStatus,
            models::quotes::QuoteRequest,
            models::quotes::QuoteRequestPayload,
            models::quotes::UpdateQuoteStatusPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação do painel administrativo"),
        (name = "Users", description = "Gestão de Usuários e Tabela de Acesso"),
        (name = "Catalog", description = "Catálogo de Produtos e Estoque"),
        (name = "CMS", description = "Conteúdo do Site (Carrossel, Páginas e Blog)"),
        (name = "Staff", description = "Equipe da Página Institucional"),
        (name = "Sales", description = "Registro de Vendas"),
        (name = "Reports", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Quotes", description = "Solicitações de Orçamento")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
