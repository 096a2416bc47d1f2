//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod forms;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;
use crate::services::catalog_events::spawn_log_subscriber;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Espelha as mudanças de catálogo no log do servidor
    spawn_log_subscriber(&app_state.catalog_events);

    // Rotas públicas (vitrine e formulário de orçamento)
    let public_routes = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/products", get(handlers::catalog::list_products))
        .route("/api/products/{slug}", get(handlers::catalog::get_product_by_slug))
        .route("/api/carousel", get(handlers::cms::list_carousel))
        .route("/api/pages/{slug}", get(handlers::cms::get_page))
        .route("/api/blog", get(handlers::cms::list_posts))
        .route("/api/blog/{slug}", get(handlers::cms::get_post_by_slug))
        .route("/api/staff", get(handlers::staff::list_staff))
        .route("/api/quotes", post(handlers::quotes::create_quote));

    // Rotas do painel, todas atrás do auth_guard; a checagem de permissão
    // fica nos extractors de cada handler
    let admin_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/users/{id}", put(handlers::users::update_user))
        .route("/permissions", get(handlers::users::list_permissions))
        .route(
            "/products",
            get(handlers::catalog::list_all_products).post(handlers::catalog::create_product),
        )
        .route(
            "/products/{id}",
            put(handlers::catalog::update_product).delete(handlers::catalog::delete_product),
        )
        .route("/products/{id}/stock", post(handlers::catalog::adjust_stock))
        .route(
            "/carousel",
            get(handlers::cms::list_all_carousel).post(handlers::cms::create_carousel_item),
        )
        .route(
            "/carousel/{id}",
            put(handlers::cms::update_carousel_item).delete(handlers::cms::delete_carousel_item),
        )
        .route(
            "/sections",
            get(handlers::cms::list_all_sections).put(handlers::cms::upsert_section),
        )
        .route("/sections/{id}", axum::routing::delete(handlers::cms::delete_section))
        .route(
            "/blog",
            get(handlers::cms::list_all_posts).post(handlers::cms::create_post),
        )
        .route(
            "/blog/{id}",
            put(handlers::cms::update_post).delete(handlers::cms::delete_post),
        )
        .route(
            "/staff",
            get(handlers::staff::list_all_staff).post(handlers::staff::create_staff),
        )
        .route(
            "/staff/{id}",
            put(handlers::staff::update_staff).delete(handlers::staff::delete_staff),
        )
        .route(
            "/sales",
            get(handlers::sales::list_sales).post(handlers::sales::record_sale),
        )
        .route("/reports/summary", get(handlers::reports::get_summary))
        .route("/reports/sales-chart", get(handlers::reports::get_sales_chart))
        .route("/reports/top-products", get(handlers::reports::get_top_products))
        .route("/quotes", get(handlers::quotes::list_quotes))
        .route("/quotes/{id}/status", put(handlers::quotes::update_quote_status))
        .route("/quotes/{id}/pdf", get(handlers::quotes::download_quote_pdf))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .merge(public_routes)
        .nest("/api/admin", admin_routes)
        .with_state(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
