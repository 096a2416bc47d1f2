// src/handlers/quotes.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    forms::{FieldConfig, FieldValue, FormConfig, FormModel, FormState, Submission},
    models::quotes::{
        QuoteFilter, QuoteRequest, QuoteRequestPayload, UpdateQuoteStatusPayload,
    },
};
use crate::middleware::rbac::{PermManageQuotes, RequirePermission};

// ---
// O formulário público de orçamento, montado sobre o motor de formulários.
// Os nomes dos campos são os mesmos que o frontend usa, então o `details`
// da resposta 400 cai direto embaixo de cada input.
// ---

#[derive(Debug, Clone, Default)]
struct QuoteForm {
    customer_name: String,
    email: String,
    phone: Option<String>,
    product_interest: Option<String>,
    message: String,
    accept_contact: bool,
}

impl QuoteForm {
    fn from_payload(payload: QuoteRequestPayload) -> Self {
        Self {
            customer_name: payload.customer_name,
            email: payload.email,
            phone: payload.phone,
            product_interest: payload.product_interest,
            message: payload.message,
            accept_contact: payload.accept_contact,
        }
    }
}

impl FormModel for QuoteForm {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "customerName" => self.customer_name.clone().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "productInterest" => self.product_interest.clone().into(),
            "message" => self.message.clone().into(),
            "acceptContact" => self.accept_contact.into(),
            _ => FieldValue::Missing,
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("customerName", FieldValue::Text(s)) => self.customer_name = s,
            ("email", FieldValue::Text(s)) => self.email = s,
            ("phone", FieldValue::Text(s)) => self.phone = Some(s),
            ("productInterest", FieldValue::Text(s)) => self.product_interest = Some(s),
            ("message", FieldValue::Text(s)) => self.message = s,
            ("acceptContact", FieldValue::Bool(b)) => self.accept_contact = b,
            _ => {}
        }
    }
}

fn quote_request_form() -> FormConfig<QuoteForm> {
    FormConfig::new(vec![
        FieldConfig::new("customerName", "Nome")
            .required()
            .max_length(120),
        FieldConfig::new("email", "E-mail").required().email(),
        // Telefone é opcional; se vier, precisa parecer um telefone
        FieldConfig::new("phone", "Telefone").custom(|value, _all| match value {
            FieldValue::Missing => None,
            FieldValue::Text(s) if s.trim().is_empty() => None,
            FieldValue::Text(s)
                if s.len() >= 7
                    && s.len() <= 20
                    && s.chars().all(|c| c.is_ascii_digit() || " +()-".contains(c)) =>
            {
                None
            }
            _ => Some("Telefone inválido.".to_string()),
        }),
        FieldConfig::new("productInterest", "Produto de interesse").max_length(120),
        FieldConfig::new("message", "Mensagem")
            .required()
            .min_length(10)
            .max_length(2000),
        // "Aceito ser contatado": bool false conta como não preenchido
        FieldConfig::new("acceptContact", "Aceite de contato").required(),
    ])
}

// ---
// Rota pública
// ---

#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = "Quotes",
    request_body = QuoteRequestPayload,
    responses(
        (status = 201, description = "Solicitação registrada", body = QuoteRequest),
        (status = 400, description = "Erros de validação por campo")
    )
)]
pub async fn create_quote(
    State(app_state): State<AppState>,
    Json(payload): Json<QuoteRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = FormState::new(QuoteForm::from_payload(payload), quote_request_form());

    let repo = app_state.quote_repo.clone();
    let outcome = form
        .handle_submit(move |values| async move {
            repo.create(
                values.customer_name.trim(),
                values.email.trim(),
                values.phone.as_deref(),
                values.product_interest.as_deref(),
                values.message.trim(),
            )
            .await
        })
        .await?;

    match outcome {
        Submission::Rejected => Err(AppError::FormRejected(form.errors())),
        Submission::Completed(quote) => {
            tracing::info!(quote_id = %quote.id, "nova solicitação de orçamento");
            Ok((StatusCode::CREATED, Json(quote)))
        }
    }
}

// ---
// Rotas de admin (exigem MANAGE_QUOTES)
// ---

#[utoipa::path(
    get,
    path = "/api/admin/quotes",
    tag = "Quotes",
    security(("api_jwt" = [])),
    params(QuoteFilter),
    responses((status = 200, description = "Solicitações, mais recentes primeiro", body = [QuoteRequest]))
)]
pub async fn list_quotes(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageQuotes>,
    Query(filter): Query<QuoteFilter>,
) -> Result<impl IntoResponse, AppError> {
    let quotes = app_state.quote_repo.list(&filter).await?;
    Ok(Json(quotes))
}

#[utoipa::path(
    put,
    path = "/api/admin/quotes/{id}/status",
    tag = "Quotes",
    security(("api_jwt" = [])),
    request_body = UpdateQuoteStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = QuoteRequest),
        (status = 404, description = "Orçamento não encontrado")
    )
)]
pub async fn update_quote_status(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageQuotes>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuoteStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let quote = app_state.quote_repo.update_status(id, payload.status).await?;
    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/admin/quotes/{id}/pdf",
    tag = "Quotes",
    security(("api_jwt" = [])),
    responses(
        (status = 200, description = "PDF do orçamento", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Orçamento não encontrado")
    )
)]
pub async fn download_quote_pdf(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageQuotes>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let quote = app_state
        .quote_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Orçamento".to_string()))?;

    // Se o interesse do cliente bate com um slug do catálogo, o PDF inclui
    // o produto de referência com preço
    let product = match &quote.product_interest {
        Some(interest) => app_state.catalog_repo.find_published_by_slug(interest).await?,
        None => None,
    };

    let pdf = app_state
        .quote_pdf_service
        .generate_quote_pdf(&quote, product.as_ref())?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"orcamento-{}.pdf\"", quote.id),
        ),
    ];

    Ok((headers, pdf))
}
