// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PermManageUsers, RequirePermission},
    models::{
        auth::{CreateUserPayload, UpdateUserPayload, User},
        rbac::PermissionGrant,
    },
};

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Users",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Todos os usuários", body = [User]))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageUsers>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "Users",
    security(("api_jwt" = [])),
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 409, description = "E-mail já em uso")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageUsers>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .auth_service
        .create_user(&payload.email, &payload.password, &payload.full_name, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = "Users",
    security(("api_jwt" = [])),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageUsers>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_repo
        .update_user(id, payload.role, payload.is_active)
        .await?;

    Ok(Json(user))
}

// A tabela de acesso inteira, para o frontend montar a tela de cargos sem
// duplicar a matriz no cliente.
#[utoipa::path(
    get,
    path = "/api/admin/permissions",
    tag = "Users",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Tabela permissão -> cargos", body = [PermissionGrant]))
)]
pub async fn list_permissions(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageUsers>,
) -> Result<impl IntoResponse, AppError> {
    let mut grants: Vec<PermissionGrant> = app_state
        .access_policy
        .grants()
        .map(|(permission, roles)| PermissionGrant { permission, roles })
        .collect();

    grants.sort_by_key(|g| g.permission.as_str());

    Ok(Json(grants))
}
