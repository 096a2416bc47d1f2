// src/handlers/staff.rs

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
    middleware::rbac::{PermManageStaff, RequirePermission},
    models::staff::{CreateStaffPayload, StaffMember, UpdateStaffPayload},
};

#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "Staff",
    responses((status = 200, description = "Equipe ativa (página institucional)", body = [StaffMember]))
)]
pub async fn list_staff(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let staff = app_state.staff_repo.list_active().await?;
    Ok(Json(staff))
}

#[utoipa::path(
    get,
    path = "/api/admin/staff",
    tag = "Staff",
    security(("api_jwt" = [])),
    responses((status = 200, description = "Equipe completa, inclusive inativos", body = [StaffMember]))
)]
pub async fn list_all_staff(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageStaff>,
) -> Result<impl IntoResponse, AppError> {
    let staff = app_state.staff_repo.list_all().await?;
    Ok(Json(staff))
}

#[utoipa::path(
    post,
    path = "/api/admin/staff",
    tag = "Staff",
    security(("api_jwt" = [])),
    request_body = CreateStaffPayload,
    responses((status = 201, description = "Membro criado", body = StaffMember))
)]
pub async fn create_staff(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageStaff>,
    Json(payload): Json<CreateStaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let member = app_state.staff_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    put,
    path = "/api/admin/staff/{id}",
    tag = "Staff",
    security(("api_jwt" = [])),
    request_body = UpdateStaffPayload,
    responses(
        (status = 200, description = "Membro atualizado", body = StaffMember),
        (status = 404, description = "Membro não encontrado")
    )
)]
pub async fn update_staff(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageStaff>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    let member = app_state.staff_repo.update(id, &payload).await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/api/admin/staff/{id}",
    tag = "Staff",
    security(("api_jwt" = [])),
    responses((status = 204, description = "Membro removido"))
)]
pub async fn delete_staff(
    State(app_state): State<AppState>,
    _guard: RequirePermission<PermManageStaff>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.staff_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
