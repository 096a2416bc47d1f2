// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        auth::User,
        rbac::{Permission, Role},
    },
    services::AccessPolicy,
};

/// O trait que liga um tipo-marcador à permissão nomeada que ele exige.
pub trait PermissionDef: Send + Sync + 'static {
    fn permission() -> Permission;
}

/// O extractor guardião: consulta a tabela injetada no `AppState`.
/// A checagem é consultiva por natureza: uma rota sem o guardião passa
/// direto, então toda rota de admin precisa declarar o seu.
pub struct RequirePermission<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // O auth_guard já rodou e pendurou o usuário nos extensions
        let user = parts
            .extensions
            .get::<User>()
            .ok_or(AppError::InvalidToken)?;

        let required = T::permission();

        if !app_state.access_policy.has_permission(user.role, required) {
            return Err(AppError::Forbidden(format!(
                "Você precisa da permissão '{}' para realizar esta ação.",
                required.as_str()
            )));
        }

        Ok(RequirePermission(PhantomData))
    }
}

/// Gate por lista de cargos, usado na entrada da área de relatórios; as
/// ações individuais continuam atrás de permissões nomeadas.
pub struct ReportAreaAccess;

const REPORT_ROLES: &[Role] = &[Role::ManagingDirector, Role::Admin, Role::ReportViewer];

impl<S> FromRequestParts<S> for ReportAreaAccess
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<User>()
            .ok_or(AppError::InvalidToken)?;

        if !AccessPolicy::has_required_role(user.role, REPORT_ROLES) {
            return Err(AppError::Forbidden(
                "Seu cargo não tem acesso à área de relatórios.".to_string(),
            ));
        }

        Ok(ReportAreaAccess)
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

pub struct PermManageProducts;
impl PermissionDef for PermManageProducts {
    fn permission() -> Permission {
        Permission::ManageProducts
    }
}

pub struct PermManageContent;
impl PermissionDef for PermManageContent {
    fn permission() -> Permission {
        Permission::ManageContent
    }
}

pub struct PermManageStaff;
impl PermissionDef for PermManageStaff {
    fn permission() -> Permission {
        Permission::ManageStaff
    }
}

pub struct PermManageUsers;
impl PermissionDef for PermManageUsers {
    fn permission() -> Permission {
        Permission::ManageUsers
    }
}

pub struct PermRecordSales;
impl PermissionDef for PermRecordSales {
    fn permission() -> Permission {
        Permission::RecordSales
    }
}

pub struct PermViewReports;
impl PermissionDef for PermViewReports {
    fn permission() -> Permission {
        Permission::ViewReports
    }
}

pub struct PermManageQuotes;
impl PermissionDef for PermManageQuotes {
    fn permission() -> Permission {
        Permission::ManageQuotes
    }
}
