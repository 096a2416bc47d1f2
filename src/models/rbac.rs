// src/models/rbac.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cargo de um usuário do back office.
///
/// Os valores serializados (SCREAMING_SNAKE_CASE) são exatamente as strings
/// que viajam na claim `role` do JWT. Um token com um cargo fora desse
/// conjunto falha na desserialização e é tratado como token inválido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    ManagingDirector,
    Admin,
    InventoryManager,
    Cashier,
    ReportViewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ManagingDirector => "MANAGING_DIRECTOR",
            Role::Admin => "ADMIN",
            Role::InventoryManager => "INVENTORY_MANAGER",
            Role::Cashier => "CASHIER",
            Role::ReportViewer => "REPORT_VIEWER",
        }
    }

    /// Converte a string persistida no banco (ou vinda da claim) no enum.
    /// Retorna `None` para valores desconhecidos: quem chama decide o que
    /// fazer, mas o acesso sempre falha fechado.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MANAGING_DIRECTOR" => Some(Role::ManagingDirector),
            "ADMIN" => Some(Role::Admin),
            "INVENTORY_MANAGER" => Some(Role::InventoryManager),
            "CASHIER" => Some(Role::Cashier),
            "REPORT_VIEWER" => Some(Role::ReportViewer),
            _ => None,
        }
    }
}

/// Capacidade nomeada, verificada de forma independente do cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ManageProducts,
    ManageContent,
    ManageStaff,
    ManageUsers,
    RecordSales,
    ViewReports,
    ManageQuotes,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageProducts => "MANAGE_PRODUCTS",
            Permission::ManageContent => "MANAGE_CONTENT",
            Permission::ManageStaff => "MANAGE_STAFF",
            Permission::ManageUsers => "MANAGE_USERS",
            Permission::RecordSales => "RECORD_SALES",
            Permission::ViewReports => "VIEW_REPORTS",
            Permission::ManageQuotes => "MANAGE_QUOTES",
        }
    }
}

// Resposta de /api/admin/permissions: o frontend monta a tela de usuários
// com isso, sem duplicar a tabela de acesso no cliente.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrant {
    pub permission: Permission,
    pub roles: Vec<Role>,
}
