// src/services/access_policy.rs

use std::collections::{HashMap, HashSet};

use crate::models::rbac::{Permission, Role};

/// Tabela Permissão -> conjunto de Cargos, montada uma vez na subida do
/// processo e injetada no `AppState` (nada de singleton de módulo).
///
/// As consultas são puras e consultivas: negar retorna `false`, nunca
/// panic. Quem chama (extractors, handlers) é responsável por aplicar a
/// checagem; esquecer a checagem em uma rota é um bypass silencioso.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    grants: HashMap<Permission, HashSet<Role>>,
}

impl AccessPolicy {
    pub fn new(grants: HashMap<Permission, HashSet<Role>>) -> Self {
        Self { grants }
    }

    /// A tabela padrão do back office.
    pub fn default_policy() -> Self {
        use Permission::*;
        use Role::*;

        let mut grants: HashMap<Permission, HashSet<Role>> = HashMap::new();

        let mut grant = |perm: Permission, roles: &[Role]| {
            grants.insert(perm, roles.iter().copied().collect());
        };

        grant(ManageProducts, &[ManagingDirector, Admin, InventoryManager]);
        grant(ManageContent, &[ManagingDirector, Admin]);
        grant(ManageStaff, &[ManagingDirector, Admin]);
        grant(ManageUsers, &[ManagingDirector, Admin]);
        grant(RecordSales, &[ManagingDirector, Admin, Cashier]);
        grant(ViewReports, &[ManagingDirector, Admin, ReportViewer]);
        grant(ManageQuotes, &[ManagingDirector, Admin, Cashier]);

        Self::new(grants)
    }

    /// Pergunta "esse cargo pode exercer essa ação?". Permissão ausente da
    /// tabela nega (falha fechado).
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&permission)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// Gate por lista de cargos ad hoc, usado em rotas que não têm uma
    /// permissão nomeada (a tabela nomeada continua sendo a autoridade
    /// para ações individuais).
    pub fn has_required_role(role: Role, required: &[Role]) -> bool {
        required.contains(&role)
    }

    /// Visão da tabela inteira, para o frontend montar a tela de cargos.
    pub fn grants(&self) -> impl Iterator<Item = (Permission, Vec<Role>)> + '_ {
        self.grants.iter().map(|(perm, roles)| {
            let mut roles: Vec<Role> = roles.iter().copied().collect();
            roles.sort_by_key(|r| r.as_str());
            (*perm, roles)
        })
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::default_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashier_cannot_manage_users() {
        let policy = AccessPolicy::default_policy();
        assert!(!policy.has_permission(Role::Cashier, Permission::ManageUsers));
    }

    #[test]
    fn membership_is_exact() {
        let policy = AccessPolicy::default_policy();

        assert!(policy.has_permission(Role::Admin, Permission::ManageUsers));
        assert!(policy.has_permission(Role::ManagingDirector, Permission::ManageUsers));
        assert!(policy.has_permission(Role::InventoryManager, Permission::ManageProducts));
        assert!(policy.has_permission(Role::ReportViewer, Permission::ViewReports));

        assert!(!policy.has_permission(Role::ReportViewer, Permission::ManageProducts));
        assert!(!policy.has_permission(Role::InventoryManager, Permission::RecordSales));
        assert!(!policy.has_permission(Role::Cashier, Permission::ManageContent));
    }

    #[test]
    fn missing_permission_fails_closed() {
        // Tabela vazia: tudo negado, para qualquer cargo
        let policy = AccessPolicy::new(HashMap::new());
        assert!(!policy.has_permission(Role::Admin, Permission::ManageProducts));
        assert!(!policy.has_permission(Role::ManagingDirector, Permission::ViewReports));
    }

    #[test]
    fn required_role_is_plain_membership() {
        let required = [Role::ManagingDirector, Role::Admin, Role::ReportViewer];

        assert!(AccessPolicy::has_required_role(Role::Admin, &required));
        assert!(AccessPolicy::has_required_role(Role::ReportViewer, &required));
        assert!(!AccessPolicy::has_required_role(Role::Cashier, &required));
        assert!(!AccessPolicy::has_required_role(Role::Cashier, &[]));
    }

    #[test]
    fn unknown_role_string_never_parses() {
        // Cargo fora do conjunto nunca chega ao has_permission: o parse falha
        assert_eq!(Role::from_str("SUPER_ROOT"), None);
        assert_eq!(Role::from_str("cashier"), None); // case sensitive
        assert_eq!(Role::from_str("CASHIER"), Some(Role::Cashier));
    }
}
