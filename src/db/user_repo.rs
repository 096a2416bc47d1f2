// src/db/user_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{auth::User, rbac::Role},
};

// Linha crua da tabela: o cargo chega como TEXT e é convertido no enum
// aqui, num único lugar. Cargo desconhecido no banco é erro de dados.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AppError> {
        let role = Role::from_str(&self.role).ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Cargo desconhecido '{}' no usuário {}",
                self.role,
                self.id
            ))
        })?;

        Ok(User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const USER_COLUMNS: &str =
    "id, email, password_hash, full_name, role, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (email, password_hash, full_name, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .bind(password_hash)
            .bind(full_name)
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::EmailAlreadyExists;
                    }
                }
                e.into()
            })?;

        row.into_user()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY full_name");

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// Atualização parcial de cargo e status.
    pub async fn update_user(
        &self,
        id: Uuid,
        role: Option<Role>,
        is_active: Option<bool>,
    ) -> Result<User, AppError> {
        let sql = format!(
            "UPDATE users
             SET role = COALESCE($2, role),
                 is_active = COALESCE($3, is_active),
                 updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(role.map(|r| r.as_str()))
            .bind(is_active)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário".to_string()))?;

        row.into_user()
    }
}
