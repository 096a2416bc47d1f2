// src/db/staff_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::staff::{CreateStaffPayload, StaffMember, UpdateStaffPayload},
};

const STAFF_COLUMNS: &str =
    "id, full_name, job_title, bio, photo_url, email, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<StaffMember>, AppError> {
        let sql = format!(
            "SELECT {STAFF_COLUMNS} FROM staff_members
             WHERE is_active = TRUE
             ORDER BY full_name"
        );

        Ok(sqlx::query_as::<_, StaffMember>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<StaffMember>, AppError> {
        let sql = format!("SELECT {STAFF_COLUMNS} FROM staff_members ORDER BY full_name");

        Ok(sqlx::query_as::<_, StaffMember>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn create(&self, payload: &CreateStaffPayload) -> Result<StaffMember, AppError> {
        let sql = format!(
            "INSERT INTO staff_members (full_name, job_title, bio, photo_url, email, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {STAFF_COLUMNS}"
        );

        Ok(sqlx::query_as::<_, StaffMember>(&sql)
            .bind(&payload.full_name)
            .bind(&payload.job_title)
            .bind(&payload.bio)
            .bind(&payload.photo_url)
            .bind(&payload.email)
            .bind(payload.is_active)
            .fetch_one(&self.pool)
            .await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateStaffPayload,
    ) -> Result<StaffMember, AppError> {
        let sql = format!(
            "UPDATE staff_members
             SET full_name = COALESCE($2, full_name),
                 job_title = COALESCE($3, job_title),
                 bio = COALESCE($4, bio),
                 photo_url = COALESCE($5, photo_url),
                 email = COALESCE($6, email),
                 is_active = COALESCE($7, is_active),
                 updated_at = now()
             WHERE id = $1
             RETURNING {STAFF_COLUMNS}"
        );

        sqlx::query_as::<_, StaffMember>(&sql)
            .bind(id)
            .bind(&payload.full_name)
            .bind(&payload.job_title)
            .bind(&payload.bio)
            .bind(&payload.photo_url)
            .bind(&payload.email)
            .bind(payload.is_active)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Membro da equipe".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM staff_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Membro da equipe".to_string()));
        }
        Ok(())
    }
}
