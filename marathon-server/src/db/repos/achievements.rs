//! Achievement repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{Achievement, NewAchievement, Pagination};

pub struct AchievementRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AchievementRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewAchievement) -> Result<Achievement, DbError> {
        let achievement: Achievement = sqlx::query_as(
            r#"
            INSERT INTO achievements (name, earned_on)
            VALUES ($1, $2)
            RETURNING id, name, earned_on
            "#,
        )
        .bind(&new.name)
        .bind(new.earned_on)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(achievement_id = achievement.id, "achievement created");
        Ok(achievement)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Achievement>, DbError> {
        let achievements = sqlx::query_as(
            "SELECT id, name, earned_on FROM achievements ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(achievements)
    }

    pub async fn get(&self, id: i32) -> Result<Achievement, DbError> {
        sqlx::query_as("SELECT id, name, earned_on FROM achievements WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("achievement", id))
    }

    /// Achievements a student has earned, via `achievement_students`.
    pub async fn list_for_student(
        &self,
        student_id: i32,
        page: Pagination,
    ) -> Result<Vec<Achievement>, DbError> {
        let achievements = sqlx::query_as(
            r#"
            SELECT a.id, a.name, a.earned_on
            FROM achievements a
            JOIN achievement_students ast ON ast.achievement_id = a.id
            WHERE ast.student_id = $1
            ORDER BY a.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_id)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(achievements)
    }
}
