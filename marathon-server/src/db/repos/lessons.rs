//! Lesson repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{Lesson, NewLesson, Pagination};

/// Lesson repository
pub struct LessonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LessonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewLesson) -> Result<Lesson, DbError> {
        let lesson: Lesson = sqlx::query_as(
            r#"
            INSERT INTO lessons (
                name, started_at, ended_at, completed, rings_earned,
                focus_score, energy_level, lesson_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, started_at, ended_at, completed, rings_earned,
                      focus_score, energy_level, lesson_date
            "#,
        )
        .bind(&new.name)
        .bind(new.started_at)
        .bind(new.ended_at)
        .bind(new.completed)
        .bind(new.rings_earned)
        .bind(new.focus_score)
        .bind(new.energy_level)
        .bind(new.lesson_date)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(lesson_id = lesson.id, "lesson created");
        Ok(lesson)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Lesson>, DbError> {
        let lessons = sqlx::query_as(
            r#"
            SELECT id, name, started_at, ended_at, completed, rings_earned,
                   focus_score, energy_level, lesson_date
            FROM lessons
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(lessons)
    }

    pub async fn get(&self, id: i32) -> Result<Lesson, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, started_at, ended_at, completed, rings_earned,
                   focus_score, energy_level, lesson_date
            FROM lessons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("lesson", id))
    }

    /// Lessons a student is enrolled in, via `lesson_students`.
    pub async fn list_for_student(
        &self,
        student_id: i32,
        page: Pagination,
    ) -> Result<Vec<Lesson>, DbError> {
        let lessons = sqlx::query_as(
            r#"
            SELECT l.id, l.name, l.started_at, l.ended_at, l.completed, l.rings_earned,
                   l.focus_score, l.energy_level, l.lesson_date
            FROM lessons l
            JOIN lesson_students ls ON ls.lesson_id = l.id
            WHERE ls.student_id = $1
            ORDER BY l.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_id)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(lessons)
    }
}
