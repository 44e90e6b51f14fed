//! Exam simulation repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{ExamSimulation, NewExamSimulation, Pagination};

pub struct ExamRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExamRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewExamSimulation) -> Result<ExamSimulation, DbError> {
        let exam: ExamSimulation = sqlx::query_as(
            r#"
            INSERT INTO exam_simulations (
                name, started_at, ended_at, score, correct_count,
                incorrect_count, exam_date, scenario, analysis
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, started_at, ended_at, score, correct_count,
                      incorrect_count, exam_date, scenario, analysis
            "#,
        )
        .bind(&new.name)
        .bind(new.started_at)
        .bind(new.ended_at)
        .bind(new.score)
        .bind(new.correct_count)
        .bind(new.incorrect_count)
        .bind(new.exam_date)
        .bind(&new.scenario)
        .bind(&new.analysis)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(exam_id = exam.id, "exam simulation created");
        Ok(exam)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<ExamSimulation>, DbError> {
        let exams = sqlx::query_as(
            r#"
            SELECT id, name, started_at, ended_at, score, correct_count,
                   incorrect_count, exam_date, scenario, analysis
            FROM exam_simulations
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(exams)
    }

    pub async fn get(&self, id: i32) -> Result<ExamSimulation, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, started_at, ended_at, score, correct_count,
                   incorrect_count, exam_date, scenario, analysis
            FROM exam_simulations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("exam simulation", id))
    }

    /// Exams a student took, via `exam_students`.
    pub async fn list_for_student(
        &self,
        student_id: i32,
        page: Pagination,
    ) -> Result<Vec<ExamSimulation>, DbError> {
        let exams = sqlx::query_as(
            r#"
            SELECT e.id, e.name, e.started_at, e.ended_at, e.score, e.correct_count,
                   e.incorrect_count, e.exam_date, e.scenario, e.analysis
            FROM exam_simulations e
            JOIN exam_students es ON es.exam_id = e.id
            WHERE es.student_id = $1
            ORDER BY e.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_id)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(exams)
    }
}
