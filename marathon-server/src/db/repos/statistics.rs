//! Daily statistics repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewStatistic, Pagination, Statistic};

pub struct StatisticRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatisticRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewStatistic) -> Result<Statistic, DbError> {
        let stat: Statistic = sqlx::query_as(
            r#"
            INSERT INTO statistics (
                stat_date, daily_study_duration, completed_modules, average_focus_score,
                solved_questions, correct_ratio, rings_earned, break_count,
                total_break_duration, sleep_quality, notes, student_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, stat_date, daily_study_duration, completed_modules,
                      average_focus_score, solved_questions, correct_ratio, rings_earned,
                      break_count, total_break_duration, sleep_quality, notes, student_id
            "#,
        )
        .bind(new.stat_date)
        .bind(new.daily_study_duration)
        .bind(new.completed_modules)
        .bind(new.average_focus_score)
        .bind(new.solved_questions)
        .bind(new.correct_ratio)
        .bind(new.rings_earned)
        .bind(new.break_count)
        .bind(new.total_break_duration)
        .bind(new.sleep_quality)
        .bind(&new.notes)
        .bind(new.student_id)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(statistic_id = stat.id, student_id = ?stat.student_id, "statistic recorded");
        Ok(stat)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Statistic>, DbError> {
        let stats = sqlx::query_as(
            r#"
            SELECT id, stat_date, daily_study_duration, completed_modules,
                   average_focus_score, solved_questions, correct_ratio, rings_earned,
                   break_count, total_break_duration, sleep_quality, notes, student_id
            FROM statistics
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn get(&self, id: i32) -> Result<Statistic, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, stat_date, daily_study_duration, completed_modules,
                   average_focus_score, solved_questions, correct_ratio, rings_earned,
                   break_count, total_break_duration, sleep_quality, notes, student_id
            FROM statistics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("statistic", id))
    }

    /// A student's statistics, oldest first.
    pub async fn list_for_student(
        &self,
        student_id: i32,
        page: Pagination,
    ) -> Result<Vec<Statistic>, DbError> {
        let stats = sqlx::query_as(
            r#"
            SELECT id, stat_date, daily_study_duration, completed_modules,
                   average_focus_score, solved_questions, correct_ratio, rings_earned,
                   break_count, total_break_duration, sleep_quality, notes, student_id
            FROM statistics
            WHERE student_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_id)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(stats)
    }
}
