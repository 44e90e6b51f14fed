//! Topic repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewTopic, Pagination, Topic};

pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a topic. A `lesson_id` that doesn't exist fails with a
    /// foreign key violation.
    pub async fn create(&self, new: &NewTopic) -> Result<Topic, DbError> {
        let topic: Topic = sqlx::query_as(
            r#"
            INSERT INTO topics (
                name, level, kind, body, correct_answer, hint,
                solution_text, solution_video_url, lesson_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, level, kind, body, correct_answer, hint,
                      solution_text, solution_video_url, lesson_id
            "#,
        )
        .bind(&new.name)
        .bind(new.level)
        .bind(&new.kind)
        .bind(&new.body)
        .bind(&new.correct_answer)
        .bind(&new.hint)
        .bind(&new.solution_text)
        .bind(&new.solution_video_url)
        .bind(new.lesson_id)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(topic_id = topic.id, lesson_id = ?topic.lesson_id, "topic created");
        Ok(topic)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Topic>, DbError> {
        let topics = sqlx::query_as(
            r#"
            SELECT id, name, level, kind, body, correct_answer, hint,
                   solution_text, solution_video_url, lesson_id
            FROM topics
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    pub async fn get(&self, id: i32) -> Result<Topic, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, name, level, kind, body, correct_answer, hint,
                   solution_text, solution_video_url, lesson_id
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("topic", id))
    }

    /// Topics belonging to one lesson.
    pub async fn list_for_lesson(
        &self,
        lesson_id: i32,
        page: Pagination,
    ) -> Result<Vec<Topic>, DbError> {
        let topics = sqlx::query_as(
            r#"
            SELECT id, name, level, kind, body, correct_answer, hint,
                   solution_text, solution_video_url, lesson_id
            FROM topics
            WHERE lesson_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(lesson_id)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }
}
