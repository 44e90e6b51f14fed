//! Chatbot interaction repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{ChatbotInteraction, NewChatbotInteraction, Pagination};

pub struct ChatbotRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ChatbotRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewChatbotInteraction) -> Result<ChatbotInteraction, DbError> {
        let interaction: ChatbotInteraction = sqlx::query_as(
            r#"
            INSERT INTO chatbot_interactions (question, answer, asked_at, emotion, student_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, question, answer, asked_at, emotion, student_id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.asked_at)
        .bind(&new.emotion)
        .bind(new.student_id)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(chatbot_id = interaction.id, "chatbot interaction stored");
        Ok(interaction)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<ChatbotInteraction>, DbError> {
        let interactions = sqlx::query_as(
            r#"
            SELECT id, question, answer, asked_at, emotion, student_id
            FROM chatbot_interactions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(interactions)
    }

    pub async fn get(&self, id: i32) -> Result<ChatbotInteraction, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, question, answer, asked_at, emotion, student_id
            FROM chatbot_interactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("chatbot interaction", id))
    }

    /// A student's conversation history, oldest first.
    pub async fn list_for_student(
        &self,
        student_id: i32,
        page: Pagination,
    ) -> Result<Vec<ChatbotInteraction>, DbError> {
        let interactions = sqlx::query_as(
            r#"
            SELECT id, question, answer, asked_at, emotion, student_id
            FROM chatbot_interactions
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

        Ok(interactions)
    }
}
