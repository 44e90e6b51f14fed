//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs exactly one statement per
//! call:
//! - `get` misses come back as `DbError::NotFound`
//! - lists are ordered by primary key and paged with LIMIT/OFFSET
//! - creates use `INSERT .. RETURNING` so the stored row comes back
//! - constraint violations surface as `DbError::Sqlx`

pub mod students;
pub mod lessons;
pub mod topics;
pub mod exams;
pub mod statistics;
pub mod achievements;
pub mod chatbot;
pub mod enrollments;

pub use students::StudentRepo;
pub use lessons::LessonRepo;
pub use topics::TopicRepo;
pub use exams::ExamRepo;
pub use statistics::StatisticRepo;
pub use achievements::AchievementRepo;
pub use chatbot::ChatbotRepo;
pub use enrollments::{Association, EnrollmentRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
