//! Student associations - lessons, exams and achievements
//!
//! Rows in the three join tables carry nothing but the two foreign keys.
//! Linking is idempotent.

use sqlx::PgPool;

use super::DbError;

/// Which join table a link goes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Lesson,
    Exam,
    Achievement,
}

impl Association {
    fn insert_sql(self) -> &'static str {
        match self {
            Self::Lesson => {
                "INSERT INTO lesson_students (lesson_id, student_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING"
            }
            Self::Exam => {
                "INSERT INTO exam_students (exam_id, student_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING"
            }
            Self::Achievement => {
                "INSERT INTO achievement_students (achievement_id, student_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING"
            }
        }
    }

    /// Resource name used in not-found errors
    pub fn resource(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Exam => "exam simulation",
            Self::Achievement => "achievement",
        }
    }
}

pub struct EnrollmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Link a student to a lesson, exam or achievement.
    ///
    /// A dangling id on either side is reported as `NotFound` for that
    /// side, read from the violated constraint's name.
    pub async fn link(
        &self,
        association: Association,
        student_id: i32,
        other_id: i32,
    ) -> Result<(), DbError> {
        let result = sqlx::query(association.insert_sql())
            .bind(other_id)
            .bind(student_id)
            .execute(self.pool)
            .await;

        match result {
            Ok(done) => {
                tracing::debug!(
                    ?association,
                    student_id,
                    other_id,
                    inserted = done.rows_affected(),
                    "association linked"
                );
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                let on_student = e.constraint().is_some_and(|c| c.contains("student_id"));
                if on_student {
                    Err(DbError::not_found("student", student_id))
                } else {
                    Err(DbError::not_found(association.resource(), other_id))
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}
