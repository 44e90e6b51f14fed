//! Student repository
//!
//! The only entity with an update path: `update` assembles a single
//! `UPDATE .. RETURNING` from the fields present in a [`StudentPatch`].

use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::DbError;
use crate::models::{NewStudent, Pagination, Patch, Student, StudentPatch};

/// Column list shared by every student query
macro_rules! student_columns {
    () => {
        "id, username, email, password_hash, first_name, last_name, birth_date, \
         school_level, adhd_level, registered_on, focus_duration, solve_speed, \
         success_rate, attention_level, current_level, learning_style, updated_at"
    };
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a student with an already-resolved password hash.
    ///
    /// `updated_at` falls back to the insert time. Duplicate username or
    /// email fails with a unique violation.
    pub async fn create(&self, new: &NewStudent, password_hash: &str) -> Result<Student, DbError> {
        let student: Student = sqlx::query_as(concat!(
            r#"
            INSERT INTO students (
                username, email, password_hash, first_name, last_name, birth_date,
                school_level, adhd_level, registered_on, focus_duration, solve_speed,
                success_rate, attention_level, current_level, learning_style, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                    COALESCE($16, LOCALTIMESTAMP))
            RETURNING "#,
            student_columns!()
        ))
        .bind(&new.username)
        .bind(&new.email)
        .bind(password_hash)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.birth_date)
        .bind(&new.school_level)
        .bind(&new.adhd_level)
        .bind(&new.registered_on)
        .bind(new.focus_duration)
        .bind(new.solve_speed)
        .bind(new.success_rate)
        .bind(new.attention_level)
        .bind(new.current_level)
        .bind(&new.learning_style)
        .bind(new.updated_at)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(student_id = student.id, "student created");
        Ok(student)
    }

    /// List students in id order.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as(concat!(
            "SELECT ",
            student_columns!(),
            " FROM students ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i32) -> Result<Student, DbError> {
        sqlx::query_as(concat!(
            "SELECT ",
            student_columns!(),
            " FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("student", id))
    }

    /// Look a student up by email (login).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbError> {
        let student = sqlx::query_as(concat!(
            "SELECT ",
            student_columns!(),
            " FROM students WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(student)
    }

    /// Apply a partial update.
    ///
    /// Absent fields are left alone, explicit nulls clear the column. A
    /// patch with nothing in it reads the row instead of writing. Missing
    /// ids come back as `NotFound` without touching the table.
    pub async fn update(&self, id: i32, patch: &StudentPatch) -> Result<Student, DbError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE students SET ");

        let changed = {
            let mut set = builder.separated(", ");
            [
                push_patch(&mut set, "username", &patch.username),
                push_patch(&mut set, "email", &patch.email),
                push_patch(&mut set, "password_hash", &patch.password_hash),
                push_patch(&mut set, "first_name", &patch.first_name),
                push_patch(&mut set, "last_name", &patch.last_name),
                push_patch(&mut set, "birth_date", &patch.birth_date),
                push_patch(&mut set, "school_level", &patch.school_level),
                push_patch(&mut set, "adhd_level", &patch.adhd_level),
                push_patch(&mut set, "registered_on", &patch.registered_on),
                push_patch(&mut set, "focus_duration", &patch.focus_duration),
                push_patch(&mut set, "solve_speed", &patch.solve_speed),
                push_patch(&mut set, "success_rate", &patch.success_rate),
                push_patch(&mut set, "attention_level", &patch.attention_level),
                push_patch(&mut set, "current_level", &patch.current_level),
                push_patch(&mut set, "learning_style", &patch.learning_style),
                push_patch(&mut set, "updated_at", &patch.updated_at),
            ]
            .into_iter()
            .filter(|pushed| *pushed)
            .count()
        };

        if changed == 0 {
            return self.get(id).await;
        }

        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(concat!(" RETURNING ", student_columns!()));

        let student = builder
            .build_query_as::<Student>()
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("student", id))?;

        tracing::debug!(student_id = id, columns = changed, "student updated");
        Ok(student)
    }
}

/// Push `column = <value>` (or `= NULL`) for a present field.
///
/// Returns whether anything was written.
fn push_patch<'args, T>(
    set: &mut Separated<'_, 'args, Postgres, &'static str>,
    column: &'static str,
    patch: &Patch<T>,
) -> bool
where
    T: Clone + Send + 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres>,
{
    match patch {
        Patch::Missing => false,
        Patch::Null => {
            set.push(format!("{column} = NULL"));
            true
        }
        Patch::Value(value) => {
            set.push(format!("{column} = "));
            set.push_bind_unseparated(value.clone());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_set_clause_for_present_fields() {
        let patch = StudentPatch {
            first_name: Patch::Value("Alicia".into()),
            school_level: Patch::Null,
            current_level: Patch::Value(4),
            ..Default::default()
        };

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE students SET ");
        let count = {
            let mut set = builder.separated(", ");
            [
                push_patch(&mut set, "first_name", &patch.first_name),
                push_patch(&mut set, "email", &patch.email),
                push_patch(&mut set, "school_level", &patch.school_level),
                push_patch(&mut set, "current_level", &patch.current_level),
            ]
            .into_iter()
            .filter(|p| *p)
            .count()
        };
        builder.push(" WHERE id = ").push_bind(1);

        assert_eq!(count, 3);
        assert_eq!(
            builder.sql(),
            "UPDATE students SET first_name = $1, school_level = NULL, current_level = $2 WHERE id = $3"
        );
    }
}
