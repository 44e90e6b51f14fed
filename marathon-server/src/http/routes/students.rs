//! Student endpoints, plus the per-student views and association links

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::auth;
use crate::db::repos::{
    AchievementRepo, Association, ChatbotRepo, EnrollmentRepo, ExamRepo, LessonRepo,
    StatisticRepo, StudentRepo,
};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{
    Achievement, ChatbotInteraction, ExamSimulation, Lesson, NewStudent, Pagination,
    PaginationParams, Patch, Statistic, Student, StudentPatch, ValidationError,
};

/// POST /ogrenciler/ - register a student
async fn create_student(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewStudent>,
) -> Result<Json<Student>, ApiError> {
    new.validate()?;

    let hash = auth::stored_hash(new.password.as_deref(), new.password_hash.as_deref())?
        .ok_or(ValidationError::Missing {
            field: "ogrenci_sifreHashed",
        })?;

    let student = StudentRepo::new(&state.pool).create(&new, &hash).await?;
    Ok(Json(student))
}

/// GET /ogrenciler/ - list students
async fn list_students(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(students))
}

/// GET /ogrenciler/{id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Student>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(id).await?;
    Ok(Json(student))
}

/// PUT /ogrenciler/{id} - partial update
async fn update_student(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(mut patch): ValidJson<StudentPatch>,
) -> Result<Json<Student>, ApiError> {
    patch.validate()?;

    if let Some(plain) = patch.password.take() {
        patch.password_hash = Patch::Value(auth::hash_password(&plain)?);
    }

    let student = StudentRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(student))
}

/// GET /ogrenciler/{id}/dersler
async fn student_lessons(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = LessonRepo::new(&state.pool)
        .list_for_student(id, Pagination::from(params))
        .await?;
    Ok(Json(lessons))
}

/// GET /ogrenciler/{id}/sinavlar
async fn student_exams(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<ExamSimulation>>, ApiError> {
    let exams = ExamRepo::new(&state.pool)
        .list_for_student(id, Pagination::from(params))
        .await?;
    Ok(Json(exams))
}

/// GET /ogrenciler/{id}/basarimlar
async fn student_achievements(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
    let achievements = AchievementRepo::new(&state.pool)
        .list_for_student(id, Pagination::from(params))
        .await?;
    Ok(Json(achievements))
}

/// GET /ogrenciler/{id}/istatistikler
async fn student_statistics(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Statistic>>, ApiError> {
    let stats = StatisticRepo::new(&state.pool)
        .list_for_student(id, Pagination::from(params))
        .await?;
    Ok(Json(stats))
}

/// GET /ogrenciler/{id}/chatbot
async fn student_chatbot(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<ChatbotInteraction>>, ApiError> {
    let interactions = ChatbotRepo::new(&state.pool)
        .list_for_student(id, Pagination::from(params))
        .await?;
    Ok(Json(interactions))
}

async fn link(
    state: &AppState,
    association: Association,
    (student_id, other_id): (i32, i32),
) -> Result<StatusCode, ApiError> {
    EnrollmentRepo::new(&state.pool)
        .link(association, student_id, other_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /ogrenciler/{id}/dersler/{ders_id}
async fn link_lesson(
    State(state): State<Arc<AppState>>,
    ValidPath(ids): ValidPath<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    link(&state, Association::Lesson, ids).await
}

/// POST /ogrenciler/{id}/sinavlar/{sinav_id}
async fn link_exam(
    State(state): State<Arc<AppState>>,
    ValidPath(ids): ValidPath<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    link(&state, Association::Exam, ids).await
}

/// POST /ogrenciler/{id}/basarimlar/{basarim_id}
async fn link_achievement(
    State(state): State<Arc<AppState>>,
    ValidPath(ids): ValidPath<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    link(&state, Association::Achievement, ids).await
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ogrenciler/", get(list_students).post(create_student))
        .route("/ogrenciler", get(list_students).post(create_student))
        .route("/ogrenciler/{id}", get(get_student).put(update_student))
        .route("/ogrenciler/{id}/dersler", get(student_lessons))
        .route("/ogrenciler/{id}/sinavlar", get(student_exams))
        .route("/ogrenciler/{id}/basarimlar", get(student_achievements))
        .route("/ogrenciler/{id}/istatistikler", get(student_statistics))
        .route("/ogrenciler/{id}/chatbot", get(student_chatbot))
        .route("/ogrenciler/{id}/dersler/{ders_id}", post(link_lesson))
        .route("/ogrenciler/{id}/sinavlar/{sinav_id}", post(link_exam))
        .route("/ogrenciler/{id}/basarimlar/{basarim_id}", post(link_achievement))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{get, json_request, send};

    #[tokio::test]
    async fn non_numeric_id_is_422() {
        let (status, body) = send(get("/ogrenciler/abc")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn negative_limit_is_422() {
        let (status, _) = send(get("/ogrenciler/?limit=-1")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_without_required_fields_is_422() {
        let (status, body) = send(json_request(
            "POST",
            "/ogrenciler/",
            json!({ "ogrenci_kullaniciAdi": "alice" }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn create_with_bad_email_is_422() {
        let (status, body) = send(json_request(
            "POST",
            "/ogrenciler",
            json!({
                "ogrenci_kullaniciAdi": "alice",
                "ogrenci_email": "not-an-address",
                "ogrenci_sifreHashed": "x",
                "ogrenci_ad": "Alice",
                "ogrenci_soyad": "Smith",
                "ogrenci_dogumTarihi": "2012-04-01"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "ogrenci_email: must be an email address");
    }

    #[tokio::test]
    async fn update_nulling_required_column_is_422() {
        let (status, body) = send(json_request(
            "PUT",
            "/ogrenciler/1",
            json!({ "ogrenci_ad": null }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "ogrenci_ad cannot be null");
    }

    #[tokio::test]
    async fn link_with_bad_id_is_422() {
        let (status, _) = send(json_request("POST", "/ogrenciler/1/dersler/x", json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
