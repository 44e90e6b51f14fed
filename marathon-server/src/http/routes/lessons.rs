//! Lesson endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{LessonRepo, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Lesson, NewLesson, Pagination, PaginationParams, Topic};

/// POST /dersler/
async fn create_lesson(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewLesson>,
) -> Result<Json<Lesson>, ApiError> {
    new.validate()?;
    let lesson = LessonRepo::new(&state.pool).create(&new).await?;
    Ok(Json(lesson))
}

/// GET /dersler/
async fn list_lessons(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = LessonRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(lessons))
}

/// GET /dersler/{id}
async fn get_lesson(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Lesson>, ApiError> {
    let lesson = LessonRepo::new(&state.pool).get(id).await?;
    Ok(Json(lesson))
}

/// GET /dersler/{id}/konular - topics of one lesson
async fn lesson_topics(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = TopicRepo::new(&state.pool)
        .list_for_lesson(id, Pagination::from(params))
        .await?;
    Ok(Json(topics))
}

/// Lesson routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dersler/", get(list_lessons).post(create_lesson))
        .route("/dersler", get(list_lessons).post(create_lesson))
        .route("/dersler/{id}", get(get_lesson))
        .route("/dersler/{id}/konular", get(lesson_topics))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::super::test_support::{get, json_request, send};

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (status, body) =
            send(json_request("POST", "/dersler/", json!({ "ders_adi": "   " }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "ders_adi cannot be empty");
    }

    #[tokio::test]
    async fn wrong_field_type_is_rejected() {
        let (status, _) = send(json_request(
            "POST",
            "/dersler",
            json!({ "ders_adi": "Matematik", "ders_odakPuani": "high" }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn nested_topics_need_numeric_id() {
        let (status, _) = send(get("/dersler/first/konular")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
