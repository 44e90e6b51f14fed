//! Exam simulation endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ExamRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{ExamSimulation, NewExamSimulation, Pagination, PaginationParams};

/// POST /sinavlar/
async fn create_exam(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewExamSimulation>,
) -> Result<Json<ExamSimulation>, ApiError> {
    new.validate()?;
    let exam = ExamRepo::new(&state.pool).create(&new).await?;
    Ok(Json(exam))
}

/// GET /sinavlar/
async fn list_exams(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<ExamSimulation>>, ApiError> {
    let exams = ExamRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(exams))
}

/// GET /sinavlar/{id}
async fn get_exam(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<ExamSimulation>, ApiError> {
    let exam = ExamRepo::new(&state.pool).get(id).await?;
    Ok(Json(exam))
}

/// Exam routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sinavlar/", get(list_exams).post(create_exam))
        .route("/sinavlar", get(list_exams).post(create_exam))
        .route("/sinavlar/{id}", get(get_exam))
}
