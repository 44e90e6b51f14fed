//! Achievement endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::AchievementRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Achievement, NewAchievement, Pagination, PaginationParams};

/// POST /basarimlar/
async fn create_achievement(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewAchievement>,
) -> Result<Json<Achievement>, ApiError> {
    new.validate()?;
    let achievement = AchievementRepo::new(&state.pool).create(&new).await?;
    Ok(Json(achievement))
}

/// GET /basarimlar/
async fn list_achievements(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
    let achievements = AchievementRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(achievements))
}

/// GET /basarimlar/{id}
async fn get_achievement(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Achievement>, ApiError> {
    let achievement = AchievementRepo::new(&state.pool).get(id).await?;
    Ok(Json(achievement))
}

/// Achievement routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/basarimlar/", get(list_achievements).post(create_achievement))
        .route("/basarimlar", get(list_achievements).post(create_achievement))
        .route("/basarimlar/{id}", get(get_achievement))
}
