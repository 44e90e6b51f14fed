//! Daily statistics endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::StatisticRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{NewStatistic, Pagination, PaginationParams, Statistic};

/// POST /istatistikler/
async fn create_statistic(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewStatistic>,
) -> Result<Json<Statistic>, ApiError> {
    let stat = StatisticRepo::new(&state.pool).create(&new).await?;
    Ok(Json(stat))
}

/// GET /istatistikler/
async fn list_statistics(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Statistic>>, ApiError> {
    let stats = StatisticRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(stats))
}

/// GET /istatistikler/{id}
async fn get_statistic(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Statistic>, ApiError> {
    let stat = StatisticRepo::new(&state.pool).get(id).await?;
    Ok(Json(stat))
}

/// Statistic routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/istatistikler/", get(list_statistics).post(create_statistic))
        .route("/istatistikler", get(list_statistics).post(create_statistic))
        .route("/istatistikler/{id}", get(get_statistic))
}
