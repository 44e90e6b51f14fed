//! Topic endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::TopicRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{NewTopic, Pagination, PaginationParams, Topic};

/// POST /konular/
async fn create_topic(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewTopic>,
) -> Result<Json<Topic>, ApiError> {
    new.validate()?;
    let topic = TopicRepo::new(&state.pool).create(&new).await?;
    Ok(Json(topic))
}

/// GET /konular/
async fn list_topics(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = TopicRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(topics))
}

/// GET /konular/{id}
async fn get_topic(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Topic>, ApiError> {
    let topic = TopicRepo::new(&state.pool).get(id).await?;
    Ok(Json(topic))
}

/// Topic routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/konular/", get(list_topics).post(create_topic))
        .route("/konular", get(list_topics).post(create_topic))
        .route("/konular/{id}", get(get_topic))
}
