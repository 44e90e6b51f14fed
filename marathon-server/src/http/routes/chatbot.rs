//! Chatbot interaction endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ChatbotRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{ChatbotInteraction, NewChatbotInteraction, Pagination, PaginationParams};

/// POST /chatbot/
async fn create_interaction(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewChatbotInteraction>,
) -> Result<Json<ChatbotInteraction>, ApiError> {
    new.validate()?;
    let interaction = ChatbotRepo::new(&state.pool).create(&new).await?;
    Ok(Json(interaction))
}

/// GET /chatbot/
async fn list_interactions(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<ChatbotInteraction>>, ApiError> {
    let interactions = ChatbotRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;
    Ok(Json(interactions))
}

/// GET /chatbot/{id}
async fn get_interaction(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<ChatbotInteraction>, ApiError> {
    let interaction = ChatbotRepo::new(&state.pool).get(id).await?;
    Ok(Json(interaction))
}

/// Chatbot routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chatbot/", get(list_interactions).post(create_interaction))
        .route("/chatbot", get(list_interactions).post(create_interaction))
        .route("/chatbot/{id}", get(get_interaction))
}
