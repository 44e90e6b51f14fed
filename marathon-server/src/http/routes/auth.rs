//! Login endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::db::repos::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidForm;
use crate::http::server::AppState;
use crate::models::Student;

/// Login form fields
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Successful login
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: Student,
    pub token: String,
}

/// POST /login
async fn login(
    State(state): State<Arc<AppState>>,
    ValidForm(form): ValidForm<LoginForm>,
) -> Result<Json<LoginResponse>, ApiError> {
    if form.email.trim().is_empty() {
        tracing::info!("login rejected: blank email");
        return Err(ApiError::Unauthorized);
    }

    let Some(student) = StudentRepo::new(&state.pool)
        .find_by_email(&form.email)
        .await?
    else {
        tracing::info!(email = %form.email, "login rejected: unknown email");
        return Err(ApiError::Unauthorized);
    };

    if !auth::verify_password(&form.email, &form.password, &student.password_hash) {
        tracing::info!(student_id = student.id, "login rejected: wrong password");
        return Err(ApiError::Unauthorized);
    }

    tracing::info!(student_id = student.id, "login succeeded");
    let token = auth::issue_token(student.id, &student.email);
    Ok(Json(LoginResponse {
        message: "Giriş başarılı",
        user: student,
        token,
    }))
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    use super::super::test_support::send;

    fn form(body: &'static str) -> Request<Body> {
        Request::post("/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_password_is_422() {
        let (status, body) = send(form("email=alice%40x.com")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn blank_email_is_401() {
        let (status, body) = send(form("email=&password=secret")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");
    }
}
