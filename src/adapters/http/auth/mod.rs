//! Auth HTTP adapter - the demo login endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::adapters::auth::CredentialVerifier;

/// Request body for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/auth/login - Check the demo credential pair
pub async fn login(
    State(verifier): State<Arc<CredentialVerifier>>,
    Json(req): Json<LoginRequest>,
) -> Response {
    if verifier.verify(&req.email, &req.password) {
        (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "Login Berhasil".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                message: "Email atau kata sandi salah".to_string(),
            }),
        )
            .into_response()
    }
}

/// Creates the auth router.
pub fn auth_routes(verifier: Arc<CredentialVerifier>) -> Router {
    Router::new().route("/login", post(login)).with_state(verifier)
}
