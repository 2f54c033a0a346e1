//! Welcome endpoint at the service root.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Root handler, returns a fixed welcome message.
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the API",
    })
}
