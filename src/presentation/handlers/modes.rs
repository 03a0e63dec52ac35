use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::ProcessingMode;

#[derive(Serialize)]
pub struct ModesResponse {
    pub modes: Vec<ModeEntry>,
}

#[derive(Serialize)]
pub struct ModeEntry {
    pub mode: &'static str,
    pub description: &'static str,
}

pub async fn modes_handler() -> impl IntoResponse {
    let modes = ProcessingMode::ALL
        .iter()
        .map(|mode| ModeEntry {
            mode: mode.as_str(),
            description: mode.description(),
        })
        .collect();

    (StatusCode::OK, Json(ModesResponse { modes }))
}
