use axum::{Json, http::StatusCode};

use crate::app::dto;

pub async fn greet() -> Json<&'static str> {
    Json(dto::GREETING)
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
