use axum::{extract::Extension, http::StatusCode, response::Json, Json as AxumJson};

use crate::models::hall_model::{Hall, NewHall};

use super::SharedEngine;

pub async fn list_halls(Extension(engine): Extension<SharedEngine>) -> Json<Vec<Hall>> {
    let engine = engine.lock().await;
    Json(engine.halls().to_vec())
}

pub async fn add_hall(
    Extension(engine): Extension<SharedEngine>,
    AxumJson(hall): AxumJson<NewHall>,
) -> Result<Json<Hall>, (StatusCode, String)> {
    let mut engine = engine.lock().await;
    match engine.add_hall(hall.hall_number, hall.capacity) {
        Ok(created) => Ok(Json(created)),
        Err(err) => Err((StatusCode::BAD_REQUEST, err.to_string())),
    }
}
