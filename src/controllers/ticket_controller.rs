use axum::{extract::Extension, http::StatusCode, response::Json, Json as AxumJson};

use crate::models::ticket_model::{NewTicket, Ticket};

use super::SharedEngine;

pub async fn list_tickets(Extension(engine): Extension<SharedEngine>) -> Json<Vec<Ticket>> {
    let engine = engine.lock().await;
    Json(engine.tickets().to_vec())
}

pub async fn buy_ticket(
    Extension(engine): Extension<SharedEngine>,
    AxumJson(request): AxumJson<NewTicket>,
) -> Result<Json<Ticket>, (StatusCode, String)> {
    let mut engine = engine.lock().await;
    if engine.screening(request.screening_id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("no screening with id {}", request.screening_id),
        ));
    }

    match engine.buy_ticket(request.screening_id, &request.seat_number) {
        Some(ticket) => Ok(Json(ticket)),
        None => Err((
            StatusCode::CONFLICT,
            format!("seat {} is not available", request.seat_number),
        )),
    }
}
