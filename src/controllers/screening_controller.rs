use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::models::hall_model::{SEATS_PER_ROW, SEAT_ROWS};
use crate::models::screening_model::{NewScreening, ScreeningDetail};
use crate::utils::{parse_screening_time, SCREENING_TIME_FORMAT};

use super::SharedEngine;

#[derive(Debug, Serialize)]
pub struct SeatMap {
    pub screening_id: u64,
    pub movie_title: String,
    pub screening_time: String,
    pub hall_number: String,
    pub available_seats: Vec<String>,
    /// Rendered 10x10 grid, one line per row: "O" available, "X" taken
    /// (seats beyond the hall's capacity render as taken).
    pub grid: Vec<String>,
}

pub async fn list_screenings(
    Extension(engine): Extension<SharedEngine>,
) -> Json<Vec<ScreeningDetail>> {
    let engine = engine.lock().await;
    let result = engine
        .screenings()
        .iter()
        .map(|screening| ScreeningDetail {
            price: engine.ticket_price(screening),
            screening: screening.clone(),
        })
        .collect();
    Json(result)
}

pub async fn add_screening(
    Extension(engine): Extension<SharedEngine>,
    Json(screening): Json<NewScreening>,
) -> Result<Json<ScreeningDetail>, (StatusCode, String)> {
    let screening_time = match parse_screening_time(&screening.screening_time) {
        Ok(time) => time,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("screening_time must be in {SCREENING_TIME_FORMAT} form"),
            ))
        }
    };

    let mut engine = engine.lock().await;
    match engine.add_screening(&screening.movie_title, screening_time, &screening.hall_number) {
        Some(created) => Ok(Json(ScreeningDetail {
            price: engine.ticket_price(&created),
            screening: created,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            format!(
                "no movie titled {} or no hall {}",
                screening.movie_title, screening.hall_number
            ),
        )),
    }
}

pub async fn fetch_screening_by_id(
    Path(id): Path<u64>,
    Extension(engine): Extension<SharedEngine>,
) -> Result<Json<ScreeningDetail>, StatusCode> {
    let engine = engine.lock().await;
    match engine.screening(id) {
        Some(screening) => Ok(Json(ScreeningDetail {
            price: engine.ticket_price(screening),
            screening: screening.clone(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn fetch_seat_map(
    Path(id): Path<u64>,
    Extension(engine): Extension<SharedEngine>,
) -> Result<Json<SeatMap>, StatusCode> {
    let engine = engine.lock().await;
    let screening = match engine.screening(id) {
        Some(screening) => screening,
        None => return Err(StatusCode::NOT_FOUND),
    };

    let available_seats = engine.seats_available(screening);
    Ok(Json(SeatMap {
        screening_id: screening.id(),
        movie_title: screening.movie().title().to_string(),
        screening_time: screening
            .screening_time()
            .format(SCREENING_TIME_FORMAT)
            .to_string(),
        hall_number: screening.hall().hall_number().to_string(),
        grid: render_seat_map(&available_seats),
        available_seats,
    }))
}

fn render_seat_map(available_seats: &[String]) -> Vec<String> {
    let mut grid = Vec::with_capacity(SEAT_ROWS.len() + 1);
    let header = (1..=SEATS_PER_ROW)
        .map(|seat| format!("{seat:2}"))
        .collect::<Vec<_>>()
        .join(" ");
    grid.push(format!("   {header}"));

    for row in SEAT_ROWS.chars() {
        let cells = (1..=SEATS_PER_ROW)
            .map(|seat| {
                let code = format!("{row}{seat}");
                if available_seats.contains(&code) {
                    "O"
                } else {
                    "X"
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        grid.push(format!("{row}: {cells}"));
    }
    grid
}
