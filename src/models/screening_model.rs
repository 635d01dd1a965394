use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::screening_time;

use super::{hall_model::Hall, movie_model::Movie};

/// A scheduled showing of a movie in a hall. Carries value copies of both, so
/// a snapshot reload reconstructs it without shared identity; `id` is the
/// stable handle tickets and callers use across reloads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Screening {
    id: u64,
    movie: Movie,
    hall: Hall,
    #[serde(with = "screening_time")]
    screening_time: NaiveDateTime,
    available_seats: u32,
    tickets_sold: u32,
}

impl Screening {
    pub fn new(id: u64, movie: Movie, screening_time: NaiveDateTime, hall: Hall) -> Self {
        let available_seats = hall.capacity();
        Screening {
            id,
            movie,
            hall,
            screening_time,
            available_seats,
            tickets_sold: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn hall(&self) -> &Hall {
        &self.hall
    }

    pub fn screening_time(&self) -> NaiveDateTime {
        self.screening_time
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn tickets_sold(&self) -> u32 {
        self.tickets_sold
    }

    /// One sold seat: keeps `available_seats + tickets_sold == capacity`.
    /// Callers must have checked availability first.
    pub(crate) fn record_sale(&mut self) {
        debug_assert!(self.available_seats > 0);
        self.available_seats -= 1;
        self.tickets_sold += 1;
    }
}

/// Screening plus derived fields the listing endpoints expose.
#[derive(Debug, Serialize)]
pub struct ScreeningDetail {
    #[serde(flatten)]
    pub screening: Screening,
    pub price: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewScreening {
    pub movie_title: String,
    /// "YYYY-MM-DD HH:MM"
    pub screening_time: String,
    pub hall_number: String,
}
