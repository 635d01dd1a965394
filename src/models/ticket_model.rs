use serde::{Deserialize, Serialize};

use super::screening_model::Screening;

/// A sold seat. Embeds a value copy of its screening; the copy's `id` is what
/// ties the ticket back to the live screening after a snapshot reload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ticket {
    screening: Screening,
    seat_number: String,
    price: u32,
}

impl Ticket {
    pub fn new(screening: Screening, seat_number: impl Into<String>, price: u32) -> Self {
        Ticket {
            screening,
            seat_number: seat_number.into(),
            price,
        }
    }

    pub fn screening(&self) -> &Screening {
        &self.screening
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewTicket {
    pub screening_id: u64,
    pub seat_number: String,
}
