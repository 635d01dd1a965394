use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound imposed by the fixed 10x10 seat grid.
pub const MAX_CAPACITY: u32 = 100;

pub const SEAT_ROWS: &str = "ABCDEFGHIJ";
pub const SEATS_PER_ROW: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hall {
    hall_number: String,
    capacity: u32,
}

impl Hall {
    pub fn new(hall_number: impl Into<String>, capacity: u32) -> Result<Self, ValidationError> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(ValidationError::CapacityOutOfRange);
        }
        Ok(Hall {
            hall_number: hall_number.into(),
            capacity,
        })
    }

    pub fn hall_number(&self) -> &str {
        &self.hall_number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Every addressable seat coordinate of this hall, row-major (all of row A
    /// before row B), truncated to capacity.
    pub fn seat_grid(&self) -> Vec<String> {
        SEAT_ROWS
            .chars()
            .flat_map(|row| (1..=SEATS_PER_ROW).map(move |seat| format!("{row}{seat}")))
            .take(self.capacity as usize)
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewHall {
    pub hall_number: String,
    pub capacity: u32,
}
