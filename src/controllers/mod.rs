use std::sync::Arc;

use tokio::sync::Mutex;

use crate::engine::BookingEngine;

pub mod data_controller;
pub mod hall_controller;
pub mod home_controller;
pub mod movie_controller;
pub mod screening_controller;
pub mod ticket_controller;

/// One mutex guards the whole engine; handlers serialize access through it.
pub type SharedEngine = Arc<Mutex<BookingEngine>>;
