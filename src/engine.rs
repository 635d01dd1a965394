use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use tracing::info;

use crate::error::ValidationError;
use crate::models::{
    hall_model::Hall, movie_model::Movie, screening_model::Screening, ticket_model::Ticket,
};
use crate::store::{DurableStore, Snapshot};

pub const DEFAULT_DATA_FILE: &str = "cinema_data.json";

const BASE_PRICE: u32 = 8;
const POPULAR_SURCHARGE: u32 = 3;
const EVENING_SURCHARGE: u32 = 2;
const BIG_HALL_SURCHARGE: u32 = 1;
const BIG_HALL_THRESHOLD: u32 = 80;
const POPULAR_MOVIES: [&str; 3] = ["The Matrix", "Inception", "Avatar"];

/// Sole owner and mutator of the booking state. One instance is constructed at
/// process start and handed to the HTTP layer and tests; persistence goes
/// through the injected [`DurableStore`] at explicit save/load checkpoints.
pub struct BookingEngine {
    movies: Vec<Movie>,
    halls: Vec<Hall>,
    screenings: Vec<Screening>,
    tickets: Vec<Ticket>,
    next_screening_id: u64,
    store: Box<dyn DurableStore>,
    default_location: PathBuf,
}

impl BookingEngine {
    pub fn new(store: Box<dyn DurableStore>, default_location: impl Into<PathBuf>) -> Self {
        BookingEngine {
            movies: Vec::new(),
            halls: Vec::new(),
            screenings: Vec::new(),
            tickets: Vec::new(),
            next_screening_id: 1,
            store,
            default_location: default_location.into(),
        }
    }

    /// Startup policy: seed fixed sample data into any empty collection, then
    /// overlay whatever snapshot exists at the default location.
    pub fn bootstrap(&mut self) -> Result<()> {
        self.seed_sample_data();
        self.load(None)?;
        Ok(())
    }

    /// Fixed sample catalog, applied only to collections that are still empty.
    pub fn seed_sample_data(&mut self) {
        if self.movies.is_empty() {
            self.movies.extend([
                Movie::new("The Matrix", 120, "Sci-Fi").expect("sample movie is valid"),
                Movie::new("Inception", 150, "Thriller").expect("sample movie is valid"),
                Movie::new("The Shawshank Redemption", 142, "Drama")
                    .expect("sample movie is valid"),
            ]);
        }
        if self.halls.is_empty() {
            self.halls.extend([
                Hall::new("1", 50).expect("sample hall is valid"),
                Hall::new("2", 100).expect("sample hall is valid"),
            ]);
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn screening(&self, id: u64) -> Option<&Screening> {
        self.screenings.iter().find(|s| s.id() == id)
    }

    pub fn movie_mut(&mut self, title: &str) -> Option<&mut Movie> {
        self.movies.iter_mut().find(|m| m.title() == title)
    }

    pub fn add_movie(
        &mut self,
        title: impl Into<String>,
        duration: i32,
        genre: impl Into<String>,
    ) -> Result<Movie, ValidationError> {
        let movie = Movie::new(title, duration, genre)?;
        self.movies.push(movie.clone());
        Ok(movie)
    }

    pub fn add_hall(
        &mut self,
        hall_number: impl Into<String>,
        capacity: u32,
    ) -> Result<Hall, ValidationError> {
        let hall = Hall::new(hall_number, capacity)?;
        self.halls.push(hall.clone());
        Ok(hall)
    }

    /// First movie matching the title and first hall matching the number win;
    /// either miss yields `None` with nothing appended.
    pub fn add_screening(
        &mut self,
        movie_title: &str,
        screening_time: NaiveDateTime,
        hall_number: &str,
    ) -> Option<Screening> {
        let movie = self.movies.iter().find(|m| m.title() == movie_title)?;
        let hall = self.halls.iter().find(|h| h.hall_number() == hall_number)?;

        let screening = Screening::new(
            self.next_screening_id,
            movie.clone(),
            screening_time,
            hall.clone(),
        );
        self.next_screening_id += 1;
        self.screenings.push(screening.clone());
        Some(screening)
    }

    /// Base price plus independent surcharges for popular titles, evening
    /// slots (strictly after 18:00) and big halls.
    pub fn ticket_price(&self, screening: &Screening) -> u32 {
        let mut price = BASE_PRICE;

        if POPULAR_MOVIES.contains(&screening.movie().title()) {
            price += POPULAR_SURCHARGE;
        }

        let evening_cutoff = NaiveTime::from_hms_opt(18, 0, 0).expect("18:00 is a valid time");
        if screening.screening_time().time() > evening_cutoff {
            price += EVENING_SURCHARGE;
        }

        if screening.hall().capacity() > BIG_HALL_THRESHOLD {
            price += BIG_HALL_SURCHARGE;
        }

        price
    }

    /// The hall's seat grid minus every seat already ticketed for this
    /// screening, matched by stable id so reloaded tickets still count.
    pub fn seats_available(&self, screening: &Screening) -> Vec<String> {
        let sold: Vec<&str> = self
            .tickets
            .iter()
            .filter(|t| t.screening().id() == screening.id())
            .map(|t| t.seat_number())
            .collect();

        screening
            .hall()
            .seat_grid()
            .into_iter()
            .filter(|seat| !sold.contains(&seat.as_str()))
            .collect()
    }

    /// Atomic purchase: on any miss (unknown id, seat taken or out of grid)
    /// nothing changes; on success the ticket is appended and the screening's
    /// counters move together.
    pub fn buy_ticket(&mut self, screening_id: u64, seat_number: &str) -> Option<Ticket> {
        let position = self.screenings.iter().position(|s| s.id() == screening_id)?;

        let available = self.seats_available(&self.screenings[position]);
        if !available.iter().any(|seat| seat == seat_number) {
            return None;
        }

        let price = self.ticket_price(&self.screenings[position]);
        self.screenings[position].record_sale();
        let ticket = Ticket::new(self.screenings[position].clone(), seat_number, price);
        self.tickets.push(ticket.clone());
        Some(ticket)
    }

    /// Writes a full snapshot through the store. Returns the location written.
    pub fn save(&self, location: Option<&Path>) -> Result<PathBuf> {
        let location = location.unwrap_or(&self.default_location).to_path_buf();
        let snapshot = Snapshot {
            movies: self.movies.clone(),
            halls: self.halls.clone(),
            screenings: self.screenings.clone(),
            tickets: self.tickets.clone(),
        };
        self.store.save(&snapshot, &location)?;
        info!(location = %location.display(), "saved snapshot");
        Ok(location)
    }

    /// Replaces all four collections with the snapshot at `location`. An
    /// absent snapshot leaves the engine unmodified and returns `false`.
    pub fn load(&mut self, location: Option<&Path>) -> Result<bool> {
        let location = location.unwrap_or(&self.default_location).to_path_buf();
        let Some(snapshot) = self.store.load(&location)? else {
            return Ok(false);
        };

        self.movies = snapshot.movies;
        self.halls = snapshot.halls;
        self.screenings = snapshot.screenings;
        self.tickets = snapshot.tickets;
        self.next_screening_id = self
            .screenings
            .iter()
            .map(Screening::id)
            .max()
            .map_or(1, |max| max + 1);
        info!(location = %location.display(), "loaded snapshot");
        Ok(true)
    }
}
