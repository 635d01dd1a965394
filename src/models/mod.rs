pub mod hall_model;
pub mod movie_model;
pub mod screening_model;
pub mod ticket_model;
