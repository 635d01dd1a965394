pub mod controllers;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;
