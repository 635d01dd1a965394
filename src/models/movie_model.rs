use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A movie in the catalog. Fields are private so every mutation goes through a
/// re-validating setter; serde still round-trips them by value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    title: String,
    duration: i32,
    genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        duration: i32,
        genre: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut movie = Movie {
            title: String::new(),
            duration: 1,
            genre: genre.into(),
        };
        movie.set_title(title)?;
        movie.set_duration(duration)?;
        Ok(movie)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    pub fn set_duration(&mut self, duration: i32) -> Result<(), ValidationError> {
        if duration <= 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        self.duration = duration;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub duration: i32,
    pub genre: String,
}

#[derive(Serialize, Deserialize)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub duration: Option<i32>,
    pub genre: Option<String>,
}
