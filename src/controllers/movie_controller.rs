use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
    Json as AxumJson,
};

use crate::models::movie_model::{Movie, MovieUpdate, NewMovie};

use super::SharedEngine;

pub async fn list_movies(Extension(engine): Extension<SharedEngine>) -> Json<Vec<Movie>> {
    let engine = engine.lock().await;
    Json(engine.movies().to_vec())
}

pub async fn add_movie(
    Extension(engine): Extension<SharedEngine>,
    AxumJson(movie): AxumJson<NewMovie>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let mut engine = engine.lock().await;
    match engine.add_movie(movie.title, movie.duration, movie.genre) {
        Ok(created) => Ok(Json(created)),
        Err(err) => Err((StatusCode::BAD_REQUEST, err.to_string())),
    }
}

pub async fn update_movie(
    Path(title): Path<String>,
    Extension(engine): Extension<SharedEngine>,
    Json(update_data): Json<MovieUpdate>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let mut engine = engine.lock().await;
    let movie = match engine.movie_mut(&title) {
        Some(movie) => movie,
        None => return Err((StatusCode::NOT_FOUND, format!("no movie titled {title}"))),
    };

    // Stage the edit so a rejected field leaves the catalog untouched.
    let mut updated = movie.clone();
    if let Some(new_title) = update_data.title {
        updated
            .set_title(new_title)
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    }
    if let Some(duration) = update_data.duration {
        updated
            .set_duration(duration)
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    }
    if let Some(genre) = update_data.genre {
        updated.set_genre(genre);
    }

    *movie = updated.clone();
    Ok(Json(updated))
}
