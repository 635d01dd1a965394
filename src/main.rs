use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post},
    Extension, Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use cinema_booking::controllers::{
    data_controller::*, hall_controller::*, home_controller, movie_controller::*,
    screening_controller::*, ticket_controller::*,
};
use cinema_booking::engine::{BookingEngine, DEFAULT_DATA_FILE};
use cinema_booking::store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_file = env::var("CINEMA_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));
    let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(4000);

    let mut engine = BookingEngine::new(Box::new(JsonFileStore), data_file);
    engine.bootstrap()?;
    let shared_engine = Arc::new(Mutex::new(engine));

    let app = Router::new()
        .route("/", get(home_controller::index))
        .route("/movies", get(list_movies))
        .route("/movies", post(add_movie))
        .route("/movies/:title", patch(update_movie))
        .route("/halls", get(list_halls))
        .route("/halls", post(add_hall))
        .route("/screenings", get(list_screenings))
        .route("/screenings", post(add_screening))
        .route("/screenings/:id", get(fetch_screening_by_id))
        .route("/screenings/:id/seats", get(fetch_seat_map))
        .route("/tickets", get(list_tickets))
        .route("/tickets", post(buy_ticket))
        .route("/data/save", post(save_data))
        .route("/data/load", post(load_data))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
                .allow_origin(
                    app_url
                        .parse::<HeaderValue>()
                        .context("APP_URL is not a valid origin")?,
                )
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(Extension(shared_engine));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on port {port}");
    axum::serve(listener, app).await?;

    Ok(())
}
