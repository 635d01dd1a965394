use std::path::PathBuf;

use axum::{extract::Extension, http::StatusCode, response::Json, Json as AxumJson};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::SharedEngine;

#[derive(Debug, Deserialize, Default)]
pub struct SnapshotRequest {
    /// Overrides the engine's default data file when present.
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotSaved {
    pub message: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SnapshotLoaded {
    pub loaded: bool,
    pub message: String,
}

pub async fn save_data(
    Extension(engine): Extension<SharedEngine>,
    request: Option<AxumJson<SnapshotRequest>>,
) -> Result<Json<SnapshotSaved>, StatusCode> {
    let location = request.and_then(|AxumJson(r)| r.location).map(PathBuf::from);

    let engine = engine.lock().await;
    match engine.save(location.as_deref()) {
        Ok(written) => Ok(Json(SnapshotSaved {
            message: "snapshot saved".to_string(),
            location: written.display().to_string(),
        })),
        Err(err) => {
            error!("failed to save snapshot: {err:?}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn load_data(
    Extension(engine): Extension<SharedEngine>,
    request: Option<AxumJson<SnapshotRequest>>,
) -> Result<Json<SnapshotLoaded>, StatusCode> {
    let location = request.and_then(|AxumJson(r)| r.location).map(PathBuf::from);

    let mut engine = engine.lock().await;
    match engine.load(location.as_deref()) {
        Ok(true) => Ok(Json(SnapshotLoaded {
            loaded: true,
            message: "snapshot loaded".to_string(),
        })),
        Ok(false) => Ok(Json(SnapshotLoaded {
            loaded: false,
            message: "no snapshot at that location".to_string(),
        })),
        Err(err) => {
            error!("failed to load snapshot: {err:?}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
