//! Route handlers for the track registry.

use axum::{extract::State, response::IntoResponse, Json};
use kickpreview_core::{AppError, TrackRecord};
use serde_json::json;

use crate::error::HttpAppError;
use crate::state::AppState;

/// GET /api/get-content
///
/// Returns one track chosen pseudo-randomly by the database. 404 when the
/// table is empty.
pub async fn get_content(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .tracks
        .random_track()
        .await?
        .ok_or_else(|| AppError::NotFound("Not found data. Please check tracks table.".to_string()))?;

    tracing::info!(title = %record.title, "Served random track");
    Ok(Json(record))
}

/// PUT /api/put-content
///
/// Registers a fully validated track. Locators in the body are stored
/// verbatim; the registry does not re-check the media behind them.
pub async fn put_content(
    State(state): State<AppState>,
    Json(record): Json<TrackRecord>,
) -> Result<impl IntoResponse, HttpAppError> {
    validate_record(&record)?;

    state.tracks.insert_track(&record).await?;

    tracing::info!(title = %record.title, audio_uri = %record.audio_uri, "Registered track");
    Ok(Json(json!({"message": "Data inserted successfully"})))
}

/// Fallback for unknown routes so the 404 body matches the API's error shape.
pub async fn page_not_found() -> HttpAppError {
    HttpAppError(AppError::NotFound("Page not found".to_string()))
}

fn validate_record(record: &TrackRecord) -> Result<(), AppError> {
    if record.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if record.audio_uri.is_empty() || record.image_uri.is_empty() {
        return Err(AppError::BadRequest(
            "Both content locators must be present".to_string(),
        ));
    }
    if record.link.is_empty() {
        return Err(AppError::BadRequest("Link must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrackRecord {
        TrackRecord {
            title: "Artist - Track".to_string(),
            audio_uri: "s3://bucket/audios/kick.wav".to_string(),
            image_uri: "s3://bucket/images/cover.png".to_string(),
            link: "http://example.com/track".to_string(),
        }
    }

    #[test]
    fn complete_record_is_accepted() {
        assert!(validate_record(&record()).is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut r = record();
        r.title = "   ".to_string();
        let err = validate_record(&r).unwrap_err();
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn missing_locator_is_rejected() {
        let mut r = record();
        r.image_uri = String::new();
        assert!(validate_record(&r).is_err());
    }

    #[test]
    fn missing_link_is_rejected() {
        let mut r = record();
        r.link = String::new();
        assert!(validate_record(&r).is_err());
    }
}
