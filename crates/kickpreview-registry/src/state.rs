use crate::db::TrackRepository;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub tracks: TrackRepository,
}

impl AppState {
    pub fn new(tracks: TrackRepository) -> Self {
        Self { tracks }
    }
}
