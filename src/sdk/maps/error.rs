use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapsError {
    // Directions responded with a non-OK top-level status
    #[error("Directions API error: {status} - {message}")]
    ApiStatus { status: String, message: String },

    #[error("Static Maps API returned HTTP {status}: {body}")]
    StaticMapStatus { status: u16, body: String },

    #[error("No route found in Directions response")]
    EmptyRoute,

    #[error("At least two places are required, got {0}")]
    NotEnoughStops(usize),

    #[error("Invalid waypoint order from API: {0}")]
    BadWaypointOrder(String),

    #[error("Invalid static map size \"{0}\", expected WxH (e.g. 800x600)")]
    BadMapSize(String),

    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}
