use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Travel mode shared by the Directions request and the share link.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Data structures for parsing Directions responses ---

#[derive(Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Deserialize)]
pub struct Route {
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub overview_polyline: Polyline,
}

#[derive(Deserialize, Default)]
pub struct Polyline {
    #[serde(default)]
    pub points: String,
}

#[derive(Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub distance: TextValue,
    #[serde(default)]
    pub duration: TextValue,
}

#[derive(Deserialize, Default, Clone, Copy)]
pub struct TextValue {
    #[serde(default)]
    pub value: u64,
}
