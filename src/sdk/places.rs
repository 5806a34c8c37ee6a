use crate::sdk::maps::error::MapsError;
use std::{fs, path::Path};

/// The saved Spain trip stops, in the order they were collected.
pub const DEFAULT_PLACES: &[&str] = &[
    "Royal Monastery of El Escorial, San Lorenzo de El Escorial, Spain",
    "Royal Palace of Madrid, Madrid, Spain",
    "Almudena Cathedral, Madrid, Spain",
    "San Ginés de Arlés Church, Madrid, Spain",
    "Toledo Cathedral, Toledo, Spain",
];

/// Validated ordered list of stops. The first place is the origin, the last
/// is the destination, everything in between is a waypoint.
#[derive(Debug, Clone)]
pub struct Stops {
    places: Vec<String>,
}

impl Stops {
    pub fn new(places: Vec<String>) -> Result<Self, MapsError> {
        if places.len() < 2 {
            return Err(MapsError::NotEnoughStops(places.len()));
        }
        Ok(Self { places })
    }

    /// The built-in Spain trip itinerary.
    pub fn builtin() -> Self {
        Self {
            places: DEFAULT_PLACES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Loads stops from a text file, one place per line. Blank lines and
    /// lines starting with '#' are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapsError> {
        let data = fs::read_to_string(&path).map_err(|e| {
            MapsError::Generic(format!(
                "Failed to read places file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let places: Vec<String> = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self::new(places)
    }

    pub fn origin(&self) -> &str {
        &self.places[0]
    }

    pub fn destination(&self) -> &str {
        &self.places[self.places.len() - 1]
    }

    /// The middle stops, in their given order.
    pub fn waypoints(&self) -> &[String] {
        &self.places[1..self.places.len() - 1]
    }

    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_stops_split_into_origin_waypoints_destination() {
        let stops = Stops::builtin();
        assert_eq!(stops.len(), 5);
        assert!(stops.origin().starts_with("Royal Monastery"));
        assert!(stops.destination().starts_with("Toledo Cathedral"));
        assert_eq!(stops.waypoints().len(), 3);
    }

    #[test]
    fn two_stops_have_no_waypoints() {
        let stops = Stops::new(vec!["A".into(), "B".into()]).unwrap();
        assert!(stops.waypoints().is_empty());
    }

    #[test]
    fn rejects_fewer_than_two_stops() {
        assert!(matches!(
            Stops::new(vec!["Madrid".into()]),
            Err(MapsError::NotEnoughStops(1))
        ));
    }

    #[test]
    fn file_loading_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# trip stops").unwrap();
        writeln!(file, "  Madrid, Spain  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Toledo, Spain").unwrap();

        let stops = Stops::from_file(file.path()).unwrap();
        assert_eq!(stops.places(), &["Madrid, Spain", "Toledo, Spain"]);
    }
}
