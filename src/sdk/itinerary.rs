use crate::sdk::maps::error::MapsError;
use crate::sdk::maps::route::RouteInfo;
use crate::sdk::places::Stops;

/// The stops in visiting order plus the route totals.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub ordered_places: Vec<String>,
    pub total_distance_m: u64,
    pub total_duration_s: u64,
}

impl Itinerary {
    /// Applies the route's waypoint order to the middle stops and sums the
    /// leg totals.
    pub fn assemble(stops: &Stops, route: &RouteInfo) -> Result<Self, MapsError> {
        let waypoints = stops.waypoints();
        if route.waypoint_order.len() != waypoints.len() {
            return Err(MapsError::BadWaypointOrder(format!(
                "expected {} indices, got {}",
                waypoints.len(),
                route.waypoint_order.len()
            )));
        }

        let mut ordered_places = Vec::with_capacity(stops.len());
        ordered_places.push(stops.origin().to_string());
        for &i in &route.waypoint_order {
            let place = waypoints.get(i).ok_or_else(|| {
                MapsError::BadWaypointOrder(format!(
                    "index {} out of range for {} waypoints",
                    i,
                    waypoints.len()
                ))
            })?;
            ordered_places.push(place.clone());
        }
        ordered_places.push(stops.destination().to_string());

        let total_distance_m = route.legs.iter().map(|leg| leg.distance_m).sum();
        let total_duration_s = route.legs.iter().map(|leg| leg.duration_s).sum();

        Ok(Self {
            ordered_places,
            total_distance_m,
            total_duration_s,
        })
    }
}
