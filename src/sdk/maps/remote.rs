use super::encode::{encode_param, join_query};
use super::error::MapsError;
use super::route::{LegSummary, RouteInfo};
use super::service::MapsProvider;
use super::static_map::StaticMapRequest;
use super::types::{DirectionsResponse, TravelMode};
use crate::sdk::places::Stops;
use crate::sdk::util::rate_limit::Limiter;
use reqwest::blocking::Client;
use std::error::Error;
use std::time::Duration;

pub struct GoogleMapsProvider {
    client: Client,
    api_key: String,
    directions_base: String,
    static_map_base: String,
    limiter: Limiter,
}

impl GoogleMapsProvider {
    pub fn new(api_key: String, limiter: Limiter) -> Self {
        Self::with_base_urls(
            api_key,
            limiter,
            "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            "https://maps.googleapis.com/maps/api/staticmap".to_string(),
        )
    }

    /// Builds a provider against different endpoints, e.g. a local stub
    /// server.
    pub fn with_base_urls(
        api_key: String,
        limiter: Limiter,
        directions_base: String,
        static_map_base: String,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            api_key,
            directions_base,
            static_map_base,
            limiter,
        }
    }
}

impl MapsProvider for GoogleMapsProvider {
    fn directions(
        &self,
        stops: &Stops,
        mode: TravelMode,
        language: &str,
    ) -> Result<RouteInfo, Box<dyn Error>> {
        self.limiter.wait();
        let url = format!(
            "{}?{}",
            self.directions_base,
            directions_query(stops, mode, language, &self.api_key)
        );
        log::debug!(
            "[PROVIDER] Calling Directions for {} stops ({} -> {})",
            stops.len(),
            stops.origin(),
            stops.destination()
        );

        let response = self.client.get(&url).send()?;
        let text = response.text()?;

        let resp: DirectionsResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse DirectionsResponse. Error: {}. Body: {}",
                e,
                text
            );
            e
        })?;

        if resp.status != "OK" {
            return Err(Box::new(MapsError::ApiStatus {
                status: resp.status,
                message: resp.error_message.unwrap_or_default(),
            }));
        }

        let route = resp.routes.into_iter().next().ok_or(MapsError::EmptyRoute)?;

        // Google omits waypoint_order when there are no waypoints; fall back
        // to the identity order otherwise.
        let waypoint_order = if route.waypoint_order.is_empty() {
            (0..stops.waypoints().len()).collect()
        } else {
            route.waypoint_order
        };

        Ok(RouteInfo {
            waypoint_order,
            legs: route
                .legs
                .iter()
                .map(|leg| LegSummary {
                    distance_m: leg.distance.value,
                    duration_s: leg.duration.value,
                })
                .collect(),
            polyline: route.overview_polyline.points,
        })
    }

    fn static_map(&self, request: &StaticMapRequest) -> Result<Vec<u8>, Box<dyn Error>> {
        self.limiter.wait();
        let url = format!("{}?{}", self.static_map_base, request.query(&self.api_key));
        log::debug!(
            "[PROVIDER] Calling Static Maps for {} markers, {}x{}",
            request.ordered_places.len(),
            request.width,
            request.height
        );

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::error!(
                "Static Maps returned non-success status: {}. Body: {}",
                status,
                body
            );
            return Err(Box::new(MapsError::StaticMapStatus {
                status: status.as_u16(),
                body,
            }));
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Builds the Directions query. Waypoints are prefixed with `optimize:true`
/// so the API reorders them for the shortest route.
fn directions_query(stops: &Stops, mode: TravelMode, language: &str, api_key: &str) -> String {
    let mut pairs = vec![
        ("origin", encode_param(stops.origin())),
        ("destination", encode_param(stops.destination())),
        ("mode", encode_param(mode.as_str())),
        ("language", encode_param(language)),
        ("key", encode_param(api_key)),
    ];
    let waypoints = stops.waypoints();
    if !waypoints.is_empty() {
        let value = format!("optimize:true|{}", waypoints.join("|"));
        pairs.push(("waypoints", encode_param(&value)));
    }
    join_query(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(names: &[&str]) -> Stops {
        Stops::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn directions_query_includes_optimize_prefix() {
        let q = directions_query(
            &stops(&["A 1", "B", "C"]),
            TravelMode::Driving,
            "en",
            "KEY",
        );
        assert_eq!(
            q,
            "origin=A%201&destination=C&mode=driving&language=en&key=KEY&waypoints=optimize:true|B"
        );
    }

    #[test]
    fn directions_query_without_waypoints_has_no_waypoints_param() {
        let q = directions_query(&stops(&["A", "B"]), TravelMode::Transit, "es", "KEY");
        assert!(!q.contains("waypoints"));
        assert!(q.contains("mode=transit"));
        assert!(q.contains("language=es"));
    }
}
