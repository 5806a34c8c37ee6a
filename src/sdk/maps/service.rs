use super::route::RouteInfo;
use super::static_map::StaticMapRequest;
use super::types::TravelMode;
use crate::sdk::places::Stops;
use std::error::Error;

pub trait MapsProvider: Send + Sync {
    /// Requests an optimized route over the given stops.
    fn directions(
        &self,
        stops: &Stops,
        mode: TravelMode,
        language: &str,
    ) -> Result<RouteInfo, Box<dyn Error>>;

    /// Fetches the PNG bytes of a static route map.
    fn static_map(&self, request: &StaticMapRequest) -> Result<Vec<u8>, Box<dyn Error>>;
}
