pub mod sdk;

pub use sdk::itinerary::Itinerary;
pub use sdk::maps::route::RouteInfo;
pub use sdk::maps::service::MapsProvider;
pub use sdk::places::Stops;
