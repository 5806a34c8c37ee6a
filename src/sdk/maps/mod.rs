pub mod encode;
pub mod error;
pub mod remote;
pub mod route;
pub mod service;
pub mod share;
pub mod static_map;
pub mod types;

pub use error::MapsError;
pub use remote::GoogleMapsProvider;
pub use route::{LegSummary, RouteInfo};
pub use service::MapsProvider;
pub use share::build_share_link;
pub use static_map::StaticMapRequest;
pub use types::TravelMode;
