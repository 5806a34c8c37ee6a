pub mod config;
pub mod itinerary;
pub mod maps;
pub mod places;
pub mod util;
