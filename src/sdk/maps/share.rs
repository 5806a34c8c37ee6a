use super::encode::{encode_param, join_query};
use super::types::TravelMode;
use crate::sdk::places::Stops;

const SHARE_BASE: &str = "https://www.google.com/maps/dir/";

/// Builds a shareable Google Maps directions link. When `optimized` is given
/// (indices into the waypoint sub-list) the waypoints are emitted in that
/// order, otherwise in their original order.
pub fn build_share_link(stops: &Stops, optimized: Option<&[usize]>, mode: TravelMode) -> String {
    let waypoints = stops.waypoints();
    let ordered: Vec<&str> = match optimized {
        Some(order) => order
            .iter()
            .filter_map(|&i| waypoints.get(i))
            .map(String::as_str)
            .collect(),
        None => waypoints.iter().map(String::as_str).collect(),
    };

    let mut pairs = vec![
        ("api", encode_param("1")),
        ("origin", encode_param(stops.origin())),
        ("destination", encode_param(stops.destination())),
        ("travelmode", encode_param(mode.as_str())),
    ];
    if !ordered.is_empty() {
        pairs.push(("waypoints", encode_param(&ordered.join("|"))));
    }

    format!("{}?{}", SHARE_BASE, join_query(pairs))
}
