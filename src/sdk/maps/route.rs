/// Per-leg totals from a Directions response.
#[derive(Debug, Clone, Copy)]
pub struct LegSummary {
    pub distance_m: u64,
    pub duration_s: u64,
}

/// The parts of a Directions route this tool consumes.
#[derive(Debug, Clone)]
pub struct RouteInfo {
    /// Indices into the waypoint sub-list, in optimized visiting order.
    pub waypoint_order: Vec<usize>,
    pub legs: Vec<LegSummary>,
    /// Encoded overview polyline, empty when the API omitted it.
    pub polyline: String,
}
