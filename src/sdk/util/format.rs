/// Renders meters as kilometers: whole numbers from 10 km up, one decimal
/// below that.
pub fn format_distance(meters: u64) -> String {
    let km = meters as f64 / 1000.0;
    if km >= 10.0 {
        format!("{} km", km.round() as u64)
    } else {
        format!("{:.1} km", km)
    }
}

/// Renders seconds as "3h 25m". Hours are omitted when zero, minutes always
/// appear when there is no hours part.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(format!("{}m", minutes));
    }
    parts.join(" ")
}
