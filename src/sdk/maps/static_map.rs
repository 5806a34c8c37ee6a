use super::encode::{encode_param, encode_strict, join_query};
use super::error::MapsError;

/// Everything needed to build a Static Maps request for one route.
#[derive(Debug, Clone)]
pub struct StaticMapRequest {
    pub width: u32,
    pub height: u32,
    /// Encoded overview polyline from the Directions response.
    pub polyline: String,
    /// Stops in visiting order, one marker each.
    pub ordered_places: Vec<String>,
}

impl StaticMapRequest {
    pub fn new(
        size: &str,
        polyline: String,
        ordered_places: Vec<String>,
    ) -> Result<Self, MapsError> {
        let (width, height) = parse_size(size)?;
        Ok(Self {
            width,
            height,
            polyline,
            ordered_places,
        })
    }

    /// Builds the query string. The polyline is fully percent-encoded once;
    /// marker values keep the `|` and `:` separators literal.
    pub fn query(&self, api_key: &str) -> String {
        let mut pairs = vec![
            ("size", format!("{}x{}", self.width, self.height)),
            ("key", encode_param(api_key)),
            ("path", format!("enc:{}", encode_strict(&self.polyline))),
        ];
        for (idx, place) in self.ordered_places.iter().enumerate() {
            let value = match marker_label(idx + 1) {
                Some(label) => format!("color:blue|label:{}|{}", label, place),
                None => format!("color:blue|{}", place),
            };
            pairs.push(("markers", encode_param(&value)));
        }
        join_query(pairs)
    }
}

/// Parses a "WxH" size string into positive dimensions.
pub fn parse_size(size: &str) -> Result<(u32, u32), MapsError> {
    let bad = || MapsError::BadMapSize(size.to_string());
    let (w, h) = size.split_once('x').ok_or_else(bad)?;
    let width: u32 = w.parse().map_err(|_| bad())?;
    let height: u32 = h.parse().map_err(|_| bad())?;
    if width == 0 || height == 0 {
        return Err(bad());
    }
    Ok((width, height))
}

// Static Maps accepts single-character labels only: 1..9, then A..Z.
// Stops past the 35th get an unlabeled marker.
fn marker_label(position: usize) -> Option<char> {
    match position {
        1..=9 => char::from_digit(position as u32, 10),
        10..=35 => char::from_u32('A' as u32 + (position as u32 - 10)),
        _ => None,
    }
}
