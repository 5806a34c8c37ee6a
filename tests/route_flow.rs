use route_mapper::sdk::maps::route::{LegSummary, RouteInfo};
use route_mapper::sdk::maps::service::MapsProvider;
use route_mapper::sdk::maps::share::build_share_link;
use route_mapper::sdk::maps::static_map::StaticMapRequest;
use route_mapper::sdk::maps::types::TravelMode;
use route_mapper::{Itinerary, Stops};
use std::error::Error;

// A canned provider standing in for the Google endpoints.
struct StubProvider {
    route: RouteInfo,
    image: Vec<u8>,
}

impl MapsProvider for StubProvider {
    fn directions(
        &self,
        _stops: &Stops,
        _mode: TravelMode,
        _language: &str,
    ) -> Result<RouteInfo, Box<dyn Error>> {
        Ok(self.route.clone())
    }

    fn static_map(&self, _request: &StaticMapRequest) -> Result<Vec<u8>, Box<dyn Error>> {
        Ok(self.image.clone())
    }
}

fn spain_stops() -> Stops {
    Stops::new(vec![
        "Royal Monastery of El Escorial, San Lorenzo de El Escorial, Spain".into(),
        "Royal Palace of Madrid, Madrid, Spain".into(),
        "Almudena Cathedral, Madrid, Spain".into(),
        "San Ginés de Arlés Church, Madrid, Spain".into(),
        "Toledo Cathedral, Toledo, Spain".into(),
    ])
    .unwrap()
}

#[test]
fn keyed_flow_assembles_itinerary_link_and_map_request() {
    let stops = spain_stops();
    let provider = StubProvider {
        route: RouteInfo {
            waypoint_order: vec![1, 0, 2],
            legs: vec![
                LegSummary { distance_m: 48_000, duration_s: 2_700 },
                LegSummary { distance_m: 2_500, duration_s: 600 },
                LegSummary { distance_m: 1_100, duration_s: 420 },
                LegSummary { distance_m: 72_000, duration_s: 3_900 },
            ],
            polyline: "ynh~Fnnn@sB}@".into(),
        },
        image: vec![0x89, b'P', b'N', b'G'],
    };

    let route = provider
        .directions(&stops, TravelMode::Driving, "en")
        .unwrap();
    let itinerary = Itinerary::assemble(&stops, &route).unwrap();

    assert_eq!(
        itinerary.ordered_places,
        vec![
            "Royal Monastery of El Escorial, San Lorenzo de El Escorial, Spain",
            "Almudena Cathedral, Madrid, Spain",
            "Royal Palace of Madrid, Madrid, Spain",
            "San Ginés de Arlés Church, Madrid, Spain",
            "Toledo Cathedral, Toledo, Spain",
        ]
    );
    assert_eq!(itinerary.total_distance_m, 123_600);
    assert_eq!(itinerary.total_duration_s, 7_620);

    let link = build_share_link(&stops, Some(&route.waypoint_order), TravelMode::Driving);
    assert!(link.contains(
        "waypoints=Almudena%20Cathedral,%20Madrid,%20Spain|Royal%20Palace%20of%20Madrid,%20Madrid,%20Spain"
    ));

    let request = StaticMapRequest::new(
        "800x600",
        route.polyline.clone(),
        itinerary.ordered_places.clone(),
    )
    .unwrap();
    let query = request.query("KEY");
    assert!(query.contains("path=enc:ynh~Fnnn%40sB%7D%40"));
    assert!(query.contains("label:5|Toledo%20Cathedral"));

    let bytes = provider.static_map(&request).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
