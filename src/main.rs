use clap::Parser;
use route_mapper::{
    sdk::config::{self, MapsConfig},
    sdk::itinerary::Itinerary,
    sdk::maps::{
        build_share_link, static_map::parse_size, GoogleMapsProvider, MapsProvider,
        StaticMapRequest, TravelMode,
    },
    sdk::places::Stops,
    sdk::util::{
        format::{format_distance, format_duration},
        log::init_logging,
        rate_limit::Limiter,
    },
};
use std::{error::Error, fs, path::PathBuf};

/// Builds an optimized driving itinerary across a list of places using the
/// Google Maps APIs, prints a shareable link and saves a route map image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// [Optional] File with one place per line ('#' lines are comments).
    /// Defaults to the built-in Spain trip stops.
    #[arg(short, long)]
    places_file: Option<PathBuf>,

    /// Output path for the static map image
    #[arg(short, long, default_value = "route_map.png")]
    out: PathBuf,

    /// Static map image size, WxH
    #[arg(long, default_value = "800x600")]
    size: String,

    /// Language for Directions results
    #[arg(long, default_value = "en")]
    language: String,

    /// Travel mode
    #[arg(long, value_enum, default_value_t = TravelMode::Driving)]
    mode: TravelMode,

    /// Skip downloading the static map image
    #[arg(long)]
    no_map: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let stops = match &cli.places_file {
        Some(path) => Stops::from_file(path)?,
        None => Stops::builtin(),
    };

    println!("Planned stops:");
    for (i, place) in stops.places().iter().enumerate() {
        println!("  {}. {}", i + 1, place);
    }
    println!();

    let api_key = match MapsConfig::from_env() {
        MapsConfig::Keyed { api_key } => api_key,
        MapsConfig::Anonymous => {
            log::info!("No GOOGLE_MAPS_API_KEY found. Skipping Directions API call.");
            println!("Open this link for directions (original order):");
            println!("{}", build_share_link(&stops, None, cli.mode));
            println!();
            println!(
                "To compute an optimized route and download a map image, \
                 set GOOGLE_MAPS_API_KEY and re-run."
            );
            return Ok(());
        }
    };

    // Validate the size before spending any API quota on the route.
    if !cli.no_map {
        parse_size(&cli.size)?;
    }

    let limiter = Limiter::new();
    let provider = match config::base_url_override() {
        Some(base) => GoogleMapsProvider::with_base_urls(
            api_key,
            limiter,
            format!("{}/maps/api/directions/json", base),
            format!("{}/maps/api/staticmap", base),
        ),
        None => GoogleMapsProvider::new(api_key, limiter),
    };

    let route = provider.directions(&stops, cli.mode, &cli.language)?;
    let itinerary = Itinerary::assemble(&stops, &route)?;

    println!("Optimized itinerary:");
    for (i, place) in itinerary.ordered_places.iter().enumerate() {
        println!("  {}. {}", i + 1, place);
    }
    println!();
    println!("Total distance: {}", format_distance(itinerary.total_distance_m));
    println!("Total duration: {}", format_duration(itinerary.total_duration_s));

    println!();
    println!("Open this link for directions (optimized order):");
    println!(
        "{}",
        build_share_link(&stops, Some(&route.waypoint_order), cli.mode)
    );

    if cli.no_map {
        return Ok(());
    }

    // Image download is best-effort: the itinerary and link are already out.
    let request = StaticMapRequest::new(
        &cli.size,
        route.polyline.clone(),
        itinerary.ordered_places.clone(),
    )?;
    let saved = provider
        .static_map(&request)
        .and_then(|bytes| fs::write(&cli.out, bytes).map_err(Into::into));
    match saved {
        Ok(()) => {
            println!();
            println!("Static route map saved to: {}", cli.out.display());
        }
        Err(e) => {
            log::error!("Failed to save static map image: {}", e);
        }
    }

    Ok(())
}
