//! Basic example demonstrating geomaps library usage.
//!
//! Run with: GEOMAPS_API_KEY=... cargo run --example basic -- "Obelisco, Buenos Aires"

use std::env;

use geomaps::{projection, GeoClient, GeoError};

fn main() -> Result<(), GeoError> {
    let api_key = env::var("GEOMAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Set GEOMAPS_API_KEY to your Google Maps API key");
        std::process::exit(1);
    });

    let address = env::args()
        .nth(1)
        .unwrap_or_else(|| "1600 Amphitheatre Parkway, Mountain View".to_string());

    let client = GeoClient::new(api_key)?;

    match client.geocode_address(&address) {
        Ok(center) => {
            println!("{}: {}", address, center);

            // New center after dragging 100px east and 50px north at zoom 12
            let panned = projection::pan(center, 100, -50, 12)?;
            println!("After pan: {}", panned);
        }
        Err(GeoError::Geocode { status }) => {
            println!("{}: geocoder returned \"{}\"", address, status);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
