use anyhow::{Context, Result};
use geomaps::{projection, Coordinate};
use serde::Serialize;

#[derive(Serialize)]
struct PanResponse {
    lat: f64,
    lng: f64,
}

pub fn run(lat: f64, lng: f64, dx: i32, dy: i32, zoom: u8, json: bool) -> Result<()> {
    let center = projection::pan(Coordinate::new(lat, lng), dx, dy, zoom)
        .context("Failed to compute pan")?;

    if json {
        let response = PanResponse {
            lat: center.lat,
            lng: center.lng,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", center);
    }

    Ok(())
}
