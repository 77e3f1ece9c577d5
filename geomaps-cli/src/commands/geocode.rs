use anyhow::{Context, Result};
use geomaps::GeoClient;
use serde::Serialize;

use super::require_api_key;

#[derive(Serialize)]
struct GeocodeResponse {
    address: String,
    lat: f64,
    lng: f64,
}

pub fn run(api_key: Option<String>, address: String, json: bool) -> Result<()> {
    let api_key = require_api_key(api_key)?;
    let client = GeoClient::new(api_key).context("Failed to create client")?;

    let coord = client
        .geocode_address(&address)
        .with_context(|| format!("Failed to geocode '{}'", address))?;

    if json {
        let response = GeocodeResponse {
            address,
            lat: coord.lat,
            lng: coord.lng,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", coord);
    }

    Ok(())
}
