use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use geomaps::{Coordinate, GeoClient, ImageFormat, MapStyle, MarkerColor};

use super::require_api_key;

#[allow(clippy::too_many_arguments)]
pub fn run(
    api_key: Option<String>,
    style: String,
    lat: f64,
    lng: f64,
    zoom: u8,
    width: u32,
    height: u32,
    format: String,
    output: PathBuf,
    markers: Vec<String>,
    no_markers: bool,
) -> Result<()> {
    let api_key = require_api_key(api_key)?;

    let style = MapStyle::from_name(&style)
        .with_context(|| format!("Unknown map style: {}. Use normal, satellite, or hybrid", style))?;
    let format = ImageFormat::from_name(&format).with_context(|| {
        format!(
            "Unknown image format: {}. Use png, png8, png16, png32, gif, or jpg",
            format
        )
    })?;

    // The library passes zoom through untouched; range-check it here
    if !(1..=21).contains(&zoom) {
        bail!("Zoom level {} out of range (valid: 1-21)", zoom);
    }

    let mut client = GeoClient::with_style(api_key, style).context("Failed to create client")?;

    for spec in &markers {
        let (position, color, label) = parse_marker(spec)?;
        client.add_marker(position, color, label);
    }

    let bytes = client
        .retrieve_static_image(width, height, Coordinate::new(lat, lng), zoom, format, !no_markers)
        .context("Failed to retrieve static map")?;

    fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Map written to: {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

/// Parse a `lat,lng,color,label` marker argument.
fn parse_marker(spec: &str) -> Result<(Coordinate, MarkerColor, char)> {
    let parts: Vec<&str> = spec.split(',').collect();
    if parts.len() != 4 {
        bail!("Marker must be \"lat,lng,color,label\", got: {}", spec);
    }

    let lat: f64 = parts[0]
        .trim()
        .parse()
        .with_context(|| format!("Invalid marker latitude: {}", parts[0]))?;
    let lng: f64 = parts[1]
        .trim()
        .parse()
        .with_context(|| format!("Invalid marker longitude: {}", parts[1]))?;
    let color = MarkerColor::from_name(parts[2].trim());

    let mut chars = parts[3].trim().chars();
    let label = chars
        .next()
        .with_context(|| format!("Marker label missing in: {}", spec))?;
    if chars.next().is_some() {
        bail!("Marker label must be a single character, got: {}", parts[3]);
    }

    Ok((Coordinate::new(lat, lng), color, label))
}
