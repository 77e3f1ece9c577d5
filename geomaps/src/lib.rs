//! # geomaps - legacy Google Maps client library
//!
//! Client for the legacy Google Geocoding and Static Maps HTTP APIs:
//! geocode free-text addresses, fetch server-rendered map images with
//! marker overlays, and convert between geographic coordinates and the
//! global pixel plane used for map panning math.
//!
//! ## Features
//!
//! - **Geocoding**: free-text address to coordinates over the CSV endpoint
//! - **Static maps**: server-rendered images with markers and map styles
//! - **Panning math**: pixel-offset panning on the Mercator pixel plane
//! - **Blocking**: one synchronous HTTP round-trip per call, no async runtime
//!
//! ## Quick Start
//!
//! ```ignore
//! use geomaps::{projection, GeoClient, ImageFormat, MarkerColor};
//!
//! let mut client = GeoClient::new("YOUR_API_KEY")?;
//!
//! // Address -> coordinates
//! let center = client.geocode_address("Obelisco, Buenos Aires")?;
//!
//! // Fetch a 512x512 map image centered there, with one marker
//! client.add_marker(center, MarkerColor::Red, 'A');
//! let png = client.retrieve_static_image(512, 512, center, 12, ImageFormat::Png, true)?;
//!
//! // New center after the user drags 120px west at zoom 12
//! let panned = projection::pan(center, -120, 0, 12)?;
//! ```
//!
//! ## Optional Features
//!
//! - `decode` - decode fetched map images into an `image::DynamicImage`
//!   via `GeoClient::retrieve_static_map`
//!
//! ## Wire Formats
//!
//! The geocoding endpoint answers in a bare CSV form
//! (`<status>,<accuracy>,<lat>,<lng>`); the static map endpoint takes its
//! parameters in a fixed query-string order. Both are reproduced here
//! character for character, because the service predates any tolerant
//! parsing on either side.

pub mod client;
pub mod coord;
pub mod encode;
pub mod error;
pub mod marker;
pub mod projection;
pub mod response;

// Re-export main types at crate root for convenience
pub use client::{ClientConfig, GeoClient, ImageFormat, MapStyle};
pub use coord::{Coordinate, PixelPoint};
pub use error::{GeoError, Result};
pub use marker::{Marker, MarkerColor};
pub use response::GeocodeStatus;
