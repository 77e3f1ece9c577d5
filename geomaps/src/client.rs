//! Session client for the geocoding and static map endpoints.
//!
//! A [`GeoClient`] holds the API key, the current map style, and the
//! append-only marker list, and performs one blocking HTTP round-trip per
//! operation. Sessions are cheap, caller-owned objects with no internal
//! locking; use one per thread.

use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::coord::Coordinate;
use crate::encode::percent_encode;
use crate::error::Result;
use crate::marker::{Marker, MarkerColor};
use crate::response::parse_geocode;

const GEOCODE_ENDPOINT: &str = "http://maps.google.com/maps/geo";
const STATIC_MAP_ENDPOINT: &str = "http://maps.google.com/staticmap";

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Rendering style of a static map.
///
/// [`MapStyle::Normal`] is the server default and contributes no `maptype`
/// parameter to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapStyle {
    /// Street map (server default).
    #[default]
    Normal,
    /// Satellite imagery.
    Satellite,
    /// Satellite imagery with street overlay.
    Hybrid,
}

impl MapStyle {
    /// Parse a style name. The empty string means the server default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "" | "normal" => Some(MapStyle::Normal),
            "satellite" => Some(MapStyle::Satellite),
            "hybrid" => Some(MapStyle::Hybrid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Normal => "normal",
            MapStyle::Satellite => "satellite",
            MapStyle::Hybrid => "hybrid",
        }
    }
}

/// Image format of a static map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Png8,
    Png16,
    Png32,
    Gif,
    Jpg,
}

impl ImageFormat {
    /// Parse a format name as it appears in the `format` query parameter.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "png8" => Some(ImageFormat::Png8),
            "png16" => Some(ImageFormat::Png16),
            "png32" => Some(ImageFormat::Png32),
            "gif" => Some(ImageFormat::Gif),
            "jpg" => Some(ImageFormat::Jpg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Png8 => "png8",
            ImageFormat::Png16 => "png16",
            ImageFormat::Png32 => "png32",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a [`GeoClient`] session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// A client session for the map endpoints.
///
/// # Example
///
/// ```ignore
/// use geomaps::{GeoClient, ImageFormat, MapStyle, MarkerColor};
///
/// let mut client = GeoClient::with_style("YOUR_API_KEY", MapStyle::Hybrid)?;
///
/// let center = client.geocode_address("Obelisco, Buenos Aires")?;
/// client.add_marker(center, MarkerColor::Red, 'A');
///
/// let png = client.retrieve_static_image(512, 512, center, 12, ImageFormat::Png, true)?;
/// std::fs::write("map.png", png)?;
/// ```
pub struct GeoClient {
    /// Google Maps API key, sent with every request.
    api_key: String,
    /// Current map style.
    style: MapStyle,
    /// Marker overlays in insertion order (insertion order = render order).
    markers: Vec<Marker>,
    /// Blocking HTTP client, built once per session.
    http: Client,
}

impl GeoClient {
    /// Create a session with the server-default map style.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, MapStyle::Normal, ClientConfig::default())
    }

    /// Create a session with an initial map style.
    pub fn with_style(api_key: impl Into<String>, style: MapStyle) -> Result<Self> {
        Self::with_config(api_key, style, ClientConfig::default())
    }

    /// Create a session with an initial map style and explicit configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        style: MapStyle,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            style,
            markers: Vec::new(),
            http,
        })
    }

    /// Change the map style for subsequent static map requests.
    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
    }

    /// Returns the current map style.
    pub fn style(&self) -> MapStyle {
        self.style
    }

    /// Append a marker to the session's overlay list.
    ///
    /// Markers render in insertion order; there is no removal operation.
    pub fn add_marker(&mut self, position: Coordinate, color: MarkerColor, label: char) {
        self.markers.push(Marker::new(position, color, label));
    }

    /// Returns the session's markers in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Build the geocoding request URL for a free-text address.
    pub fn geocode_url(&self, address: &str) -> String {
        format!(
            "{}?q={}&output=csv&key={}",
            GEOCODE_ENDPOINT,
            percent_encode(address),
            self.api_key
        )
    }

    /// Build the static map request URL.
    ///
    /// Parameter order is fixed: `center`, `markers` (only when
    /// `draw_markers` is set and the session has markers), `format`, `zoom`,
    /// `size`, `maptype` (only for non-default styles), `key`. The endpoint
    /// predates tolerant parsing, so the order is load-bearing.
    pub fn static_map_url(
        &self,
        width: u32,
        height: u32,
        center: Coordinate,
        zoom: u8,
        format: ImageFormat,
        draw_markers: bool,
    ) -> String {
        let mut url = format!("{}?center={}", STATIC_MAP_ENDPOINT, center);

        if draw_markers && !self.markers.is_empty() {
            let overlays: Vec<String> = self.markers.iter().map(|m| m.to_string()).collect();
            url.push_str("&markers=");
            url.push_str(&overlays.join("|"));
        }

        url.push_str(&format!(
            "&format={}&zoom={}&size={}x{}",
            format, zoom, width, height
        ));

        if self.style != MapStyle::Normal {
            url.push_str("&maptype=");
            url.push_str(self.style.as_str());
        }

        url.push_str("&key=");
        url.push_str(&self.api_key);

        url
    }

    /// Geocode a free-text address to a coordinate.
    ///
    /// Performs one blocking GET against the geocoding endpoint and parses
    /// the CSV body.
    ///
    /// # Errors
    ///
    /// - [`crate::GeoError::Transport`] on connection, timeout, or non-2xx
    ///   failures.
    /// - [`crate::GeoError::Geocode`] when the endpoint reports a failure
    ///   status (unknown address, bad key, quota, ...).
    /// - [`crate::GeoError::MalformedResponse`] when the body cannot be
    ///   parsed.
    pub fn geocode_address(&self, address: &str) -> Result<Coordinate> {
        let body = self.fetch(&self.geocode_url(address))?;
        parse_geocode(&String::from_utf8_lossy(&body))
    }

    /// Fetch a static map image centered on `center`, returning the raw
    /// encoded image bytes.
    ///
    /// The session's markers are included only when `draw_markers` is set.
    /// `zoom` is passed through as-is; the endpoint accepts 1 to 21 and
    /// validation is the caller's responsibility.
    pub fn retrieve_static_image(
        &self,
        width: u32,
        height: u32,
        center: Coordinate,
        zoom: u8,
        format: ImageFormat,
        draw_markers: bool,
    ) -> Result<Vec<u8>> {
        self.fetch(&self.static_map_url(width, height, center, zoom, format, draw_markers))
    }

    /// Fetch a static map image and decode it.
    ///
    /// # Errors
    ///
    /// In addition to the [`Self::retrieve_static_image`] errors, returns
    /// [`crate::GeoError::Decode`] when the response bytes are not a valid
    /// image.
    #[cfg(feature = "decode")]
    pub fn retrieve_static_map(
        &self,
        width: u32,
        height: u32,
        center: Coordinate,
        zoom: u8,
        format: ImageFormat,
        draw_markers: bool,
    ) -> Result<image::DynamicImage> {
        let bytes =
            self.retrieve_static_image(width, height, center, zoom, format, draw_markers)?;
        Ok(image::load_from_memory(&bytes)?)
    }

    /// One blocking GET; non-2xx statuses surface as transport errors.
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
