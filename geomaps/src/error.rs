//! Error types for the geomaps library.

use thiserror::Error;

use crate::response::GeocodeStatus;

/// Errors that can occur when talking to the map endpoints.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Network failure while fetching from an endpoint (connection,
    /// timeout, or non-2xx response).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The geocode response body did not match the expected CSV form.
    #[error("Malformed geocode response: {reason}")]
    MalformedResponse { reason: String },

    /// The geocoding endpoint reported a failure status.
    #[error("Geocode failed: {status}")]
    Geocode { status: GeocodeStatus },

    /// Pan zoom level outside the tiling scheme.
    #[error("Zoom level out of range: {zoom} (valid: 0 to 21)")]
    InvalidZoom { zoom: u8 },

    /// Fetched bytes are not a decodable image.
    #[cfg(feature = "decode")]
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type alias using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeoError::Geocode {
            status: GeocodeStatus::BadApiKey,
        };
        assert!(err.to_string().contains("Bad API key"));

        let err = GeoError::MalformedResponse {
            reason: "expected 4 fields, got 2".to_string(),
        };
        assert!(err.to_string().contains("4 fields"));

        let err = GeoError::InvalidZoom { zoom: 22 };
        assert!(err.to_string().contains("22"));
    }
}
