//! Geocode response parsing and status-code mapping.
//!
//! The geocoding endpoint answers in a bare CSV form,
//! `<status>,<accuracy>,<lat>,<lng>`, with no quoting or escaping. Field
//! splitting is therefore a plain substring split on the delimiter.

use std::fmt;

use crate::coord::Coordinate;
use crate::error::{GeoError, Result};

/// Status category reported by the geocoding endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeStatus {
    /// 400
    BadRequest,
    /// 500
    ServerError,
    /// 601
    MissingQuery,
    /// 602
    UnknownAddress,
    /// 603
    UnavailableAddress,
    /// 604
    UnknownDirections,
    /// 610
    BadApiKey,
    /// 620
    TooManyQueries,
    /// Any status code not in the fixed table.
    Generic,
}

impl GeocodeStatus {
    /// Map a numeric status code to its category.
    pub fn from_code(code: i32) -> Self {
        match code {
            400 => GeocodeStatus::BadRequest,
            500 => GeocodeStatus::ServerError,
            601 => GeocodeStatus::MissingQuery,
            602 => GeocodeStatus::UnknownAddress,
            603 => GeocodeStatus::UnavailableAddress,
            604 => GeocodeStatus::UnknownDirections,
            610 => GeocodeStatus::BadApiKey,
            620 => GeocodeStatus::TooManyQueries,
            _ => GeocodeStatus::Generic,
        }
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GeocodeStatus::BadRequest => "Bad request",
            GeocodeStatus::ServerError => "Server error",
            GeocodeStatus::MissingQuery => "Missing query",
            GeocodeStatus::UnknownAddress => "Unknown address",
            GeocodeStatus::UnavailableAddress => "Unavailable address",
            GeocodeStatus::UnknownDirections => "Unknown directions",
            GeocodeStatus::BadApiKey => "Bad API key",
            GeocodeStatus::TooManyQueries => "Too many queries",
            GeocodeStatus::Generic => "Generic error",
        };
        f.write_str(message)
    }
}

/// Split a response body on every occurrence of `delimiter`.
///
/// Empty fields are preserved and the remainder after the last delimiter is
/// always returned, so the result holds at least one field.
pub fn split_fields(body: &str, delimiter: char) -> Vec<&str> {
    body.split(delimiter).collect()
}

/// Parse a geocode response body into a coordinate.
///
/// # Errors
///
/// - [`GeoError::Geocode`] when the endpoint reports a non-200 status.
/// - [`GeoError::MalformedResponse`] when the status field is not numeric,
///   the body has fewer than 4 fields, or the coordinate fields do not
///   parse as numbers.
pub fn parse_geocode(body: &str) -> Result<Coordinate> {
    let fields = split_fields(body, ',');

    let status = fields[0];
    if status.trim() != "200" {
        let code: i32 = status
            .trim()
            .parse()
            .map_err(|_| GeoError::MalformedResponse {
                reason: format!("non-numeric status field: {:?}", status),
            })?;
        return Err(GeoError::Geocode {
            status: GeocodeStatus::from_code(code),
        });
    }

    if fields.len() < 4 {
        return Err(GeoError::MalformedResponse {
            reason: format!("expected 4 fields, got {}", fields.len()),
        });
    }

    let lat: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| GeoError::MalformedResponse {
            reason: format!("non-numeric latitude field: {:?}", fields[2]),
        })?;
    let lng: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| GeoError::MalformedResponse {
            reason: format!("non-numeric longitude field: {:?}", fields[3]),
        })?;

    Ok(Coordinate::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_geocode_body() {
        assert_eq!(
            split_fields("200,4,-34.6,-58.4", ','),
            vec!["200", "4", "-34.6", "-58.4"]
        );
    }

    #[test]
    fn test_split_preserves_empty_fields() {
        assert_eq!(split_fields("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_fields("a,", ','), vec!["a", ""]);
        assert_eq!(split_fields("", ','), vec![""]);
    }

    #[test]
    fn test_status_code_table() {
        assert_eq!(GeocodeStatus::from_code(400), GeocodeStatus::BadRequest);
        assert_eq!(GeocodeStatus::from_code(500), GeocodeStatus::ServerError);
        assert_eq!(GeocodeStatus::from_code(601), GeocodeStatus::MissingQuery);
        assert_eq!(GeocodeStatus::from_code(602), GeocodeStatus::UnknownAddress);
        assert_eq!(GeocodeStatus::from_code(603), GeocodeStatus::UnavailableAddress);
        assert_eq!(GeocodeStatus::from_code(604), GeocodeStatus::UnknownDirections);
        assert_eq!(GeocodeStatus::from_code(610), GeocodeStatus::BadApiKey);
        assert_eq!(GeocodeStatus::from_code(620), GeocodeStatus::TooManyQueries);
        assert_eq!(GeocodeStatus::from_code(999), GeocodeStatus::Generic);
        assert_eq!(GeocodeStatus::from_code(-1), GeocodeStatus::Generic);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GeocodeStatus::BadApiKey.to_string(), "Bad API key");
        assert_eq!(GeocodeStatus::Generic.to_string(), "Generic error");
    }

    #[test]
    fn test_parse_success() {
        let coord = parse_geocode("200,4,40.0,-70.0").unwrap();
        assert_eq!(coord.lat, 40.0);
        assert_eq!(coord.lng, -70.0);
    }

    #[test]
    fn test_parse_trailing_newline() {
        let coord = parse_geocode("200,4,-34.6,-58.4\n").unwrap();
        assert_eq!(coord.lng, -58.4);
    }

    #[test]
    fn test_parse_unknown_address() {
        let err = parse_geocode("602,0,0,0").unwrap_err();
        assert!(matches!(
            err,
            GeoError::Geocode {
                status: GeocodeStatus::UnknownAddress
            }
        ));
    }

    #[test]
    fn test_parse_non_numeric_status() {
        let err = parse_geocode("oops,0,0,0").unwrap_err();
        assert!(matches!(err, GeoError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_missing_fields() {
        let err = parse_geocode("200,4").unwrap_err();
        assert!(matches!(err, GeoError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_non_numeric_coordinates() {
        let err = parse_geocode("200,4,abc,-58.4").unwrap_err();
        assert!(matches!(err, GeoError::MalformedResponse { .. }));
    }
}
