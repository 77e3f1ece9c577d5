//! Mercator projection between geographic coordinates and the global pixel
//! plane.
//!
//! The pixel plane is a fixed-resolution square of side `2 * OFFSET` pixels
//! covering the whole projected world. Panning works by shifting a projected
//! point by screen-pixel deltas scaled to the current zoom level and
//! projecting back. Both directions round to whole pixels (half rounds up),
//! a deliberately lossy step kept for compatibility with the tiling scheme
//! this plane belongs to.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::coord::{Coordinate, PixelPoint};
use crate::error::{GeoError, Result};

/// Half the side length of the global pixel plane (2^28 pixels).
pub const OFFSET: f64 = 268_435_456.0;

/// Radius of the pixel plane in pixels.
pub const RADIUS: f64 = OFFSET / PI;

/// Highest zoom level of the tiling scheme.
pub const MAX_ZOOM: u8 = 21;

/// Round half up: `floor(v)` unless the fractional part is >= 0.5.
///
/// Not banker's rounding; `round_half_up(-0.5)` is 0, not -1.
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        v.ceil()
    } else {
        floor
    }
}

/// Project a geographic coordinate onto the global pixel plane.
///
/// `x` grows eastward from the antimeridian, `y` grows southward from the
/// north edge; (0°, 0°) lands at the plane center `(OFFSET, OFFSET)`.
pub fn to_pixel(coord: Coordinate) -> PixelPoint {
    let sin_lat = coord.lat.to_radians().sin();
    PixelPoint::new(
        round_half_up(OFFSET + RADIUS * coord.lng.to_radians()),
        round_half_up(OFFSET - RADIUS * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / 2.0),
    )
}

/// Project a pixel-plane point back to a geographic coordinate.
///
/// Near-inverse of [`to_pixel`]: lossy by up to one pixel of rounding.
pub fn to_coord(point: PixelPoint) -> Coordinate {
    let lng = ((round_half_up(point.x) - OFFSET) / RADIUS).to_degrees();
    let lat =
        (FRAC_PI_2 - 2.0 * ((round_half_up(point.y) - OFFSET) / RADIUS).exp().atan()).to_degrees();
    Coordinate::new(lat, lng)
}

/// Compute the map center after panning by a screen-pixel offset.
///
/// `delta_x` and `delta_y` are the drag distance in screen pixels; positive
/// `delta_x` pans east, positive `delta_y` pans south. The deltas are scaled
/// onto the pixel plane by `1 << (MAX_ZOOM - zoom)`.
///
/// # Errors
///
/// Returns [`GeoError::InvalidZoom`] if `zoom` exceeds [`MAX_ZOOM`] (the
/// shift amount would be negative).
pub fn pan(center: Coordinate, delta_x: i32, delta_y: i32, zoom: u8) -> Result<Coordinate> {
    if zoom > MAX_ZOOM {
        return Err(GeoError::InvalidZoom { zoom });
    }

    let scale = 1i64 << (MAX_ZOOM - zoom);
    let pixel = to_pixel(center);

    Ok(to_coord(PixelPoint::new(
        pixel.x + (i64::from(delta_x) * scale) as f64,
        pixel.y + (i64::from(delta_y) * scale) as f64,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One pixel on the plane is ~7e-7 degrees of longitude.
    const EPSILON: f64 = 1e-5;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-0.6), -1.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn test_plane_anchors() {
        let center = to_pixel(Coordinate::new(0.0, 0.0));
        assert_eq!(center.x, OFFSET);
        assert_eq!(center.y, OFFSET);

        assert_eq!(to_pixel(Coordinate::new(0.0, 180.0)).x, 2.0 * OFFSET);
        assert_eq!(to_pixel(Coordinate::new(0.0, -180.0)).x, 0.0);
    }

    #[test]
    fn test_round_trip_is_lossy_within_a_pixel() {
        let coords = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(40.7128, -74.0060),
            Coordinate::new(-34.6037, -58.3816),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(85.0, 179.9),
            Coordinate::new(-85.0, -179.9),
        ];

        for c in coords {
            let back = to_coord(to_pixel(c));
            assert!((back.lat - c.lat).abs() < EPSILON, "lat drift for {}", c);
            assert!((back.lng - c.lng).abs() < EPSILON, "lng drift for {}", c);
        }
    }

    #[test]
    fn test_pan_zero_delta_is_identity() {
        let c = Coordinate::new(-34.6037, -58.3816);
        let panned = pan(c, 0, 0, 21).unwrap();

        assert!((panned.lat - c.lat).abs() < EPSILON);
        assert!((panned.lng - c.lng).abs() < EPSILON);
    }

    #[test]
    fn test_pan_direction() {
        let c = Coordinate::new(10.0, 20.0);

        let east = pan(c, 100, 0, 10).unwrap();
        assert!(east.lng > c.lng);
        assert!((east.lat - c.lat).abs() < EPSILON);

        let south = pan(c, 0, 100, 10).unwrap();
        assert!(south.lat < c.lat);
        assert!((south.lng - c.lng).abs() < EPSILON);
    }

    #[test]
    fn test_pan_scales_with_zoom() {
        let c = Coordinate::new(0.0, 0.0);

        // Same drag moves the center 2^10 times further at zoom 1 than 11
        let coarse = pan(c, 10, 0, 1).unwrap().lng - c.lng;
        let fine = pan(c, 10, 0, 11).unwrap().lng - c.lng;
        assert!((coarse / fine - 1024.0).abs() < 1.0);
    }

    #[test]
    fn test_pan_at_zoom_zero() {
        let panned = pan(Coordinate::new(0.0, 0.0), 1, 1, 0).unwrap();
        assert!(panned.lng > 0.0);
        assert!(panned.lat < 0.0);
    }

    #[test]
    fn test_pan_rejects_zoom_beyond_max() {
        let result = pan(Coordinate::new(0.0, 0.0), 1, 1, 22);
        assert!(matches!(result, Err(GeoError::InvalidZoom { zoom: 22 })));
    }
}
