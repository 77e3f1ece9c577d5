//! Marker overlays for static map requests.

use std::fmt;

use crate::coord::Coordinate;

/// Color of a map marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
    /// Any other color name understood by the static map endpoint.
    Custom(String),
}

impl MarkerColor {
    /// Look up a named color, falling back to a custom color name.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "red" => MarkerColor::Red,
            "blue" => MarkerColor::Blue,
            "green" => MarkerColor::Green,
            _ => MarkerColor::Custom(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Custom(name) => name,
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker overlay: position, color, and a single-character label.
///
/// Markers are owned by the client session and append-only; once added they
/// are never reordered or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: Coordinate,
    color: MarkerColor,
    label: char,
}

impl Marker {
    pub fn new(position: Coordinate, color: MarkerColor, label: char) -> Self {
        Self {
            position,
            color,
            label,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn color(&self) -> &MarkerColor {
        &self.color
    }

    pub fn label(&self) -> char {
        self.label
    }
}

impl fmt::Display for Marker {
    /// Renders the `lat,lng,colorlabel` form used in the `markers`
    /// query parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}{}", self.position, self.color, self.label)
    }
}
