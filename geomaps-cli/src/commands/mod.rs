pub mod batch;
pub mod geocode;
pub mod map;
pub mod pan;

use anyhow::{Context, Result};

/// Resolve the API key from the global flag or environment.
pub fn require_api_key(api_key: Option<String>) -> Result<String> {
    api_key.context("GEOMAPS_API_KEY environment variable not set. Use --api-key or set GEOMAPS_API_KEY")
}
