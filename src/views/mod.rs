pub mod models;

pub use models::*;

use log::warn;

use crate::formatting::normalize;

/// Long-form date for display, or the raw string if it cannot be read
pub fn display_date(raw: &str) -> String {
    normalize(raw).unwrap_or_else(|e| {
        warn!("Showing unformatted date: {}", e);
        raw.to_string()
    })
}
