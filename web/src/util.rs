//! Small conversions between browser values and core types.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use magic_cards::consts::DEFAULT_PARTICLE_COUNT;
use magic_cards::{CardId, Point};

/// Spread a `Math.random()` sample over the full `u64` seed range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn seed_from_unit(unit: f64) -> u64 {
    if !unit.is_finite() {
        return 0;
    }
    (unit.clamp(0.0, 1.0) * u64::MAX as f64) as u64
}

/// Parse an id previously handed out by `MagicCards::attach`.
///
/// # Errors
///
/// Returns the uuid parse error for anything that is not a hyphenated uuid.
pub fn parse_card_id(raw: &str) -> Result<CardId, uuid::Error> {
    CardId::parse_str(raw.trim())
}

/// Viewport coordinates of a mouse event.
#[must_use]
pub fn client_point(client_x: i32, client_y: i32) -> Point {
    Point { x: f64::from(client_x), y: f64::from(client_y) }
}

/// Pool size for a card overlay. Only a missing count falls back to the
/// default; zero means an empty overlay.
#[must_use]
pub fn particle_count(requested: Option<u32>) -> usize {
    requested.map_or(DEFAULT_PARTICLE_COUNT, |n| n as usize)
}
