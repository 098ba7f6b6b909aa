//! Card pose: the eased scale/tilt state and its CSS projection.
//!
//! Each card carries a `current` pose that follows a `target` pose through a
//! first-order low-pass filter (`current += (target - current) / divisor`).
//! The projection functions turn a pose into transform, shadow and filter
//! strings; they are pure so the exact output can be pinned in tests.

#[cfg(test)]
#[path = "pose_test.rs"]
mod pose_test;

use crate::config::CardsConfig;
use crate::consts::{BACKGROUND_PARALLAX, BACKGROUND_ZOOM, BRIGHTNESS_BIAS};
use crate::surface::PoseStyle;

/// Scale and tilt of a card. Rotations are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Pose {
    /// Flat, unscaled.
    pub const IDENTITY: Pose = Pose { scale: 1.0, rotate_x: 0.0, rotate_y: 0.0 };

    /// Move one step toward `target`. Each field eases independently and
    /// never overshoots for divisors of 1 or more.
    pub fn ease_toward(&mut self, target: &Pose, scale_divisor: f64, rotate_divisor: f64) {
        self.scale += (target.scale - self.scale) / scale_divisor;
        self.rotate_x += (target.rotate_x - self.rotate_x) / rotate_divisor;
        self.rotate_y += (target.rotate_y - self.rotate_y) / rotate_divisor;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 3D transform for the card body.
///
/// The depth translation grows with `scale - 1`; the trailing planar
/// translation offsets the tilt so the card stays centered.
#[must_use]
pub fn card_transform(pose: &Pose, perspective: f64) -> String {
    let depth = (pose.scale - 1.0) * (perspective / pose.scale);
    format!(
        "translateZ({depth}px) rotateX({}deg) rotateY({}deg) translateX({}px) translateY({}px)",
        pose.rotate_x, pose.rotate_y, -pose.rotate_y, -pose.rotate_x
    )
}

/// Parallax transform for the background layer.
#[must_use]
pub fn background_transform(pose: &Pose) -> String {
    format!(
        "translateX({}px) translateY({}px) scale({BACKGROUND_ZOOM})",
        -(pose.rotate_y * BACKGROUND_PARALLAX),
        pose.rotate_x * BACKGROUND_PARALLAX
    )
}

/// Drop shadow that lengthens and darkens as the card lifts.
#[must_use]
pub fn box_shadow(pose: &Pose) -> String {
    format!(
        "0 {}px {}px rgba(0,0,0,{})",
        pose.scale * 10.0 - 10.0,
        (pose.scale - 0.4) * 5.0,
        pose.scale * 0.2
    )
}

/// Brightness factor for the active card; tilting the top toward the viewer
/// brightens it.
#[must_use]
pub fn brightness(pose: &Pose, max_rotate_x: f64) -> f64 {
    (pose.rotate_x + max_rotate_x) / max_rotate_x + BRIGHTNESS_BIAS
}

/// CSS filter for an enabled card.
#[must_use]
pub fn filter(pose: &Pose, active: bool, max_rotate_x: f64) -> String {
    if active {
        format!("saturate(100%) brightness({})", brightness(pose, max_rotate_x))
    } else {
        "saturate(90%)".to_string()
    }
}

/// CSS filter for a disabled card.
pub const DISABLED_FILTER: &str = "saturate(0)";

/// All pose-derived properties at once.
#[must_use]
pub fn pose_style(pose: &Pose, config: &CardsConfig) -> PoseStyle {
    PoseStyle {
        transform: card_transform(pose, config.perspective),
        background_transform: background_transform(pose),
        box_shadow: box_shadow(pose),
    }
}
