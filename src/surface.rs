//! Rendering boundary.
//!
//! The core never touches a DOM node or a drawing context directly. Hosts
//! implement these traits (the `web` crate does so for `HtmlElement` and
//! `HtmlCanvasElement`), and tests implement them with recording fakes.
//! Failures are reported as [`SurfaceError`]; the core logs and drops them.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::geometry::Rect;

/// A host-side drawing or styling call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface call failed: {0}")]
    Host(String),
}

/// An RGBA color with 8-bit channels and a floating alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// CSS `rgba(r,g,b,a)` form accepted by canvas fill styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Visual state written to a card once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// CSS length, e.g. `"12px"`.
    pub border_radius: String,
    /// CSS filter list.
    pub filter: String,
    /// Pose-derived properties. `None` for disabled cards, which keep
    /// whatever transform they last had.
    pub pose: Option<PoseStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoseStyle {
    pub transform: String,
    pub background_transform: String,
    pub box_shadow: String,
}

/// The element a card lives in.
pub trait CardSurface {
    /// Current bounding box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Write the per-tick style.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host rejects a property.
    fn apply_style(&mut self, style: &CardStyle) -> Result<(), SurfaceError>;

    /// Raise or lower the card in the stacking order.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host rejects the property.
    fn set_stacking(&mut self, z_index: i32) -> Result<(), SurfaceError>;
}

/// A 2D drawing target for particles.
pub trait ParticleSurface {
    /// Whether a drawing context is currently available. When it is not,
    /// the simulator skips the tick and tries again next frame.
    fn is_ready(&self) -> bool {
        true
    }

    /// Resize the backing store, in device pixels.
    fn resize(&mut self, width: f64, height: f64);

    /// Clear `[0, 0, width, height]`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host drawing call fails.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Fill a circle centered at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the host drawing call fails.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), SurfaceError>;
}
