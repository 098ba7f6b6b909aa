//! Shared numeric constants for the magic-cards crate.

// ── Particles ───────────────────────────────────────────────────

/// Distance a particle may drift outside the viewport before it is dropped.
pub const PARTICLE_MARGIN: f64 = 50.0;

/// Fade-phase advance per tick. One pulse lasts about `2π / rate` ticks.
pub const PARTICLE_FADE_RATE: f64 = 0.01;

/// Peak alpha of the pulsing fade.
pub const PARTICLE_MAX_ALPHA: f64 = 0.3;

/// Alpha given to freshly edge-spawned particles.
pub const PARTICLE_SPAWN_ALPHA: f64 = 1.0;

/// Radius range, in pixels.
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_MAX: f64 = 2.5;

/// Initial fade phase range.
pub const PARTICLE_PHASE_MAX: f64 = 10.0;

/// How far outside an edge a new particle is placed.
pub const PARTICLE_EDGE_OFFSET: f64 = 1.0;

/// Outer bound for any velocity component.
pub const PARTICLE_SPEED_MAX: f64 = 0.2;

/// Minimum inward speed for edge-spawned particles.
pub const PARTICLE_SPEED_INWARD_MIN: f64 = 0.1;

/// Particle tint (r, g, b).
pub const PARTICLE_TINT: (u8, u8, u8) = (227, 255, 220);

/// Pool size used by hosts that do not specify one.
pub const DEFAULT_PARTICLE_COUNT: usize = 30;

// ── Card presentation ───────────────────────────────────────────

/// Stacking order of the active card.
pub const ACTIVE_Z_INDEX: i32 = 100;

/// Stacking order of every other card.
pub const INACTIVE_Z_INDEX: i32 = 1;

/// Background parallax factor relative to the card rotation.
pub const BACKGROUND_PARALLAX: f64 = 0.7;

/// Fixed zoom applied to the background layer.
pub const BACKGROUND_ZOOM: f64 = 1.2;

/// Constant term added to the active brightness ratio.
pub const BRIGHTNESS_BIAS: f64 = 0.4 * 0.8;
