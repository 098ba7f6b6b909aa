//! Tilt-card engine: pointer-tracking 3D-ish cards with a particle overlay.
//!
//! Each card rotates and scales toward the pointer; the single active card
//! also runs a small particle animation clipped to its bounds. This crate
//! holds all of the logic and none of the browser plumbing: cards and
//! particle canvases are reached through the [`surface`] traits, and the
//! `web` crate implements those traits on top of `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coordinator`] | Card registry, active-card selection, frame loop |
//! | [`card`] | Per-card pose controller and activation |
//! | [`pose`] | Eased pose state and its CSS projection |
//! | [`particles`] | Particle pool simulation |
//! | [`scheduler`] | Cooperative per-frame task list |
//! | [`geometry`] | Points, rects, distance and containment |
//! | [`config`] | Tuning knobs and JSON overrides |
//! | [`surface`] | Rendering boundary traits |
//! | [`consts`] | Shared numeric constants |

pub mod card;
pub mod config;
pub mod consts;
pub mod coordinator;
pub mod geometry;
pub mod particles;
pub mod pose;
pub mod scheduler;
pub mod surface;


pub use card::{Card, CardId};
pub use config::{CardsConfig, ConfigError, ConfigOverrides};
pub use coordinator::{Action, Coordinator};
pub use geometry::{Point, Rect};
pub use particles::ParticleSimulator;
