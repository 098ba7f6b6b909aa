//! Per-card pose controller.
//!
//! A `Card` owns the host element it styles (through [`CardSurface`]), its
//! eased pose, its last measured geometry and an optional particle overlay.
//! The coordinator writes `target` and the active flag; [`Card::update`]
//! runs once per frame to ease `current` toward `target` and push the
//! resulting style to the host.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use uuid::Uuid;

use crate::config::CardsConfig;
use crate::consts::{ACTIVE_Z_INDEX, INACTIVE_Z_INDEX};
use crate::geometry::{Point, Rect};
use crate::particles::ParticleSimulator;
use crate::pose::{self, DISABLED_FILTER, Pose};
use crate::scheduler::{FrameScheduler, Task};
use crate::surface::{CardStyle, CardSurface};

/// Unique identifier for a card.
pub type CardId = Uuid;

pub struct Card {
    id: CardId,
    surface: Box<dyn CardSurface>,
    particles: Option<ParticleSimulator>,
    current: Pose,
    target: Pose,
    rect: Rect,
    center: Point,
    active: bool,
    disabled: bool,
    radius: f64,
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("current", &self.current)
            .field("target", &self.target)
            .field("active", &self.active)
            .field("disabled", &self.disabled)
            .field("particles", &self.particles)
            .finish_non_exhaustive()
    }
}

impl Card {
    /// Wrap a host element. The element is measured right away so the card
    /// can be selected before its first frame.
    #[must_use]
    pub fn new(surface: Box<dyn CardSurface>) -> Self {
        let rect = surface.bounding_rect();
        Self {
            id: Uuid::new_v4(),
            surface,
            particles: None,
            current: Pose::IDENTITY,
            target: Pose::IDENTITY,
            rect,
            center: rect.center(),
            active: false,
            disabled: false,
            radius: 0.0,
        }
    }

    /// Attach a particle overlay that runs while the card is active.
    #[must_use]
    pub fn with_particles(mut self, mut particles: ParticleSimulator) -> Self {
        particles.set_size(self.rect.width, self.rect.height);
        self.particles = Some(particles);
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Bounding box as of the last measurement.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn current_pose(&self) -> Pose {
        self.current
    }

    #[must_use]
    pub fn target_pose(&self) -> Pose {
        self.target
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn particles(&self) -> Option<&ParticleSimulator> {
        self.particles.as_ref()
    }

    // --- Host setters ---

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Corner radius in pixels.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Change the overlay's target pool size. Returns `false` when the card
    /// has no overlay. A running pool converges one spawn per tick; extra
    /// particles leave as they drift out.
    pub fn set_particle_count(&mut self, count: usize) -> bool {
        let Some(particles) = self.particles.as_mut() else {
            return false;
        };
        particles.set_count(count);
        true
    }

    pub fn set_target(&mut self, target: Pose) {
        self.target = target;
    }

    // --- Per-frame ---

    /// Re-read the bounding box from the host and resize the overlay to it.
    pub fn refresh_geometry(&mut self) {
        self.rect = self.surface.bounding_rect();
        self.center = self.rect.center();
        if let Some(particles) = self.particles.as_mut() {
            particles.set_size(self.rect.width, self.rect.height);
        }
    }

    /// One frame of pose work.
    ///
    /// Disabled cards only get their radius and a grey filter; their pose,
    /// geometry and overlay are left untouched.
    pub fn update(&mut self, config: &CardsConfig) {
        let border_radius = format!("{}px", self.radius);
        if self.disabled {
            self.write_style(&CardStyle {
                border_radius,
                filter: DISABLED_FILTER.to_string(),
                pose: None,
            });
            return;
        }

        self.refresh_geometry();
        self.current.ease_toward(&self.target, config.scale_easing, config.rotate_easing);

        self.write_style(&CardStyle {
            border_radius,
            filter: pose::filter(&self.current, self.active, config.max_rotate_x),
            pose: Some(pose::pose_style(&self.current, config)),
        });
    }

    /// Flip the active flag. Returns `true` only on an actual change, in
    /// which case the overlay is started or stopped and the stacking order
    /// updated.
    pub(crate) fn set_active(&mut self, active: bool, scheduler: &mut FrameScheduler) -> bool {
        if active == self.active {
            return false;
        }
        self.active = active;
        log::debug!("card {} active={active}", self.id);

        if let Some(particles) = self.particles.as_mut() {
            if active {
                particles.start(scheduler, Task::Particles(self.id));
            } else {
                particles.stop(scheduler);
            }
        }

        let z_index = if active { ACTIVE_Z_INDEX } else { INACTIVE_Z_INDEX };
        if let Err(err) = self.surface.set_stacking(z_index) {
            log::warn!("card {} stacking update failed: {err}", self.id);
        }
        true
    }

    /// Advance the overlay, if any.
    pub fn tick_particles(&mut self) {
        if let Some(particles) = self.particles.as_mut() {
            particles.tick();
        }
    }

    /// Stop the overlay ahead of removal from the registry.
    pub(crate) fn detach(&mut self, scheduler: &mut FrameScheduler) {
        if let Some(particles) = self.particles.as_mut() {
            particles.stop(scheduler);
        }
    }

    fn write_style(&mut self, style: &CardStyle) {
        if let Err(err) = self.surface.apply_style(style) {
            log::warn!("card {} style update failed: {err}", self.id);
        }
    }
}
