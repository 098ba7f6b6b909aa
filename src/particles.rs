//! Particle overlay for the active card.
//!
//! A simulator owns a bounded pool of drifting dots confined to a rectangular
//! viewport (the card's size). Starting it seeds the pool uniformly inside
//! the viewport; afterwards dots that wander more than
//! [`PARTICLE_MARGIN`](crate::consts::PARTICLE_MARGIN) outside are dropped and
//! the pool is refilled one edge-spawned dot per tick.
//!
//! The simulator does not own a timer. `start` registers a
//! [`Task::Particles`] with the coordinator's [`FrameScheduler`] and `stop`
//! cancels it; the coordinator calls [`ParticleSimulator::tick`] when the
//! task comes due.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    PARTICLE_EDGE_OFFSET, PARTICLE_FADE_RATE, PARTICLE_MARGIN, PARTICLE_MAX_ALPHA, PARTICLE_PHASE_MAX,
    PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, PARTICLE_SPAWN_ALPHA, PARTICLE_SPEED_INWARD_MIN, PARTICLE_SPEED_MAX,
    PARTICLE_TINT,
};
use crate::scheduler::{FrameScheduler, Task, TaskHandle};
use crate::surface::{ParticleSurface, Rgba};

/// A single animated dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius in pixels.
    pub r: f64,
    pub alpha: f64,
    /// Fade phase in radians.
    pub phase: f64,
}

impl Particle {
    /// Whether the dot is still within the viewport plus margin.
    #[must_use]
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        self.x > -PARTICLE_MARGIN
            && self.x < width + PARTICLE_MARGIN
            && self.y > -PARTICLE_MARGIN
            && self.y < height + PARTICLE_MARGIN
    }
}

/// Viewport edge a particle enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Random velocity that carries a dot inward from this edge.
    ///
    /// The inward component is at least [`PARTICLE_SPEED_INWARD_MIN`]; the
    /// parallel component spans the full range so dots drift diagonally.
    pub fn velocity(self, rng: &mut impl Rng) -> (f64, f64) {
        let any = -PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX;
        let inward = PARTICLE_SPEED_INWARD_MIN..PARTICLE_SPEED_MAX;
        let outward = -PARTICLE_SPEED_MAX..-PARTICLE_SPEED_INWARD_MIN;
        match self {
            Edge::Top => (rng.random_range(any), rng.random_range(inward)),
            Edge::Right => (rng.random_range(outward), rng.random_range(any)),
            Edge::Bottom => (rng.random_range(any), rng.random_range(outward)),
            Edge::Left => (rng.random_range(inward), rng.random_range(any)),
        }
    }
}

/// Integer-ish position along a side of `length`, in `(0, length]`.
fn side_pos(rng: &mut impl Rng, length: f64) -> f64 {
    (rng.random::<f64>() * length).ceil()
}

pub struct ParticleSimulator {
    surface: Box<dyn ParticleSurface>,
    width: f64,
    height: f64,
    count: usize,
    fade_rate: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
    tick_loop: Option<TaskHandle>,
}

impl std::fmt::Debug for ParticleSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSimulator")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("count", &self.count)
            .field("particles", &self.particles.len())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl ParticleSimulator {
    /// Create a stopped simulator with an empty pool. `seed` drives every
    /// random draw so runs are reproducible.
    #[must_use]
    pub fn new(surface: Box<dyn ParticleSurface>, count: usize, seed: u64) -> Self {
        Self {
            surface,
            width: 0.0,
            height: 0.0,
            count,
            fade_rate: PARTICLE_FADE_RATE,
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            tick_loop: None,
        }
    }

    // --- Lifecycle ---

    /// Seed a fresh pool and begin ticking. No-op if already running.
    pub fn start(&mut self, scheduler: &mut FrameScheduler, task: Task) {
        if self.is_running() {
            return;
        }
        self.particles.clear();
        self.seed_pool();
        self.tick_loop = Some(scheduler.spawn(task));
        log::debug!("particles started: {} seeded in {}x{}", self.particles.len(), self.width, self.height);
    }

    /// Clear the surface, stop ticking and empty the pool. No-op if stopped.
    pub fn stop(&mut self, scheduler: &mut FrameScheduler) {
        let Some(handle) = self.tick_loop.take() else {
            return;
        };
        if let Err(err) = self.surface.clear(self.width, self.height) {
            log::warn!("particle surface clear failed on stop: {err}");
        }
        scheduler.cancel(handle);
        self.particles.clear();
        log::debug!("particles stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick_loop.is_some()
    }

    // --- Dimensions ---

    /// Update the viewport. Existing particles are kept; the new bounds apply
    /// from the next tick.
    #[allow(clippy::float_cmp)]
    pub fn set_size(&mut self, width: f64, height: f64) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.surface.resize(width, height);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Target pool size.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // --- Per-frame ---

    /// Draw the pool, then advance it one step.
    ///
    /// Does nothing while stopped. If the surface is not ready the tick is
    /// skipped; the task stays scheduled and the next frame retries.
    pub fn tick(&mut self) {
        if !self.is_running() || !self.surface.is_ready() {
            return;
        }
        if let Err(err) = self.render() {
            log::warn!("particle render failed: {err}");
        }
        self.advance();
        self.refill();
    }

    fn render(&mut self) -> Result<(), crate::surface::SurfaceError> {
        self.surface.clear(self.width, self.height)?;
        let (r, g, b) = PARTICLE_TINT;
        for p in &self.particles {
            self.surface.fill_circle(p.x, p.y, p.r, Rgba { r, g, b, a: p.alpha })?;
        }
        Ok(())
    }

    /// Move every particle, drop the ones that left, and pulse the rest.
    fn advance(&mut self) {
        let (width, height, rate) = (self.width, self.height, self.fade_rate);
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            if !p.is_within(width, height) {
                return false;
            }
            p.phase += rate;
            p.alpha = p.phase.cos().abs() * PARTICLE_MAX_ALPHA;
            true
        });
    }

    /// Add at most one edge-spawned particle.
    fn refill(&mut self) {
        if self.particles.len() < self.count {
            let p = self.spawn_at_edge();
            self.particles.push(p);
        }
    }

    fn seed_pool(&mut self) {
        for _ in 0..self.count {
            let (vx, vy) = Edge::Top.velocity(&mut self.rng);
            let p = Particle {
                x: side_pos(&mut self.rng, self.width),
                y: side_pos(&mut self.rng, self.height),
                vx,
                vy,
                r: self.rng.random_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                alpha: PARTICLE_MAX_ALPHA,
                phase: self.rng.random_range(0.0..PARTICLE_PHASE_MAX),
            };
            self.particles.push(p);
        }
    }

    fn spawn_at_edge(&mut self) -> Particle {
        let edge = Edge::ALL[self.rng.random_range(0..Edge::ALL.len())];
        let (x, y) = match edge {
            Edge::Top => (side_pos(&mut self.rng, self.width), -PARTICLE_EDGE_OFFSET),
            Edge::Right => (self.width + PARTICLE_EDGE_OFFSET, side_pos(&mut self.rng, self.height)),
            Edge::Bottom => (side_pos(&mut self.rng, self.width), self.height + PARTICLE_EDGE_OFFSET),
            Edge::Left => (-PARTICLE_EDGE_OFFSET, side_pos(&mut self.rng, self.height)),
        };
        let (vx, vy) = edge.velocity(&mut self.rng);
        Particle {
            x,
            y,
            vx,
            vy,
            r: self.rng.random_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
            alpha: PARTICLE_SPAWN_ALPHA,
            phase: self.rng.random_range(0.0..PARTICLE_PHASE_MAX),
        }
    }
}
