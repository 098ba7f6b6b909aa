//! Cards coordinator: registry, pointer tracking and the frame loop.
//!
//! One `Coordinator` drives every card on a page. It keeps the cards in
//! registration order, remembers the last pointer position, and decides on
//! each pointer move which single card (if any) is active:
//!
//! 1. The candidate is the card whose center is closest to the pointer; ties
//!    go to the earliest registered card.
//! 2. A card that is already active stays active while the pointer is inside
//!    its rect scaled by `active_card_scale`. This margin is what keeps the
//!    selection from flickering at the card edge.
//! 3. Otherwise the candidate becomes active only if the pointer is strictly
//!    inside its unscaled rect.
//!
//! The coordinator never calls the browser. Effects the host must perform
//! (attach or detach the pointer listener, fire activation events) are
//! returned as [`Action`]s so the host can apply them after releasing its
//! borrow of the coordinator.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use crate::card::{Card, CardId};
use crate::config::{CardsConfig, ConfigError, ConfigOverrides};
use crate::geometry::{Point, Rect, squared_distance};
use crate::pose::Pose;
use crate::scheduler::{FrameScheduler, Task, TaskHandle};

/// Effects returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The first card registered: start listening for pointer moves and
    /// requesting animation frames.
    SubscribePointer,
    /// The last card left: stop listening and stop the frame loop.
    UnsubscribePointer,
    /// A card's active state flipped.
    ActiveChanged { card: CardId, active: bool },
}

#[derive(Debug, Default)]
pub struct Coordinator {
    config: CardsConfig,
    cards: Vec<Card>,
    pointer: Point,
    active: Option<CardId>,
    scheduler: FrameScheduler,
    frame_loop: Option<TaskHandle>,
}

impl Coordinator {
    #[must_use]
    pub fn new(config: CardsConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Configuration ---

    /// Replace the configuration with the defaults plus `overrides`.
    ///
    /// Meant to be called before the first card registers; changing the
    /// constants mid-animation blends old and new values unpredictably.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if the result would have a
    /// non-positive scale or easing divisor. The current config is kept.
    pub fn configure(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        let config = CardsConfig::with_overrides(overrides);
        config.validate()?;
        if !self.cards.is_empty() {
            log::warn!("cards reconfigured while {} card(s) are animating", self.cards.len());
        }
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &CardsConfig {
        &self.config
    }

    // --- Registry ---

    /// Add a card. The first card starts the frame loop and asks the host
    /// to subscribe to pointer moves.
    pub fn register_card(&mut self, card: Card) -> (CardId, Vec<Action>) {
        let id = card.id();
        if self.card(id).is_some() {
            log::warn!("card {id} is already registered");
            return (id, Vec::new());
        }
        self.cards.push(card);
        log::debug!("card {id} registered ({} total)", self.cards.len());

        if self.cards.len() == 1 {
            self.frame_loop = Some(self.scheduler.spawn(Task::CardsTick));
            log::debug!("frame loop started");
            return (id, vec![Action::SubscribePointer]);
        }
        (id, Vec::new())
    }

    /// Remove a card by id, stopping its overlay. Removing the last card
    /// stops the frame loop and asks the host to unsubscribe.
    pub fn unregister_card(&mut self, id: CardId) -> Vec<Action> {
        let Some(index) = self.cards.iter().position(|c| c.id() == id) else {
            return Vec::new();
        };
        let mut card = self.cards.remove(index);
        card.detach(&mut self.scheduler);
        if self.active == Some(id) {
            self.active = None;
        }
        log::debug!("card {id} unregistered ({} left)", self.cards.len());

        if !self.cards.is_empty() {
            return Vec::new();
        }
        if let Some(handle) = self.frame_loop.take() {
            self.scheduler.cancel(handle);
        }
        log::debug!("frame loop stopped");
        vec![Action::UnsubscribePointer]
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Mutable access for host setters such as `set_disabled`.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // --- Pointer ---

    /// Record a pointer move and re-run selection.
    ///
    /// Every card except the selected one is reset to the identity pose and
    /// deactivated; the selected card gets a tilt toward the pointer.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.pointer = pt;
        self.active = self.select_active();

        let mut actions = Vec::new();
        for card in &mut self.cards {
            if Some(card.id()) == self.active {
                continue;
            }
            card.set_target(Pose::IDENTITY);
            if card.set_active(false, &mut self.scheduler) {
                actions.push(Action::ActiveChanged { card: card.id(), active: false });
            }
        }

        let Some(id) = self.active else {
            return actions;
        };
        let config = self.config;
        if let Some(card) = self.cards.iter_mut().find(|c| c.id() == id) {
            card.set_target(target_pose(card.rect(), card.center(), pt, &config));
            if card.set_active(true, &mut self.scheduler) {
                actions.push(Action::ActiveChanged { card: id, active: true });
            }
        }
        actions
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn active_card(&self) -> Option<CardId> {
        self.active
    }

    /// Card whose center is nearest the pointer. `None` on an empty registry.
    #[must_use]
    pub fn closest_card(&self) -> Option<&Card> {
        self.cards
            .iter()
            .min_by(|a, b| {
                squared_distance(self.pointer, a.center()).total_cmp(&squared_distance(self.pointer, b.center()))
            })
    }

    fn select_active(&self) -> Option<CardId> {
        let closest = self.closest_card()?;
        if let Some(current) = self.active.and_then(|id| self.card(id)) {
            if current.rect().scaled(self.config.active_card_scale).contains(self.pointer) {
                return Some(current.id());
            }
        }
        closest.rect().contains(self.pointer).then_some(closest.id())
    }

    // --- Frame loop ---

    /// Run one animation frame: every due task, in spawn order. The global
    /// card tick always precedes the particle ticks it started.
    pub fn frame(&mut self) {
        for (handle, task) in self.scheduler.due() {
            if !self.scheduler.is_scheduled(handle) {
                continue;
            }
            match task {
                Task::CardsTick => {
                    for card in &mut self.cards {
                        card.update(&self.config);
                    }
                }
                Task::Particles(id) => {
                    if let Some(card) = self.card_mut(id) {
                        card.tick_particles();
                    }
                }
            }
        }
    }

    /// Whether the host should keep requesting animation frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_some()
    }
}

/// Target pose for the active card given the pointer position.
///
/// Offsets are normalised against half the enlarged rect, so the pointer at
/// the enlarged edge yields the full `max_rotate_*` tilt. A pointer above
/// the center gives positive `rotate_x`; a pointer left of center gives
/// negative `rotate_y`.
#[must_use]
pub fn target_pose(rect: Rect, center: Point, pointer: Point, config: &CardsConfig) -> Pose {
    let enlarged = rect.scaled(config.active_card_scale);
    let x_dist = center.x - pointer.x;
    let y_dist = center.y - pointer.y;
    Pose {
        scale: config.active_card_scale,
        rotate_x: (y_dist / (enlarged.height * 0.5)) * config.max_rotate_x,
        rotate_y: -(x_dist / (enlarged.width * 0.5)) * config.max_rotate_y,
    }
}
