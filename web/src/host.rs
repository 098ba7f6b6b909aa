//! `MagicCards`: the JavaScript-facing coordinator handle.
//!
//! Owns the core [`Coordinator`], the page-wide `mousemove` listener and the
//! `requestAnimationFrame` loop. Every core call returns the [`Action`]s the
//! browser must perform; they are applied only after the coordinator borrow
//! is released, because dispatching `active-change` runs page listeners
//! synchronously and those may call back into this object.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use magic_cards::{Action, Card, CardId, CardsConfig, ConfigOverrides, Coordinator, ParticleSimulator};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::dom::{CanvasParticleSurface, DomCardSurface};
use crate::util::{client_point, parse_card_id, particle_count, seed_from_unit};

const ACTIVE_ATTR: &str = "active";
const ACTIVE_EVENT: &str = "active-change";

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

struct Shared {
    coordinator: RefCell<Coordinator>,
    elements: RefCell<HashMap<CardId, HtmlElement>>,
    raf_id: Cell<Option<i32>>,
    raf_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pointer_cb: RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>,
    listening: Cell<bool>,
}

impl Shared {
    fn new(config: CardsConfig) -> Rc<Self> {
        let shared = Rc::new(Self {
            coordinator: RefCell::new(Coordinator::new(config)),
            elements: RefCell::new(HashMap::new()),
            raf_id: Cell::new(None),
            raf_cb: RefCell::new(None),
            pointer_cb: RefCell::new(None),
            listening: Cell::new(false),
        });

        let weak = Rc::downgrade(&shared);
        *shared.raf_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(shared) = Weak::upgrade(&weak) {
                shared.on_frame();
            }
        }) as Box<dyn FnMut(f64)>));

        let weak = Rc::downgrade(&shared);
        *shared.pointer_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(shared) = Weak::upgrade(&weak) {
                let pt = client_point(event.client_x(), event.client_y());
                let actions = shared.coordinator.borrow_mut().on_pointer_move(pt);
                shared.apply(actions);
            }
        }) as Box<dyn FnMut(MouseEvent)>));

        shared
    }

    // --- Frame loop ---

    fn on_frame(&self) {
        self.raf_id.set(None);
        self.coordinator.borrow_mut().frame();
        if self.coordinator.borrow().is_running() {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = self.raf_cb.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel_frame(&self) {
        let Some(id) = self.raf_id.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }

    // --- Actions ---

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SubscribePointer => {
                    self.set_listening(true);
                    self.request_frame();
                }
                Action::UnsubscribePointer => {
                    self.set_listening(false);
                    self.cancel_frame();
                }
                Action::ActiveChanged { card, active } => self.announce(card, active),
            }
        }
    }

    /// Attach or remove the page-wide `mousemove` listener.
    fn set_listening(&self, listen: bool) {
        if self.listening.get() == listen {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = self.pointer_cb.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        let result = if listen {
            window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
        } else {
            window.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
        };
        match result {
            Ok(()) => self.listening.set(listen),
            Err(err) => log::warn!("mousemove listener update failed: {err:?}"),
        }
    }

    /// Mirror the active flag onto the element and fire `active-change`.
    fn announce(&self, card: CardId, active: bool) {
        let Some(element) = self.elements.borrow().get(&card).cloned() else {
            return;
        };
        let attr = if active {
            element.set_attribute(ACTIVE_ATTR, "")
        } else {
            element.remove_attribute(ACTIVE_ATTR)
        };
        if let Err(err) = attr {
            log::warn!("card {card}: active attribute update failed: {err:?}");
        }

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&JsValue::from_bool(active));
        match CustomEvent::new_with_event_init_dict(ACTIVE_EVENT, &init) {
            Ok(event) => {
                if let Err(err) = element.dispatch_event(&event) {
                    log::warn!("card {card}: {ACTIVE_EVENT} dispatch failed: {err:?}");
                }
            }
            Err(err) => log::warn!("card {card}: {ACTIVE_EVENT} construction failed: {err:?}"),
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.set_listening(false);
        self.cancel_frame();
    }
}

/// Handle owned by the page script. One instance drives every card on the
/// page; dropping it (`free()` from JavaScript) stops the listener and the
/// frame loop.
#[wasm_bindgen]
pub struct MagicCards {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl MagicCards {
    /// Create a coordinator. `config_json` is an optional overrides object
    /// such as `{"activeCardScale": 1.5}`.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON and non-positive scales or easing divisors.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MagicCards, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => CardsConfig::from_json(json).map_err(js_err)?,
            None => CardsConfig::default(),
        };
        log::debug!("magic cards created with {config:?}");
        Ok(Self { shared: Shared::new(config) })
    }

    /// Replace the configuration with the defaults plus `config_json`.
    ///
    /// # Errors
    ///
    /// Same as the constructor. On error the previous config stays.
    pub fn configure(&self, config_json: &str) -> Result<(), JsValue> {
        let overrides = ConfigOverrides::from_json(config_json).map_err(js_err)?;
        self.shared.coordinator.borrow_mut().configure(&overrides).map_err(js_err)
    }

    /// Register a card and return its id.
    ///
    /// `host` is measured and stacked, `body` is tilted, `background` (if
    /// any) gets the parallax shift and `particles` (if any) becomes the
    /// overlay that animates while the card is active.
    pub fn attach(
        &self,
        host: HtmlElement,
        body: HtmlElement,
        background: Option<HtmlElement>,
        particles: Option<HtmlCanvasElement>,
        particle_count_hint: Option<u32>,
    ) -> String {
        let surface = DomCardSurface::new(host.clone(), body, background);
        let mut card = Card::new(Box::new(surface));
        if let Some(canvas) = particles {
            let seed = seed_from_unit(js_sys::Math::random());
            let sim = ParticleSimulator::new(
                Box::new(CanvasParticleSurface::new(canvas)),
                particle_count(particle_count_hint),
                seed,
            );
            card = card.with_particles(sim);
        }

        let (id, actions) = self.shared.coordinator.borrow_mut().register_card(card);
        self.shared.elements.borrow_mut().insert(id, host);
        self.shared.apply(actions);
        id.to_string()
    }

    /// Unregister a card. Unknown ids are ignored.
    pub fn detach(&self, id: &str) {
        let Some(id) = card_id(id) else {
            return;
        };
        let actions = self.shared.coordinator.borrow_mut().unregister_card(id);
        if let Some(element) = self.shared.elements.borrow_mut().remove(&id) {
            if let Err(err) = element.remove_attribute(ACTIVE_ATTR) {
                log::warn!("card {id}: active attribute cleanup failed: {err:?}");
            }
        }
        self.shared.apply(actions);
    }

    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&self, id: &str, disabled: bool) {
        if let Some(id) = card_id(id) {
            if let Some(card) = self.shared.coordinator.borrow_mut().card_mut(id) {
                card.set_disabled(disabled);
            }
        }
    }

    /// Corner radius in pixels.
    #[wasm_bindgen(js_name = setRadius)]
    pub fn set_radius(&self, id: &str, radius: f64) {
        if let Some(id) = card_id(id) {
            if let Some(card) = self.shared.coordinator.borrow_mut().card_mut(id) {
                card.set_radius(radius);
            }
        }
    }

    /// Change a card's overlay pool size while it runs.
    #[wasm_bindgen(js_name = setParticleCount)]
    pub fn set_particle_count(&self, id: &str, count: u32) {
        if let Some(id) = card_id(id) {
            if let Some(card) = self.shared.coordinator.borrow_mut().card_mut(id) {
                if !card.set_particle_count(particle_count(Some(count))) {
                    log::warn!("card {id} has no particle overlay");
                }
            }
        }
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self, id: &str) -> bool {
        card_id(id).is_some_and(|id| self.shared.coordinator.borrow().active_card() == Some(id))
    }

    #[wasm_bindgen(js_name = cardCount)]
    pub fn card_count(&self) -> usize {
        self.shared.coordinator.borrow().len()
    }
}

fn card_id(raw: &str) -> Option<CardId> {
    match parse_card_id(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("ignoring malformed card id {raw:?}: {err}");
            None
        }
    }
}
