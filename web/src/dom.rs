//! DOM implementations of the core's rendering boundary.
//!
//! This module is the only place that touches card elements and particle
//! canvases. It writes what the core computed and reads back geometry; it
//! never mutates core state.

use std::f64::consts::TAU;

use magic_cards::Rect;
use magic_cards::surface::{CardStyle, CardSurface, ParticleSurface, Rgba, SurfaceError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

fn host_err(err: JsValue) -> SurfaceError {
    SurfaceError::Host(format!("{err:?}"))
}

// =============================================================
// Cards
// =============================================================

/// A card rendered as a host element wrapping an inner card body.
///
/// The host element is measured and stacked; the body receives transform,
/// shadow and filter; the optional background layer gets the parallax.
pub struct DomCardSurface {
    host: HtmlElement,
    body: HtmlElement,
    background: Option<HtmlElement>,
}

impl DomCardSurface {
    #[must_use]
    pub fn new(host: HtmlElement, body: HtmlElement, background: Option<HtmlElement>) -> Self {
        Self { host, body, background }
    }
}

impl CardSurface for DomCardSurface {
    fn bounding_rect(&self) -> Rect {
        let r = self.host.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn apply_style(&mut self, style: &CardStyle) -> Result<(), SurfaceError> {
        let body = self.body.style();
        body.set_property("border-radius", &style.border_radius).map_err(host_err)?;
        body.set_property("filter", &style.filter).map_err(host_err)?;

        let Some(pose) = &style.pose else {
            return Ok(());
        };
        body.set_property("transform", &pose.transform).map_err(host_err)?;
        body.set_property("box-shadow", &pose.box_shadow).map_err(host_err)?;
        if let Some(background) = &self.background {
            background
                .style()
                .set_property("transform", &pose.background_transform)
                .map_err(host_err)?;
        }
        Ok(())
    }

    fn set_stacking(&mut self, z_index: i32) -> Result<(), SurfaceError> {
        self.host.style().set_property("z-index", &z_index.to_string()).map_err(host_err)
    }
}

// =============================================================
// Particles
// =============================================================

/// A `<canvas>` used as a particle overlay.
///
/// The 2D context is acquired lazily: a canvas that is not yet attached or
/// has no context simply reports not-ready until a later resize finds one.
pub struct CanvasParticleSurface {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
}

impl CanvasParticleSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = context_2d(&canvas);
        Self { canvas, ctx }
    }

    fn ctx(&self) -> Result<&CanvasRenderingContext2d, SurfaceError> {
        self.ctx.as_ref().ok_or_else(|| SurfaceError::Host("no 2d context".into()))
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => None,
        },
        Ok(None) => None,
        Err(err) => {
            log::warn!("canvas get_context failed: {err:?}");
            None
        }
    }
}

impl ParticleSurface for CanvasParticleSurface {
    fn is_ready(&self) -> bool {
        self.ctx.is_some()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
        if self.ctx.is_none() {
            self.ctx = context_2d(&self.canvas);
        }
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.ctx()?.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), SurfaceError> {
        let ctx = self.ctx()?;
        ctx.set_fill_style_str(&color.to_css());
        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, TAU).map_err(host_err)?;
        ctx.close_path();
        ctx.fill();
        Ok(())
    }
}
