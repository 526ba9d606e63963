use crate::constants::{DPR_MAX, DPR_MIN};
use crate::core::{AnchorRect, GeometryProvider, PresentationStates, Viewport};
use crate::input::{backing_px, clamp_dpr, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Current window inner size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w, h)
}

#[inline]
pub fn window_scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Live layout measurements for the scene.
///
/// The anchor is measured on every call; the viewport comes from the last
/// resize committed to the shared input state.
pub struct DomGeometry {
    pub anchor: Option<web::HtmlElement>,
    pub input: Rc<RefCell<InputState>>,
}

impl GeometryProvider for DomGeometry {
    fn anchor(&self) -> Option<AnchorRect> {
        let rect = self.anchor.as_ref()?.get_bounding_client_rect();
        Some(AnchorRect {
            left: rect.left(),
            width: rect.width(),
        })
    }

    fn viewport(&self) -> Viewport {
        let input = self.input.borrow();
        Viewport::new(input.viewport_w, input.viewport_h)
    }
}

/// Sizes the backing store to `viewport × dpr` and maps drawing back to CSS
/// pixels. Safe to call repeatedly.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    input: &Rc<RefCell<InputState>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = window_viewport(&window);
    let dpr = clamp_dpr(window.device_pixel_ratio(), DPR_MIN, DPR_MAX);
    {
        let mut s = input.borrow_mut();
        s.viewport_w = viewport.width;
        s.viewport_h = viewport.height;
    }
    canvas.set_width(backing_px(viewport.width, dpr));
    canvas.set_height(backing_px(viewport.height, dpr));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    if let Err(e) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
        log::warn!("[canvas] set_transform failed: {:?}", e);
    }
    log::debug!(
        "[canvas] resized to {}x{} @{:.2}",
        viewport.width,
        viewport.height,
        dpr
    );
}

/// Mirrors the presentation gates onto the body's class list.
pub fn apply_presentation(body: &web::HtmlElement, states: PresentationStates) {
    let cl = body.class_list();
    _ = cl.toggle_with_force(crate::constants::FX_START_CLASS, states.fx_start);
    _ = cl.toggle_with_force(crate::constants::TAIL_READY_CLASS, states.tail_ready);
}

pub fn set_anchor_gray(anchor: &web::HtmlElement, level: u8) {
    _ = anchor
        .style()
        .set_property("color", &format!("rgb({level},{level},{level})"));
}
