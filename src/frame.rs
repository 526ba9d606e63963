use crate::canvas::CanvasSurface;
use crate::core::{AnimationState, FrameInputs};
use crate::dom::{self, DomGeometry};
use crate::input::InputState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: AnimationState,
    pub surface: CanvasSurface,
    pub geometry: DomGeometry,
    pub input: Rc<RefCell<InputState>>,
    pub body: Option<web::HtmlElement>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let snapshot = *self.input.borrow();
        let inputs = FrameInputs {
            scroll_y: snapshot.scroll_y,
            pointer_x: snapshot.pointer_x,
            hover_x: snapshot.hover_x,
            time_ms: self.started.elapsed().as_secs_f64() * 1000.0,
        };
        let report = self
            .state
            .step(&inputs, &self.geometry, &mut self.surface);

        if let Some(body) = &self.body {
            dom::apply_presentation(body, report.presentation);
        }
        if let Some(anchor) = &self.geometry.anchor {
            dom::set_anchor_gray(anchor, report.anchor_gray);
        }
    }

    /// Resize and font-ready entry point: recompute the door around the anchor.
    pub fn refresh_geometry(&mut self) {
        self.state.refresh_geometry(&self.geometry);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
