#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::core::{AnimationState, FxConfig};
use crate::dom::DomGeometry;
use crate::input::InputState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("doorfx starting");

    if let Err(e) = init() {
        // No canvas, no overlay; the page itself keeps working.
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let anchor = document
        .get_element_by_id(constants::ANCHOR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if anchor.is_none() {
        log::warn!(
            "#{} not found; door uses viewport-centered defaults",
            constants::ANCHOR_ID
        );
    }

    let viewport = dom::window_viewport(&window);
    let scroll_y = dom::window_scroll_y(&window);
    let input = Rc::new(RefCell::new(InputState::new(
        viewport.width,
        viewport.height,
        scroll_y,
    )));
    dom::sync_canvas_backing_size(&canvas, &ctx, &input);

    let state = AnimationState::new(FxConfig::default(), viewport, scroll_y)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        surface: CanvasSurface::new(ctx),
        geometry: DomGeometry {
            anchor,
            input: input.clone(),
        },
        input: input.clone(),
        body: document.body(),
        started: Instant::now(),
    }));
    frame_ctx.borrow_mut().refresh_geometry();

    events::wire_scroll(&window, input.clone());
    events::wire_pointermove(&window, input.clone());
    events::wire_tail_hover(&document, input.clone());

    let resize_ctx = frame_ctx.clone();
    let resize_canvas = canvas.clone();
    let resize_input = input.clone();
    events::wire_resize(
        &window,
        Rc::new(move || {
            let mut fc = resize_ctx.borrow_mut();
            dom::sync_canvas_backing_size(&resize_canvas, fc.surface.context(), &resize_input);
            fc.refresh_geometry();
        }),
    );
    let fonts_ctx = frame_ctx.clone();
    events::wire_font_ready(
        &window,
        &document,
        Rc::new(move || fonts_ctx.borrow_mut().refresh_geometry()),
    );

    log::info!(
        "overlay ready: {}x{} scroll={}",
        viewport.width,
        viewport.height,
        scroll_y
    );
    frame::start_loop(frame_ctx);
    Ok(())
}
