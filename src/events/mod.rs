pub mod hover;
pub mod pointer;
pub mod resize;
pub mod scroll;

pub use hover::wire_tail_hover;
pub use pointer::wire_pointermove;
pub use resize::{wire_font_ready, wire_resize};
pub use scroll::wire_scroll;

use wasm_bindgen::JsCast;
use web_sys as web;

/// Registers a passive listener and leaks the closure for the page lifetime.
pub(crate) fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web::Event)>,
) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[events] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}
