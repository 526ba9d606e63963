use crate::constants::FONT_FALLBACK_DELAY_MS;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_resize(window: &web::Window, on_resize: Rc<dyn Fn()>) {
    let closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Runs `on_ready` once web fonts settle, or after a short delay when the
/// font loading API is unavailable.
pub fn wire_font_ready(window: &web::Window, document: &web::Document, on_ready: Rc<dyn Fn()>) {
    let has_fonts = js_sys::Reflect::has(document, &JsValue::from_str("fonts")).unwrap_or(false);
    if has_fonts {
        match document.fonts().ready() {
            Ok(promise) => {
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[fonts] ready rejected: {:?}", e);
                    }
                    on_ready();
                });
                return;
            }
            Err(e) => log::warn!("[fonts] ready unavailable: {:?}", e),
        }
    } else {
        log::warn!(
            "[fonts] document.fonts missing, using {}ms fallback",
            FONT_FALLBACK_DELAY_MS
        );
    }
    let closure = Closure::once(move || on_ready());
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        FONT_FALLBACK_DELAY_MS,
    );
    closure.forget();
}
