use super::add_passive_listener;
use crate::constants::TAIL_ITEM_SELECTOR;
use crate::input::{element_center_x01, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Binds hover/touch on the closing-page items once the DOM is parsed.
///
/// Sole writer of `InputState::hover_x`.
pub fn wire_tail_hover(document: &web::Document, input: Rc<RefCell<InputState>>) {
    if document.ready_state() != "loading" {
        bind_items(document, &input);
        return;
    }
    let doc = document.clone();
    let closure = Closure::once(move |_ev: web::Event| {
        bind_items(&doc, &input);
    });
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        log::warn!("[hover] DOMContentLoaded listener failed: {:?}", e);
    }
    closure.forget();
}

fn bind_items(document: &web::Document, input: &Rc<RefCell<InputState>>) {
    let items = match document.query_selector_all(TAIL_ITEM_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[hover] query {} failed: {:?}", TAIL_ITEM_SELECTOR, e);
            return;
        }
    };
    let mut bound = 0;
    for i in 0..items.length() {
        let Some(el) = items.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        for (event, on) in [
            ("mouseenter", true),
            ("mouseleave", false),
            ("touchstart", true),
            ("touchend", false),
        ] {
            let input = input.clone();
            let target = el.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                set_hover(&target, on, &input);
            }) as Box<dyn FnMut(_)>);
            add_passive_listener(&el, event, closure);
        }
        bound += 1;
    }
    log::info!("[hover] bound {} tail items", bound);
}

fn set_hover(el: &web::Element, on: bool, input: &Rc<RefCell<InputState>>) {
    let mut s = input.borrow_mut();
    if !on {
        s.hover_x = None;
        return;
    }
    let rect = el.get_bounding_client_rect();
    s.hover_x = Some(element_center_x01(rect.left(), rect.width(), s.viewport_w));
}
