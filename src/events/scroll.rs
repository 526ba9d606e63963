use super::add_passive_listener;
use crate::dom::window_scroll_y;
use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Sole writer of `InputState::scroll_y`.
pub fn wire_scroll(window: &web::Window, input: Rc<RefCell<InputState>>) {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        input.borrow_mut().scroll_y = window_scroll_y(&wnd);
    }) as Box<dyn FnMut(_)>);
    add_passive_listener(window, "scroll", closure);
}
