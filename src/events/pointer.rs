use super::add_passive_listener;
use crate::input::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Sole writer of `InputState::pointer_x`.
pub fn wire_pointermove(window: &web::Window, input: Rc<RefCell<InputState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            input.borrow_mut().pointer_x = mouse.client_x() as f64;
        }
    }) as Box<dyn FnMut(_)>);
    add_passive_listener(window, "pointermove", closure);
}
