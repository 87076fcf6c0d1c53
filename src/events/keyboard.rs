use crate::core::TrackballControls;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &Rc<RefCell<TrackballControls>>) {
    if input::is_reset_key(&ev.code()) {
        controls.borrow_mut().reset();
        log::info!("[keys] camera reset");
    }
}

pub fn wire_global_keydown(controls: Rc<RefCell<TrackballControls>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controls);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
