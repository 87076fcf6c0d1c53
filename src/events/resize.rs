use crate::core::{PerspectiveCamera, TrackballControls};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reflow after a viewport change: backing store, camera aspect, and the
/// controls' screen rectangle. The GPU surface follows on the next frame.
pub fn handle_resize(
    canvas: &web::HtmlCanvasElement,
    camera: &Rc<RefCell<PerspectiveCamera>>,
    controls: &Rc<RefCell<TrackballControls>>,
) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    camera.borrow_mut().set_aspect(w, h);
    controls
        .borrow_mut()
        .handle_resize(dom::canvas_screen_rect(canvas));
    log::debug!("[resize] {}x{}", w, h);
}

pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    camera: Rc<RefCell<PerspectiveCamera>>,
    controls: Rc<RefCell<TrackballControls>>,
) {
    let resize_closure = Closure::wrap(Box::new(move || {
        handle_resize(&canvas, &camera, &controls);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
