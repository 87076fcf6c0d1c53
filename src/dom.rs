use crate::core::ScreenRect;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width(), canvas.height())
}

/// Canvas rectangle in client pixels, as used for pointer mapping.
pub fn canvas_screen_rect(canvas: &web::HtmlCanvasElement) -> ScreenRect {
    let rect = canvas.get_bounding_client_rect();
    ScreenRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Read a query-string parameter from the page URL.
pub fn query_param(window: &web::Window, name: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}
