use web_sys as web;

/// `KeyboardEvent.code` that puts the camera back where it started.
pub const RESET_KEY_CODE: &str = "KeyR";

#[inline]
pub fn is_reset_key(code: &str) -> bool {
    code == RESET_KEY_CODE
}

/// Pointer position in client (viewport) pixels.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> [f32; 2] {
    [ev.client_x() as f32, ev.client_y() as f32]
}

/// Backing-store size for a CSS size at the given device pixel ratio. Never
/// returns a zero dimension.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}
