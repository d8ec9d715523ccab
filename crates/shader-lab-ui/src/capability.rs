//! WebGL capability check.

use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// True if a throwaway canvas can hand out a `webgl` (or legacy
/// `experimental-webgl`) context. Any exception counts as unsupported.
pub fn is_webgl_supported() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(canvas) = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return false;
    };

    ["webgl", "experimental-webgl"]
        .into_iter()
        .any(|id| matches!(canvas.get_context(id), Ok(Some(_))))
}
