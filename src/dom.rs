use crate::constants::{
    ACCENT_CSS_VAR, ACTIVE_CLASS, BODY_SCENE_ATTR, NO_WEBGL_CLASS, SCENE_SECTION_ATTR,
    SCENE_SECTION_SELECTOR,
};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// One-shot probe for a WebGL context on a throwaway canvas.
pub fn supports_webgl(document: &web::Document) -> bool {
    let Some(canvas) = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return false;
    };
    ["webgl2", "webgl"]
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}

pub fn mark_no_webgl(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(NO_WEBGL_CLASS);
    }
}

/// Reflect the active scene on the page: `data-scene` on `<body>`, the
/// active class on the matching section, and the accent CSS variable.
///
/// A section matches when its `data-scene-section` value is either the
/// 1-based scene number or the segment id.
pub fn apply_scene(document: &web::Document, scene: usize, segment_id: &str, accent: [f32; 3]) {
    let scene_str = scene.to_string();
    if let Some(body) = document.body() {
        _ = body.set_attribute(BODY_SCENE_ATTR, &scene_str);
    }

    if let Ok(sections) = document.query_selector_all(SCENE_SECTION_SELECTOR) {
        for i in 0..sections.length() {
            let Some(el) = sections
                .item(i)
                .and_then(|n| n.dyn_into::<web::Element>().ok())
            else {
                continue;
            };
            let active = el
                .get_attribute(SCENE_SECTION_ATTR)
                .map(|v| v == scene_str || v == segment_id)
                .unwrap_or(false);
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
    }

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.style().set_property(ACCENT_CSS_VAR, &css_rgb(accent));
    }
}

#[inline]
fn css_rgb(c: [f32; 3]) -> String {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({} {} {})", to_u8(c[0]), to_u8(c[1]), to_u8(c[2]))
}

/// Page scroll metrics: `(scroll_y, scroll_height, viewport_height)`.
pub fn scroll_metrics(window: &web::Window) -> Option<(f64, f64, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window
        .document()?
        .document_element()
        .map(|el| el.scroll_height() as f64)?;
    Some((scroll_y, height, viewport))
}
