use crate::constants::{HIDDEN_CLASS, INDICATOR_ID};
use crate::progress::scene_label;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INDICATOR_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INDICATOR_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Write the current scene label into the indicator, if the page has one.
pub fn update(document: &web::Document, scene: usize, scene_count: usize) {
    if let Some(el) = document.get_element_by_id(INDICATOR_ID) {
        el.set_text_content(Some(&scene_label(scene, scene_count)));
    }
}
