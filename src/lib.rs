#![cfg(target_arch = "wasm32")]
use glove_timeline::{
    scene_accent, shipped_timeline, AttachHandle, ProgressSource, SceneChangeCallback,
    ScrollCameraEngine, SharedCamera, Timeline, INITIAL_SCENE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod indicator;
mod progress;
mod scroll;

use camera::JsCameraSink;
use scroll::WindowScrollSource;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glove-web starting");
    Ok(())
}

/// Scroll-linked camera for the page's 3D scene.
///
/// JS usage: `new ScrollCameraRig(camera, onSceneChange?, timelineJson?)`.
/// Pass `null` as the camera while the renderer is not ready and build a new
/// rig once it is.
#[wasm_bindgen]
pub struct ScrollCameraRig {
    handle: AttachHandle,
    source: WindowScrollSource,
    timeline: Rc<Timeline>,
}

#[wasm_bindgen]
impl ScrollCameraRig {
    #[wasm_bindgen(constructor)]
    pub fn new(
        camera: JsValue,
        on_scene_change: Option<js_sys::Function>,
        timeline_json: Option<String>,
    ) -> Result<ScrollCameraRig, JsValue> {
        build_rig(camera, on_scene_change, timeline_json)
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = sceneIndex)]
    pub fn scene_index(&self) -> usize {
        self.handle.scene_index().unwrap_or(INITIAL_SCENE)
    }

    #[wasm_bindgen(js_name = sceneCount)]
    pub fn scene_count(&self) -> usize {
        self.timeline.scene_count()
    }

    pub fn progress(&self) -> f32 {
        self.source.progress()
    }

    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&self, progress: f32) {
        self.source.set(progress);
    }

    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.handle.is_attached()
    }

    pub fn detach(&mut self) {
        self.handle.detach();
    }
}

fn build_rig(
    camera: JsValue,
    on_scene_change: Option<js_sys::Function>,
    timeline_json: Option<String>,
) -> anyhow::Result<ScrollCameraRig> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let timeline = match timeline_json.as_deref() {
        Some(json) => Timeline::from_json(json)?,
        None => shipped_timeline()?,
    };
    let timeline = Rc::new(timeline);
    let source = WindowScrollSource::new()?;

    let camera: Option<SharedCamera> = if dom::supports_webgl(&document) {
        JsCameraSink::from_js(camera).map(|c| Rc::new(RefCell::new(c)) as SharedCamera)
    } else {
        log::warn!("[rig] WebGL unavailable; camera stays static");
        dom::mark_no_webgl(&document);
        None
    };

    reflect_scene(&document, &timeline, INITIAL_SCENE);
    if camera.is_some() {
        indicator::show(&document);
    } else {
        indicator::hide(&document);
    }

    let on_change: SceneChangeCallback = {
        let timeline = timeline.clone();
        Box::new(move |scene: usize| {
            reflect_scene(&document, &timeline, scene);
            if let Some(f) = &on_scene_change {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(scene as u32)) {
                    log::error!("[rig] onSceneChange threw: {:?}", e);
                }
            }
        })
    };

    let engine = ScrollCameraEngine::new(timeline.clone());
    let handle = engine.attach(camera, &source, Some(on_change));
    Ok(ScrollCameraRig {
        handle,
        source,
        timeline,
    })
}

fn reflect_scene(document: &web::Document, timeline: &Timeline, scene: usize) {
    let id = timeline
        .segment(scene.saturating_sub(1))
        .map(|s| s.id.as_str())
        .unwrap_or_default();
    dom::apply_scene(document, scene, id, scene_accent(scene));
    indicator::update(document, scene, timeline.scene_count());
}
