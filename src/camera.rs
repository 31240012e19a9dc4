use glam::Vec3;
use glove_timeline::CameraSink;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Forwards poses to the page's JS camera object (`position.set`,
/// `rotation.set`, `fov` + `updateProjectionMatrix`).
pub struct JsCameraSink {
    camera: JsValue,
}

impl JsCameraSink {
    /// `None` while the page has not created its camera yet.
    pub fn from_js(camera: JsValue) -> Option<Self> {
        if camera.is_null() || camera.is_undefined() {
            return None;
        }
        Some(Self { camera })
    }

    fn set_vec3(&self, field: &str, v: Vec3) -> Result<(), JsValue> {
        let target = Reflect::get(&self.camera, &JsValue::from_str(field))?;
        let set: Function = Reflect::get(&target, &JsValue::from_str("set"))?.dyn_into()?;
        set.call3(
            &target,
            &JsValue::from(v.x),
            &JsValue::from(v.y),
            &JsValue::from(v.z),
        )?;
        Ok(())
    }

    fn set_fov_inner(&self, fov_degrees: f32) -> Result<(), JsValue> {
        Reflect::set(
            &self.camera,
            &JsValue::from_str("fov"),
            &JsValue::from(fov_degrees),
        )?;
        let update = Reflect::get(&self.camera, &JsValue::from_str("updateProjectionMatrix"))?;
        if let Some(f) = update.dyn_ref::<Function>() {
            f.call0(&self.camera)?;
        }
        Ok(())
    }
}

impl CameraSink for JsCameraSink {
    fn set_position(&mut self, position: Vec3) {
        if let Err(e) = self.set_vec3("position", position) {
            log::warn!("[camera] position update failed: {:?}", e);
        }
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        if let Err(e) = self.set_vec3("rotation", rotation) {
            log::warn!("[camera] rotation update failed: {:?}", e);
        }
    }

    fn set_fov(&mut self, fov_degrees: f32) {
        if let Err(e) = self.set_fov_inner(fov_degrees) {
            log::warn!("[camera] fov update failed: {:?}", e);
        }
    }
}
