//! Binds a [`Timeline`] to a camera and a progress source.
//!
//! Every progress notification recomputes the pose from scratch and writes
//! it to the camera; the only retained state is which segment was active and
//! which scene index was last announced.

use crate::pose::CameraSink;
use crate::signal::{ProgressSource, SubscriptionId};
use crate::timeline::Timeline;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scene index the page shows before any update has been processed.
pub const INITIAL_SCENE: usize = 1;

pub type SharedCamera = Rc<RefCell<dyn CameraSink>>;
pub type SceneChangeCallback = Box<dyn FnMut(usize)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineState {
    active_segment: Option<usize>,
    last_emitted_scene: usize,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            active_segment: None,
            last_emitted_scene: INITIAL_SCENE,
        }
    }
}

impl TimelineState {
    /// Pose `sink` for `progress` and return the 1-based scene index to
    /// announce, if the active segment changed to a scene not yet announced.
    pub fn update(
        &mut self,
        timeline: &Timeline,
        progress: f32,
        sink: &mut dyn CameraSink,
    ) -> Option<usize> {
        let sample = timeline.sample(progress)?;
        sample.pose.apply_to(sink);

        if self.active_segment == Some(sample.index) {
            return None;
        }
        self.active_segment = Some(sample.index);
        let scene = sample.scene();
        if scene == self.last_emitted_scene {
            return None;
        }
        self.last_emitted_scene = scene;
        Some(scene)
    }

    #[inline]
    pub fn active_segment(&self) -> Option<usize> {
        self.active_segment
    }

    #[inline]
    pub fn scene_index(&self) -> usize {
        self.last_emitted_scene
    }
}

/// Owns the timeline configuration; each [`attach`](Self::attach) creates an
/// independent [`TimelineState`].
#[derive(Clone, Debug)]
pub struct ScrollCameraEngine {
    timeline: Rc<Timeline>,
}

impl ScrollCameraEngine {
    pub fn new(timeline: Rc<Timeline>) -> Self {
        Self { timeline }
    }

    /// Drive `camera` from `source` until the returned handle is detached or
    /// dropped.
    ///
    /// Without a camera nothing is subscribed and the handle is inert; attach
    /// again once the camera exists. The camera is posed immediately for the
    /// source's current progress.
    pub fn attach<S>(
        &self,
        camera: Option<SharedCamera>,
        source: &S,
        on_scene_change: Option<SceneChangeCallback>,
    ) -> AttachHandle
    where
        S: ProgressSource + Clone + 'static,
    {
        let Some(camera) = camera else {
            log::warn!("[timeline] camera not ready; attach is a no-op");
            return AttachHandle::inert();
        };

        let attached = Rc::new(Cell::new(true));
        let state = Rc::new(RefCell::new(TimelineState::default()));
        let mut on_progress = {
            let attached = attached.clone();
            let state = state.clone();
            let timeline = self.timeline.clone();
            let mut on_scene_change = on_scene_change;
            move |progress: f32| {
                if !attached.get() {
                    return;
                }
                let changed = {
                    let Ok(mut cam) = camera.try_borrow_mut() else {
                        log::warn!("[timeline] camera busy; skipped update at p={progress:.3}");
                        return;
                    };
                    state.borrow_mut().update(&timeline, progress, &mut *cam)
                };
                if let Some(scene) = changed {
                    log::debug!("[timeline] scene {scene} at p={progress:.3}");
                    if let Some(cb) = on_scene_change.as_mut() {
                        cb(scene);
                    }
                }
            }
        };
        let mut primed = source.progress();
        on_progress(primed);
        // the scene callback may move the source while priming
        while source.progress().to_bits() != primed.to_bits() {
            primed = source.progress();
            on_progress(primed);
        }
        let subscription = source.subscribe(Box::new(on_progress));
        log::info!(
            "[timeline] attached ({} segments)",
            self.timeline.segments().len()
        );

        AttachHandle {
            state: Some(state),
            attached,
            subscription: Some((Box::new(source.clone()), subscription)),
        }
    }
}

/// Keeps an attachment alive. Detaches on drop.
pub struct AttachHandle {
    state: Option<Rc<RefCell<TimelineState>>>,
    attached: Rc<Cell<bool>>,
    subscription: Option<(Box<dyn ProgressSource>, SubscriptionId)>,
}

impl AttachHandle {
    fn inert() -> Self {
        Self {
            state: None,
            attached: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    /// Stop receiving progress. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.attached.set(false);
        if let Some((source, id)) = self.subscription.take() {
            source.unsubscribe(id);
            log::info!("[timeline] detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Last announced 1-based scene index; `None` for an inert handle.
    pub fn scene_index(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.borrow().scene_index())
    }

    pub fn active_segment(&self) -> Option<usize> {
        self.state.as_ref().and_then(|s| s.borrow().active_segment())
    }
}

impl Drop for AttachHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
