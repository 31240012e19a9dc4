use crate::constants::PROGRESS_EVENTS;
use crate::dom;
use crate::progress::scroll_progress;
use glove_timeline::{ProgressListener, ProgressSignal, ProgressSource, SubscriptionId};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn read_progress(window: &web::Window) -> Option<f32> {
    let (scroll_y, height, viewport) = dom::scroll_metrics(window)?;
    Some(scroll_progress(scroll_y, height, viewport))
}

struct WindowListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for ev in PROGRESS_EVENTS {
            _ = self
                .window
                .remove_event_listener_with_callback(ev, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// Progress source fed by window scroll and resize events. Clones share the
/// same listener, which is removed when the last clone drops.
#[derive(Clone)]
pub struct WindowScrollSource {
    signal: ProgressSignal,
    _listener: Rc<WindowListener>,
}

impl WindowScrollSource {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let signal = ProgressSignal::new();

        let signal_ev = signal.clone();
        let window_ev = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(p) = read_progress(&window_ev) {
                signal_ev.set(p);
            }
        }) as Box<dyn FnMut()>);
        for ev in PROGRESS_EVENTS {
            window
                .add_event_listener_with_callback(ev, closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        if let Some(p) = read_progress(&window) {
            signal.set(p);
        }
        Ok(Self {
            signal,
            _listener: Rc::new(WindowListener { window, closure }),
        })
    }

    /// Push progress from another driver (e.g. a page-level scroll library).
    pub fn set(&self, progress: f32) {
        self.signal.set(progress);
    }
}

impl ProgressSource for WindowScrollSource {
    fn progress(&self) -> f32 {
        self.signal.progress()
    }

    fn subscribe(&self, listener: ProgressListener) -> SubscriptionId {
        self.signal.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.signal.unsubscribe(id);
    }
}
