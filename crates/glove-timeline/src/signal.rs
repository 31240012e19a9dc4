use std::cell::RefCell;
use std::rc::Rc;

pub type ProgressListener = Box<dyn FnMut(f32)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Reports normalized scroll progress in `[0, 1]` and notifies on change.
/// Values are not assumed to be monotonic.
pub trait ProgressSource {
    fn progress(&self) -> f32;
    fn subscribe(&self, listener: ProgressListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Clamp into `[0, 1]`; NaN collapses to 0.
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[derive(Default)]
struct SignalInner {
    value: f32,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Rc<RefCell<ProgressListener>>)>,
    notifying: bool,
    /// Latest value set by a listener while a notification was running.
    pending: Option<f32>,
}

impl SignalInner {
    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(sid, _)| *sid == id)
    }
}

/// Single-threaded progress value with synchronous listeners. Clones share
/// the same value and listener list.
#[derive(Clone, Default)]
pub struct ProgressSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl ProgressSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the clamped value and notify every listener in subscription
    /// order, even when the value did not change.
    ///
    /// A `set` issued from inside a listener is queued; once the running
    /// round finishes, every listener is notified again with the latest
    /// queued value.
    pub fn set(&self, progress: f32) {
        let value = clamp_progress(progress);
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            if inner.notifying {
                inner.pending = Some(value);
                return;
            }
            inner.notifying = true;
        }

        let mut next = Some(value);
        while let Some(value) = next {
            self.notify(value);
            next = self.inner.borrow_mut().pending.take();
        }
        self.inner.borrow_mut().notifying = false;
    }

    fn notify(&self, value: f32) {
        let listeners: Vec<_> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, l.clone()))
            .collect();
        for (id, listener) in listeners {
            // unsubscribed by an earlier listener in this round
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            if let Ok(mut f) = listener.try_borrow_mut() {
                (*f)(value);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ProgressSource for ProgressSignal {
    fn progress(&self) -> f32 {
        self.inner.borrow().value
    }

    fn subscribe(&self, listener: ProgressListener) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(sid, _)| *sid != id);
    }
}
