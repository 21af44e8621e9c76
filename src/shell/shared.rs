//! Thread-safe handle around a single calculator.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::core::Event;
use crate::shell::calculator::Calculator;
use crate::shell::display::DisplaySink;

/// Cloneable handle that serializes events into one [`Calculator`].
///
/// Each event holds the lock for its whole transition, so handlers never
/// interleave.
pub struct SharedCalculator<D: DisplaySink> {
    inner: Arc<Mutex<Calculator<D>>>,
}

impl<D: DisplaySink> SharedCalculator<D> {
    pub fn new(calculator: Calculator<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }

    pub fn dispatch(&self, event: Event) {
        self.inner.lock().handle(event);
    }

    /// Translate and process a key; returns whether it was recognized.
    pub fn press_key(&self, key: &str) -> bool {
        self.inner.lock().on_key(key)
    }

    /// Run `f` with exclusive access to the calculator.
    pub fn with<R>(&self, f: impl FnOnce(&mut Calculator<D>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<D: DisplaySink> Clone for SharedCalculator<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
