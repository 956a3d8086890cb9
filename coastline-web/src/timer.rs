use coastline_core::Timer;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `setInterval`-backed [`Timer`].
///
/// The tick callback is bound after construction because it usually needs a
/// handle to the widget that owns this timer.
#[derive(Default)]
pub struct IntervalTimer {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl std::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("bound", &self.callback.is_some())
            .field("handle", &self.handle)
            .finish()
    }
}

impl Timer for IntervalTimer {
    fn arm(&mut self, period: Duration) {
        self.disarm();
        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            tracing::warn!("Interval timer armed without a window or callback");
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(period),
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => tracing::warn!("setInterval failed: {:?}", e),
        }
    }

    fn disarm(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// Run `f` once after `after` has elapsed
pub fn defer<F>(after: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis(after),
    ) {
        tracing::warn!("setTimeout failed: {:?}", e);
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}
