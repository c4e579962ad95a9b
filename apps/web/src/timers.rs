use portfolio_core::schedule::{Scheduler, Task};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::log;

fn timeout_arg(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// `window.setTimeout`; handles are dropped, so nothing is ever cancelled.
#[derive(Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) {
        let callback = Closure::once_into_js(move || task());
        log::report(
            "Failed to schedule timeout",
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    timeout_arg(delay_ms),
                ),
        );
    }
}

/// Runs `tick` every `period_ms` for the page's lifetime.
pub fn set_interval(
    window: &Window,
    period_ms: u32,
    tick: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(tick);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout_arg(period_ms),
    )?;
    closure.forget();
    Ok(())
}
