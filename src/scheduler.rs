use crate::core::{Once, Scheduler, Task};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Scheduler`] backed by `requestAnimationFrame`, `setInterval` and
/// `setTimeout`. Every registered callback is leaked for the page lifetime.
pub struct BrowserScheduler {
    window: web::Window,
}

impl BrowserScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

impl Scheduler for BrowserScheduler {
    fn each_frame(&self, mut task: Task) {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let window = self.window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            task();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            _ = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref());
        };
    }

    fn every(&self, period: Duration, task: Task) {
        let closure = Closure::wrap(task);
        if let Err(e) = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(period),
            )
        {
            log::error!("setInterval error: {:?}", e);
        }
        closure.forget();
    }

    fn after(&self, delay: Duration, task: Once) {
        let callback = Closure::once_into_js(task);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            )
        {
            log::error!("setTimeout error: {:?}", e);
        }
    }
}
