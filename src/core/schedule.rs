use std::time::Duration;

/// Repeating task run by a [`Scheduler`].
pub type Task = Box<dyn FnMut()>;

/// One-shot task run by a [`Scheduler`].
pub type Once = Box<dyn FnOnce()>;

/// Source of timing for the page effects.
///
/// In the browser this is `requestAnimationFrame`, `setInterval` and
/// `setTimeout`. Host tests substitute a manual implementation that steps
/// frames and advances virtual time explicitly. Tasks registered here run
/// for the lifetime of the page; there is no cancellation.
pub trait Scheduler {
    /// Run `task` once per display refresh.
    fn each_frame(&self, task: Task);
    /// Run `task` every `period`, independent of the frame rate.
    fn every(&self, period: Duration, task: Task);
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Once);
}
