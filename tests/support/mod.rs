// Shared host-side test doubles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

pub mod site {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod enter {
        include!("../../src/core/enter.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod media {
        include!("../../src/core/media.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod starfield {
        include!("../../src/core/starfield.rs");
    }
    pub mod store {
        include!("../../src/core/store.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod tilt {
        include!("../../src/core/tilt.rs");
    }
    pub mod typewriter {
        include!("../../src/core/typewriter.rs");
    }
    pub mod visitor {
        include!("../../src/core/visitor.rs");
    }
}

use site::error::StoreError;
use site::schedule::{Once, Scheduler, Task};
use site::store::KeyValueStore;
use site::surface::{Rgba, Surface, SurfaceSize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

// ---------------- Scheduler ----------------

struct Interval {
    period: Duration,
    next_due: Duration,
    task: Task,
}

/// Scheduler that only runs when told to: `step_frame` runs every frame
/// task once, `advance` moves virtual time and fires due intervals and
/// timeouts in order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    frames: RefCell<Vec<Task>>,
    intervals: RefCell<Vec<Interval>>,
    timeouts: RefCell<Vec<(Duration, u64, Once)>>,
}

impl Scheduler for ManualScheduler {
    fn each_frame(&self, task: Task) {
        self.frames.borrow_mut().push(task);
    }

    fn every(&self, period: Duration, task: Task) {
        self.intervals.borrow_mut().push(Interval {
            period,
            next_due: self.now.get() + period,
            task,
        });
    }

    fn after(&self, delay: Duration, task: Once) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timeouts
            .borrow_mut()
            .push((self.now.get() + delay, seq, task));
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn frame_tasks(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn interval_tasks(&self) -> usize {
        self.intervals.borrow().len()
    }

    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.borrow().len()
    }

    pub fn step_frame(&self) {
        let mut tasks = std::mem::take(&mut *self.frames.borrow_mut());
        for task in tasks.iter_mut() {
            task();
        }
        let mut frames = self.frames.borrow_mut();
        let added = std::mem::replace(&mut *frames, tasks);
        frames.extend(added);
    }

    pub fn step_frames(&self, n: usize) {
        for _ in 0..n {
            self.step_frame();
        }
    }

    fn next_due(&self) -> Option<Duration> {
        let interval = self.intervals.borrow().iter().map(|i| i.next_due).min();
        let timeout = self.timeouts.borrow().iter().map(|t| t.0).min();
        match (interval, timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(due) = self.next_due().filter(|d| *d <= target) {
            self.now.set(due);

            let mut intervals = std::mem::take(&mut *self.intervals.borrow_mut());
            for iv in intervals.iter_mut().filter(|iv| iv.next_due <= due) {
                (iv.task)();
                iv.next_due += iv.period;
            }
            {
                let mut current = self.intervals.borrow_mut();
                let added = std::mem::replace(&mut *current, intervals);
                current.extend(added);
            }

            let mut ready = {
                let mut pending = self.timeouts.borrow_mut();
                let (ready, rest): (Vec<_>, Vec<_>) =
                    pending.drain(..).partition(|(at, _, _)| *at <= due);
                *pending = rest;
                ready
            };
            ready.sort_by_key(|(at, seq, _)| (*at, *seq));
            for (_, _, task) in ready {
                task();
            }
        }
        self.now.set(target);
    }
}

// ---------------- Surface ----------------

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(SurfaceSize),
    Clear(f64, f64),
    Gradient {
        width: f64,
        height: f64,
        top: Rgba,
        bottom: Rgba,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
    },
}

/// Surface that records every call. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn take(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    pub fn circles(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.ops.borrow_mut().push(DrawOp::Resize(size));
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.borrow_mut().push(DrawOp::Clear(width, height));
    }

    fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Rgba, bottom: Rgba) {
        self.ops.borrow_mut().push(DrawOp::Gradient {
            width,
            height,
            top,
            bottom,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ops.borrow_mut().push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}

// ---------------- Stores ----------------

/// Store whose writes always fail, as `localStorage` does over quota.
#[derive(Default)]
pub struct RejectingStore {
    pub count: Option<String>,
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Option<String> {
        (key == site::visitor::COUNT_KEY)
            .then(|| self.count.clone())
            .flatten()
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            key: key.to_owned(),
            reason: "QuotaExceededError".to_owned(),
        })
    }
}
