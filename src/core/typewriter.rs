use super::schedule::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// Pause with the full text shown.
    pub hold_full: Duration,
    /// Pause with nothing shown.
    pub hold_empty: Duration,
}

impl TypewriterTiming {
    pub const fn from_millis(type_ms: u64, delete_ms: u64, full_ms: u64, empty_ms: u64) -> Self {
        Self {
            type_delay: Duration::from_millis(type_ms),
            delete_delay: Duration::from_millis(delete_ms),
            hold_full: Duration::from_millis(full_ms),
            hold_empty: Duration::from_millis(empty_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Typing,
    Deleting,
}

/// One tick of the loop: the text to show, if it changed, and how long to
/// wait before the next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub text: Option<String>,
    pub delay: Duration,
}

/// Types `text` one character at a time, holds, deletes it, holds, repeats.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    mode: Mode,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(text: &str, timing: TypewriterTiming) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            mode: Mode::Typing,
            timing,
        }
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn step(&mut self) -> Step {
        match self.mode {
            Mode::Typing if self.shown < self.chars.len() => {
                self.shown += 1;
                Step {
                    text: Some(self.visible()),
                    delay: self.timing.type_delay,
                }
            }
            Mode::Typing => {
                self.mode = Mode::Deleting;
                Step {
                    text: None,
                    delay: self.timing.hold_full,
                }
            }
            Mode::Deleting if self.shown > 0 => {
                self.shown -= 1;
                Step {
                    text: Some(self.visible()),
                    delay: self.timing.delete_delay,
                }
            }
            Mode::Deleting => {
                self.mode = Mode::Typing;
                Step {
                    text: None,
                    delay: self.timing.hold_empty,
                }
            }
        }
    }
}

/// Run `writer` forever on `scheduler`, handing every text change to `sink`.
/// The first character is written immediately.
pub fn animate(scheduler: Rc<dyn Scheduler>, writer: Typewriter, sink: Box<dyn FnMut(&str)>) {
    struct Loop {
        writer: Typewriter,
        sink: Box<dyn FnMut(&str)>,
    }

    fn tick(state: Rc<RefCell<Loop>>, scheduler: Rc<dyn Scheduler>) {
        let delay = {
            let mut guard = state.borrow_mut();
            let Loop { writer, sink } = &mut *guard;
            let step = writer.step();
            if let Some(text) = step.text {
                sink(&text);
            }
            step.delay
        };
        let next = scheduler.clone();
        scheduler.after(delay, Box::new(move || tick(state, next)));
    }

    tick(Rc::new(RefCell::new(Loop { writer, sink })), scheduler);
}
