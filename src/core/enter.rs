use super::constants::{OVERLAY_REMOVE_DELAY_MS, TYPEWRITER_START_DELAY_MS};
use super::schedule::Scheduler;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Page changes made when the visitor enters.
pub trait EnterEffects {
    /// Drop the body's overlay class and start fading the overlay out.
    fn hide_overlay(&self);
    /// Take the faded overlay out of the document.
    fn remove_overlay(&self);
    fn start_audio(&self);
    fn start_typewriters(&self);
}

/// The "enter" gesture: hide the overlay, start the audio, then remove the
/// overlay and start the typewriters once it has faded. Runs at most once.
pub struct EnterSequence {
    scheduler: Rc<dyn Scheduler>,
    effects: Rc<dyn EnterEffects>,
    entered: Cell<bool>,
}

impl EnterSequence {
    pub fn new(scheduler: Rc<dyn Scheduler>, effects: Rc<dyn EnterEffects>) -> Self {
        Self {
            scheduler,
            effects,
            entered: Cell::new(false),
        }
    }

    pub fn entered(&self) -> bool {
        self.entered.get()
    }

    /// Returns false when the site was already entered.
    pub fn enter(&self) -> bool {
        if self.entered.replace(true) {
            return false;
        }
        log::info!("[overlay] entering site");
        self.effects.hide_overlay();

        let fx = self.effects.clone();
        self.scheduler.after(
            Duration::from_millis(OVERLAY_REMOVE_DELAY_MS),
            Box::new(move || fx.remove_overlay()),
        );

        self.effects.start_audio();

        let fx = self.effects.clone();
        self.scheduler.after(
            Duration::from_millis(TYPEWRITER_START_DELAY_MS),
            Box::new(move || fx.start_typewriters()),
        );
        true
    }
}
