// Host-side tests for the typewriter loop.

mod support;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use support::site::schedule::Scheduler;
use support::site::typewriter::*;
use support::ManualScheduler;

const TIMING: TypewriterTiming = TypewriterTiming::from_millis(100, 50, 2000, 500);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn shown(text: &str, delay: u64) -> Step {
    Step {
        text: Some(text.to_string()),
        delay: ms(delay),
    }
}

fn hold(delay: u64) -> Step {
    Step {
        text: None,
        delay: ms(delay),
    }
}

#[test]
fn types_holds_deletes_and_repeats() {
    let mut w = Typewriter::new("ab", TIMING);
    let steps: Vec<Step> = (0..8).map(|_| w.step()).collect();
    assert_eq!(
        steps,
        vec![
            shown("a", 100),
            shown("ab", 100),
            hold(2000),
            shown("a", 50),
            shown("", 50),
            hold(500),
            shown("a", 100),
            shown("ab", 100),
        ]
    );
}

#[test]
fn handles_multibyte_text() {
    let mut w = Typewriter::new("né😀", TIMING);
    assert_eq!(w.step().text.as_deref(), Some("n"));
    assert_eq!(w.step().text.as_deref(), Some("né"));
    assert_eq!(w.step().text.as_deref(), Some("né😀"));
    assert_eq!(w.visible(), "né😀");
}

#[test]
fn empty_text_only_holds() {
    let mut w = Typewriter::new("", TIMING);
    for _ in 0..6 {
        assert_eq!(w.step().text, None);
    }
}

fn run(text: &str) -> (Rc<ManualScheduler>, Rc<RefCell<Vec<String>>>) {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    animate(
        scheduler.clone() as Rc<dyn Scheduler>,
        Typewriter::new(text, TIMING),
        Box::new(move |t: &str| sink.borrow_mut().push(t.to_string())),
    );
    (scheduler, seen)
}

#[test]
fn first_character_appears_immediately() {
    let (scheduler, seen) = run("King");
    assert_eq!(*seen.borrow(), vec!["K"]);
    assert_eq!(scheduler.pending_timeouts(), 1);
}

#[test]
fn animation_follows_the_timing_on_the_scheduler() {
    let (scheduler, seen) = run("Hi");
    scheduler.advance(ms(99));
    assert_eq!(*seen.borrow(), vec!["H"]);
    scheduler.advance(ms(1));
    assert_eq!(*seen.borrow(), vec!["H", "Hi"]);

    // 100ms to notice it is full, then the 2s hold before deleting
    scheduler.advance(ms(100 + 1999));
    assert_eq!(seen.borrow().len(), 2);
    scheduler.advance(ms(1));
    assert_eq!(seen.borrow().last().map(String::as_str), Some("H"));

    scheduler.advance(ms(50));
    assert_eq!(seen.borrow().last().map(String::as_str), Some(""));

    // empty hold, then typing restarts
    scheduler.advance(ms(50 + 500));
    assert_eq!(*seen.borrow(), vec!["H", "Hi", "H", "", "H"]);
    assert_eq!(scheduler.pending_timeouts(), 1);
}

#[test]
fn loop_runs_indefinitely() {
    let (scheduler, seen) = run("abc");
    // one cycle: 3 types (300) + full hold (2000) + 3 deletes (150) + empty hold (500)
    let cycle = 300 + 2000 + 150 + 500;
    scheduler.advance(ms(cycle * 4));
    let full = seen.borrow().iter().filter(|t| t.as_str() == "abc").count();
    assert_eq!(full, 4);
}
