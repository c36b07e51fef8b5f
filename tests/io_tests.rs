#![cfg(feature = "effect")]
//! Integration tests for Io: deferral, ordering, replay and the opt-in guard.

use fpkernel::chain;
use fpkernel::control::{Panic, Try};
use fpkernel::effect::Io;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn record(log: &Log, entry: &'static str) -> Io<()> {
    let log = Rc::clone(log);
    Io::new(move || log.borrow_mut().push(entry))
}

#[rstest]
fn ordering_and_replay() {
    let log: Log = Rc::default();
    let program = record(&log, "a").then(record(&log, "b"));

    assert!(log.borrow().is_empty());

    program.run();
    assert_eq!(*log.borrow(), ["a", "b"]);

    program.run();
    assert_eq!(*log.borrow(), ["a", "b", "a", "b"]);
}

#[rstest]
fn building_with_flat_map_runs_nothing() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let source = Io::new(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });

    let doubled = source.flat_map(|n| Io::pure(n * 2));
    assert_eq!(runs.get(), 0);

    assert_eq!(doubled.run(), 2);
    assert_eq!(doubled.run(), 4);
}

#[rstest]
fn chain_macro_over_io() {
    let log: Log = Rc::default();
    let first = {
        let log = Rc::clone(&log);
        Io::new(move || {
            log.borrow_mut().push("width");
            6
        })
    };
    let second = {
        let log = Rc::clone(&log);
        Io::new(move || {
            log.borrow_mut().push("height");
            7
        })
    };

    let area = chain! {
        width <= first;
        height <= second.clone();
        yield width * height
    };

    assert_eq!(area.run(), 42);
    assert_eq!(*log.borrow(), ["width", "height"]);
}

#[rstest]
fn attempt_turns_panic_into_failure() {
    let io: Io<Vec<i32>> = Io::new(|| panic!("device busy"));
    let outcome = io.attempt().run();
    let error = outcome.get_or_error().unwrap_err();
    assert_eq!(
        error.downcast_ref::<Panic>().map(Panic::message),
        Some("device busy")
    );
}

#[rstest]
fn attempt_is_replayable() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let io = Io::new(move || {
        counter.set(counter.get() + 1);
        counter.get()
    })
    .attempt();

    assert_eq!(io.run(), Try::Success(1));
    assert_eq!(io.run(), Try::Success(2));
}

#[rstest]
fn delay_waits_on_every_run() {
    let pause = Io::delay(Duration::from_millis(5));
    let started = Instant::now();
    pause.run();
    pause.run();
    assert!(started.elapsed() >= Duration::from_millis(10));
}

#[rstest]
fn print_line_is_deferred() {
    let line = Io::print_line("deferred output").fmap(|()| "printed");
    assert_eq!(line.run(), "printed");
}

#[rstest]
fn debug_is_opaque() {
    assert_eq!(format!("{:?}", Io::pure(1)), "Io { .. }");
}
