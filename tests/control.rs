//! Control-handle integration tests: pause, resume, and stop across threads.

use std::thread;
use std::time::{Duration, Instant};

use framesift::{ControlHandle, RunState};

#[test]
fn pause_blocks_until_resume() {
    let control = ControlHandle::new();
    control.pause();

    let waiter = control.clone();
    let handle = thread::spawn(move || {
        let start = Instant::now();
        waiter.wait_while_paused();
        start.elapsed()
    });

    thread::sleep(Duration::from_millis(300));
    control.resume();

    let waited = handle.join().expect("Waiter thread panicked");
    assert!(
        waited >= Duration::from_millis(250),
        "Wait returned before resume: {waited:?}",
    );
}

#[test]
fn pause_unblocks_on_stop() {
    let control = ControlHandle::new();
    control.pause();

    let waiter = control.clone();
    let handle = thread::spawn(move || {
        waiter.wait_while_paused();
        waiter.state()
    });

    thread::sleep(Duration::from_millis(150));
    control.stop();

    let state = handle.join().expect("Waiter thread panicked");
    assert_eq!(state, RunState::Stopped);
}

#[test]
fn pause_latency_is_bounded() {
    let control = ControlHandle::new();
    control.pause();

    let waiter = control.clone();
    let handle = thread::spawn(move || {
        waiter.wait_while_paused();
    });

    control.resume();
    let start = Instant::now();
    handle.join().expect("Waiter thread panicked");
    // One poll interval plus scheduling slack.
    assert!(
        start.elapsed() < Duration::from_millis(500),
        "Resume latency exceeded the polling bound",
    );
}

#[test]
fn flags_are_visible_across_threads() {
    let control = ControlHandle::new();
    let remote = control.clone();

    let handle = thread::spawn(move || {
        remote.pause();
        remote.stop();
    });
    handle.join().expect("Controller thread panicked");

    assert!(control.is_paused());
    assert!(control.is_stopped());
    assert_eq!(control.state(), RunState::Stopped);
}
