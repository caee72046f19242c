//! Integration tests for the terminal state machine

use std::cell::Cell;
use std::rc::Rc;

use super::helpers::{drive, machine_in_menu, ms, steps};
use wisp_term::sim::replay::replay;
use wisp_term::sim::{Event, Phase, Script, SimError, ViewStateMachine, MONITOR_INDEX};

#[test]
fn typing_reveals_one_char_per_tick() {
    let mut machine = ViewStateMachine::default();
    machine.dispatch(Event::VisibilityTriggered).unwrap();

    machine.advance_by(ms(399));
    assert_eq!(machine.state().typed_prefix, "");

    let expected = ["w", "wi", "wis", "wisp"];
    machine.advance_by(ms(1));
    assert_eq!(machine.state().typed_prefix, expected[0]);
    for prefix in &expected[1..] {
        machine.advance_by(ms(150));
        assert_eq!(&machine.state().typed_prefix, prefix);
        assert_eq!(machine.state().phase, Phase::Typing);
    }
}

#[test]
fn completion_fires_exactly_once() {
    let mut machine = ViewStateMachine::default();
    machine.dispatch(Event::VisibilityTriggered).unwrap();

    let entries = Rc::new(Cell::new(0));
    let counter = Rc::clone(&entries);
    let mut last = Phase::Typing;
    machine.subscribe(move |state| {
        if state.phase == Phase::Menu && last != Phase::Menu {
            counter.set(counter.get() + 1);
        }
        last = state.phase;
    });

    machine.advance_by(ms(1_999));
    assert_eq!(machine.state().phase, Phase::Typing);
    machine.advance_by(ms(1));
    assert_eq!(machine.state().phase, Phase::Menu);

    machine.advance_by(ms(60_000));
    assert_eq!(entries.get(), 1);
}

#[test]
fn visibility_trigger_only_counts_once() {
    let mut machine = ViewStateMachine::default();
    assert!(machine.dispatch(Event::VisibilityTriggered).unwrap());
    machine.advance_by(ms(700));
    assert!(!machine.dispatch(Event::VisibilityTriggered).unwrap());

    // A second trigger must not restart typing.
    assert_eq!(machine.state().typed_prefix, "wis");
    machine.advance_by(ms(1_300));
    assert_eq!(machine.state().phase, Phase::Menu);
}

#[test]
fn exactly_one_phase_at_every_sample() {
    let mut machine = ViewStateMachine::default();
    let mut seen = vec![machine.state().phase];
    drive(&mut machine, &["visible"]);
    for _ in 0..50 {
        machine.advance_by(ms(50));
        seen.push(machine.state().phase);
    }
    drive(&mut machine, &["activate:1"]);
    seen.push(machine.state().phase);

    assert_eq!(seen.first(), Some(&Phase::NotStarted));
    assert_eq!(seen.last(), Some(&Phase::Monitor));
    let order = |p: &Phase| match p {
        Phase::NotStarted => 0,
        Phase::Typing => 1,
        Phase::Menu => 2,
        Phase::Monitor => 3,
    };
    assert!(seen.windows(2).all(|w| order(&w[0]) <= order(&w[1])));
}

#[test]
fn monitor_round_trip_keeps_selection() {
    let mut machine = machine_in_menu();
    machine.dispatch(Event::HoverChanged(3)).unwrap();
    machine.dispatch(Event::Activated(MONITOR_INDEX)).unwrap();
    assert_eq!(machine.state().phase, Phase::Monitor);

    machine.dispatch(Event::BackRequested).unwrap();
    assert_eq!(machine.state().phase, Phase::Menu);
    assert_eq!(machine.state().selected_index, 3);
}

#[test]
fn repeated_hover_notifies_once() {
    let mut machine = machine_in_menu();
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    machine.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(machine.dispatch(Event::HoverChanged(2)).unwrap());
    assert!(!machine.dispatch(Event::HoverChanged(2)).unwrap());
    assert_eq!(notified.get(), 1);
}

#[test]
fn teardown_mid_typing_freezes_state() {
    let mut machine = ViewStateMachine::default();
    machine.dispatch(Event::VisibilityTriggered).unwrap();
    machine.advance_by(ms(550));
    assert_eq!(machine.state().typed_prefix, "wi");

    machine.teardown();
    assert_eq!(machine.pending_timers(), 0);

    machine.advance_by(ms(100_000));
    assert_eq!(machine.state().typed_prefix, "wi");
    assert_eq!(machine.state().phase, Phase::Typing);
    assert!(!machine.dispatch(Event::Activated(1)).unwrap());
}

#[test]
fn end_to_end_walkthrough() {
    let mut machine = ViewStateMachine::default();
    machine.dispatch(Event::VisibilityTriggered).unwrap();

    machine.advance_by(ms(400));
    assert_eq!(machine.state().phase, Phase::Typing);
    assert_eq!(machine.state().typed_prefix, "w");

    machine.advance_by(ms(4 * 150));
    assert_eq!(machine.state().typed_prefix, "wisp");

    machine.advance_by(ms(1_000));
    assert_eq!(machine.state().phase, Phase::Menu);
    assert_eq!(machine.state().selected_index, 0);

    machine.dispatch(Event::HoverChanged(1)).unwrap();
    machine.dispatch(Event::Activated(1)).unwrap();
    assert_eq!(machine.state().phase, Phase::Monitor);

    machine.dispatch(Event::BackRequested).unwrap();
    assert_eq!(machine.state().phase, Phase::Menu);
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut machine = machine_in_menu();
    let before = machine.state().clone();

    assert_eq!(
        machine.dispatch(Event::HoverChanged(5)),
        Err(SimError::IndexOutOfRange { index: 5, len: 5 })
    );
    assert!(machine.dispatch(Event::Activated(42)).is_err());
    assert_eq!(machine.state(), &before);
}

#[test]
fn non_monitor_items_do_nothing() {
    let mut machine = machine_in_menu();
    for index in [0, 2, 3, 4] {
        machine.dispatch(Event::Activated(index)).unwrap();
        assert_eq!(machine.state().phase, Phase::Menu);
    }
}

#[test]
fn history_skips_blink_ticks() {
    let machine = machine_in_menu();
    let events: Vec<Event> = machine.history().iter().map(|r| r.event).collect();
    assert_eq!(events.first(), Some(&Event::VisibilityTriggered));
    assert!(events
        .iter()
        .all(|e| !matches!(e, Event::TickElapsed(wisp_term::sim::Tick::Blink))));
    assert_eq!(machine.history().last().map(|r| r.at_ms), Some(2_000));
}

#[test]
fn replay_matches_direct_driving() {
    let script = steps(&["visible", "+400", "+600", "+1000", "hover:1", "activate:1", "back"]);
    let frames = replay(Script::default(), &script);

    let mut machine = ViewStateMachine::default();
    drive(
        &mut machine,
        &["visible", "+400", "+600", "+1000", "hover:1", "activate:1", "back"],
    );

    let last = frames.last().unwrap();
    assert_eq!(last.state.phase, machine.state().phase);
    assert_eq!(last.state.selected_index, machine.state().selected_index);
    assert_eq!(last.state.typed_prefix, machine.state().typed_prefix);
    assert_eq!(last.at_ms, 2_000);
}
