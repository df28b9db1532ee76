//! Mounting, timing fallbacks, teardown and handles.

mod common;

use std::time::Duration;

use common::*;
use shutter::panel::DEFAULT_SAFETY_TIMEOUT;
use shutter::{
    Direction, Message, Panel, PanelConfig, PanelError, PanelEvent, Phase, Topic, TransitionConfig,
};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

// =============================================================================
// Mount errors
// =============================================================================

#[test]
fn test_empty_id_is_rejected() {
    let (bus, frames) = setup();
    let messages = record_bus(&bus);

    let err = Panel::mount(PanelConfig::new(""), &bus, frames.clone()).unwrap_err();

    assert_eq!(err, PanelError::EmptyId);
    assert!(messages.borrow().is_empty());
    // Only the recorder.
    assert_eq!(bus.subscriber_count(Topic::ToggleRequest), 1);
}

#[test]
fn test_duplicate_id_is_rejected() {
    let (bus, frames) = setup();
    let _first = Panel::mount(PanelConfig::new("dup"), &bus, frames.clone()).unwrap();
    let messages = record_bus(&bus);

    let err = Panel::mount(PanelConfig::new("dup"), &bus, frames.clone()).unwrap_err();

    assert_eq!(err, PanelError::DuplicateId("dup".to_string()));
    assert_eq!(err.to_string(), "duplicate panel id 'dup' on this bus");
    assert!(messages.borrow().is_empty());
    assert_eq!(bus.subscriber_count(Topic::ToggleRequest), 2);
}

#[test]
fn test_same_id_on_separate_buses() {
    let frames = std::rc::Rc::new(shutter::FrameLoop::new());
    let (one, two) = (shutter::Bus::new(), shutter::Bus::new());

    let a = Panel::mount(PanelConfig::new("same"), &one, frames.clone());
    let b = Panel::mount(PanelConfig::new("same"), &two, frames.clone());

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert!(!one.same_bus(&two));
}

#[test]
fn test_id_is_reusable_after_destroy() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("reuse"), &bus, frames.clone()).unwrap();
    assert!(bus.is_claimed("reuse"));

    panel.destroy();
    assert!(!bus.is_claimed("reuse"));

    assert!(Panel::mount(PanelConfig::new("reuse"), &bus, frames.clone()).is_ok());
}

#[test]
fn test_anonymous_ids_are_unique() {
    let (bus, frames) = setup();

    let a = Panel::mount(PanelConfig::anonymous(), &bus, frames.clone()).unwrap();
    let b = Panel::mount(PanelConfig::anonymous(), &bus, frames.clone()).unwrap();

    assert!(a.id().starts_with("collapse-"));
    assert_ne!(a.id(), b.id());
}

// =============================================================================
// Timing fallbacks
// =============================================================================

#[test]
fn test_safety_timeout_promotes_without_completion() {
    init_logger();
    let (bus, frames) = setup();
    let (panel, events) = mount_recorded(PanelConfig::new("slow"), &bus, &frames);
    let messages = record_bus(&bus);

    panel.open();
    frames.run_frame();
    assert_eq!(frames.pending_timers(), 1);

    frames.advance(DEFAULT_SAFETY_TIMEOUT - Duration::from_millis(1));
    assert_eq!(panel.phase(), Phase::Opening);

    frames.advance(Duration::from_millis(1));
    assert_eq!(panel.phase(), Phase::Open);
    assert_eq!(count_event(&events, PanelEvent::Shown), 1);
    assert_eq!(state_changes(&messages), vec![("slow".to_string(), true)]);
}

#[test]
fn test_completion_cancels_safety_timer() {
    let (bus, frames) = setup();
    let (panel, events) = mount_recorded(PanelConfig::new("fast"), &bus, &frames);

    panel.open();
    finish(&frames, &[&panel]);
    assert_eq!(frames.pending_timers(), 0);

    frames.advance(DEFAULT_SAFETY_TIMEOUT * 2);
    assert_eq!(count_event(&events, PanelEvent::Shown), 1);
}

#[test]
fn test_custom_safety_timeout() {
    let (bus, frames) = setup();
    let config = PanelConfig::new("custom")
        .transition(TransitionConfig::new(Duration::from_millis(50)));
    let panel = Panel::mount(config, &bus, frames.clone()).unwrap();

    panel.open();
    frames.run_frame();
    frames.advance(Duration::from_millis(50));

    assert_eq!(panel.phase(), Phase::Open);
}

#[test]
fn test_reduced_motion_settles_on_frame() {
    let (bus, frames) = setup();
    let config = PanelConfig::new("instant").transition(TransitionConfig::instant());
    let (panel, events) = mount_recorded(config, &bus, &frames);

    panel.open();
    assert_eq!(panel.phase(), Phase::Opening);
    frames.run_frame();

    assert_eq!(panel.phase(), Phase::Open);
    assert_eq!(frames.pending_timers(), 0);
    let token = last_token(&events).unwrap();
    assert_eq!(
        events.borrow()[1..].to_vec(),
        vec![
            PanelEvent::BeforeShow,
            PanelEvent::TransitionStart(Direction::Show, token),
            PanelEvent::Shown,
            PanelEvent::VisibleChanged(true),
        ]
    );
}

#[test]
fn test_completion_without_transition_is_ignored() {
    let (bus, frames) = setup();
    let (panel, events) = mount_recorded(PanelConfig::new("idle"), &bus, &frames);
    assert_eq!(panel.transition_token(), None);

    panel.open();
    finish(&frames, &[&panel]);
    let token = last_token(&events).unwrap();
    let seen = events.borrow().len();

    // Replaying a finished transition's token changes nothing.
    panel.transition_end(token);
    assert_eq!(panel.phase(), Phase::Open);
    assert_eq!(events.borrow().len(), seen);
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn test_destroy_unsubscribes_everything() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("gone").group("g"), &bus, frames.clone()).unwrap();
    assert_eq!(bus.subscriber_count(Topic::GroupOpened), 1);

    panel.destroy();

    for topic in Topic::ALL {
        assert_eq!(bus.subscriber_count(topic), 0, "{} still subscribed", topic);
    }
}

#[test]
fn test_destroy_mid_transition_cancels_callbacks() {
    init_logger();
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("gone"), &bus, frames.clone()).unwrap();
    let handle = panel.handle();

    panel.open();
    frames.run_frame();
    assert_eq!(frames.pending_timers(), 1);

    let messages = record_bus(&bus);
    drop(panel);

    assert_eq!(frames.pending_timers(), 0);
    frames.run_until_idle(4);
    frames.advance(DEFAULT_SAFETY_TIMEOUT * 2);
    assert!(messages.borrow().is_empty());
    assert!(!handle.is_alive());
}

#[test]
fn test_destroy_before_frame_runs() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("early"), &bus, frames.clone()).unwrap();

    panel.open();
    let messages = record_bus(&bus);
    panel.destroy();

    assert_eq!(frames.run_until_idle(4), 1);
    assert!(messages.borrow().is_empty());
}

#[test]
fn test_toggle_after_destroy_is_silent() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("gone"), &bus, frames.clone()).unwrap();
    panel.destroy();
    let messages = record_bus(&bus);

    bus.publish(Message::toggle_request("gone"));
    bus.publish(Message::state_sync_request("gone"));

    assert_eq!(messages.borrow().len(), 2);
}

// =============================================================================
// Observers and handles
// =============================================================================

#[test]
fn test_unobserve_stops_delivery() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("obs"), &bus, frames.clone()).unwrap();
    let seen = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = seen.clone();
    let id = panel.observe(move |_| counter.set(counter.get() + 1));

    panel.open();
    assert_eq!(seen.get(), 1);

    assert!(panel.unobserve(id));
    assert!(!panel.unobserve(id));
    finish(&frames, &[&panel]);
    assert_eq!(seen.get(), 1);
}

#[test]
fn test_observer_added_after_mount_misses_mount_event() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("late"), &bus, frames.clone()).unwrap();
    let events = record_events(&panel);

    panel.open();

    assert_eq!(*events.borrow(), vec![PanelEvent::BeforeShow]);
}

#[test]
fn test_observer_retargeting_during_before_show() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("flip"), &bus, frames.clone()).unwrap();
    let handle = panel.handle();
    panel.observe(move |event| {
        if *event == PanelEvent::BeforeShow {
            handle.set_visible(false);
        }
    });

    panel.open();
    assert_eq!(panel.phase(), Phase::Closing);

    finish(&frames, &[&panel]);
    assert_eq!(panel.phase(), Phase::Closed);
}

#[test]
fn test_handle_drives_panel() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("h"), &bus, frames.clone()).unwrap();
    let handle = panel.handle();

    assert_eq!(handle.id().as_deref(), Some("h"));
    handle.toggle();
    assert_eq!(handle.phase(), Some(Phase::Opening));
    frames.run_frame();
    let token = handle.transition_token().unwrap();
    handle.transition_end(token);

    assert_eq!(handle.is_visible(), Some(true));
    assert_eq!(panel.phase(), Phase::Open);
}

#[test]
fn test_handle_outliving_panel() {
    let (bus, frames) = setup();
    let panel = Panel::mount(PanelConfig::new("h"), &bus, frames.clone()).unwrap();
    let handle = panel.handle();
    panel.open();
    frames.run_frame();
    let token = handle.transition_token().unwrap();
    drop(panel);

    handle.set_visible(true);
    handle.transition_end(token);

    assert!(!handle.is_alive());
    assert_eq!(handle.transition_token(), None);
    assert_eq!(handle.id(), None);
    assert_eq!(handle.phase(), None);
    assert_eq!(frames.pending_frames(), 0);
}
