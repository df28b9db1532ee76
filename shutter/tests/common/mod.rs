//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use shutter::{Bus, FrameLoop, Message, Panel, PanelConfig, PanelEvent, Topic, TransitionToken};

pub type Log<T> = Rc<RefCell<Vec<T>>>;

pub fn setup() -> (Bus, Rc<FrameLoop>) {
    (Bus::new(), Rc::new(FrameLoop::new()))
}

/// Record every message published on `bus` from now on.
pub fn record_bus(bus: &Bus) -> Log<Message> {
    let log: Log<Message> = Rc::default();
    let sink = Rc::clone(&log);
    bus.subscribe_all(move |message| sink.borrow_mut().push(message.clone()));
    log
}

/// Record every local event of `panel` from now on.
pub fn record_events(panel: &Panel) -> Log<PanelEvent> {
    let log: Log<PanelEvent> = Rc::default();
    let sink = Rc::clone(&log);
    panel.observe(move |event| sink.borrow_mut().push(*event));
    log
}

/// Mount with an event recorder attached before the mount settle.
pub fn mount_recorded(
    config: PanelConfig,
    bus: &Bus,
    frames: &Rc<FrameLoop>,
) -> (Panel, Log<PanelEvent>) {
    let log: Log<PanelEvent> = Rc::default();
    let sink = Rc::clone(&log);
    let panel = Panel::mount_observed(config, bus, frames.clone(), move |event| {
        sink.borrow_mut().push(*event)
    })
    .expect("mount");
    (panel, log)
}

/// Run pending frames, then complete every animating transition.
pub fn finish(frames: &FrameLoop, panels: &[&Panel]) {
    frames.run_until_idle(8);
    for panel in panels {
        if let Some(token) = panel.transition_token() {
            panel.transition_end(token);
        }
    }
}

/// Token of the most recent `TransitionStart` in `log`.
pub fn last_token(log: &Log<PanelEvent>) -> Option<TransitionToken> {
    log.borrow().iter().rev().find_map(|event| match event {
        PanelEvent::TransitionStart(_, token) => Some(*token),
        _ => None,
    })
}

pub fn count(log: &Log<Message>, topic: Topic) -> usize {
    log.borrow().iter().filter(|m| m.topic() == topic).count()
}

pub fn state_changes(log: &Log<Message>) -> Vec<(String, bool)> {
    log.borrow()
        .iter()
        .filter_map(|m| match m {
            Message::StateChanged { id, visible } => Some((id.clone(), *visible)),
            _ => None,
        })
        .collect()
}

pub fn count_event(log: &Log<PanelEvent>, event: PanelEvent) -> usize {
    log.borrow().iter().filter(|e| **e == event).count()
}
