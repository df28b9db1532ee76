use std::rc::Rc;
use std::time::Duration;

use log::debug;
use shutter::{ClickTarget, FrameLoop, Panel, PanelEvent, PanelHandle, RenderProbe, Timing};
use shutter_markup::{CollapseProps, Markup, ToggleProps, collapse, toggle_button};

/// Stand-in for a rendering layer: animates transitions on the frame loop
/// and prints the collapse markup whenever a panel settles.
pub struct Renderer {
    frames: Rc<FrameLoop>,
    animation: Duration,
}

impl Renderer {
    pub fn new(frames: Rc<FrameLoop>, animation: Duration) -> Self {
        Self { frames, animation }
    }

    pub fn attach(&self, panel: &Panel, title: &'static str) {
        let handle = panel.handle();
        let is_nav = panel.is_nav();
        let frames = Rc::clone(&self.frames);
        let animation = self.animation;

        print_panel(&handle, is_nav, title);
        panel.observe(move |event| match event {
            PanelEvent::TransitionStart(direction, token) => {
                debug!("render: animating {:?} for {:?}", direction, animation);
                let handle = handle.clone();
                let token = *token;
                frames.set_timeout(animation, Box::new(move || handle.transition_end(token)));
            }
            PanelEvent::VisibleChanged(_) => print_panel(&handle, is_nav, title),
            _ => {}
        });
    }
}

fn print_panel(handle: &PanelHandle, is_nav: bool, title: &str) {
    let Some(props) = CollapseProps::from_handle(handle, is_nav) else {
        return;
    };
    let node = collapse(&props, vec![Markup::div().class("card-body").text(title)]);
    println!("{}", node.to_html());
}

pub fn print_toggle(props: &ToggleProps, label: &str) {
    let node = toggle_button(props, vec![Markup::span().text(label)]);
    println!("{}", node.to_html());
}

/// The demo's panels are always laid out.
pub struct Displayed;

impl RenderProbe for Displayed {
    fn is_displayed(&self) -> bool {
        true
    }

    fn forced_visible(&self) -> bool {
        false
    }
}

pub fn menu_item_click() -> ClickTarget {
    ClickTarget::new(["dropdown-item", "active"])
}
