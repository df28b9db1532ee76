mod render;

use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;
use shutter::prelude::*;
use shutter::query_visibility;
use shutter_markup::ToggleProps;
use simplelog::{Config, LevelFilter, WriteLogger};

use render::{Displayed, Renderer, menu_item_click, print_toggle};

const FRAME: Duration = Duration::from_millis(16);
const ANIMATION: Duration = Duration::from_millis(350);

const SECTIONS: [(&str, &str); 3] = [
    ("faq-shipping", "Shipping"),
    ("faq-returns", "Returns"),
    ("faq-warranty", "Warranty"),
];

enum Step {
    /// Click the toggler of a section.
    Click(usize),
    /// Click a dropdown item inside the navbar menu.
    Navigate,
}

/// (tick, step)
static SCRIPT: [(u32, Step); 5] = [
    (5, Step::Click(1)),
    (45, Step::Click(2)),
    (85, Step::Click(2)),
    (125, Step::Click(0)),
    (165, Step::Navigate),
];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_file = File::create("shutter-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let bus = Bus::new();
    let frames = Rc::new(FrameLoop::new());
    let renderer = Renderer::new(Rc::clone(&frames), ANIMATION);

    let mut sections = Vec::with_capacity(SECTIONS.len());
    for (i, (id, title)) in SECTIONS.into_iter().enumerate() {
        let config = PanelConfig::new(id).group("faq").visible(i == 0);
        let panel = Panel::mount(config, &bus, frames.clone()).expect("Failed to mount panel");
        renderer.attach(&panel, title);
        sections.push(panel);
    }
    let togglers: Vec<Toggler> = SECTIONS
        .iter()
        .map(|(id, _)| Toggler::new(&bus, [*id]))
        .collect();

    let menu = Panel::mount(
        PanelConfig::new("navbar-menu").nav().visible(true),
        &bus,
        frames.clone(),
    )
    .expect("Failed to mount panel");
    renderer.attach(&menu, "Menu");

    let mut interval = tokio::time::interval(FRAME);
    let mut script = SCRIPT.iter().peekable();
    let mut tick = 0u32;
    loop {
        interval.tick().await;
        frames.advance_to(Instant::now());
        frames.run_frame();

        while let Some((_, step)) = script.next_if(|(at, _)| *at <= tick) {
            match step {
                Step::Click(index) => {
                    let (id, title) = SECTIONS[*index];
                    info!("script: clicking toggler for '{}'", id);
                    togglers[*index].click();
                    print_toggle(&ToggleProps::from_toggler(&togglers[*index]), title);
                }
                Step::Navigate => {
                    let outcome = menu.handle_click(&menu_item_click(), &Displayed);
                    info!("script: menu navigation -> {:?}", outcome);
                }
            }
        }

        if script.peek().is_none() && frames.pending_frames() == 0 && frames.pending_timers() == 0
        {
            break;
        }
        tick += 1;
    }

    for (id, _) in SECTIONS {
        println!("{}: visible = {:?}", id, query_visibility(&bus, id));
    }
}
