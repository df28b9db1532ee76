//! Collapse container for a mounted panel.

use shutter::{Panel, PanelHandle, Phase, Toggler};

use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseProps {
    pub id: String,
    pub phase: Phase,
    pub is_nav: bool,
    pub tag: String,
}

impl Default for CollapseProps {
    fn default() -> Self {
        Self {
            id: String::new(),
            phase: Phase::Closed,
            is_nav: false,
            tag: "div".into(),
        }
    }
}

impl CollapseProps {
    pub fn new(id: impl Into<String>, phase: Phase) -> Self {
        Self {
            id: id.into(),
            phase,
            ..Default::default()
        }
    }

    pub fn from_panel(panel: &Panel) -> Self {
        Self {
            id: panel.id().to_string(),
            phase: panel.phase(),
            is_nav: panel.is_nav(),
            ..Default::default()
        }
    }

    /// `None` once the panel behind the handle is gone.
    pub fn from_handle(handle: &PanelHandle, is_nav: bool) -> Option<Self> {
        Some(Self {
            id: handle.id()?,
            phase: handle.phase()?,
            is_nav,
            ..Default::default()
        })
    }
}

/// Render the panel container.
///
/// Stable phases carry `collapse` (plus `show` when open); transient phases
/// carry `collapsing` instead so the render layer can animate the height.
/// A closed panel is hidden inline.
pub fn collapse(props: &CollapseProps, children: Vec<Markup>) -> Markup {
    let stable = props.phase.is_stable();
    let node = Markup::new(props.tag.as_str())
        .id(props.id.as_str())
        .class_if(props.is_nav, "navbar-collapse")
        .class_if(stable, "collapse")
        .class_if(props.phase == Phase::Open, "show")
        .class_if(!stable, "collapsing")
        .children(children);

    if props.phase == Phase::Closed {
        node.style("display", "none")
    } else {
        node
    }
}

/// State of the element that toggles one or more panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleProps {
    pub controls: Vec<String>,
    pub expanded: bool,
}

impl ToggleProps {
    pub fn from_toggler(toggler: &Toggler) -> Self {
        Self {
            controls: toggler.targets().to_vec(),
            expanded: toggler.is_expanded(),
        }
    }
}

/// Render a toggle button wired to its panels by id.
pub fn toggle_button(props: &ToggleProps, children: Vec<Markup>) -> Markup {
    Markup::new("button")
        .attr("type", "button")
        .class_if(!props.expanded, "collapsed")
        .attr("aria-controls", props.controls.join(" "))
        .attr("aria-expanded", if props.expanded { "true" } else { "false" })
        .children(children)
}
