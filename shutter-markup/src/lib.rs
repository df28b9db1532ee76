//! View glue for shutter panels.
//!
//! Every component is a pure function from immutable props (and children)
//! to a [`Markup`] tree. Nothing here holds state; panel state comes in
//! through [`CollapseProps`] and [`ToggleProps`].

pub mod components;
pub mod markup;

pub use components::*;
pub use markup::{Content, Markup, escape, find_by_id};
