mod content;
mod node;

pub use content::{Content, escape};
pub use node::{Markup, find_by_id};
