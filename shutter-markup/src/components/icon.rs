//! Named icons resolved against a registry.

use std::collections::HashSet;

use log::debug;

use crate::markup::Markup;

const PREFIX: &str = "BIcon";

/// Icons available for rendering, keyed by pascal-case name.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    names: HashSet<String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register icons. Names go through the same normalisation as lookups.
    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.register(name.as_ref());
        }
        self
    }

    pub fn register(&mut self, name: &str) {
        let name = normalize_icon_name(name);
        if !name.is_empty() {
            self.names.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = normalize_icon_name(name);
        !name.is_empty() && self.names.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconProps {
    pub icon: String,
    pub variant: Option<String>,
    pub label: Option<String>,
}

impl IconProps {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            ..Default::default()
        }
    }
}

/// Trim, pascal-case and strip a leading `BIcon`.
///
/// `" alarm-fill "`, `"alarmFill"` and `"BIconAlarmFill"` all become
/// `"AlarmFill"`.
pub fn normalize_icon_name(name: &str) -> String {
    let pascal: String = name
        .trim()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    match pascal.strip_prefix(PREFIX) {
        Some(rest) => rest.to_string(),
        None => pascal,
    }
}

fn kebab(pascal: &str) -> String {
    let mut out = String::with_capacity(pascal.len() + 4);
    for (i, c) in pascal.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Render `props.icon` if `icons` knows it, otherwise the blank icon.
pub fn icon(props: &IconProps, icons: &IconSet) -> Markup {
    let name = normalize_icon_name(&props.icon);
    let resolved = if icons.contains(&name) {
        kebab(&name)
    } else {
        if !props.icon.is_empty() {
            debug!("icon '{}' not registered, rendering blank", props.icon);
        }
        "blank".to_string()
    };

    Markup::new("svg")
        .class("b-icon")
        .class("bi")
        .class(format!("bi-{resolved}"))
        .variant("text", props.variant.as_deref())
        .attr("viewBox", "0 0 16 16")
        .attr("width", "1em")
        .attr("height", "1em")
        .attr("focusable", "false")
        .attr("role", "img")
        .attr(
            "aria-label",
            props.label.clone().unwrap_or_else(|| resolved.clone()),
        )
}
