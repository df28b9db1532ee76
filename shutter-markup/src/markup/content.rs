use super::Markup;

/// What sits between the opening and closing tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Escaped on output.
    Text(String),
    /// Trusted markup, written as-is.
    Html(String),
    Children(Vec<Markup>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Html(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(text) => escape_into(text, out),
            Self::Html(html) => out.push_str(html),
            Self::Children(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
