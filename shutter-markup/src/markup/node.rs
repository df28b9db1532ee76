use super::Content;
use super::content::escape;

/// One element of a rendered view tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes other than `id`, `class` and `style`, in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations, in insertion order.
    pub styles: Vec<(String, String)>,
    pub content: Content,
}

impl Markup {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn maybe_id(mut self, id: Option<impl Into<String>>) -> Self {
        self.id = id.map(Into::into);
        self
    }

    // Classes

    /// Add a class. Empty names and duplicates are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition { self.class(class) } else { self }
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, Self::class)
    }

    /// Add `{prefix}-{value}` when a value is set.
    pub fn variant(self, prefix: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.class(format!("{prefix}-{value}")),
            _ => self,
        }
    }

    // Attributes

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set a style declaration, replacing any previous value.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((property, value)),
        }
        self
    }

    // Content

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content = Content::Html(html.into());
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Replace the content with `children`. An empty vector clears it.
    pub fn children(mut self, children: Vec<Markup>) -> Self {
        self.content = if children.is_empty() {
            Content::None
        } else {
            Content::Children(children)
        };
        self
    }

    // Queries

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[Markup] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Output

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(p, v)| format!("{p}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            push_attr(out, "style", &style);
        }
        out.push('>');
        self.content.write_html(out);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Find a node by id in the tree.
pub fn find_by_id<'a>(root: &'a Markup, id: &str) -> Option<&'a Markup> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }
    root.child_nodes()
        .iter()
        .find_map(|child| find_by_id(child, id))
}
