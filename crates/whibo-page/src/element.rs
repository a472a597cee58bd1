use std::collections::BTreeMap;

/// Opaque handle to an element stored in a [`crate::Document`].
///
/// Handles are never reused, so a handle to a removed element stays invalid
/// even after new elements are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u64);

impl ElementId {
    /// Raw numeric value of the handle, useful as a stable key in views.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Inline style properties the helper writes to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Opacity in `0.0..=1.0`. `None` means fully opaque.
    pub opacity: Option<f32>,
    /// Width as a percentage of the parent.
    pub width_percent: Option<f64>,
    pub z_index: Option<i32>,
    /// Minimum width in pixels.
    pub min_width: Option<f32>,
}

/// A single node of the page: tag, identity, classes, attributes, inline
/// style, text content and (for inputs) the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: Style,
    pub text: String,
    pub value: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    /// Adds every whitespace-separated class in `classes`.
    pub fn with_classes(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_deduplicated() {
        let mut element = Element::new("div").with_classes("alert  alert-info alert");
        assert_eq!(element.classes, vec!["alert", "alert-info"]);

        element.add_class("alert-info");
        element.remove_class("alert");
        assert_eq!(element.classes, vec!["alert-info"]);
        assert!(!element.has_class("alert"));
    }

    #[test]
    fn attributes_are_readable() {
        let element = Element::new("a").with_attribute("href", "/download/abc");
        assert_eq!(element.attribute("href"), Some("/download/abc"));
        assert_eq!(element.attribute("download"), None);
    }
}
