//! In-memory document the page scripts operate on

use super::{Element, Node};
use crate::helpers::html_escape;

/// A page document: title, root element classes and the body tree
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    root_classes: Vec<String>,
    body: Element,
}

impl Document {
    /// Create a document with an empty body
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            root_classes: Vec::new(),
            body: Element::new("body"),
        }
    }

    /// Create a document with the given body children
    pub fn with_body(title: &str, children: Vec<Node>) -> Self {
        let mut doc = Self::new(title);
        doc.body.replace_children(children);
        doc
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| c == class)
    }

    /// Activate `class` on the root and drop every class in `exclusive`
    pub fn set_exclusive_root_class(&mut self, class: &str, exclusive: &[&str]) {
        self.root_classes
            .retain(|c| !exclusive.contains(&c.as_str()) && c != class);
        self.root_classes.push(class.to_string());
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find(&|el: &Element| el.id() == Some(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_mut(&|el: &Element| el.id() == Some(id))
    }

    pub fn element_by_class(&self, class: &str) -> Option<&Element> {
        self.body.find(&|el: &Element| el.has_class(class))
    }

    pub fn element_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.body.find_mut(&|el: &Element| el.has_class(class))
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        let class_attr = if self.root_classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, html_escape(&self.root_classes.join(" ")))
        };
        format!(
            "<!DOCTYPE html>\n<html{}>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n{}\n</html>\n",
            class_attr,
            html_escape(&self.title),
            self.body.to_html()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_root_class() {
        let mut doc = Document::new("t");
        let modes = ["dark-mode", "light-mode"];
        doc.set_exclusive_root_class("dark-mode", &modes);
        doc.set_exclusive_root_class("light-mode", &modes);
        doc.set_exclusive_root_class("light-mode", &modes);
        assert!(doc.has_root_class("light-mode"));
        assert!(!doc.has_root_class("dark-mode"));
        assert!(doc.to_html().contains(r#"<html class="light-mode">"#));
    }

    #[test]
    fn test_lookup_by_id_and_class() {
        let mut doc = Document::with_body(
            "t",
            vec![
                Element::new("div").attr("class", "scroll-progress-bar").into(),
                Element::new("ul").attr("id", "list").into(),
            ],
        );
        assert!(doc.contains_id("list"));
        assert!(!doc.contains_id("missing"));
        doc.element_by_class_mut("scroll-progress-bar")
            .unwrap()
            .set_style("width", "0%");
        assert_eq!(
            doc.element_by_class("scroll-progress-bar").unwrap().style("width"),
            Some("0%")
        );
    }

    #[test]
    fn test_to_html_escapes_title() {
        let mut doc = Document::new("A & B");
        doc.set_exclusive_root_class("dark-mode", &[]);
        let html = doc.to_html();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<html class="dark-mode">"#));
    }
}
