//! Element tree nodes

use crate::helpers::html_escape;

/// A node in the element tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Pre-rendered markup inserted verbatim (innerHTML)
    Raw(String),
}

impl Node {
    /// Create a text node
    pub fn text<S: Into<String>>(text: S) -> Self {
        Node::Text(text.into())
    }

    /// Create a raw markup node
    pub fn raw<S: Into<String>>(html: S) -> Self {
        Node::Raw(html.into())
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Raw(html) => out.push_str(html),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with attributes, inline styles and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a child node
    pub fn child<N: Into<Node>>(mut self, node: N) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder: append a text node
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::text(text));
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Set an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .styles
                .push((property.to_string(), value.to_string())),
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and raw nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn append<N: Into<Node>>(&mut self, node: N) {
        self.children.push(node.into());
    }

    /// Replace all children (innerHTML assignment)
    pub fn replace_children(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    /// Replace all children with a single text node (textContent assignment)
    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::text(text)];
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
    }

    /// Depth-first search for the first element matching `pred`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    /// Mutable depth-first search for the first element matching `pred`
    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Serialize the element and its subtree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the children (innerHTML)
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(p, v)| format!("{}: {}", p, v))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(r#" style="{}""#, html_escape(&style)));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}
