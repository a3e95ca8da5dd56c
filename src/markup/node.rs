//! Markup tree model
//!
//! A deliberately small XML tree: elements with an ordered attribute list
//! and mixed element/text children. The document owns the whole tree;
//! nodes are reached by traversal, never handed out by ownership.

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// The element inside this node, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

/// An element with ordered attributes and mixed children
///
/// Attributes keep insertion order so serialization is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place so the
    /// attribute order stays stable
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Append a child element
    pub fn push_element(&mut self, el: Element) {
        self.children.push(Node::Element(el));
    }

    /// Append a text child
    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    /// Iterate over child elements only
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Does any element in this subtree (self included) have this name?
    pub fn has_descendant(&self, name: &str) -> bool {
        if self.name == name {
            return true;
        }
        self.child_elements().any(|el| el.has_descendant(name))
    }

    /// Find the first element in the subtree carrying `id="<id>"`
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Concatenated text of the subtree, whitespace as-is
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_roundtrip() {
        let mut el = Element::new("s");
        el.set_attr("id", "sentence-0");
        assert_eq!(el.attr("id"), Some("sentence-0"));
        assert_eq!(el.attr("missing"), None);

        // Replacing keeps the slot, not appending a duplicate
        el.set_attr("id", "sentence-1");
        assert_eq!(el.attr("id"), Some("sentence-1"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_attribute_order_stable() {
        let mut el = Element::new("prosody");
        el.set_attr("rate", "slow");
        el.set_attr("pitch", "low");
        el.set_attr("rate", "fast");
        let names: Vec<&str> = el.attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["rate", "pitch"]);
    }

    #[test]
    fn test_find_by_id() {
        let mut root = Element::new("speak");
        let mut p = Element::new("p");
        let mut s = Element::new("s");
        s.set_attr("id", "sentence-0");
        s.push_text("Hello.");
        p.push_element(s);
        root.push_element(p);

        let found = root.find_by_id_mut("sentence-0").unwrap();
        assert_eq!(found.name, "s");
        assert!(root.find_by_id_mut("sentence-9").is_none());
    }

    #[test]
    fn test_visible_text_spans_subtree() {
        let mut s = Element::new("s");
        let mut em = Element::new("emphasis");
        em.push_text("Hello ");
        s.push_element(em);
        s.push_text("world.");
        assert_eq!(s.visible_text(), "Hello world.");
    }

    #[test]
    fn test_has_descendant() {
        let mut root = Element::new("speak");
        let mut s = Element::new("s");
        s.push_element(Element::new("break"));
        root.push_element(s);
        assert!(root.has_descendant("break"));
        assert!(!root.has_descendant("emphasis"));
    }
}
