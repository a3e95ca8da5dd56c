//! Markup serialization
//!
//! Writes a tree back to a compact string. Output is deterministic:
//! attributes in stored order, empty elements self-closed, no added
//! whitespace. `serialize` round-trips through `parser::parse`.

use crate::markup::node::{Element, Node};

/// Serialize a full document: XML prolog plus the root element
pub fn serialize(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>");
    write_element(root, &mut out);
    out
}

/// Serialize an element without the prolog
pub fn serialize_fragment(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out, true);
        out.push('"');
    }
    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(el) => write_element(el, out),
            Node::Text(text) => escape_into(text, out, false),
        }
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String, in_attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
