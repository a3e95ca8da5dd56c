//! Minimal XML parser for SSML documents
//!
//! Hand-written recursive descent over the small XML subset SSML uses:
//! one root element, nested elements, attributes in single or double
//! quotes, character data with the five predefined entities plus numeric
//! references, comments, and an optional `<?xml ?>` prolog. Anything
//! outside that subset (CDATA, doctypes, processing instructions past the
//! prolog) is a parse error.
//!
//! Strictness is intentional: the classifier relies on malformed input
//! failing here instead of being half-accepted.

use crate::error::{Result, SsmlError};
use crate::markup::node::{Element, Node};

/// Parse a complete document: optional prolog, one root element,
/// nothing but whitespace and comments around it
pub fn parse(input: &str) -> Result<Element> {
    let mut parser = Parser::new(input);
    parser.skip_misc()?;
    parser.skip_prolog()?;
    parser.skip_misc()?;
    let root = parser.parse_element()?;
    parser.skip_misc()?;
    if !parser.at_end() {
        return Err(parser.error("trailing content after root element"));
    }
    Ok(root)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn error(&self, msg: &str) -> SsmlError {
        SsmlError::Parse(format!("{} (at char {})", msg, self.pos))
    }

    fn starts_with(&self, s: &str) -> bool {
        s.chars()
            .enumerate()
            .all(|(k, ch)| self.chars.get(self.pos + k) == Some(&ch))
    }

    fn expect(&mut self, ch: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == ch => Ok(()),
            Some(c) => Err(self.error(&format!("expected '{}', found '{}'", ch, c))),
            None => Err(self.error(&format!("expected '{}', found end of input", ch))),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and comments between markup
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        self.pos += 4;
        while !self.starts_with("-->") {
            if self.at_end() {
                return Err(self.error("unterminated comment"));
            }
            self.pos += 1;
        }
        self.pos += 3;
        Ok(())
    }

    fn skip_prolog(&mut self) -> Result<()> {
        if !self.starts_with("<?xml") {
            return Ok(());
        }
        while !self.starts_with("?>") {
            if self.at_end() {
                return Err(self.error("unterminated XML prolog"));
            }
            self.pos += 1;
        }
        self.pos += 2;
        Ok(())
    }

    fn is_name_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == ':' || ch == '-' || ch == '_' || ch == '.'
    }

    fn parse_name(&mut self) -> Result<String> {
        let mut name = String::new();
        while matches!(self.peek(), Some(c) if Self::is_name_char(c)) {
            name.push(self.bump().unwrap());
        }
        if name.is_empty() {
            return Err(self.error("expected a name"));
        }
        Ok(name)
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.expect('<')?;
        let name = self.parse_name()?;
        let mut element = Element::new(&name);

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('/') => {
                    self.pos += 1;
                    self.expect('>')?;
                    return Ok(element);
                }
                Some('>') => {
                    self.pos += 1;
                    self.parse_children(&mut element)?;
                    return Ok(element);
                }
                Some(c) if Self::is_name_char(c) => {
                    let attr = self.parse_name()?;
                    self.skip_whitespace();
                    self.expect('=')?;
                    self.skip_whitespace();
                    let value = self.parse_attr_value()?;
                    element.set_attr(&attr, &value);
                }
                Some(c) => {
                    return Err(self.error(&format!("unexpected '{}' in element tag", c)))
                }
                None => return Err(self.error("unterminated element tag")),
            }
        }
    }

    fn parse_attr_value(&mut self) -> Result<String> {
        let quote = match self.bump() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error("expected quoted attribute value")),
        };
        let mut value = String::new();
        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some('&') => value.push(self.parse_entity()?),
                Some('<') => return Err(self.error("'<' in attribute value")),
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
                None => return Err(self.error("unterminated attribute value")),
            }
        }
    }

    fn parse_children(&mut self, parent: &mut Element) -> Result<()> {
        loop {
            if self.starts_with("<!--") {
                self.skip_comment()?;
                continue;
            }
            if self.starts_with("</") {
                self.pos += 2;
                let close = self.parse_name()?;
                if close != parent.name {
                    return Err(self.error(&format!(
                        "mismatched closing tag: expected </{}>, found </{}>",
                        parent.name, close
                    )));
                }
                self.skip_whitespace();
                self.expect('>')?;
                return Ok(());
            }
            match self.peek() {
                Some('<') => {
                    let child = self.parse_element()?;
                    parent.push_element(child);
                }
                Some(_) => {
                    let text = self.parse_text()?;
                    parent.children.push(Node::Text(text));
                }
                None => {
                    return Err(self.error(&format!("unterminated <{}> element", parent.name)))
                }
            }
        }
    }

    fn parse_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('<') | None => return Ok(text),
                Some('&') => text.push(self.parse_entity()?),
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_entity(&mut self) -> Result<char> {
        self.expect('&')?;
        let mut name = String::new();
        loop {
            match self.bump() {
                Some(';') => break,
                Some(c) if name.len() < 8 => name.push(c),
                _ => return Err(self.error("malformed entity reference")),
            }
        }
        match name.as_str() {
            "amp" => Ok('&'),
            "lt" => Ok('<'),
            "gt" => Ok('>'),
            "quot" => Ok('"'),
            "apos" => Ok('\''),
            _ if name.starts_with("#x") || name.starts_with("#X") => {
                u32::from_str_radix(&name[2..], 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error("bad numeric character reference"))
            }
            _ if name.starts_with('#') => name[1..]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| self.error("bad numeric character reference")),
            _ => Err(self.error(&format!("unknown entity '&{};'", name))),
        }
    }
}
