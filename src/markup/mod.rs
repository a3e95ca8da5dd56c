//! Markup tree, parser, serializer, and input classification

pub mod classify;
pub mod node;
pub mod parser;
pub mod writer;

pub use classify::{classify, Classification, PAUSE_ELEMENT, ROOT_ELEMENT};
pub use node::{Element, Node};
pub use parser::parse;
pub use writer::{serialize, serialize_fragment};
