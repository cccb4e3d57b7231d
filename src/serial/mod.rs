//! XML serialization.
//!
//! Turns a node and its subtree back into markup text. Writing that text to
//! a file or buffer is left to the caller.

pub mod xml;

pub use xml::{xml_string, xml_string_with_options, SerializeOptions};
