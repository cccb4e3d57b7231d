//! XML serializer.
//!
//! Renders a node and its subtree as markup. An element is written as
//! `<name attr="v">text<child>...</child></name>`: its attribute and namespace
//! children go in the start tag, and its text and element children form the
//! body in sibling order. The end tag is always written out in full.

use crate::tree::{NodeId, NodeKind, Tree};

/// Options controlling serialization output.
///
/// # Examples
///
/// ```
/// use xmlnode::Tree;
/// use xmlnode::serial::{xml_string_with_options, SerializeOptions};
///
/// let mut tree = Tree::new();
/// let p = tree.new_element_with_value("p", "café");
/// let opts = SerializeOptions::default().reencode_non_ascii(true);
/// assert_eq!(xml_string_with_options(&tree, p, &opts), "<p>caf&#xE9;</p>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Whether characters at or above U+0080 are written as hexadecimal
    /// character references. Defaults to `false`.
    pub reencode_non_ascii: bool,
}

impl SerializeOptions {
    /// Enables or disables hex-encoding of non-ASCII characters.
    #[must_use]
    pub fn reencode_non_ascii(mut self, reencode: bool) -> Self {
        self.reencode_non_ascii = reencode;
        self
    }
}

/// Serializes a node and its descendants to an XML string.
///
/// # Examples
///
/// ```
/// use xmlnode::Tree;
/// use xmlnode::serial::xml_string;
///
/// let mut tree = Tree::new();
/// let id = tree.new_attribute("id", "main");
/// let child = tree.new_element("child");
/// let root = tree.new_element_with_children("root", &[child], &[id]);
/// assert_eq!(xml_string(&tree, root), "<root id=\"main\"><child></child></root>");
/// ```
#[must_use]
pub fn xml_string(tree: &Tree, id: NodeId) -> String {
    xml_string_with_options(tree, id, &SerializeOptions::default())
}

/// Serializes a node and its descendants with the given options.
#[must_use]
pub fn xml_string_with_options(tree: &Tree, id: NodeId, options: &SerializeOptions) -> String {
    let mut output = String::new();
    serialize_node(tree, id, &mut output, options.reencode_non_ascii);
    output
}

fn serialize_node(tree: &Tree, id: NodeId, out: &mut String, reencode_non_ascii: bool) {
    let data = tree.node(id);
    let name = data.name.as_deref().unwrap_or_default();
    let value = data.value.as_deref().unwrap_or_default();
    match data.kind {
        NodeKind::Element => {
            out.push('<');
            out.push_str(name);
            for child in tree.children(id) {
                if matches!(tree.kind(child), NodeKind::Attribute | NodeKind::Namespace) {
                    out.push(' ');
                    serialize_node(tree, child, out, reencode_non_ascii);
                }
            }
            out.push('>');
            for child in tree.children(id) {
                if matches!(tree.kind(child), NodeKind::Text | NodeKind::Element) {
                    serialize_node(tree, child, out, reencode_non_ascii);
                }
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        NodeKind::Attribute => {
            out.push_str(name);
            out.push_str("=\"");
            write_escaped_attr(out, value, reencode_non_ascii);
            out.push('"');
        }
        NodeKind::Namespace => {
            out.push_str("xmlns");
            if !name.is_empty() {
                out.push(':');
                out.push_str(name);
            }
            out.push_str("=\"");
            write_escaped_attr(out, value, reencode_non_ascii);
            out.push('"');
        }
        NodeKind::Text => {
            write_escaped_text(out, value, reencode_non_ascii);
        }
        NodeKind::Comment => {
            out.push_str("<!--");
            out.push_str(value);
            out.push_str("-->");
        }
        NodeKind::ProcessingInstruction => {
            out.push_str("<?");
            out.push_str(name);
            if !value.is_empty() {
                out.push(' ');
                out.push_str(value);
            }
            out.push_str("?>");
        }
        NodeKind::Document => {
            for child in tree.children(id) {
                if tree.kind(child) != NodeKind::Attribute {
                    serialize_node(tree, child, out, reencode_non_ascii);
                }
            }
        }
        NodeKind::Dtd => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            if tree.first_child(id).is_some() {
                out.push_str(" [");
                for child in tree.children(id) {
                    serialize_node(tree, child, out, reencode_non_ascii);
                }
                out.push(']');
            }
            out.push('>');
        }
        NodeKind::EntityDeclaration => {
            out.push_str("<!ENTITY ");
            out.push_str(name);
            out.push_str(" \"");
            write_escaped_attr(out, value, reencode_non_ascii);
            out.push_str("\">");
        }
        NodeKind::ElementDeclaration => write_declaration(out, "ELEMENT", name, value),
        NodeKind::AttributeDeclaration => write_declaration(out, "ATTLIST", name, value),
        NodeKind::NotationDeclaration => write_declaration(out, "NOTATION", name, value),
        NodeKind::Invalid => {}
    }
}

/// Writes `<!KEYWORD name body>`.
fn write_declaration(out: &mut String, keyword: &str, name: &str, body: &str) {
    out.push_str("<!");
    out.push_str(keyword);
    out.push(' ');
    out.push_str(name);
    if !body.is_empty() {
        out.push(' ');
        out.push_str(body);
    }
    out.push('>');
}

/// Writes a hexadecimal character reference (`&#xHH;`) for a Unicode code point.
fn write_hex_char_ref(out: &mut String, ch: char) {
    use std::fmt::Write;
    let _ = write!(out, "&#x{:X};", ch as u32);
}

/// Where escaped content ends up. Attribute values are delimited by `"` and
/// undergo whitespace normalization when read back.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    Text,
    Attribute,
}

fn write_escaped_text(out: &mut String, text: &str, reencode_non_ascii: bool) {
    write_escaped(out, text, Context::Text, reencode_non_ascii);
}

fn write_escaped_attr(out: &mut String, value: &str, reencode_non_ascii: bool) {
    write_escaped(out, value, Context::Attribute, reencode_non_ascii);
}

/// Markup characters become entity references. Control characters, a
/// carriage return anywhere, and tab or newline inside attribute values
/// become character references.
fn write_escaped(out: &mut String, text: &str, context: Context, reencode_non_ascii: bool) {
    let in_attribute = context == Context::Attribute;
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            '\r' => out.push_str("&#13;"),
            '\t' | '\n' if in_attribute => write_decimal_char_ref(out, ch),
            '\t' | '\n' => out.push(ch),
            c if u32::from(c) < 0x20 => write_hex_char_ref(out, c),
            c if reencode_non_ascii && !c.is_ascii() => write_hex_char_ref(out, c),
            c => out.push(c),
        }
    }
}

/// Writes `&#NN;`, used for tab and newline in attribute values.
fn write_decimal_char_ref(out: &mut String, ch: char) {
    use std::fmt::Write;
    let _ = write!(out, "&#{};", u32::from(ch));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_empty_element_keeps_end_tag() {
        let mut tree = Tree::new();
        let br = tree.new_element("br");
        assert_eq!(xml_string(&tree, br), "<br></br>");
    }

    #[test]
    fn test_serialize_element_with_text() {
        let mut tree = Tree::new();
        let p = tree.new_element_with_value("p", "Hello");
        assert_eq!(xml_string(&tree, p), "<p>Hello</p>");
    }

    #[test]
    fn test_serialize_attributes_in_order() {
        let mut tree = Tree::new();
        let id = tree.new_attribute("id", "main");
        let class = tree.new_attribute("class", "big");
        let div = tree.new_element_with_children("div", &[], &[id, class]);
        assert_eq!(xml_string(&tree, div), "<div id=\"main\" class=\"big\"></div>");
    }

    #[test]
    fn test_serialize_nested_elements() {
        let mut tree = Tree::new();
        let root = tree.new_element("root");
        let a = tree.new_element_with_value("a", "1");
        let b = tree.new_element("b");
        let c = tree.new_element_with_value("c", "2");
        tree.add_child(root, a);
        tree.add_child(root, b);
        tree.add_child(b, c);
        assert_eq!(
            xml_string(&tree, root),
            "<root><a>1</a><b><c>2</c></b></root>"
        );
    }

    #[test]
    fn test_serialize_mixed_content_in_order() {
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let before = tree.new_text("a ");
        let b = tree.new_element_with_value("b", "bold");
        let after = tree.new_text(" c");
        tree.set_children(p, &[before, b, after]);
        assert_eq!(xml_string(&tree, p), "<p>a <b>bold</b> c</p>");
        assert_eq!(tree.string_value(p).as_deref(), Some("a bold c"));
    }

    #[test]
    fn test_serialize_skips_comments_inside_elements() {
        let mut tree = Tree::new();
        let p = tree.new_element("p");
        let comment = tree.new_comment("hidden");
        tree.add_child(p, comment);
        assert_eq!(xml_string(&tree, p), "<p></p>");
    }

    #[test]
    fn test_serialize_escaping() {
        let mut tree = Tree::new();
        let p = tree.new_element_with_value("p", "a < b & c > d");
        assert_eq!(xml_string(&tree, p), "<p>a &lt; b &amp; c &gt; d</p>");
    }

    #[test]
    fn test_serialize_attr_escaping() {
        let mut tree = Tree::new();
        let title = tree.new_attribute("title", "He said \"hello\" & <bye>");
        let a = tree.new_element_with_children("a", &[], &[title]);
        assert_eq!(
            xml_string(&tree, a),
            "<a title=\"He said &quot;hello&quot; &amp; &lt;bye&gt;\"></a>"
        );
    }

    #[test]
    fn test_serialize_attr_whitespace_and_controls() {
        let mut tree = Tree::new();
        let attr = tree.new_attribute("v", "a\tb\nc\u{1}");
        assert_eq!(xml_string(&tree, attr), "v=\"a&#9;b&#10;c&#x1;\"");
    }

    #[test]
    fn test_serialize_text_carriage_return() {
        let mut tree = Tree::new();
        let text = tree.new_text("line\r\nnext");
        assert_eq!(xml_string(&tree, text), "line&#13;\nnext");
    }

    #[test]
    fn test_serialize_namespace_declarations() {
        let mut tree = Tree::new();
        let default_ns = tree.new_namespace("", "http://www.w3.org/2000/svg");
        let xlink = tree.new_namespace("xlink", "http://www.w3.org/1999/xlink");
        let svg = tree.new_element_with_children("svg", &[], &[default_ns, xlink]);
        assert_eq!(
            xml_string(&tree, svg),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\"></svg>"
        );
    }

    #[test]
    fn test_serialize_comment_and_pi() {
        let mut tree = Tree::new();
        let comment = tree.new_comment(" a comment ");
        let pi = tree.new_processing_instruction("xml-stylesheet", "href=\"style.css\"");
        let bare_pi = tree.new_processing_instruction("flush", "");
        assert_eq!(xml_string(&tree, comment), "<!-- a comment -->");
        assert_eq!(
            xml_string(&tree, pi),
            "<?xml-stylesheet href=\"style.css\"?>"
        );
        assert_eq!(xml_string(&tree, bare_pi), "<?flush?>");
    }

    #[test]
    fn test_serialize_document() {
        let mut tree = Tree::new();
        let root = tree.new_element_with_value("root", "x");
        let doc = tree.new_document();
        let pi = tree.new_processing_instruction("app", "go");
        tree.add_child(doc, pi);
        tree.add_child(doc, root);
        assert_eq!(xml_string(&tree, doc), "<?app go?><root>x</root>");
    }

    #[test]
    fn test_serialize_dtd_with_declarations() {
        let mut tree = Tree::new();
        let dtd = tree.new_dtd("note");
        let element = tree.new_node(NodeKind::ElementDeclaration);
        tree.set_name(element, Some("note"));
        tree.set_string_value(element, Some("(#PCDATA)"));
        let entity = tree.new_node(NodeKind::EntityDeclaration);
        tree.set_name(entity, Some("writer"));
        tree.set_string_value(entity, Some("Donald \"Duck\""));
        tree.add_child(dtd, element);
        tree.add_child(dtd, entity);

        assert_eq!(
            xml_string(&tree, dtd),
            "<!DOCTYPE note [<!ELEMENT note (#PCDATA)><!ENTITY writer \"Donald &quot;Duck&quot;\">]>"
        );
        let empty = tree.new_dtd("html");
        assert_eq!(xml_string(&tree, empty), "<!DOCTYPE html>");
    }

    #[test]
    fn test_serialize_invalid_is_empty() {
        let mut tree = Tree::new();
        let invalid = tree.new_node(NodeKind::Invalid);
        assert_eq!(xml_string(&tree, invalid), "");
    }

    #[test]
    fn test_reencode_non_ascii() {
        let mut tree = Tree::new();
        let name = tree.new_attribute("name", "Zoë");
        let p = tree.new_element_with_children("p", &[], &[name]);
        tree.set_string_value(p, Some("naïve"));

        assert_eq!(xml_string(&tree, p), "<p name=\"Zoë\">naïve</p>");
        let opts = SerializeOptions::default().reencode_non_ascii(true);
        assert_eq!(
            xml_string_with_options(&tree, p, &opts),
            "<p name=\"Zo&#xEB;\">na&#xEF;ve</p>"
        );
    }
}
