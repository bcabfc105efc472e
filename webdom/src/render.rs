use crate::content::Content;
use crate::element::Element;
use crate::escape::{escape_attr, escape_text};

/// Tags that never take content and render without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Serialize an element tree to a compact HTML string.
pub fn render_html(root: &Element) -> String {
    log::trace!("rendering <{}> tree", root.tag);
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

/// Serialize an element tree with one element per line, indented by depth.
///
/// Text content stays inline with its parent tag so short leaf elements
/// read as a single line.
pub fn render_html_pretty(root: &Element) -> String {
    let mut out = String::new();
    write_element_pretty(root, 0, &mut out);
    out
}

fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = &element.id {
        out.push_str(" id=\"");
        out.push_str(&escape_attr(id));
        out.push('"');
    }
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&element.classes.to_string()));
        out.push('"');
    }
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    if !element.styles.is_empty() {
        out.push_str(" style=\"");
        let mut first = true;
        for (property, value) in &element.styles {
            if !first {
                out.push_str("; ");
            }
            out.push_str(&escape_attr(property));
            out.push_str(": ");
            out.push_str(&escape_attr(value));
            first = false;
        }
        out.push('"');
    }
    out.push('>');
}

fn write_element(element: &Element, out: &mut String) {
    if element.is_text_run() {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape_text(text));
        }
        return;
    }

    write_open_tag(element, out);
    if is_void(&element.tag) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_element_pretty(element: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    if element.is_text_run() {
        if let Content::Text(text) = &element.content {
            out.push_str(&indent);
            out.push_str(&escape_text(text));
            out.push('\n');
        }
        return;
    }

    out.push_str(&indent);
    write_open_tag(element, out);
    if is_void(&element.tag) {
        out.push('\n');
        return;
    }

    match &element.content {
        Content::None => {
            out.push_str("</");
            out.push_str(&element.tag);
            out.push_str(">\n");
        }
        Content::Text(text) => {
            out.push_str(&escape_text(text));
            out.push_str("</");
            out.push_str(&element.tag);
            out.push_str(">\n");
        }
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element_pretty(child, depth + 1, out);
            }
            out.push_str(&indent);
            out.push_str("</");
            out.push_str(&element.tag);
            out.push_str(">\n");
        }
    }
}
