//! The component factory: turns a spec (tag + composed classes) plus
//! caller-supplied passthrough props into a finished element.
//!
//! Components consume their own typed props while composing the spec;
//! everything the caller puts in [`Passthrough`] is forwarded to the
//! rendered element, with caller classes appended after the component's
//! own.

use thiserror::Error;
use webdom::{ClassList, Element};

/// Errors produced when a spec is built from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The tag name is empty or does not start with an ASCII letter.
    #[error("invalid tag name: {0:?}")]
    InvalidTag(String),
}

/// What a component renders as: a primitive tag or another component's
/// already-built element.
#[derive(Debug, Clone)]
pub enum Tag {
    Primitive(String),
    Component(Element),
}

/// Caller props forwarded to the rendered element.
///
/// These are the props a wrapping component does *not* consume: extra
/// classes, an id, a title, arbitrary attributes and inline styles. Every
/// component builder accepts a `Passthrough` and merges it into its built
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passthrough {
    pub id: Option<String>,
    pub classes: ClassList,
    pub title: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
}

impl Passthrough {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, token: impl Into<String>) -> Self {
        self.classes = self.classes.base(token);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }
}

/// A component's render configuration: the tag to render and the class
/// list its props composed.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    tag: Tag,
    classes: ClassList,
}

fn valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

impl ComponentSpec {
    /// Spec for a known-good tag name (the components' own path).
    pub fn primitive(tag: &'static str) -> Self {
        Self {
            tag: Tag::Primitive(tag.into()),
            classes: ClassList::new(),
        }
    }

    /// Spec for a dynamically supplied tag name. This is the boundary where
    /// caller input is validated; a malformed tag is rejected here rather
    /// than producing malformed markup later.
    pub fn try_tag(tag: impl Into<String>) -> Result<Self, FactoryError> {
        let tag = tag.into();
        if !valid_tag(&tag) {
            log::debug!("rejecting component tag {tag:?}");
            return Err(FactoryError::InvalidTag(tag));
        }
        Ok(Self {
            tag: Tag::Primitive(tag),
            classes: ClassList::new(),
        })
    }

    /// Spec that renders another component's element as its root.
    pub fn component(root: Element) -> Self {
        Self {
            tag: Tag::Component(root),
            classes: ClassList::new(),
        }
    }

    /// Set the composed class list for this component's props.
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Build the element: component classes first, then the caller's
    /// passthrough classes and other forwarded props.
    pub fn build(self, passthrough: Passthrough) -> Element {
        let mut element = match self.tag {
            Tag::Primitive(tag) => Element::new(tag),
            Tag::Component(root) => root,
        };
        element = element.classes(self.classes).classes(passthrough.classes);
        if let Some(id) = passthrough.id {
            element = element.id(id);
        }
        if let Some(title) = passthrough.title {
            element = element.attr("title", title);
        }
        for (name, value) in passthrough.attrs {
            element = element.attr(name, value);
        }
        for (property, value) in passthrough.styles {
            element = element.style(property, value);
        }
        element
    }
}
