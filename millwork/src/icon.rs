//! Icon primitive used by avatars, grid tiles, and the data-table sort
//! indicator.

use webdom::{ClassList, Element};

use crate::factory::{ComponentSpec, Passthrough};

/// Where an icon's artwork comes from.
#[derive(Debug, Clone)]
enum IconSource {
    /// A ligature name rendered through the design system's icon font.
    Name(String),
    /// A caller-supplied element (inline SVG, image, markup fragment).
    Custom(Element),
}

/// An icon component.
///
/// # Example
///
/// ```
/// use millwork::icon::Icon;
///
/// let element = Icon::name("favorite").build();
/// assert_eq!(element.tag, "i");
/// ```
#[derive(Debug, Clone)]
pub struct Icon {
    source: IconSource,
    passthrough: Passthrough,
}

impl Icon {
    /// Icon from a ligature name, rendered as `<i class="material-icons">`.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            source: IconSource::Name(name.into()),
            passthrough: Passthrough::new(),
        }
    }

    /// Icon wrapping a caller-supplied element.
    pub fn custom(element: Element) -> Self {
        Self {
            source: IconSource::Custom(element),
            passthrough: Passthrough::new(),
        }
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        match self.source {
            IconSource::Name(name) => ComponentSpec::primitive("i")
                .classes(ClassList::new().base("mlw-icon").base("material-icons"))
                .build(self.passthrough)
                .text_content(name),
            IconSource::Custom(element) => ComponentSpec::component(element)
                .classes(ClassList::new().base("mlw-icon"))
                .build(self.passthrough),
        }
    }
}
