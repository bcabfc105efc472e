//! Avatar components for displaying users.
//!
//! `Avatar` shows an image or derived initials, `AvatarCount` shows a
//! numeric overflow bubble, and `AvatarGroup` lays a set of avatars out as
//! a group.

use std::fmt;

use serde::{Deserialize, Serialize};
use webdom::{ClassList, Element};

use crate::factory::{ComponentSpec, Passthrough};
use crate::utils::text::initials;

/// Avatar size variants, matching the stylesheet's `--<size>` modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    Xsmall,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl AvatarSize {
    pub fn as_str(self) -> &'static str {
        match self {
            AvatarSize::Xsmall => "xsmall",
            AvatarSize::Small => "small",
            AvatarSize::Medium => "medium",
            AvatarSize::Large => "large",
            AvatarSize::Xlarge => "xlarge",
        }
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared root markup for `Avatar` and `AvatarCount`.
///
/// Renders the design system's avatar root with the icon and text layers;
/// the text layer holds either initials or a count value.
fn avatar_root(
    classes: ClassList,
    image: Option<(&str, bool)>,
    text: String,
    passthrough: Passthrough,
) -> Element {
    let mut icon_layer = Element::div().class("mlw-avatar__icon");
    if let Some((src, contain)) = image {
        icon_layer = icon_layer
            .style("background-image", format!("url({src})"))
            .style("background-size", if contain { "contain" } else { "cover" });
    }

    let text_layer = Element::div()
        .class("mlw-avatar__text")
        .child(
            Element::div()
                .class("mlw-avatar__text-inner")
                .text_content(text),
        );

    ComponentSpec::primitive("span")
        .classes(classes)
        .build(passthrough)
        .child(icon_layer)
        .child(text_layer)
}

/// An avatar for displaying a user.
///
/// # Example
///
/// ```
/// use millwork::avatar::Avatar;
///
/// let element = Avatar::new().name("Jane Doe").square(true).build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    src: Option<String>,
    size: Option<AvatarSize>,
    name: String,
    square: bool,
    interactive: bool,
    contain: bool,
    passthrough: Passthrough,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image url. The image replaces the initials visually; the initials
    /// remain in the text layer underneath.
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = Some(size);
        self
    }

    /// The user's display name. Sets the hover title and the derived
    /// initials.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Square instead of round.
    pub fn square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    /// Interactive avatars pick up the hover/ripple affordance classes.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Contain the image inside the frame instead of covering it.
    pub fn contain(mut self, contain: bool) -> Self {
        self.contain = contain;
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let classes = ClassList::new()
            .base("mlw-avatar")
            .variant("mlw-avatar--", self.size)
            .toggle("mlw-avatar--interactive", self.interactive)
            .toggle("mlw-avatar--square", self.square)
            .toggle("mlw-avatar--has-image", self.src.is_some())
            // Interactive avatars opt into the ripple surface.
            .toggle("mlw-ripple-surface", self.interactive);

        let passthrough = if self.name.is_empty() {
            self.passthrough
        } else {
            self.passthrough.title(self.name.clone())
        };

        avatar_root(
            classes,
            self.src.as_deref().map(|src| (src, self.contain)),
            initials(&self.name),
            passthrough,
        )
    }
}

/// An avatar-shaped count bubble for displaying list overflow.
#[derive(Debug, Clone, Default)]
pub struct AvatarCount {
    value: u32,
    overflow: bool,
    size: Option<AvatarSize>,
    square: bool,
    interactive: bool,
    passthrough: Passthrough,
}

impl AvatarCount {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Render a trailing "+" to indicate more items than shown.
    pub fn overflow(mut self, overflow: bool) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let value = self.value.to_string();
        // Three or more digits need the smaller text treatment to fit.
        let smaller_text = value.chars().count() > 2;

        let classes = ClassList::new()
            .base("mlw-avatar")
            .variant("mlw-avatar--", self.size)
            .base("mlw-avatar--count")
            .toggle("mlw-avatar--interactive", self.interactive)
            .toggle("mlw-avatar--count-overflow", self.overflow)
            .toggle("mlw-avatar--smaller-text", smaller_text)
            .toggle("mlw-avatar--square", self.square)
            .toggle("mlw-ripple-surface", self.interactive);

        avatar_root(classes, None, value, self.passthrough)
    }
}

/// A container for groups of avatars.
#[derive(Debug, Clone, Default)]
pub struct AvatarGroup {
    dense: bool,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl AvatarGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlap the avatars to make the group dense.
    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let classes = ClassList::new()
            .base("mlw-avatar-group")
            .toggle("mlw-avatar-group--dense", self.dense);

        ComponentSpec::primitive("div")
            .classes(classes)
            .build(self.passthrough)
            .children(self.children)
    }
}
