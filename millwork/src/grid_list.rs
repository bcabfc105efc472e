//! Grid list components, targeting the Material grid-list stylesheet
//! (`mdc-grid-list` / `mdc-grid-tile` class names).

use std::fmt;

use serde::{Deserialize, Serialize};
use webdom::{ClassList, Element};

use crate::factory::{ComponentSpec, Passthrough};
use crate::icon::Icon;

/// Tile aspect ratio variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileAspect {
    #[default]
    #[serde(rename = "1x1")]
    OneByOne,
    #[serde(rename = "16x9")]
    SixteenByNine,
    #[serde(rename = "2x3")]
    TwoByThree,
    #[serde(rename = "3x2")]
    ThreeByTwo,
    #[serde(rename = "4x3")]
    FourByThree,
    #[serde(rename = "3x4")]
    ThreeByFour,
}

impl TileAspect {
    pub fn as_str(self) -> &'static str {
        match self {
            TileAspect::OneByOne => "1x1",
            TileAspect::SixteenByNine => "16x9",
            TileAspect::TwoByThree => "2x3",
            TileAspect::ThreeByTwo => "3x2",
            TileAspect::FourByThree => "4x3",
            TileAspect::ThreeByFour => "3x4",
        }
    }
}

impl fmt::Display for TileAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The grid list container.
///
/// Tiles go inside an inner `ul.mdc-grid-list__tiles`; the builder inserts
/// that wrapper, so callers add [`GridTile`]s directly.
#[derive(Debug, Clone, Default)]
pub struct GridList {
    tile_gutter_1: bool,
    header_caption: bool,
    twoline_caption: bool,
    with_icon_align_start: bool,
    tile_aspect: TileAspect,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl GridList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a 1px tile gutter.
    pub fn tile_gutter_1(mut self, on: bool) -> Self {
        self.tile_gutter_1 = on;
        self
    }

    /// Move the caption to the top of the tile.
    pub fn header_caption(mut self, on: bool) -> Self {
        self.header_caption = on;
        self
    }

    /// Make the caption two lines.
    pub fn twoline_caption(mut self, on: bool) -> Self {
        self.twoline_caption = on;
        self
    }

    /// Leave space for a start-aligned icon.
    pub fn with_icon_align_start(mut self, on: bool) -> Self {
        self.with_icon_align_start = on;
        self
    }

    pub fn tile_aspect(mut self, aspect: TileAspect) -> Self {
        self.tile_aspect = aspect;
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
            .base("mdc-grid-list")
            .toggle("mdc-grid-list--tile-gutter-1", self.tile_gutter_1)
            .toggle("mdc-grid-list--header-caption", self.header_caption)
            .toggle("mdc-grid-list--twoline-caption", self.twoline_caption)
            .toggle(
                "mdc-grid-list--with-icon-align-start",
                self.with_icon_align_start,
            )
            .variant("mdc-grid-list--tile-aspect-", Some(self.tile_aspect));

        let tiles = Element::new("ul")
            .class("mdc-grid-list__tiles")
            .children(self.children);

        ComponentSpec::primitive("div")
            .classes(classes)
            .build(self.passthrough)
            .child(tiles)
    }
}

/// A grid tile (`li`).
#[derive(Debug, Clone, Default)]
pub struct GridTile {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl GridTile {
    pub fn new() -> Self {
        Self::default()
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
        ComponentSpec::primitive("li")
            .classes(ClassList::new().base("mdc-grid-tile"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The primary (media) area of a tile.
#[derive(Debug, Clone, Default)]
pub struct GridTilePrimary {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl GridTilePrimary {
    pub fn new() -> Self {
        Self::default()
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
        ComponentSpec::primitive("div")
            .classes(ClassList::new().base("mdc-grid-tile__primary"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// The tile's media content, an `img`.
#[derive(Debug, Clone, Default)]
pub struct GridTilePrimaryContent {
    src: Option<String>,
    passthrough: Passthrough,
}

impl GridTilePrimaryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        let mut element = ComponentSpec::primitive("img")
            .classes(ClassList::new().base("mdc-grid-tile__primary-content"))
            .build(self.passthrough);
        if let Some(src) = self.src {
            element = element.attr("src", src);
        }
        element
    }
}

/// The secondary (caption) area of a tile.
#[derive(Debug, Clone, Default)]
pub struct GridTileSecondary {
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl GridTileSecondary {
    pub fn new() -> Self {
        Self::default()
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
        ComponentSpec::primitive("span")
            .classes(ClassList::new().base("mdc-grid-tile__secondary"))
            .build(self.passthrough)
            .children(self.children)
    }
}

/// An icon inside a tile caption.
#[derive(Debug, Clone)]
pub struct GridTileIcon {
    icon: Icon,
    passthrough: Passthrough,
}

impl GridTileIcon {
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            passthrough: Passthrough::new(),
        }
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::component(self.icon.build())
            .classes(ClassList::new().base("mdc-grid-tile__icon"))
            .build(self.passthrough)
    }
}

/// The tile caption title.
#[derive(Debug, Clone, Default)]
pub struct GridTileTitle {
    text: String,
    passthrough: Passthrough,
}

impl GridTileTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            passthrough: Passthrough::new(),
        }
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::primitive("span")
            .classes(ClassList::new().base("mdc-grid-tile__title"))
            .build(self.passthrough)
            .text_content(self.text)
    }
}

/// Supporting text under the tile title.
#[derive(Debug, Clone, Default)]
pub struct GridTileTitleSupportText {
    text: String,
    passthrough: Passthrough,
}

impl GridTileTitleSupportText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            passthrough: Passthrough::new(),
        }
    }

    pub fn passthrough(mut self, passthrough: Passthrough) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn build(self) -> Element {
        ComponentSpec::primitive("span")
            .classes(ClassList::new().base("mdc-grid-tile__support-text"))
            .build(self.passthrough)
            .text_content(self.text)
    }
}
