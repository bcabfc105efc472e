use crate::class::ClassList;
use crate::content::Content;

/// A node in a declarative markup tree.
///
/// An element carries a tag name, an optional id, an ordered class list,
/// ordered attribute and inline-style pairs, and its content. Everything is
/// plain data: building a tree performs no I/O and holds no state beyond
/// the values passed in, so trees can be rebuilt from current props on
/// every pass.
///
/// A *text run* is an element with an empty tag; it serializes as bare
/// escaped text. Use [`Element::text`] to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: ClassList,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// A bare text run (no surrounding tag).
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn is_text_run(&self) -> bool {
        self.tag.is_empty()
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    pub fn class(mut self, token: impl Into<String>) -> Self {
        self.classes = self.classes.base(token);
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = self.classes.append(classes);
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Inline style declaration, e.g. `style("background-size", "cover")`.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    // Content
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
