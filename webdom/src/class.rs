use std::fmt;

/// One entry in a class list: either a fixed base token or a token gated
/// by a predicate evaluated when the list was composed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Base(String),
    Gated { token: String, on: bool },
}

impl Entry {
    fn active(&self) -> Option<&str> {
        match self {
            Entry::Base(token) => Some(token),
            Entry::Gated { token, on: true } => Some(token),
            Entry::Gated { on: false, .. } => None,
        }
    }
}

/// An ordered list of conditional class-name tokens.
///
/// Components compose their `class` attribute from a fixed set of base
/// tokens followed by tokens gated on prop values. Entries keep their
/// insertion order, so identical inputs always serialize to the identical
/// class string. Tokens are not deduplicated; the list guarantees order,
/// not uniqueness.
///
/// # Example
///
/// ```
/// use webdom::ClassList;
///
/// let classes = ClassList::new()
///     .base("x")
///     .toggle("x--flag", true)
///     .toggle("x--other", false);
/// assert_eq!(classes.to_string(), "x x--flag");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<Entry>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an always-present token.
    pub fn base(mut self, token: impl Into<String>) -> Self {
        self.entries.push(Entry::Base(token.into()));
        self
    }

    /// Append a token that is present iff `on` is true.
    pub fn toggle(mut self, token: impl Into<String>, on: bool) -> Self {
        self.entries.push(Entry::Gated {
            token: token.into(),
            on,
        });
        self
    }

    /// Append a token whose suffix is interpolated from a prop's value.
    ///
    /// Emits `{prefix}{value}` when the value is present; an absent value
    /// contributes nothing.
    pub fn variant<V: fmt::Display>(mut self, prefix: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.entries.push(Entry::Base(format!("{prefix}{value}")));
        }
        self
    }

    /// Append all entries of another list after this one's.
    pub fn append(mut self, other: ClassList) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Whether any token is active.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.active().is_none())
    }

    /// The active tokens, in insertion order.
    pub fn tokens(&self) -> Vec<&str> {
        self.entries.iter().filter_map(Entry::active).collect()
    }
}

impl fmt::Display for ClassList {
    /// Space-joined active tokens, the form the `class` attribute takes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if let Some(token) = entry.active() {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(token)?;
                first = false;
            }
        }
        Ok(())
    }
}
