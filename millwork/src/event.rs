//! Interaction events delivered to component callbacks.

/// Mouse button for a click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Key modifiers held during an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// A click on a component, as reported by the embedding layer.
///
/// The library never synthesizes these; they arrive from whatever runtime
/// hosts the rendered markup and are forwarded to caller-supplied handlers
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}
