//! Text utilities for display-name formatting.

/// Derive 0–2 initials from a display name.
///
/// Splits on single spaces and takes the first character of the first part,
/// followed by the first character of the last part when the name has more
/// than one part. Empty parts contribute nothing, so the result for an
/// empty or whitespace-only name is the empty string.
pub fn initials(name: &str) -> String {
    let mut letters = String::new();
    if name.is_empty() {
        return letters;
    }

    let parts: Vec<&str> = name.split(' ').collect();
    if let Some(first) = parts.first().and_then(|part| part.chars().next()) {
        letters.push(first);
    }
    if parts.len() > 1
        && let Some(last) = parts.last().and_then(|part| part.chars().next())
    {
        letters.push(last);
    }

    letters
}
