//! Small text helpers used when presenting names and identifiers

use std::fmt::Display;

/// Uppercase the first character, leaving the rest unchanged
///
/// Characters whose uppercase form spans several chars (e.g. 'ß') expand.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Left-pad the rendered value with `fill` until it is `width` chars long
///
/// Values already `width` chars or longer are returned unchanged.
pub fn pad_left<T: Display>(value: T, fill: char, width: usize) -> String {
    let rendered = value.to_string();
    let len = rendered.chars().count();

    if len >= width {
        return rendered;
    }

    let mut padded: String = std::iter::repeat(fill).take(width - len).collect();
    padded.push_str(&rendered);
    padded
}
