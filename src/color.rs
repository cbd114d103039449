// src/color.rs

//! Defines the RGB `Color` used by glyph pixels and the font manifest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB true color, with each component from 0 to 255.
///
/// Serialized as `{"red": r, "green": g, "blue": b}`, which is the shape the
/// font loader expects in both the sprite file and the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Plain white. Every generated glyph is inked with it.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_channel_names() {
        let json = serde_json::to_value(Color::WHITE).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"red": 255, "green": 255, "blue": 255})
        );
    }

    #[test]
    fn display_lists_channels() {
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }
}
