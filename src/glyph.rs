// src/glyph.rs

//! Defines the glyph identity (`GlyphKey`), the bitmap cell (`Pixel`), the
//! fixed-size bitmap (`Glyph`) and the name-keyed `GlyphCollection`.
//!
//! A `Glyph` here is a placeholder bitmap: a grid of cells, each holding an
//! "ink" character and its colors, meant to be redrawn by hand later.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;

/// Name of the reserved glyph substituted for missing characters.
pub const DEFAULT_GLYPH_NAME: &str = "default";

/// Identity of a glyph in the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GlyphKey {
    /// The sentinel `"default"` glyph.
    Default,
    /// A glyph for a single character.
    Char(char),
}

impl GlyphKey {
    /// Parses a glyph name. Anything other than one character or the
    /// `"default"` sentinel is not a glyph identity.
    pub fn parse(name: &str) -> Option<Self> {
        if name == DEFAULT_GLYPH_NAME {
            return Some(GlyphKey::Default);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(GlyphKey::Char(c)),
            _ => None,
        }
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphKey::Default => f.write_str(DEFAULT_GLYPH_NAME),
            GlyphKey::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<char> for GlyphKey {
    fn from(c: char) -> Self {
        GlyphKey::Char(c)
    }
}

impl From<GlyphKey> for String {
    fn from(key: GlyphKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for GlyphKey {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        GlyphKey::parse(&name).ok_or_else(|| format!("'{}' is not a glyph name", name))
    }
}

/// One cell of a glyph bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// The character drawn in the cell.
    pub ink: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// A blank, fully transparent cell.
pub const BLANK_PIXEL: Pixel = Pixel {
    ink: ' ',
    fg: None,
    bg: None,
};

impl Default for Pixel {
    fn default() -> Self {
        BLANK_PIXEL
    }
}

/// A `width x height` bitmap named after the glyph it stands for.
///
/// Rows are stored top to bottom; `rows[y][x]` is the cell at column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub name: GlyphKey,
    width: usize,
    height: usize,
    rows: Vec<Vec<Pixel>>,
}

impl Glyph {
    /// Creates a glyph with every cell set to `fill`.
    pub fn filled(name: GlyphKey, width: usize, height: usize, fill: Pixel) -> Self {
        Glyph {
            name,
            width,
            height,
            rows: vec![vec![fill; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.rows.iter().flatten()
    }
}

/// Glyphs keyed by name, in first-insertion order.
///
/// Inserting a glyph whose name is already present replaces the stored
/// glyph but keeps its original position (last write wins). This makes
/// repeated keys in a resolved glyph sequence harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphCollection {
    glyphs: IndexMap<GlyphKey, Glyph>,
}

impl GlyphCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `glyph`, returning the glyph it replaced, if any.
    pub fn insert(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.name, glyph)
    }

    pub fn get(&self, key: &GlyphKey) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GlyphKey> {
        self.glyphs.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!(GlyphKey::parse("default"), Some(GlyphKey::Default));
        assert_eq!(GlyphKey::parse("a"), Some(GlyphKey::Char('a')));
        assert_eq!(GlyphKey::parse(" "), Some(GlyphKey::Char(' ')));
        assert_eq!(GlyphKey::parse(""), None);
        assert_eq!(GlyphKey::parse("ab"), None);
    }

    #[test]
    fn keys_serialize_as_names() {
        let keys = vec![GlyphKey::Default, GlyphKey::Char('x')];
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"["default","x"]"#);
        let back: Vec<GlyphKey> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keys);
        assert!(serde_json::from_str::<GlyphKey>(r#""xy""#).is_err());
    }

    #[test]
    fn filled_glyph_has_requested_shape() {
        let glyph = Glyph::filled('a'.into(), 3, 2, BLANK_PIXEL);
        assert_eq!(glyph.rows().len(), 2);
        assert!(glyph.rows().iter().all(|row| row.len() == 3));
        assert_eq!(glyph.pixel(2, 1), Some(&BLANK_PIXEL));
        assert_eq!(glyph.pixel(3, 0), None);
        assert_eq!(glyph.pixel(0, 2), None);
        assert_eq!(glyph.pixels().count(), 6);
    }

    #[test]
    fn collection_overwrites_in_place() {
        let mut collection = GlyphCollection::new();
        collection.insert(Glyph::filled('a'.into(), 1, 1, BLANK_PIXEL));
        collection.insert(Glyph::filled('b'.into(), 1, 1, BLANK_PIXEL));

        let inked = Pixel {
            ink: 'a',
            ..BLANK_PIXEL
        };
        let replaced = collection.insert(Glyph::filled('a'.into(), 1, 1, inked));

        assert!(replaced.is_some());
        assert_eq!(collection.len(), 2);
        let order: Vec<_> = collection.keys().copied().collect();
        assert_eq!(order, vec![GlyphKey::Char('a'), GlyphKey::Char('b')]);
        assert_eq!(
            collection.get(&'a'.into()).and_then(|g| g.pixel(0, 0)),
            Some(&inked)
        );
    }
}
