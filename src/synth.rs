// src/synth.rs

//! Placeholder bitmap synthesis.

use log::debug;

use crate::color::Color;
use crate::glyph::{Glyph, GlyphCollection, GlyphKey, Pixel};

/// Ink of the placeholder `"default"` glyph.
const DEFAULT_GLYPH_INK: char = '.';

/// Renders fixed-size placeholder glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSynthesizer {
    pub width: usize,
    pub height: usize,
    /// Leave every glyph blank instead of filling it with its character.
    pub empty: bool,
    pub fg: Color,
}

impl GlyphSynthesizer {
    pub fn new(width: usize, height: usize, empty: bool) -> Self {
        GlyphSynthesizer {
            width,
            height,
            empty,
            fg: Color::WHITE,
        }
    }

    /// The character every cell of `key`'s glyph is filled with.
    pub fn ink_for(&self, key: GlyphKey) -> char {
        match key {
            _ if self.empty => ' ',
            GlyphKey::Default => DEFAULT_GLYPH_INK,
            GlyphKey::Char(c) => c,
        }
    }

    pub fn synthesize(&self, key: GlyphKey) -> Glyph {
        let fill = Pixel {
            ink: self.ink_for(key),
            fg: Some(self.fg),
            bg: None,
        };
        Glyph::filled(key, self.width, self.height, fill)
    }

    /// Renders every key of `sequence` in order. Repeated keys overwrite the
    /// glyph rendered earlier.
    pub fn synthesize_all(&self, sequence: &[GlyphKey]) -> GlyphCollection {
        let mut collection = GlyphCollection::new();
        for key in sequence {
            if collection.insert(self.synthesize(*key)).is_some() {
                debug!("Glyph '{}' rendered again, keeping the latest", key);
            }
        }
        debug!(
            "Synthesized {} unique glyphs from {} requests ({}x{})",
            collection.len(),
            sequence.len(),
            self.width,
            self.height
        );
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn glyph_is_filled_with_its_own_character() {
        let glyph = GlyphSynthesizer::new(8, 4, false).synthesize('q'.into());
        assert_eq!(glyph.name, GlyphKey::Char('q'));
        assert_eq!((glyph.width(), glyph.height()), (8, 4));
        assert_eq!(glyph.rows().len(), 4);
        assert!(glyph.rows().iter().all(|row| row.len() == 8));
        assert!(glyph.pixels().all(|p| p.ink == 'q'
            && p.fg == Some(Color::WHITE)
            && p.bg.is_none()));
    }

    #[test]
    fn default_glyph_uses_dot_ink() {
        let glyph = GlyphSynthesizer::new(3, 2, false).synthesize(GlyphKey::Default);
        assert!(glyph.pixels().all(|p| p.ink == '.'));
        assert_eq!(glyph.pixels().count(), 6);
    }

    #[test]
    fn empty_mode_inks_everything_with_space() {
        let synth = GlyphSynthesizer::new(2, 2, true);
        for key in [GlyphKey::Default, 'a'.into(), '#'.into()] {
            let glyph = synth.synthesize(key);
            assert!(glyph.pixels().all(|p| p.ink == ' ' && p.fg == Some(Color::WHITE)));
        }
    }

    #[test]
    fn repeated_keys_collapse() {
        let sequence: Vec<GlyphKey> = "abab".chars().map(GlyphKey::Char).collect();
        let collection = GlyphSynthesizer::new(1, 1, false).synthesize_all(&sequence);
        assert_eq!(collection.len(), 2);
        let keys: Vec<_> = collection.keys().copied().collect();
        assert_eq!(keys, vec![GlyphKey::Char('a'), GlyphKey::Char('b')]);
    }
}
