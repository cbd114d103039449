// src/manifest.rs

//! The font manifest written next to the glyph bitmaps.

use log::debug;
use serde::Serialize;

use crate::color::Color;
use crate::config::GenerationParams;
use crate::resolver::AliasMap;

/// Font-wide properties read by the font loader.
///
/// Field names and order are the manifest's on-disk schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    pub scalable: bool,
    pub monospace: bool,
    pub colorable: bool,
    pub height: usize,
    pub width: usize,
    pub horizontal_spacing: i32,
    pub vertical_spacing: i32,
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
    pub glyphs_map: AliasMap,
}

impl FontConfig {
    /// Builds the manifest for `params`. Generated fonts are always
    /// two-color, so `colorable` is written as `true` whatever was asked.
    pub fn assemble(params: &GenerationParams, glyphs_map: AliasMap) -> Self {
        if !params.colorable {
            debug!("colorable=false requested; generated fonts are always colorable");
        }
        FontConfig {
            scalable: params.scalable,
            monospace: params.monospace,
            colorable: true,
            height: params.height,
            width: params.width,
            horizontal_spacing: params.horizontal_spacing,
            vertical_spacing: params.vertical_spacing,
            fg_color: Some(Color::WHITE),
            bg_color: None,
            glyphs_map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphKey;
    use crate::resolver::AliasTarget;
    use serde_json::json;

    #[test]
    fn copies_scalars_and_forces_colorable() {
        let params = GenerationParams {
            scalable: true,
            monospace: true,
            colorable: false,
            width: 6,
            height: 3,
            horizontal_spacing: 1,
            vertical_spacing: -1,
            ..GenerationParams::default()
        };
        let config = FontConfig::assemble(&params, AliasMap::new());
        assert!(config.scalable && config.monospace && config.colorable);
        assert_eq!((config.width, config.height), (6, 3));
        assert_eq!((config.horizontal_spacing, config.vertical_spacing), (1, -1));
        assert_eq!(config.fg_color, Some(Color::WHITE));
        assert_eq!(config.bg_color, None);
    }

    #[test]
    fn serializes_in_manifest_schema() {
        let mut aliases = AliasMap::new();
        aliases.insert(GlyphKey::Default, AliasTarget::Nothing);
        aliases.insert('A'.into(), AliasTarget::Glyph('a'.into()));
        let config = FontConfig::assemble(&GenerationParams::default(), aliases);

        let text = serde_json::to_string(&config).unwrap();
        assert!(text.starts_with(r#"{"scalable":false,"monospace":false,"colorable":true,"height":4,"width":8,"#));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap(),
            json!({
                "scalable": false,
                "monospace": false,
                "colorable": true,
                "height": 4,
                "width": 8,
                "horizontal_spacing": 0,
                "vertical_spacing": 0,
                "fg_color": {"red": 255, "green": 255, "blue": 255},
                "bg_color": null,
                "glyphs_map": {"default": "", "A": "a"}
            })
        );
    }
}
