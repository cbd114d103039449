// src/generator.rs

//! Drives one generation run: resolve, synthesize, assemble, write.

use log::info;

use crate::bundle::{AssetBundle, AssetSerializer};
use crate::config::GenerationParams;
use crate::error::Result;
use crate::manifest::FontConfig;
use crate::report::Summary;
use crate::resolver::{self, ResolvedGlyphs};
use crate::synth::GlyphSynthesizer;

/// A font built in memory, ready to be written.
#[derive(Debug, Clone)]
pub struct Generation {
    pub bundle: AssetBundle,
    pub resolved: ResolvedGlyphs,
}

/// Builds the bundle for `params` without touching the filesystem.
pub fn generate(params: &GenerationParams) -> Result<Generation> {
    params.validate()?;

    let resolved = resolver::resolve(params.coverage(), &params.default_glyph);

    info!("Generating glyphs...");
    let synthesizer = GlyphSynthesizer::new(params.width, params.height, params.empty);
    let glyphs = synthesizer.synthesize_all(&resolved.sequence);

    let config = FontConfig::assemble(params, resolved.aliases.clone());

    Ok(Generation {
        bundle: AssetBundle {
            font_name: params.font_name.clone(),
            glyphs,
            config,
        },
        resolved,
    })
}

/// Generates the font and writes it under `params.output_directory`.
pub fn run(params: &GenerationParams) -> Result<Summary> {
    let generation = generate(params)?;

    info!("Writing files...");
    let layout = AssetSerializer::new(params.namespace.as_str())
        .write(&generation.bundle, &params.output_directory)?;

    Ok(Summary::new(params, &generation, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FontInitError;
    use crate::glyph::GlyphKey;
    use test_log::test;

    #[test]
    fn invalid_params_fail_before_synthesis() {
        let params = GenerationParams {
            height: 0,
            font_name: "f".to_string(),
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&params),
            Err(FontInitError::InvalidParameter { name: "height", .. })
        ));
    }

    #[test]
    fn invalid_params_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let params = GenerationParams {
            width: 0,
            font_name: "f".to_string(),
            output_directory: dir.path().to_path_buf(),
            ..GenerationParams::default()
        };
        assert!(run(&params).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn default_font_has_full_ascii_coverage() {
        let params = GenerationParams {
            font_name: "f".to_string(),
            ..GenerationParams::default()
        };
        let generation = generate(&params).unwrap();
        let glyphs = &generation.bundle.glyphs;
        // default + space + 26 + 26 + 10 + 32
        assert_eq!(glyphs.len(), 96);
        assert_eq!(glyphs.keys().next(), Some(&GlyphKey::Default));
        assert_eq!(generation.resolved.sequence.len(), 132);
        assert!(glyphs
            .iter()
            .all(|g| g.width() == params.width && g.height() == params.height));
    }
}
