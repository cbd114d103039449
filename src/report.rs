// src/report.rs

//! The summary shown to the operator after a successful run.

use std::fmt;

use crate::bundle::BundleLayout;
use crate::config::GenerationParams;
use crate::generator::Generation;
use crate::manifest::FontConfig;
use crate::resolver::{CaseFold, DefaultGlyph};

#[derive(Debug, Clone)]
pub struct Summary {
    pub config: FontConfig,
    /// Length of the render sequence, repeats included.
    pub requested_glyphs: usize,
    pub unique_glyphs: usize,
    pub default_glyph: DefaultGlyph,
    pub case_fold: Option<CaseFold>,
    pub empty: bool,
    pub layout: BundleLayout,
}

impl Summary {
    pub fn new(params: &GenerationParams, generation: &Generation, layout: BundleLayout) -> Self {
        Summary {
            config: generation.bundle.config.clone(),
            requested_glyphs: generation.resolved.sequence.len(),
            unique_glyphs: generation.bundle.glyphs.len(),
            default_glyph: generation.resolved.default_glyph.clone(),
            case_fold: generation.resolved.case_fold,
            empty: params.empty,
            layout,
        }
    }
}

fn optional<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        writeln!(f, "Configuration values of the font:")?;
        writeln!(f, "  scalable: {}", c.scalable)?;
        writeln!(f, "  monospace: {}", c.monospace)?;
        writeln!(f, "  colorable: {}", c.colorable)?;
        writeln!(f, "  height: {}", c.height)?;
        writeln!(f, "  width: {}", c.width)?;
        writeln!(f, "  horizontal_spacing: {}", c.horizontal_spacing)?;
        writeln!(f, "  vertical_spacing: {}", c.vertical_spacing)?;
        writeln!(f, "  fg_color: {}", optional(&c.fg_color))?;
        writeln!(f, "  bg_color: {}", optional(&c.bg_color))?;
        writeln!(
            f,
            "Glyphs generated: {} ({} unique)",
            self.requested_glyphs, self.unique_glyphs
        )?;
        match &self.default_glyph {
            DefaultGlyph::Alias(key) => writeln!(f, "Default glyph: '{}'", key)?,
            DefaultGlyph::Placeholder { requested } => writeln!(
                f,
                "Default glyph: placeholder ('{}' is not generated)",
                requested
            )?,
            DefaultGlyph::PlaceholderAliasedToNothing => {
                writeln!(f, "Default glyph: placeholder, left for you to draw")?
            }
        }
        match self.case_fold {
            Some(CaseFold::UpperToLower) => writeln!(f, "Upper case letters map to lower case.")?,
            Some(CaseFold::LowerToUpper) => writeln!(f, "Lower case letters map to upper case.")?,
            None => {}
        }
        writeln!(f, "The font was saved in: {}", self.layout.dir.display())?;
        writeln!(f)?;
        write!(
            f,
            "The glyph file ({}) can now be edited with a sprite editor.",
            self.layout.glyphs.display()
        )?;
        if !self.empty {
            writeln!(f)?;
            write!(
                f,
                "All glyphs are filled with the character they represent. \
                 Use --empty to generate blank glyphs."
            )?;
        }
        Ok(())
    }
}
