// src/bundle.rs

//! Writes a generated font to disk as a loadable asset bundle.
//!
//! Layout, under `<root>/<namespace>/assets/fonts/<font_name>/`:
//! - `glyphs.spr`: the sprite collection holding every glyph bitmap,
//! - `config.json`: the `FontConfig` manifest,
//! - `__init__.py`: an empty marker making the directory a sub-package of
//!   the font asset namespace.
//!
//! Files are written one after another and fully overwritten. A failure
//! stops the write and leaves whatever was already written in place.

use log::{debug, info};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::{FontInitError, Result};
use crate::glyph::{Glyph, GlyphCollection, GlyphKey, Pixel, BLANK_PIXEL};
use crate::manifest::FontConfig;

pub const GLYPHS_FILE: &str = "glyphs.spr";
pub const MANIFEST_FILE: &str = "config.json";
pub const PACKAGE_MARKER_FILE: &str = "__init__.py";

/// `<root>/<namespace>/assets/fonts/<font_name>`.
pub fn bundle_path(root: &Path, namespace: &str, font_name: &str) -> PathBuf {
    root.join(namespace)
        .join("assets")
        .join("fonts")
        .join(font_name)
}

/// Glyph bitmaps and manifest of one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    pub font_name: String,
    pub glyphs: GlyphCollection,
    pub config: FontConfig,
}

/// Paths written by [`AssetSerializer::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub dir: PathBuf,
    pub glyphs: PathBuf,
    pub manifest: PathBuf,
    pub marker: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AssetSerializer {
    namespace: String,
}

impl AssetSerializer {
    pub fn new(namespace: impl Into<String>) -> Self {
        AssetSerializer {
            namespace: namespace.into(),
        }
    }

    pub fn write(&self, bundle: &AssetBundle, root: &Path) -> Result<BundleLayout> {
        let dir = bundle_path(root, &self.namespace, &bundle.font_name);
        let layout = BundleLayout {
            glyphs: dir.join(GLYPHS_FILE),
            manifest: dir.join(MANIFEST_FILE),
            marker: dir.join(PACKAGE_MARKER_FILE),
            dir,
        };

        fs::create_dir_all(&layout.dir).map_err(|e| FontInitError::io(&layout.dir, e))?;
        debug!("Bundle directory ready: {}", layout.dir.display());

        write_json(&layout.glyphs, &SpriteFile::new(&bundle.glyphs))?;
        debug!("Wrote {} glyphs to {}", bundle.glyphs.len(), layout.glyphs.display());

        write_json(&layout.manifest, &bundle.config)?;
        debug!("Wrote manifest to {}", layout.manifest.display());

        File::create(&layout.marker).map_err(|e| FontInitError::io(&layout.marker, e))?;

        info!(
            "Font '{}' written to {}",
            bundle.font_name,
            layout.dir.display()
        );
        Ok(layout)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| FontInitError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|source| FontInitError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| FontInitError::io(path, e))
}

// --- Sprite file records ---

#[derive(Serialize)]
struct SpriteFile<'a> {
    sprites_count: usize,
    sprites: Vec<SpriteRecord<'a>>,
}

impl<'a> SpriteFile<'a> {
    fn new(glyphs: &'a GlyphCollection) -> Self {
        SpriteFile {
            sprites_count: glyphs.len(),
            sprites: glyphs.iter().map(SpriteRecord::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct SpriteRecord<'a> {
    name: &'a GlyphKey,
    /// `[width, height]`
    size: [usize; 2],
    default_sprixel: SprixelRecord,
    sprixels: Vec<Vec<SprixelRecord>>,
}

impl<'a> From<&'a Glyph> for SpriteRecord<'a> {
    fn from(glyph: &'a Glyph) -> Self {
        SpriteRecord {
            name: &glyph.name,
            size: [glyph.width(), glyph.height()],
            default_sprixel: SprixelRecord::from(&BLANK_PIXEL),
            sprixels: glyph
                .rows()
                .iter()
                .map(|row| row.iter().map(SprixelRecord::from).collect())
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct SprixelRecord {
    model: char,
    is_bg_transparent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fg_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bg_color: Option<Color>,
}

impl From<&Pixel> for SprixelRecord {
    fn from(pixel: &Pixel) -> Self {
        SprixelRecord {
            model: pixel.ink,
            is_bg_transparent: pixel.bg.is_none(),
            fg_color: pixel.fg,
            bg_color: pixel.bg,
        }
    }
}
