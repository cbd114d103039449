// src/config.rs

//! Defines the generation parameters for one font bootstrap run.
//!
//! `GenerationParams` is built once (defaults, optionally a JSON preset,
//! then command-line overrides), validated, and then passed by reference to
//! every stage of the pipeline. Nothing mutates it after validation.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::bundle::bundle_path;
use crate::error::{FontInitError, Result};

/// Namespace directory the font loader searches for `assets/fonts/`.
pub const DEFAULT_NAMESPACE: &str = "pygamelib";

bitflags! {
    /// Optional glyph ranges requested on top of the base coverage
    /// (space, lowercase letters and digits are always generated).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Coverage: u8 {
        const LOWER_CASE   = 1 << 0;
        const UPPER_CASE   = 1 << 1;
        const NUMBERS      = 1 << 2;
        const EXTRA_GLYPHS = 1 << 3; // ASCII punctuation
    }
}

/// Every parameter of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Stored in the manifest only.
    pub scalable: bool,
    /// Stored in the manifest only.
    pub monospace: bool,
    /// Accepted for compatibility; the manifest always declares the font colorable.
    pub colorable: bool,
    /// Root under which `<namespace>/assets/fonts/<font_name>/` is created.
    pub output_directory: PathBuf,
    /// Glyph used when a requested one is missing. Empty means "draw it yourself".
    pub default_glyph: String,
    pub width: usize,
    pub height: usize,
    pub horizontal_spacing: i32,
    pub vertical_spacing: i32,
    pub lower_case: bool,
    pub upper_case: bool,
    pub numbers: bool,
    pub extra_glyphs: bool,
    /// Leave glyph bodies blank instead of filling them with their character.
    pub empty: bool,
    pub namespace: String,
    pub font_name: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            scalable: false,
            monospace: false,
            colorable: true,
            output_directory: PathBuf::from("."),
            default_glyph: String::new(),
            width: 8,
            height: 4,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            lower_case: true,
            upper_case: true,
            numbers: true,
            extra_glyphs: true,
            empty: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
            font_name: String::new(),
        }
    }
}

impl GenerationParams {
    /// Loads parameters from a JSON preset. Missing fields take their defaults.
    pub fn from_preset(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FontInitError::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| FontInitError::Preset {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn coverage(&self) -> Coverage {
        let mut coverage = Coverage::empty();
        coverage.set(Coverage::LOWER_CASE, self.lower_case);
        coverage.set(Coverage::UPPER_CASE, self.upper_case);
        coverage.set(Coverage::NUMBERS, self.numbers);
        coverage.set(Coverage::EXTRA_GLYPHS, self.extra_glyphs);
        coverage
    }

    /// Rejects inconsistent parameters before anything is synthesized or
    /// written.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(FontInitError::invalid("width", "must be at least 1"));
        }
        if self.height == 0 {
            return Err(FontInitError::invalid("height", "must be at least 1"));
        }
        check_path_component("font_name", &self.font_name)?;
        check_path_component("namespace", &self.namespace)?;
        Ok(())
    }

    /// Directory the bundle is written to.
    pub fn bundle_dir(&self) -> PathBuf {
        bundle_path(&self.output_directory, &self.namespace, &self.font_name)
    }
}

// Names become single directory levels, so they may not escape or nest.
fn check_path_component(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FontInitError::invalid(name, "must not be empty"));
    }
    if value == "." || value == ".." {
        return Err(FontInitError::invalid(
            name,
            format!("'{}' is not a usable directory name", value),
        ));
    }
    if value.contains(['/', '\\']) {
        return Err(FontInitError::invalid(
            name,
            format!("'{}' must not contain path separators", value),
        ));
    }
    Ok(())
}
