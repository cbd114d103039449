// src/cli.rs

//! Command-line interface.
//!
//! Every boolean parameter has a `--flag` / `--no-flag` pair; the last one
//! given wins. Options left out keep the value from the preset (if any) or
//! the built-in default.

use clap::Parser;
use std::path::PathBuf;

use crate::config::GenerationParams;
use crate::error::Result;

#[derive(Debug, Parser)]
#[clap(
    name = "bitmap-font-init",
    version,
    about = "Initialize a new bitmap font: placeholder glyphs, glyph aliases and a font manifest."
)]
pub struct Cli {
    /// The name of the font to create.
    pub font_name: String,

    /// Load generation parameters from a JSON preset. Options given on the
    /// command line take precedence.
    #[clap(short = 'p', long = "preset")]
    pub preset: Option<PathBuf>,

    /// Declare the font as scalable.
    #[clap(short = 's', long, overrides_with = "no_scalable")]
    pub scalable: bool,
    #[clap(long, hide = true)]
    pub no_scalable: bool,

    /// Declare the font as monospace (all glyphs share the same width).
    #[clap(short = 'm', long, overrides_with = "no_monospace")]
    pub monospace: bool,
    #[clap(long, hide = true)]
    pub no_monospace: bool,

    /// Declare the font as colorable (two colors: background and foreground).
    #[clap(short = 'c', long, overrides_with = "no_colorable")]
    pub colorable: bool,
    #[clap(long, hide = true)]
    pub no_colorable: bool,

    /// Directory the font is created in. Missing directories are created.
    #[clap(short = 'o', long)]
    pub output_directory: Option<PathBuf>,

    /// Glyph used when a requested glyph is missing. It must be one of the
    /// generated glyphs; if not set, an empty default glyph is generated.
    #[clap(short = 'd', long)]
    pub default_glyph: Option<String>,

    /// Width of the glyphs.
    #[clap(short = 'w', long)]
    pub width: Option<usize>,

    /// Height of the glyphs.
    #[clap(short = 'H', long)]
    pub height: Option<usize>,

    /// Horizontal spacing between glyphs.
    #[clap(long, allow_negative_numbers = true)]
    pub horizontal_spacing: Option<i32>,

    /// Vertical spacing between glyphs.
    #[clap(long, allow_negative_numbers = true)]
    pub vertical_spacing: Option<i32>,

    /// Generate all ASCII lower case glyphs.
    #[clap(long, overrides_with = "no_lower_case")]
    pub lower_case: bool,
    #[clap(long, hide = true)]
    pub no_lower_case: bool,

    /// Generate all ASCII upper case glyphs.
    #[clap(long, overrides_with = "no_upper_case")]
    pub upper_case: bool,
    #[clap(long, hide = true)]
    pub no_upper_case: bool,

    /// Generate the digits 0 to 9.
    #[clap(short = 'n', long, overrides_with = "no_numbers")]
    pub numbers: bool,
    #[clap(long, hide = true)]
    pub no_numbers: bool,

    /// Generate extra glyphs: @, #, punctuation, etc.
    #[clap(long, overrides_with = "no_extra_glyphs")]
    pub extra_glyphs: bool,
    #[clap(long, hide = true)]
    pub no_extra_glyphs: bool,

    /// Leave glyphs empty instead of filling them with the character they
    /// represent.
    #[clap(short = 'e', long, overrides_with = "no_empty")]
    pub empty: bool,
    #[clap(long, hide = true)]
    pub no_empty: bool,

    /// Namespace directory holding `assets/fonts/`.
    #[clap(long)]
    pub namespace: Option<String>,
}

// `--x` / `--no-x` pair; `None` when neither was given.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Cli {
    /// Resolves the final parameters: defaults, then the preset, then the
    /// options given on the command line.
    pub fn into_params(self) -> Result<GenerationParams> {
        let mut params = match &self.preset {
            Some(path) => GenerationParams::from_preset(path)?,
            None => GenerationParams::default(),
        };
        self.apply_to(&mut params);
        Ok(params)
    }

    pub fn apply_to(self, params: &mut GenerationParams) {
        apply(&mut params.scalable, toggle(self.scalable, self.no_scalable));
        apply(&mut params.monospace, toggle(self.monospace, self.no_monospace));
        apply(&mut params.colorable, toggle(self.colorable, self.no_colorable));
        apply(&mut params.output_directory, self.output_directory);
        apply(&mut params.default_glyph, self.default_glyph);
        apply(&mut params.width, self.width);
        apply(&mut params.height, self.height);
        apply(&mut params.horizontal_spacing, self.horizontal_spacing);
        apply(&mut params.vertical_spacing, self.vertical_spacing);
        apply(&mut params.lower_case, toggle(self.lower_case, self.no_lower_case));
        apply(&mut params.upper_case, toggle(self.upper_case, self.no_upper_case));
        apply(&mut params.numbers, toggle(self.numbers, self.no_numbers));
        apply(&mut params.extra_glyphs, toggle(self.extra_glyphs, self.no_extra_glyphs));
        apply(&mut params.empty, toggle(self.empty, self.no_empty));
        apply(&mut params.namespace, self.namespace);
        params.font_name = self.font_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> GenerationParams {
        let cli = Cli::try_parse_from(std::iter::once("bitmap-font-init").chain(args.iter().copied()))
            .unwrap();
        cli.into_params().unwrap()
    }

    #[test]
    fn no_options_gives_defaults() {
        let params = parse(&["my_font"]);
        assert_eq!(
            params,
            GenerationParams {
                font_name: "my_font".to_string(),
                ..GenerationParams::default()
            }
        );
    }

    #[test]
    fn negative_toggles_disable_defaults() {
        let params = parse(&["f", "--no-upper-case", "--no-extra-glyphs", "--no-colorable"]);
        assert!(!params.upper_case);
        assert!(!params.extra_glyphs);
        assert!(!params.colorable);
        assert!(params.lower_case);
        assert!(params.numbers);
    }

    #[test]
    fn last_toggle_wins() {
        let params = parse(&["f", "--no-numbers", "--numbers", "--empty", "--no-empty"]);
        assert!(params.numbers);
        assert!(!params.empty);
    }

    #[test]
    fn value_options() {
        let params = parse(&[
            "-w", "5", "-H", "3", "-d", "?", "-o", "out", "--horizontal-spacing", "-1",
            "--vertical-spacing", "2", "--namespace", "game", "-s", "-m", "-e", "f",
        ]);
        assert_eq!((params.width, params.height), (5, 3));
        assert_eq!(params.default_glyph, "?");
        assert_eq!(params.output_directory, PathBuf::from("out"));
        assert_eq!((params.horizontal_spacing, params.vertical_spacing), (-1, 2));
        assert_eq!(params.namespace, "game");
        assert!(params.scalable && params.monospace && params.empty);
        assert_eq!(params.font_name, "f");
    }

    #[test]
    fn command_line_overrides_preset() {
        let mut preset = tempfile::NamedTempFile::new().unwrap();
        write!(
            preset,
            r#"{{"width": 12, "height": 6, "numbers": false, "font_name": "ignored"}}"#
        )
        .unwrap();
        let path = preset.path().to_str().unwrap();

        let params = parse(&["--preset", path, "--height", "7", "f"]);
        assert_eq!(params.width, 12);
        assert_eq!(params.height, 7);
        assert!(!params.numbers);
        assert_eq!(params.font_name, "f");
    }

    #[test]
    fn font_name_is_required() {
        assert!(Cli::try_parse_from(["bitmap-font-init"]).is_err());
    }
}
