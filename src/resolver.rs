// src/resolver.rs

//! Glyph set resolution.
//!
//! Decides which glyph identities a new font contains, in render order, and
//! which identities are served by another glyph through the alias map.

use indexmap::IndexMap;
use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::config::Coverage;
use crate::glyph::GlyphKey;

fn lowercase() -> impl Iterator<Item = char> {
    'a'..='z'
}

fn uppercase() -> impl Iterator<Item = char> {
    'A'..='Z'
}

fn digits() -> impl Iterator<Item = char> {
    '0'..='9'
}

/// ASCII punctuation in ASCII order.
fn punctuation() -> impl Iterator<Item = char> {
    (b'!'..=b'~').map(char::from).filter(char::is_ascii_punctuation)
}

/// What an alias entry redirects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    Glyph(GlyphKey),
    /// An explicit "no glyph" entry, written as the empty string.
    Nothing,
}

impl Serialize for AliasTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AliasTarget::Glyph(key) => serializer.collect_str(key),
            AliasTarget::Nothing => serializer.serialize_str(""),
        }
    }
}

/// Requested glyph -> glyph that serves it, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasMap(IndexMap<GlyphKey, AliasTarget>);

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: GlyphKey, to: AliasTarget) {
        self.0.insert(from, to);
    }

    pub fn get(&self, key: &GlyphKey) -> Option<&AliasTarget> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &GlyphKey) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlyphKey, &AliasTarget)> {
        self.0.iter()
    }
}

/// How the requested default glyph was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultGlyph {
    /// The requested glyph exists; `"default"` aliases to it.
    Alias(GlyphKey),
    /// The requested glyph is not generated. A placeholder `"default"` glyph
    /// is rendered and no alias is written.
    Placeholder { requested: String },
    /// Nothing was requested. A placeholder `"default"` glyph is rendered and
    /// `"default"` is also aliased to nothing.
    PlaceholderAliasedToNothing,
}

impl DefaultGlyph {
    /// Whether a `"default"` glyph must be rendered.
    pub fn renders_placeholder(&self) -> bool {
        !matches!(self, DefaultGlyph::Alias(_))
    }
}

/// Direction of the automatic case-fold aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Only lowercase is generated: `A` -> `a`, ...
    UpperToLower,
    /// Only uppercase is generated: `a` -> `A`, ...
    LowerToUpper,
}

/// The outcome of glyph set resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGlyphs {
    /// Glyphs to render, in order. May repeat keys; later renders overwrite.
    pub sequence: Vec<GlyphKey>,
    pub aliases: AliasMap,
    pub default_glyph: DefaultGlyph,
    pub case_fold: Option<CaseFold>,
}

/// Resolves the render sequence and alias map for `coverage`.
///
/// `default_glyph` names the glyph substituted for missing characters; it
/// may be empty, a generated glyph, or anything else (which falls back to a
/// placeholder with a warning).
pub fn resolve(coverage: Coverage, default_glyph: &str) -> ResolvedGlyphs {
    let mut sequence: Vec<GlyphKey> = std::iter::once(' ')
        .chain(lowercase())
        .chain(digits())
        .map(GlyphKey::Char)
        .collect();

    if coverage.contains(Coverage::LOWER_CASE) {
        sequence.extend(lowercase().map(GlyphKey::Char));
    }
    if coverage.contains(Coverage::UPPER_CASE) {
        sequence.extend(uppercase().map(GlyphKey::Char));
    }
    if coverage.contains(Coverage::NUMBERS) {
        sequence.extend(digits().map(GlyphKey::Char));
    }
    if coverage.contains(Coverage::EXTRA_GLYPHS) {
        sequence.extend(punctuation().map(GlyphKey::Char));
    }

    let mut aliases = AliasMap::new();
    let default_glyph = resolve_default(&sequence, default_glyph);
    match &default_glyph {
        DefaultGlyph::Alias(key) => {
            aliases.insert(GlyphKey::Default, AliasTarget::Glyph(*key));
        }
        DefaultGlyph::Placeholder { requested } => {
            warn!(
                "Glyph \"{}\" cannot be the default glyph as it is not in the list of generated glyphs.",
                requested
            );
            warn!("The font is generated with the default glyph as empty.");
        }
        DefaultGlyph::PlaceholderAliasedToNothing => {
            aliases.insert(GlyphKey::Default, AliasTarget::Nothing);
        }
    }
    if default_glyph.renders_placeholder() {
        sequence.insert(0, GlyphKey::Default);
    }

    let case_fold = match (
        coverage.contains(Coverage::LOWER_CASE),
        coverage.contains(Coverage::UPPER_CASE),
    ) {
        (true, false) => Some(CaseFold::UpperToLower),
        (false, true) => Some(CaseFold::LowerToUpper),
        _ => None,
    };
    if let Some(fold) = case_fold {
        let pairs = uppercase().zip(lowercase());
        for (upper, lower) in pairs {
            let (from, to) = match fold {
                CaseFold::UpperToLower => (upper, lower),
                CaseFold::LowerToUpper => (lower, upper),
            };
            aliases.insert(GlyphKey::Char(from), AliasTarget::Glyph(GlyphKey::Char(to)));
        }
        info!(
            "The mapping between lower and upper case was automatically added: \
             'a' and 'A' now resolve to the same glyph."
        );
    }

    ResolvedGlyphs {
        sequence,
        aliases,
        default_glyph,
        case_fold,
    }
}

fn resolve_default(generated: &[GlyphKey], requested: &str) -> DefaultGlyph {
    if requested.is_empty() {
        return DefaultGlyph::PlaceholderAliasedToNothing;
    }
    match GlyphKey::parse(requested) {
        Some(key @ GlyphKey::Char(_)) if generated.contains(&key) => DefaultGlyph::Alias(key),
        _ => DefaultGlyph::Placeholder {
            requested: requested.to_string(),
        },
    }
}
