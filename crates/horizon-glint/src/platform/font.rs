//! Font loading and string measurement.
//!
//! [`FontFace::load`] reads a TTF/OTF file with `ttf-parser`, scales its
//! design-unit metrics to pixels for the requested point size, and caches
//! the printable-ASCII advance table. The resulting [`FontFace`] is an
//! opaque, cheaply clonable handle: widgets use it for cursor placement and
//! label centering, hosts pass it back through
//! [`Surface::draw_text`](crate::surface::Surface::draw_text).
//!
//! The effective pixel size is `point_size * dpi / 72`, where the DPI comes
//! from the `DPI` environment variable (default 72). A `DPI` value that is
//! not a positive number is a configuration error, not a silent fallback.

use std::path::Path as FsPath;
use std::{env, fs};

use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the display DPI.
const DPI_ENV_VAR: &str = "DPI";

/// Typographic points per inch; also the DPI at which 1pt == 1px.
const POINTS_PER_INCH: f32 = 72.0;

/// First cached codepoint (space).
const ASCII_START: u32 = 0x20;

/// Number of cached codepoints (space through tilde).
const ASCII_COUNT: usize = 95;

/// Errors raised while loading a font face.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a parseable TTF/OTF face.
    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    /// The `DPI` environment variable is set but not a positive number.
    #[error("invalid DPI configuration {value:?}: expected a positive number")]
    InvalidDpi { value: String },
}

/// A loaded font face at a fixed pixel size.
///
/// Measurement is a total function: characters outside the cached printable
/// -ASCII range fall back to the face's average advance, so
/// [`measure`](Self::measure) never fails. Hosts with a full shaping stack
/// should override [`Surface::text_width`](crate::surface::Surface::text_width)
/// instead of relying on these per-character advances.
#[derive(Debug, Clone)]
pub struct FontFace {
    px_size: f32,
    ascent: f32,
    line_height: f32,
    advances: [f32; ASCII_COUNT],
    default_advance: f32,
}

impl FontFace {
    /// Load a TTF/OTF font file at the given point size.
    ///
    /// The `DPI` environment variable scales points to pixels; unset means
    /// 72 DPI (1pt == 1px).
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file is unreadable,
    /// [`FontError::Parse`] if it is not a valid face, and
    /// [`FontError::InvalidDpi`] if the environment configuration is bad.
    pub fn load(path: impl AsRef<FsPath>, point_size: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let dpi = dpi_from_env()?;
        let face = Self::from_bytes(&data, point_size, dpi)?;
        debug!(
            path = %path.display(),
            px_size = face.px_size,
            "loaded font face"
        );
        Ok(face)
    }

    /// Build a face from raw TTF/OTF bytes with an explicit DPI.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the bytes are not a valid face.
    pub fn from_bytes(data: &[u8], point_size: f32, dpi: f32) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(data, 0)?;

        let px_size = point_size * dpi / POINTS_PER_INCH;
        let scale = px_size / f32::from(face.units_per_em());

        let mut advances = [0.0f32; ASCII_COUNT];
        let mut found_total = 0.0f32;
        let mut found_count = 0u32;
        for (slot, advance) in advances.iter_mut().enumerate() {
            let ch = char::from_u32(ASCII_START + slot as u32).unwrap_or(' ');
            if let Some(units) = face
                .glyph_index(ch)
                .and_then(|glyph| face.glyph_hor_advance(glyph))
            {
                let px = f32::from(units) * scale;
                *advance = px;
                found_total += px;
                found_count += 1;
            }
        }

        let default_advance = if found_count > 0 {
            found_total / found_count as f32
        } else {
            px_size * 0.5
        };
        for advance in advances.iter_mut() {
            if *advance == 0.0 {
                *advance = default_advance;
            }
        }

        let ascent = f32::from(face.ascender()) * scale;
        let line_height = f32::from(face.ascender() - face.descender()) * scale;

        Ok(Self {
            px_size,
            ascent,
            line_height,
            advances,
            default_advance,
        })
    }

    /// Build a synthetic face where every character has the same advance.
    ///
    /// Useful for headless hosts and tests where no font file exists but
    /// deterministic measurement is still needed.
    pub fn with_uniform_advance(px_size: f32, advance: f32) -> Self {
        Self {
            px_size,
            ascent: px_size * 0.8,
            line_height: px_size * 1.2,
            advances: [advance; ASCII_COUNT],
            default_advance: advance,
        }
    }

    /// Pixel size of the face.
    #[inline]
    pub fn size(&self) -> f32 {
        self.px_size
    }

    /// Distance from the baseline to the top of the tallest glyphs, in px.
    #[inline]
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Recommended line height in px.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Advance width of a single character in px.
    #[inline]
    pub fn advance(&self, ch: char) -> f32 {
        let code = ch as u32;
        if (ASCII_START..ASCII_START + ASCII_COUNT as u32).contains(&code) {
            self.advances[(code - ASCII_START) as usize]
        } else {
            self.default_advance
        }
    }

    /// Width of a string in px: the sum of its character advances.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}

/// Read and validate the DPI environment configuration.
fn dpi_from_env() -> Result<f32, FontError> {
    match env::var(DPI_ENV_VAR) {
        Err(env::VarError::NotPresent) => Ok(POINTS_PER_INCH),
        Err(env::VarError::NotUnicode(_)) => Err(FontError::InvalidDpi {
            value: "<non-unicode>".to_owned(),
        }),
        Ok(raw) => parse_dpi(&raw),
    }
}

/// Parse a DPI string; must be a finite positive number.
fn parse_dpi(raw: &str) -> Result<f32, FontError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|dpi| dpi.is_finite() && *dpi > 0.0)
        .ok_or_else(|| FontError::InvalidDpi {
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = FontFace::load("/nonexistent/font.ttf", 16.0);
        assert!(matches!(result, Err(FontError::Io(_))));
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let result = FontFace::from_bytes(b"definitely not a font", 16.0, 72.0);
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn test_parse_dpi() {
        assert_eq!(parse_dpi("96").unwrap(), 96.0);
        assert_eq!(parse_dpi(" 144 ").unwrap(), 144.0);
        assert!(matches!(
            parse_dpi("banana"),
            Err(FontError::InvalidDpi { .. })
        ));
        assert!(matches!(parse_dpi("-72"), Err(FontError::InvalidDpi { .. })));
        assert!(matches!(parse_dpi("0"), Err(FontError::InvalidDpi { .. })));
        assert!(matches!(parse_dpi("inf"), Err(FontError::InvalidDpi { .. })));
    }

    #[test]
    fn test_uniform_advance_measurement() {
        let face = FontFace::with_uniform_advance(20.0, 8.0);
        assert_eq!(face.measure(""), 0.0);
        assert_eq!(face.measure("abcd"), 32.0);
        // Non-ASCII falls back to the default advance
        assert_eq!(face.measure("é漢"), 16.0);
        assert_eq!(face.size(), 20.0);
    }
}
