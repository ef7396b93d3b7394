use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use ttf_parser::Face;

use super::{ContourCounter, GlyphId, GlyphOutline, GlyphSource};
use crate::error::{Error, Result};

const TRUETYPE_MAGIC: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
const OPENTYPE_MAGIC: [u8; 4] = *b"OTTO";

lazy_static! {
    static ref FONT_NAME: Regex = Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").unwrap();
}

/// Reject dataset keys that cannot safely be spliced into a file name
pub fn check_font_name(font: &str) -> Result<()> {
    if FONT_NAME.is_match(font) {
        Ok(())
    } else {
        Err(Error::InvalidFontName(font.to_string()))
    }
}

/// Read a font file, checking it carries a TrueType or OpenType signature
pub fn load_font_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|source| Error::MissingFontFile {
        path: path.to_path_buf(),
        source,
    })?;

    let is_valid_magic = data.len() >= 4
        && (data[..4] == TRUETYPE_MAGIC || data[..4] == OPENTYPE_MAGIC);
    if !is_valid_magic {
        return Err(Error::Font(format!(
            "{} is not a TrueType or OpenType font",
            path.display()
        )));
    }

    debug!("Loaded {} ({} bytes)", path.display(), data.len());
    Ok(data)
}

/// [`GlyphSource`] backed by a parsed font face
pub struct FaceSource<'a> {
    face: Face<'a>,
}

impl<'a> FaceSource<'a> {
    pub fn parse(data: &'a [u8], font: &str) -> Result<Self> {
        let face = Face::parse(data, 0)
            .map_err(|e| Error::Font(format!("Failed to parse {}: {}", font, e)))?;
        Ok(Self { face })
    }
}

impl GlyphSource for FaceSource<'_> {
    fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    fn cmap_lookups(&self, codepoint: u32) -> Vec<Option<GlyphId>> {
        match self.face.tables().cmap {
            Some(cmap) => cmap
                .subtables
                .into_iter()
                .filter(|subtable| subtable.is_unicode())
                .map(|subtable| subtable.glyph_index(codepoint))
                .collect(),
            None => Vec::new(),
        }
    }

    fn outline(&self, glyph: GlyphId) -> Option<GlyphOutline> {
        let mut counter = ContourCounter::default();
        let bbox = self.face.outline_glyph(glyph, &mut counter)?;
        Some(GlyphOutline {
            contours: counter.contours,
            y_min: bbox.y_min,
            y_max: bbox.y_max,
        })
    }

    fn advance(&self, glyph: GlyphId) -> Option<u16> {
        self.face.glyph_hor_advance(glyph)
    }

    fn glyph_label(&self, glyph: GlyphId) -> String {
        match self.face.glyph_name(glyph) {
            Some(name) => name.to_string(),
            None => format!("gid{}", glyph.0),
        }
    }
}
