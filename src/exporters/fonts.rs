//! Font faces the PDF exporter can draw with.
//!
//! The bundled face covers Latin, Greek, Cyrillic, Hebrew and Arabic. Scripts it lacks
//! (Bengali, Devanagari) come from faces listed in `PDF_FONT_PATHS`, tried in order.

use std::{fs, path::PathBuf, sync::Arc};

use printpdf::ParsedFont;

use super::export_error;
use crate::errors::{AppError, AppResult};

const BUNDLED_FACE_NAME: &str = "DejaVu Sans";
const BUNDLED_FACE: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

#[derive(Clone, Debug)]
pub struct FontFace {
    name: String,
    bytes: Arc<[u8]>,
}

impl FontFace {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self) -> Option<ParsedFont> {
        ParsedFont::from_bytes(&self.bytes, 0, &mut Vec::new())
    }
}

/// Ordered fallback list: the bundled face first, then configured faces.
#[derive(Clone, Debug)]
pub struct FontSet {
    faces: Vec<FontFace>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::bundled()
    }
}

impl FontSet {
    pub fn bundled() -> Self {
        Self {
            faces: vec![FontFace {
                name: BUNDLED_FACE_NAME.to_string(),
                bytes: Arc::from(BUNDLED_FACE),
            }],
        }
    }

    /// Adds each face after the bundled one. Unreadable or unparseable files are a
    /// configuration error.
    pub fn from_paths(paths: &[PathBuf]) -> AppResult<Self> {
        let mut set = Self::bundled();

        for path in paths {
            let bytes = fs::read(path).map_err(|e| {
                AppError::ConfigError(format!("Cannot read font {}: {}", path.display(), e))
            })?;
            let face = FontFace {
                name: path.display().to_string(),
                bytes: Arc::from(bytes),
            };
            if face.parse().is_none() {
                return Err(AppError::ConfigError(format!(
                    "{} is not a usable TrueType/OpenType font",
                    face.name
                )));
            }
            log::info!("Loaded PDF font {}", face.name);
            set.faces.push(face);
        }

        Ok(set)
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    pub(crate) fn parse_all(&self) -> AppResult<Vec<ParsedFont>> {
        self.faces
            .iter()
            .map(|face| {
                face.parse()
                    .ok_or_else(|| export_error(format!("Failed to parse font {}", face.name)))
            })
            .collect()
    }
}
