use std::collections::BTreeSet;

use printpdf::{
    FontId, Layer, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem, TextMatrix,
    TextRenderingMode,
};

use super::{export_error, fonts::FontSet};
use crate::errors::{AppError, AppResult};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 5.5;
const FONT_SIZE_PT: f32 = 11.0;
const MAX_CHARS_PER_LINE: usize = 95;
const TAB_WIDTH: usize = 4;
const MAX_REPORTED_CHARS: usize = 16;

fn lines_per_page() -> usize {
    ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / LINE_HEIGHT_MM).floor() as usize
}

/// Splits text into printable lines: tabs become spaces, `\r` is dropped, and
/// long lines are hard-wrapped by character count.
pub fn layout_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let line = raw
            .trim_end_matches('\r')
            .replace('\t', &" ".repeat(TAB_WIDTH));
        let chars: Vec<char> = line.chars().collect();

        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(MAX_CHARS_PER_LINE) {
            lines.push(chunk.iter().collect());
        }
    }

    lines
}

/// A stretch of one line drawn with a single face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub face: usize,
    pub text: String,
}

/// Splits a line into runs by the first face that has a glyph for each character.
/// Whitespace stays in the surrounding run and control characters are skipped.
/// Characters no face covers are returned separately.
pub fn split_runs(
    line: &str,
    face_for: impl Fn(char) -> Option<usize>,
) -> (Vec<TextRun>, Vec<char>) {
    let mut runs: Vec<TextRun> = Vec::new();
    let mut uncovered = Vec::new();

    for c in line.chars() {
        if c.is_control() {
            continue;
        }
        let face = if c.is_whitespace() {
            runs.last().map(|run| run.face).or_else(|| face_for(c)).unwrap_or(0)
        } else {
            match face_for(c) {
                Some(face) => face,
                None => {
                    uncovered.push(c);
                    continue;
                }
            }
        };

        match runs.last_mut() {
            Some(run) if run.face == face => run.text.push(c),
            _ => runs.push(TextRun {
                face,
                text: c.to_string(),
            }),
        }
    }

    (runs, uncovered)
}

fn uncovered_error(chars: &BTreeSet<char>, fonts: &FontSet) -> AppError {
    let listed = chars
        .iter()
        .take(MAX_REPORTED_CHARS)
        .map(|c| format!("'{}' (U+{:04X})", c, *c as u32))
        .collect::<Vec<_>>()
        .join(", ");
    let faces = fonts
        .faces()
        .iter()
        .map(|face| face.name())
        .collect::<Vec<_>>()
        .join(", ");

    export_error(format!(
        "No PDF font covers {} character(s): {}. Loaded fonts: {}. Add a font with PDF_FONT_PATHS.",
        chars.len(),
        listed,
        faces
    ))
}

/// Renders the text onto A4 pages at 11pt, switching faces per character so every
/// visible character is drawn and stays extractable. Fails instead of dropping
/// characters none of the faces can draw.
pub fn export_pdf(text: &str, fonts: &FontSet) -> AppResult<Vec<u8>> {
    let parsed = fonts.parse_all()?;
    let face_for = |c: char| {
        parsed
            .iter()
            .position(|face| face.lookup_glyph_index(c as u32).is_some())
    };

    let lines = layout_lines(text);
    let mut uncovered = BTreeSet::new();
    let line_runs: Vec<Vec<TextRun>> = lines
        .iter()
        .map(|line| {
            let (runs, missing) = split_runs(line, face_for);
            uncovered.extend(missing);
            runs
        })
        .collect();
    if !uncovered.is_empty() {
        return Err(uncovered_error(&uncovered, fonts));
    }

    let mut doc = PdfDocument::new("Generated MCQs");
    let layer_id = doc.add_layer(&Layer::new("Questions"));
    let font_ids: Vec<FontId> = parsed.iter().map(|face| doc.add_font(face)).collect();
    let first_font = font_ids
        .first()
        .cloned()
        .ok_or_else(|| export_error("No PDF font loaded"))?;

    for page_lines in line_runs.chunks(lines_per_page()) {
        let mut ops = vec![
            Op::BeginLayer {
                layer_id: layer_id.clone(),
            },
            Op::SetFontSize {
                size: Pt(FONT_SIZE_PT),
                font: first_font.clone(),
            },
            Op::StartTextSection,
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Fill,
            },
        ];

        for (index, runs) in page_lines.iter().enumerate() {
            if runs.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * (index as f32 + 1.0);
            ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(MARGIN_MM).into(), Mm(y).into()),
            });
            for run in runs {
                let font = font_ids[run.face].clone();
                ops.push(Op::SetFontSize {
                    size: Pt(FONT_SIZE_PT),
                    font: font.clone(),
                });
                ops.push(Op::WriteText {
                    items: vec![TextItem::Text(run.text.clone())],
                    font,
                });
            }
        }

        ops.push(Op::EndTextSection);
        ops.push(Op::EndLayer {
            layer_id: layer_id.clone(),
        });

        doc.pages
            .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::warn!("PDF export produced {} warnings", warnings.len());
    }

    log::info!(
        "Exported {} lines to PDF with {} font(s) ({} bytes)",
        lines.len(),
        font_ids.len(),
        bytes.len()
    );
    Ok(bytes)
}
