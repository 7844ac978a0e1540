//! Result export — lays the current result set out as a single flowing
//! page and persists it as a document file.
//!
//! The layout is a fixed vertical walk: centered title, skills line,
//! then each question at a constant line step. There is no pagination;
//! content past the page bottom is reported on the document as an
//! overflow, not reflowed.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::models::ResultSet;

pub const EXPORT_FILE_NAME: &str = "interview-questions.txt";

pub const DOCUMENT_TITLE: &str = "Generated Interview Questions";

// Vertical positions in page units (A4, top-down). The cursor is u32:
// long question lists walk past the page bottom without wrapping.
const TITLE_Y: u32 = 20;
const SKILLS_LABEL_Y: u32 = 35;
const SKILLS_BODY_Y: u32 = 45;
const QUESTIONS_LABEL_Y: u32 = 65;
const FIRST_QUESTION_Y: u32 = 75;
const LINE_STEP: u32 = 10;
const PAGE_BOTTOM_Y: u32 = 287;

const TITLE_FONT_PT: u8 = 20;
const HEADING_FONT_PT: u8 = 12;
const BODY_FONT_PT: u8 = 10;

/// One line of text placed at an absolute vertical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub y: u32,
    pub font_size_pt: u8,
    pub centered: bool,
    pub text: String,
}

/// A laid-out export document. Lines are ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub lines: Vec<PlacedLine>,
    /// True when the question list ran past the page bottom. Known
    /// limitation: the overflow is reported, not paginated away.
    pub overflows_page: bool,
}

impl ExportDocument {
    /// Structural text rendition of the document, top to bottom.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Writes the document into `dir` as `interview-questions.txt` and
    /// returns the full path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, self.to_text())?;
        Ok(path)
    }
}

/// Lays out the result set. Fails with `NothingToExport` when there are
/// no questions; an empty skills list merely omits the skills section.
pub fn export_document(results: &ResultSet) -> Result<ExportDocument, ClientError> {
    if results.questions.is_empty() {
        return Err(ClientError::NothingToExport);
    }

    let mut lines = vec![PlacedLine {
        y: TITLE_Y,
        font_size_pt: TITLE_FONT_PT,
        centered: true,
        text: DOCUMENT_TITLE.to_string(),
    }];

    if !results.skills.is_empty() {
        lines.push(PlacedLine {
            y: SKILLS_LABEL_Y,
            font_size_pt: HEADING_FONT_PT,
            centered: false,
            text: "Skills:".to_string(),
        });
        lines.push(PlacedLine {
            y: SKILLS_BODY_Y,
            font_size_pt: BODY_FONT_PT,
            centered: false,
            text: results.skills.join(", "),
        });
    }

    lines.push(PlacedLine {
        y: QUESTIONS_LABEL_Y,
        font_size_pt: HEADING_FONT_PT,
        centered: false,
        text: "Questions:".to_string(),
    });

    let mut y = FIRST_QUESTION_Y;
    for (index, question) in results.questions.iter().enumerate() {
        lines.push(PlacedLine {
            y,
            font_size_pt: BODY_FONT_PT,
            centered: false,
            text: format!("{}. {question}", index + 1),
        });
        y += LINE_STEP;
    }

    let overflows_page = lines.last().map(|line| line.y > PAGE_BOTTOM_Y).unwrap_or(false);

    Ok(ExportDocument {
        lines,
        overflows_page,
    })
}
