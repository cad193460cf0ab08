//! DOCX Core - Low-level DOCX manipulation
//!
//! This crate provides functionality for:
//! - Opening and saving `.docx` packages (every part kept verbatim)
//! - Editing `word/document.xml` as an owned element tree
//! - Paragraph, table, row, cell and run views over the document body
//!
//! # Example
//!
//! ```ignore
//! use docx_core::DocxDocument;
//!
//! let mut doc = DocxDocument::open("template.docx")?;
//! for mut paragraph in doc.all_paragraphs() {
//!     let text = paragraph.text().replace("Sonepat", "Panipat");
//!     paragraph.set_text(&text);
//! }
//! doc.save("output.docx")?;
//! ```

mod document;
mod paragraph;
mod table;
pub mod xml;

pub use document::DocxDocument;
pub use paragraph::Paragraph;
pub use table::{Cell, Row, Table};

use thiserror::Error;

/// Errors that can occur during DOCX operations
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to open DOCX: {0}")]
    OpenError(String),

    #[error("Failed to save DOCX: {0}")]
    SaveError(String),

    #[error("Package part not found: {0}")]
    MissingPart(String),

    #[error("Document has no w:body element")]
    MissingBody,

    #[error("XML error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;

/// WordprocessingML element names used across the crate
pub mod names {
    pub const BODY: &str = "w:body";
    pub const PARAGRAPH: &str = "w:p";
    pub const PARAGRAPH_PROPS: &str = "w:pPr";
    pub const RUN: &str = "w:r";
    pub const RUN_PROPS: &str = "w:rPr";
    pub const TEXT: &str = "w:t";
    pub const TAB: &str = "w:tab";
    pub const BREAK: &str = "w:br";
    pub const CARRIAGE_RETURN: &str = "w:cr";
    pub const NO_BREAK_HYPHEN: &str = "w:noBreakHyphen";
    pub const POSITIONAL_TAB: &str = "w:ptab";
    pub const TYPE: &str = "w:type";
    pub const TABLE: &str = "w:tbl";
    pub const ROW: &str = "w:tr";
    pub const CELL: &str = "w:tc";
    pub const CELL_PROPS: &str = "w:tcPr";
    pub const GRID_SPAN: &str = "w:gridSpan";
    pub const V_MERGE: &str = "w:vMerge";
    pub const VAL: &str = "w:val";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DocxError::MissingPart("word/document.xml".into()).to_string(),
            "Package part not found: word/document.xml"
        );
        assert_eq!(
            DocxError::MissingBody.to_string(),
            "Document has no w:body element"
        );
    }
}
