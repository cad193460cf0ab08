//! Proforma - batch proforma invoice generation
//!
//! Reads one invoice per spreadsheet row and writes a patched copy of a DOCX
//! template for each of them.
//!
//! This crate provides:
//! - Application configuration (`proforma.json`, optional)
//! - Spreadsheet input with header validation
//! - The row driver producing `Proforma_<location>.docx` files
//!
//! # Example
//!
//! ```ignore
//! use proforma::{run, AppConfig};
//!
//! let config = AppConfig::load_or_default("proforma.json")?;
//! let summary = run(&config)?;
//! println!("Generated {} DOCX files", summary.generated);
//! ```

pub mod config;
pub mod driver;
pub mod sheet;

pub use config::AppConfig;
pub use driver::{make_buyer_name, run, sanitize_filename, GenerationSummary};
pub use sheet::{read_rows, InputRow, SheetRows, REQUIRED_COLUMNS};

use thiserror::Error;

/// Errors that can occur while generating invoices
#[derive(Debug, Error)]
pub enum ProformaError {
    #[error("Missing columns in spreadsheet: {missing:?}\nFound: {found:?}")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to read spreadsheet: {0}")]
    Workbook(String),

    #[error("Spreadsheet has no header row")]
    EmptySheet,

    #[error("Malformed amount in row {row}, column {column:?}: {value:?}")]
    MalformedAmount {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document error: {0}")]
    Docx(#[from] docx_core::DocxError),

    #[error("Template error: {0}")]
    Template(#[from] template::TemplateError),

    #[error("Amount error: {0}")]
    Amount(#[from] inr_text::InrTextError),
}

/// Result type for proforma operations
pub type Result<T> = std::result::Result<T, ProformaError>;
