//! Template Engine - anchor-driven DOCX patching
//!
//! This crate provides:
//! - The anchor set describing where values live in an invoice template
//! - Text passes over a document (literal, pattern, scoped, column, labeled block)
//! - An invoice patcher applying every pass in a fixed order
//!
//! # Example
//!
//! ```ignore
//! use docx_core::DocxDocument;
//! use template::{Anchors, InvoicePatcher, InvoiceValues};
//!
//! let patcher = InvoicePatcher::new(Anchors::default())?;
//! let template = DocxDocument::open("proforma.docx")?;
//!
//! let mut doc = template.clone();
//! let report = patcher.patch(&mut doc, &values);
//! doc.save("Proforma_Panipat.docx")?;
//! ```

pub mod passes;
mod patcher;
mod schema;
mod scope;

pub use patcher::{InvoicePatcher, InvoiceValues, PatchReport};
pub use schema::*;
pub use scope::{BlockScope, ScopeState};

use thiserror::Error;

/// Errors that can occur while preparing a template patch
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid pattern for {name}: {message}")]
    PatternError { name: String, message: String },
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
