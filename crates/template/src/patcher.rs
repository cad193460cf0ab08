//! Invoice patcher
//!
//! Applies every pass to a template copy in a fixed order: buyer name,
//! buyer location, HSN/SAC column, placeholder amounts, then the two
//! amount-in-words blocks.

use crate::passes::{
    fill_column, replace_in_scope, replace_pattern_everywhere, replace_text_everywhere,
    rewrite_labeled_block,
};
use crate::schema::Anchors;
use crate::{Result, TemplateError};
use docx_core::DocxDocument;
use inr_text::MoneyText;
use regex::Regex;
use tracing::{debug, warn};

/// Values written into one invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceValues {
    pub buyer_name: String,
    pub location: String,
    pub hsn_code: String,
    pub taxable: MoneyText,
    pub tax: MoneyText,
    pub total: MoneyText,
}

/// Number of paragraphs or cells each pass rewrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub buyer_name: usize,
    pub buyer_location: usize,
    pub hsn_cells: usize,
    pub amounts: usize,
    pub amount_words: usize,
    pub tax_words: usize,
}

impl PatchReport {
    pub fn total(&self) -> usize {
        self.buyer_name
            + self.buyer_location
            + self.hsn_cells
            + self.amounts
            + self.amount_words
            + self.tax_words
    }
}

/// Anchors with their patterns compiled, ready to patch many documents
#[derive(Debug, Clone)]
pub struct InvoicePatcher {
    anchors: Anchors,
    taxable: Regex,
    tax: Regex,
    total: Regex,
    total_rounded: Regex,
    amount_words_residual: Regex,
    tax_words_residual: Regex,
}

impl InvoicePatcher {
    /// Compile the anchor patterns
    pub fn new(anchors: Anchors) -> Result<Self> {
        Ok(Self {
            taxable: compile("amounts.taxable", &anchors.amounts.taxable)?,
            tax: compile("amounts.tax", &anchors.amounts.tax)?,
            total: compile("amounts.total", &anchors.amounts.total)?,
            total_rounded: compile("amounts.totalRounded", &anchors.amounts.total_rounded)?,
            amount_words_residual: compile("amountWords.residual", &anchors.amount_words.residual)?,
            tax_words_residual: compile("taxWords.residual", &anchors.tax_words.residual)?,
            anchors,
        })
    }

    /// Write `values` into `doc`
    pub fn patch(&self, doc: &mut DocxDocument, values: &InvoiceValues) -> PatchReport {
        let anchors = &self.anchors;
        let mut report = PatchReport::default();

        report.buyer_name = replace_text_everywhere(doc, &anchors.buyer_name, &values.buyer_name);
        if report.buyer_name == 0 && anchors.buyer_name != values.buyer_name {
            warn!(anchor = %anchors.buyer_name, "Buyer name anchor not found in template");
        }

        report.buyer_location = replace_in_scope(
            doc,
            &anchors.buyer_block,
            &anchors.location_word,
            &values.location,
        );

        report.hsn_cells = fill_column(doc, &anchors.hsn_column, &values.hsn_code);

        report.amounts = replace_pattern_everywhere(doc, &self.taxable, &values.taxable.fixed)
            + replace_pattern_everywhere(doc, &self.tax, &values.tax.fixed)
            + replace_pattern_everywhere(doc, &self.total, &values.total.fixed)
            + replace_pattern_everywhere(doc, &self.total_rounded, &values.total.integer);

        report.amount_words = rewrite_labeled_block(
            doc,
            &anchors.amount_words,
            &self.amount_words_residual,
            &values.total.words,
        );
        report.tax_words = rewrite_labeled_block(
            doc,
            &anchors.tax_words,
            &self.tax_words_residual,
            &values.tax.words,
        );

        debug!(buyer = %values.buyer_name, ?report, "Patched invoice");
        report
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| TemplateError::PatternError {
        name: name.to_string(),
        message: e.to_string(),
    })
}
