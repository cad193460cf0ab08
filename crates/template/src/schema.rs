//! Anchor schema types
//!
//! Defaults describe the shipped proforma template. Every field can be
//! overridden from JSON (camelCase keys), and omitted fields keep their
//! defaults.

use serde::{Deserialize, Deserializer, Serialize};

/// Everything the patcher needs to know about the template's text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Anchors {
    /// Buyer name as printed in the template
    pub buyer_name: String,

    /// Location word printed under the buyer name
    pub location_word: String,

    /// Window in which the location word is replaced
    pub buyer_block: BlockMarkers,

    /// Table column receiving the HSN/SAC code
    pub hsn_column: ColumnFill,

    /// Placeholder amounts printed in the template
    pub amounts: AmountAnchors,

    /// "Amount Chargeable (in words)" block
    #[serde(deserialize_with = "amount_words_over_default")]
    pub amount_words: LabeledBlock,

    /// "Tax Amount (in words)" block
    #[serde(deserialize_with = "tax_words_over_default")]
    pub tax_words: LabeledBlock,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            buyer_name: "Municipal Corporation Sonepat".to_string(),
            location_word: "Sonepat".to_string(),
            buyer_block: BlockMarkers::default(),
            hsn_column: ColumnFill::default(),
            amounts: AmountAnchors::default(),
            amount_words: LabeledBlock::amount_chargeable(),
            tax_words: LabeledBlock::tax_amount(),
        }
    }
}

/// Start and stop markers of a structural window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockMarkers {
    /// A paragraph containing this text opens the window
    pub start: String,

    /// A paragraph containing all of these closes the window
    pub stop_all: Vec<String>,
}

impl Default for BlockMarkers {
    fn default() -> Self {
        Self {
            start: "Buyer".to_string(),
            stop_all: vec!["Sl".to_string(), "Particulars".to_string()],
        }
    }
}

impl BlockMarkers {
    /// Whether a paragraph opens the window
    pub fn is_start(&self, text: &str) -> bool {
        !self.start.is_empty() && text.contains(self.start.as_str())
    }

    /// Whether a paragraph closes the window
    pub fn is_stop(&self, text: &str) -> bool {
        !self.stop_all.is_empty() && self.stop_all.iter().all(|s| text.contains(s.as_str()))
    }
}

/// A table column to fill in data rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnFill {
    /// Header cell text identifying the column
    pub header: String,

    /// Row text that marks a row as needing the column filled
    pub triggers: Vec<String>,
}

impl Default for ColumnFill {
    fn default() -> Self {
        Self {
            header: "HSN/SAC".to_string(),
            triggers: vec![
                "Professional Fees".to_string(),
                "Taxable".to_string(),
                "Integrated Tax".to_string(),
            ],
        }
    }
}

/// Regular expressions matching the template's placeholder amounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountAnchors {
    /// Taxable value (two decimals)
    pub taxable: String,

    /// Tax amount (two decimals)
    pub tax: String,

    /// Invoice total (two decimals)
    pub total: String,

    /// Invoice total rounded to whole rupees
    pub total_rounded: String,
}

impl Default for AmountAnchors {
    fn default() -> Self {
        Self {
            taxable: r"\b672591\.52(?:\.00)?\b".to_string(),
            tax: r"\b121066\.47\b".to_string(),
            total: r"\b793658\.00\b".to_string(),
            total_rounded: r"\b793658\b".to_string(),
        }
    }
}

/// A labeled paragraph whose value is rewritten, with stale copies removed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabeledBlock {
    /// Text identifying the labeled paragraph
    pub label: String,

    /// Text placed between the label and the value
    pub separator: String,

    /// Pattern of leftover paragraphs to blank after the label
    pub residual: String,

    /// Scanning stops at a paragraph that is, or starts with, this text
    #[serde(default)]
    pub boundary: Option<String>,

    /// Stop scanning after the first blanked paragraph
    #[serde(default)]
    pub single_residual: bool,
}

impl LabeledBlock {
    /// "Amount Chargeable (in words)" block of the shipped template
    pub fn amount_chargeable() -> Self {
        Self {
            label: "Amount Chargeable (in words)".to_string(),
            separator: "\tE. & O.E\n".to_string(),
            residual: "^Indian Rupees".to_string(),
            boundary: Some("HSN/SAC".to_string()),
            single_residual: false,
        }
    }

    /// "Tax Amount (in words)" block of the shipped template
    pub fn tax_amount() -> Self {
        Self {
            label: "Tax Amount (in words)".to_string(),
            separator: " : ".to_string(),
            residual: "Rupees Only$".to_string(),
            boundary: None,
            single_residual: true,
        }
    }

    /// Full paragraph text for a value
    pub fn compose(&self, value: &str) -> String {
        format!("{}{}{}", self.label, self.separator, value)
    }

    /// Whether a trimmed paragraph text marks the end of the block
    pub fn is_boundary(&self, text: &str) -> bool {
        match self.boundary.as_deref() {
            Some(b) if !b.is_empty() => text.replace(' ', "") == b || text.starts_with(b),
            _ => false,
        }
    }
}

/// A labeled block as written in JSON: every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LabeledBlockOverride {
    label: Option<String>,
    separator: Option<String>,
    residual: Option<String>,
    #[serde(deserialize_with = "present")]
    boundary: Option<Option<String>>,
    single_residual: Option<bool>,
}

impl LabeledBlockOverride {
    fn merge_into(self, mut block: LabeledBlock) -> LabeledBlock {
        if let Some(label) = self.label {
            block.label = label;
        }
        if let Some(separator) = self.separator {
            block.separator = separator;
        }
        if let Some(residual) = self.residual {
            block.residual = residual;
        }
        if let Some(boundary) = self.boundary {
            block.boundary = boundary;
        }
        if let Some(single_residual) = self.single_residual {
            block.single_residual = single_residual;
        }
        block
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an omitted key (`None`)
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn amount_words_over_default<'de, D>(deserializer: D) -> Result<LabeledBlock, D::Error>
where
    D: Deserializer<'de>,
{
    LabeledBlockOverride::deserialize(deserializer)
        .map(|o| o.merge_into(LabeledBlock::amount_chargeable()))
}

fn tax_words_over_default<'de, D>(deserializer: D) -> Result<LabeledBlock, D::Error>
where
    D: Deserializer<'de>,
{
    LabeledBlockOverride::deserialize(deserializer).map(|o| o.merge_into(LabeledBlock::tax_amount()))
}
