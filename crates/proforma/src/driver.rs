//! Row driver
//!
//! Loads the template once, then for every spreadsheet row patches a fresh
//! copy and saves it as `Proforma_<location>.docx`.

use crate::config::AppConfig;
use crate::sheet::{read_rows, InputRow};
use crate::Result;
use docx_core::DocxDocument;
use inr_text::{format_indian_grouping, MoneyText};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use template::{InvoicePatcher, InvoiceValues};
use tracing::{debug, info};

static ILLEGAL_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]+"#).expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Documents written
    pub generated: usize,
    /// Rows skipped for a blank or "total" location
    pub skipped: usize,
    /// Absolute output directory
    pub output_dir: PathBuf,
}

/// Buyer display name for a location
///
/// Locations already naming a municipal body are used as-is.
pub fn make_buyer_name(location: &str) -> String {
    let location = location.trim();
    if location.to_lowercase().starts_with("municipal") {
        location.to_string()
    } else {
        format!("Municipal Corporation {location}")
    }
}

/// Make a location usable as part of a file name
pub fn sanitize_filename(name: &str) -> String {
    let cleaned = ILLEGAL_FILENAME_CHARS.replace_all(name.trim(), "_");
    WHITESPACE_RUN.replace_all(&cleaned, " ").into_owned()
}

/// Output file path for a location
pub fn output_path(output_dir: &Path, location: &str) -> PathBuf {
    output_dir.join(format!("Proforma_{}.docx", sanitize_filename(location)))
}

/// Generate one document per spreadsheet row
pub fn run(config: &AppConfig) -> Result<GenerationSummary> {
    std::fs::create_dir_all(&config.output_dir)?;
    let output_dir = std::fs::canonicalize(&config.output_dir)?;

    let sheet = read_rows(&config.input, config.sheet.as_deref())?;
    info!(
        input = %config.input.display(),
        rows = sheet.rows.len(),
        skipped = sheet.skipped.len(),
        "Read spreadsheet"
    );

    let patcher = InvoicePatcher::new(config.anchors.clone())?;
    let template = DocxDocument::open(&config.template)?;
    debug!(template = %config.template.display(), "Loaded template");

    let mut generated = 0;
    for row in &sheet.rows {
        let path = generate_one(&template, &patcher, row, &config.hsn_code, &output_dir)?;
        info!(
            line = row.line,
            location = %row.location,
            total = %format_indian_grouping(row.total),
            path = %path.display(),
            "Generated proforma"
        );
        generated += 1;
    }

    Ok(GenerationSummary {
        generated,
        skipped: sheet.skipped.len(),
        output_dir,
    })
}

fn generate_one(
    template: &DocxDocument,
    patcher: &InvoicePatcher,
    row: &InputRow,
    hsn_code: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let values = InvoiceValues {
        buyer_name: make_buyer_name(&row.location),
        location: row.location.clone(),
        hsn_code: hsn_code.to_string(),
        taxable: MoneyText::from_amount(row.taxable)?,
        tax: MoneyText::from_amount(row.tax)?,
        total: MoneyText::from_amount(row.total)?,
    };

    let mut doc = template.clone();
    let report = patcher.patch(&mut doc, &values);
    debug!(line = row.line, changes = report.total(), "Patched template copy");

    let path = output_path(output_dir, &row.location);
    doc.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_make_buyer_name() {
        assert_eq!(make_buyer_name("Panipat"), "Municipal Corporation Panipat");
        assert_eq!(make_buyer_name("  Karnal "), "Municipal Corporation Karnal");
        assert_eq!(
            make_buyer_name("Municipal Council Gohana"),
            "Municipal Council Gohana"
        );
        assert_eq!(
            make_buyer_name("MUNICIPAL CORPORATION ROHTAK"),
            "MUNICIPAL CORPORATION ROHTAK"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Panipat"), "Panipat");
        assert_eq!(sanitize_filename("  Ambala / Cantt  "), "Ambala _ Cantt");
        assert_eq!(sanitize_filename("a:*?b"), "a_b");
        assert_eq!(sanitize_filename("Yamuna\t\tNagar"), "Yamuna Nagar");
        assert_eq!(sanitize_filename(r#"x"<>|\y"#), "x_y");
    }

    #[test]
    fn test_sanitize_filename_is_idempotent() {
        for name in ["  Ambala / Cantt  ", "a:*?b", "Yamuna\t\tNagar", "Hisar"] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once);
            assert!(!once.contains(['\\', '/', ':', '*', '?', '"', '<', '>', '|']));
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("out"), "Ambala/Cantt"),
            PathBuf::from("out/Proforma_Ambala_Cantt.docx")
        );
    }
}
