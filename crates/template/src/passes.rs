//! Text passes over a document
//!
//! Every pass walks the document's paragraph universe (top-level paragraphs,
//! then table cell paragraphs) and returns how many paragraphs or cells it
//! rewrote. Rewriting a paragraph collapses its runs into the first one.
//! Running a pass again after its pattern is gone changes nothing.

use crate::schema::{BlockMarkers, ColumnFill, LabeledBlock};
use crate::scope::BlockScope;
use docx_core::{DocxDocument, Paragraph};
use regex::{NoExpand, Regex};

/// Replace a literal substring in every paragraph that has runs
pub fn replace_text_everywhere(doc: &mut DocxDocument, old: &str, new: &str) -> usize {
    if old.is_empty() || old == new {
        return 0;
    }

    let mut changed = 0;
    for mut paragraph in doc.all_paragraphs() {
        if !paragraph.has_runs() {
            continue;
        }
        let text = paragraph.text();
        if text.contains(old) {
            paragraph.set_text(&text.replace(old, new));
            changed += 1;
        }
    }
    changed
}

/// Replace every match of a pattern in every paragraph that has runs
///
/// The replacement is inserted literally (`$` is not expanded).
pub fn replace_pattern_everywhere(doc: &mut DocxDocument, pattern: &Regex, replacement: &str) -> usize {
    let mut changed = 0;
    for mut paragraph in doc.all_paragraphs() {
        if !paragraph.has_runs() {
            continue;
        }
        let text = paragraph.text();
        let updated = pattern.replace_all(&text, NoExpand(replacement));
        if updated.as_ref() != text.as_str() {
            paragraph.set_text(&updated);
            changed += 1;
        }
    }
    changed
}

/// Replace a literal substring only inside the window delimited by `markers`
///
/// The window is tracked once over the top-level paragraphs and again,
/// independently, over each table cell's paragraphs.
pub fn replace_in_scope(
    doc: &mut DocxDocument,
    markers: &BlockMarkers,
    old: &str,
    new: &str,
) -> usize {
    if old.is_empty() || old == new {
        return 0;
    }

    let mut changed = replace_in_stream(doc.paragraphs(), markers, old, new);
    for table in doc.tables() {
        for cell in table.into_cells() {
            changed += replace_in_stream(cell.into_paragraphs(), markers, old, new);
        }
    }
    changed
}

fn replace_in_stream(
    paragraphs: Vec<Paragraph<'_>>,
    markers: &BlockMarkers,
    old: &str,
    new: &str,
) -> usize {
    let mut scope = BlockScope::new(markers);
    let mut changed = 0;
    for mut paragraph in paragraphs {
        let text = paragraph.text();
        if scope.advance(&text) && text.contains(old) {
            paragraph.set_text(&text.replace(old, new));
            changed += 1;
        }
    }
    changed
}

/// Write `value` into the `column.header` column of every table that has it
///
/// A data row is written when its cell is empty, holds a six-digit code, or
/// the row text contains one of `column.triggers`. Cells continuing a
/// vertical merge are skipped. Tables whose first row lacks the header are
/// left untouched.
pub fn fill_column(doc: &mut DocxDocument, column: &ColumnFill, value: &str) -> usize {
    let mut written = 0;

    for mut table in doc.tables() {
        let mut rows = table.rows();
        let Some((header, data_rows)) = rows.split_first_mut() else {
            continue;
        };

        let Some(index) = header
            .column_texts()
            .iter()
            .position(|t| t.trim().replace('\n', " ") == column.header)
        else {
            continue;
        };

        for row in data_rows {
            if row.merged_columns().get(index).copied().unwrap_or(false) {
                continue;
            }
            let texts = row.column_texts();
            let Some(current) = texts.get(index).map(|t| t.trim()) else {
                continue;
            };
            let row_text = texts.iter().map(|t| t.trim()).collect::<Vec<_>>().join(" ");

            let needs_value = current.is_empty()
                || is_six_digit_code(current)
                || column
                    .triggers
                    .iter()
                    .any(|t| !t.is_empty() && row_text.contains(t.as_str()));

            if needs_value {
                if let Some(mut cell) = row.cell_at_column(index) {
                    cell.set_text(value);
                    written += 1;
                }
            }
        }
    }

    written
}

fn is_six_digit_code(text: &str) -> bool {
    text.len() == 6 && text.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrite a labeled paragraph as `label + separator + value` and blank the
/// stale residual paragraphs that follow it
///
/// After a label paragraph, following paragraphs matching `residual` are
/// blanked until the block's boundary is reached (which ends the whole
/// pass) or, with `single_residual`, until one paragraph has been blanked.
pub fn rewrite_labeled_block(
    doc: &mut DocxDocument,
    block: &LabeledBlock,
    residual: &Regex,
    value: &str,
) -> usize {
    if block.label.is_empty() {
        return 0;
    }

    let composed = block.compose(value);
    let mut changed = 0;
    let mut scanning = false;

    for mut paragraph in doc.all_paragraphs() {
        let text = paragraph.text();
        let trimmed = text.trim();

        if trimmed.contains(block.label.as_str()) {
            paragraph.set_text(&composed);
            changed += 1;
            scanning = true;
            continue;
        }
        if !scanning {
            continue;
        }
        if block.is_boundary(trimmed) {
            break;
        }
        if residual.is_match(trimmed) {
            paragraph.set_text("");
            changed += 1;
            if block.single_residual {
                scanning = false;
            }
        }
    }

    changed
}
