//! Paragraph and run text

use crate::names::{
    BREAK, CARRIAGE_RETURN, NO_BREAK_HYPHEN, PARAGRAPH, POSITIONAL_TAB, RUN, RUN_PROPS, TAB, TEXT,
    TYPE,
};
use crate::xml::{Element, Node};

/// Mutable view over a `w:p` element
///
/// The paragraph's runs are its direct `w:r` children. Its text is the
/// concatenation of their text.
pub struct Paragraph<'a> {
    element: &'a mut Element,
}

impl<'a> Paragraph<'a> {
    /// Wrap a `w:p` element
    pub fn new(element: &'a mut Element) -> Self {
        debug_assert_eq!(element.name, PARAGRAPH);
        Self { element }
    }

    /// Plain text of all runs
    pub fn text(&self) -> String {
        paragraph_text(self.element)
    }

    /// Number of direct runs
    pub fn run_count(&self) -> usize {
        self.element.child_elements().filter(|e| e.name == RUN).count()
    }

    /// Whether the paragraph has at least one run
    pub fn has_runs(&self) -> bool {
        self.run_count() > 0
    }

    /// Replace the paragraph text
    ///
    /// The first run keeps its formatting and receives the whole text; all
    /// other runs are removed. A paragraph without runs gets a new run.
    pub fn set_text(&mut self, text: &str) {
        let mut seen_run = false;
        self.element.children.retain(|node| {
            if !node.is_element(RUN) {
                return true;
            }
            let keep = !seen_run;
            seen_run = true;
            keep
        });

        match self.element.find_child_mut(RUN) {
            Some(run) => set_run_text(run, text),
            None => {
                let mut run = Element::new(RUN);
                set_run_text(&mut run, text);
                self.element.push_element(run);
            }
        }
    }
}

/// Plain text of a `w:p` element
pub(crate) fn paragraph_text(paragraph: &Element) -> String {
    paragraph
        .child_elements()
        .filter(|e| e.name == RUN)
        .map(run_text)
        .collect()
}

/// Plain text of a `w:r` element
///
/// Only text-wrapping breaks produce a newline; page and column breaks
/// contribute nothing.
pub(crate) fn run_text(run: &Element) -> String {
    let mut text = String::new();
    for child in run.child_elements() {
        match child.name.as_str() {
            TEXT => text.push_str(&child.text()),
            TAB | POSITIONAL_TAB => text.push('\t'),
            NO_BREAK_HYPHEN => text.push('-'),
            CARRIAGE_RETURN => text.push('\n'),
            BREAK => {
                if matches!(child.attribute(TYPE), None | Some("textWrapping")) {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }
    text
}

/// Replace run content, keeping only its `w:rPr`
///
/// Tabs become `w:tab` and line breaks become `w:br`.
fn set_run_text(run: &mut Element, text: &str) {
    run.children.retain(|node| node.is_element(RUN_PROPS));

    let mut pending = String::new();
    for ch in text.chars() {
        match ch {
            '\t' => {
                flush_text(run, &mut pending);
                run.push_element(Element::new(TAB));
            }
            '\n' | '\r' => {
                flush_text(run, &mut pending);
                run.push_element(Element::new(BREAK));
            }
            c => pending.push(c),
        }
    }
    flush_text(run, &mut pending);
}

fn flush_text(run: &mut Element, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    let mut t = Element::new(TEXT);
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        t.set_attribute("xml:space", "preserve");
    }
    t.children.push(Node::Text(text));
    run.push_element(t);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse;
    use pretty_assertions::assert_eq;

    fn paragraph(xml: &str) -> Element {
        parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_text_concatenates_runs() {
        let p = paragraph(
            r#"<w:p><w:pPr/><w:r><w:t>Amount</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve"> Due</w:t><w:br/></w:r></w:p>"#,
        );
        assert_eq!(paragraph_text(&p), "Amount\t Due\n");
    }

    #[test]
    fn test_text_of_special_run_content() {
        let p = paragraph(
            r#"<w:p><w:r><w:t>GST</w:t><w:noBreakHyphen/><w:t>IN</w:t><w:ptab w:relativeTo="margin" w:alignment="right" w:leader="none"/><w:t>x</w:t></w:r><w:r><w:br w:type="page"/><w:t>a</w:t><w:br w:type="textWrapping"/><w:t>b</w:t><w:br w:type="column"/><w:cr/></w:r></w:p>"#,
        );
        assert_eq!(paragraph_text(&p), "GST-IN\txa\nb\n");
    }

    #[test]
    fn test_set_text_collapses_runs() {
        let mut p = paragraph(
            r#"<w:p><w:pPr/><w:r><w:rPr><w:b/></w:rPr><w:t>Old</w:t></w:r><w:r><w:t> text</w:t></w:r></w:p>"#,
        );
        let mut view = Paragraph::new(&mut p);
        view.set_text("New text");

        assert_eq!(view.run_count(), 1);
        assert_eq!(view.text(), "New text");
        let run = p.find_child(RUN).unwrap();
        assert!(run.find_child(RUN_PROPS).is_some());
        assert!(p.find_child("w:pPr").is_some());
    }

    #[test]
    fn test_set_text_creates_run() {
        let mut p = paragraph("<w:p><w:pPr/></w:p>");
        let mut view = Paragraph::new(&mut p);
        assert!(!view.has_runs());
        view.set_text("Hello");
        assert_eq!(view.run_count(), 1);
        assert_eq!(view.text(), "Hello");
    }

    #[test]
    fn test_set_text_maps_tabs_and_breaks() {
        let mut p = paragraph("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
        Paragraph::new(&mut p).set_text("Label\tE. & O.E\nIndian Rupees Ten Only");

        let run = p.find_child(RUN).unwrap();
        let names: Vec<&str> = run.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![TEXT, TAB, TEXT, BREAK, TEXT]);
        assert_eq!(
            paragraph_text(&p),
            "Label\tE. & O.E\nIndian Rupees Ten Only"
        );
    }

    #[test]
    fn test_set_text_preserves_edge_spaces() {
        let mut p = paragraph("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
        Paragraph::new(&mut p).set_text(" : value");
        let t = p.find_child(RUN).unwrap().find_child(TEXT).unwrap();
        assert_eq!(t.attribute("xml:space"), Some("preserve"));
    }

    #[test]
    fn test_set_text_empty_blanks_paragraph() {
        let mut p = paragraph("<w:p><w:r><w:t>Rupees Only</w:t></w:r></w:p>");
        let mut view = Paragraph::new(&mut p);
        view.set_text("");
        assert_eq!(view.text(), "");
        assert_eq!(view.run_count(), 1);
    }
}
