//! Table, row and cell views

use crate::names::{CELL, CELL_PROPS, GRID_SPAN, PARAGRAPH, ROW, VAL, V_MERGE};
use crate::paragraph::{paragraph_text, Paragraph};
use crate::xml::{Element, Node};

/// Mutable view over a `w:tbl` element
pub struct Table<'a> {
    element: &'a mut Element,
}

impl<'a> Table<'a> {
    pub fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    /// Rows of the table, borrowing it
    pub fn rows(&mut self) -> Vec<Row<'_>> {
        self.element
            .child_elements_mut()
            .filter(|e| e.name == ROW)
            .map(Row::new)
            .collect()
    }

    /// Rows of the table, consuming the view
    pub fn into_rows(self) -> Vec<Row<'a>> {
        let element = self.element;
        element
            .child_elements_mut()
            .filter(|e| e.name == ROW)
            .map(Row::new)
            .collect()
    }

    /// Every physical cell, row by row
    pub fn into_cells(self) -> Vec<Cell<'a>> {
        self.into_rows()
            .into_iter()
            .flat_map(Row::into_cells)
            .collect()
    }

    /// Grid texts of every row (see [`Row::column_texts`])
    pub fn texts(&self) -> Vec<Vec<String>> {
        table_texts(self.element)
    }
}

/// Mutable view over a `w:tr` element
///
/// A row has physical cells (`w:tc`) and grid columns: a cell spanning
/// `n` columns (`w:gridSpan`) occupies `n` consecutive column positions.
pub struct Row<'a> {
    element: &'a mut Element,
}

impl<'a> Row<'a> {
    pub fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    /// Physical cells, consuming the view
    pub fn into_cells(self) -> Vec<Cell<'a>> {
        let element = self.element;
        element
            .child_elements_mut()
            .filter(|e| e.name == CELL)
            .map(Cell::new)
            .collect()
    }

    /// Cell text for each grid column
    pub fn column_texts(&self) -> Vec<String> {
        row_texts(self.element)
    }

    /// For each grid column, whether its cell continues a vertical merge
    /// from the row above (`w:vMerge` without `w:val="restart"`)
    pub fn merged_columns(&self) -> Vec<bool> {
        let mut merged = Vec::new();
        for cell in self.element.child_elements().filter(|e| e.name == CELL) {
            let continued = continues_vertical_merge(cell);
            merged.extend(std::iter::repeat(continued).take(grid_span(cell)));
        }
        merged
    }

    /// Cell occupying the given grid column
    pub fn cell_at_column(&mut self, column: usize) -> Option<Cell<'_>> {
        let mut start = 0;
        for cell in self.element.child_elements_mut().filter(|e| e.name == CELL) {
            let span = grid_span(cell);
            if column < start + span {
                return Some(Cell::new(cell));
            }
            start += span;
        }
        None
    }
}

/// Mutable view over a `w:tc` element
pub struct Cell<'a> {
    element: &'a mut Element,
}

impl<'a> Cell<'a> {
    pub fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    /// Paragraph texts joined with newlines
    pub fn text(&self) -> String {
        cell_text(self.element)
    }

    /// Paragraphs of the cell, borrowing it
    pub fn paragraphs(&mut self) -> Vec<Paragraph<'_>> {
        self.element
            .child_elements_mut()
            .filter(|e| e.name == PARAGRAPH)
            .map(Paragraph::new)
            .collect()
    }

    /// Paragraphs of the cell, consuming the view
    pub fn into_paragraphs(self) -> Vec<Paragraph<'a>> {
        let element = self.element;
        element
            .child_elements_mut()
            .filter(|e| e.name == PARAGRAPH)
            .map(Paragraph::new)
            .collect()
    }

    /// Replace the whole cell content with one paragraph of text
    ///
    /// Cell properties and the first paragraph (with its paragraph and first
    /// run formatting) are kept; every other block is removed.
    pub fn set_text(&mut self, text: &str) {
        let mut seen_paragraph = false;
        self.element.children.retain(|node| match node {
            Node::Element(e) if e.name == CELL_PROPS => true,
            Node::Element(e) if e.name == PARAGRAPH => {
                let keep = !seen_paragraph;
                seen_paragraph = true;
                keep
            }
            Node::Element(_) => false,
            _ => true,
        });

        if !seen_paragraph {
            self.element.push_element(Element::new(PARAGRAPH));
        }
        if let Some(paragraph) = self.element.find_child_mut(PARAGRAPH) {
            Paragraph::new(paragraph).set_text(text);
        }
    }
}

fn grid_span(cell: &Element) -> usize {
    cell.find_child(CELL_PROPS)
        .and_then(|props| props.find_child(GRID_SPAN))
        .and_then(|span| span.attribute(VAL))
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

fn continues_vertical_merge(cell: &Element) -> bool {
    cell.find_child(CELL_PROPS)
        .and_then(|props| props.find_child(V_MERGE))
        .is_some_and(|merge| merge.attribute(VAL) != Some("restart"))
}

pub(crate) fn cell_text(cell: &Element) -> String {
    cell.child_elements()
        .filter(|e| e.name == PARAGRAPH)
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn row_texts(row: &Element) -> Vec<String> {
    let mut texts = Vec::new();
    for cell in row.child_elements().filter(|e| e.name == CELL) {
        let text = cell_text(cell);
        for _ in 0..grid_span(cell) {
            texts.push(text.clone());
        }
    }
    texts
}

pub(crate) fn table_texts(table: &Element) -> Vec<Vec<String>> {
    table
        .child_elements()
        .filter(|e| e.name == ROW)
        .map(row_texts)
        .collect()
}
