//! DOCX Document wrapper

use crate::names::{BODY, CELL, PARAGRAPH, ROW, TABLE};
use crate::paragraph::{paragraph_text, Paragraph};
use crate::table::{table_texts, Table};
use crate::xml::{self, Element};
use crate::{DocxError, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Main document part inside the package
const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const WORDML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A part of the ZIP package, kept byte-for-byte
#[derive(Debug, Clone)]
struct PackagePart {
    name: String,
    data: Vec<u8>,
    is_dir: bool,
}

/// DOCX document providing paragraph and table level editing
///
/// Cloning yields a fully independent copy, so one loaded template can be
/// cloned per output without ever being mutated itself.
#[derive(Debug, Clone)]
pub struct DocxDocument {
    /// Package parts in their original order
    parts: Vec<PackagePart>,
    /// Parsed `word/document.xml`
    root: Element,
}

impl DocxDocument {
    /// Open a DOCX document from a file path
    ///
    /// # Example
    /// ```ignore
    /// let doc = DocxDocument::open("template.docx")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| DocxError::OpenError(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&data)
    }

    /// Open a DOCX document from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive =
            ZipArchive::new(Cursor::new(data)).map_err(|e| DocxError::OpenError(e.to_string()))?;

        let mut parts = Vec::with_capacity(archive.len());
        let mut root = None;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();
            let is_dir = entry.is_dir();

            let mut data = Vec::new();
            if !is_dir {
                entry.read_to_end(&mut data)?;
            }
            if name == DOCUMENT_PART {
                root = Some(xml::parse(&data)?);
            }

            parts.push(PackagePart { name, data, is_dir });
        }

        let root = root.ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?;
        if root.find_child(BODY).is_none() {
            return Err(DocxError::MissingBody);
        }

        Ok(Self { parts, root })
    }

    /// Build a minimal package around the given `w:body` content
    ///
    /// # Example
    /// ```ignore
    /// let doc = DocxDocument::from_body_xml("<w:p><w:r><w:t>Hello</w:t></w:r></w:p>")?;
    /// ```
    pub fn from_body_xml(body: &str) -> Result<Self> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{WORDML_NAMESPACE}"><w:body>{body}</w:body></w:document>"#
        );

        let root = xml::parse(document.as_bytes())?;
        let parts = vec![
            PackagePart {
                name: "[Content_Types].xml".to_string(),
                data: CONTENT_TYPES_XML.as_bytes().to_vec(),
                is_dir: false,
            },
            PackagePart {
                name: "_rels/.rels".to_string(),
                data: PACKAGE_RELS_XML.as_bytes().to_vec(),
                is_dir: false,
            },
            PackagePart {
                name: DOCUMENT_PART.to_string(),
                data: document.into_bytes(),
                is_dir: false,
            },
        ];

        Ok(Self { parts, root })
    }

    /// Serialize the package to bytes
    ///
    /// Every part is written back unchanged except `word/document.xml`,
    /// which is regenerated from the edited tree.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for part in &self.parts {
            if part.is_dir {
                writer.add_directory(part.name.as_str(), options)?;
                continue;
            }

            writer.start_file(part.name.as_str(), options)?;
            if part.name == DOCUMENT_PART {
                writer.write_all(&xml::write(&self.root)?)?;
            } else {
                writer.write_all(&part.data)?;
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }

    /// Save the document to a file path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)
            .map_err(|e| DocxError::SaveError(format!("{}: {}", path.display(), e)))
    }

    /// Top-level body paragraphs, in document order
    pub fn paragraphs(&mut self) -> Vec<Paragraph<'_>> {
        let Some(body) = self.root.find_child_mut(BODY) else {
            return Vec::new();
        };
        body.child_elements_mut()
            .filter(|e| e.name == PARAGRAPH)
            .map(Paragraph::new)
            .collect()
    }

    /// Top-level body tables, in document order
    pub fn tables(&mut self) -> Vec<Table<'_>> {
        let Some(body) = self.root.find_child_mut(BODY) else {
            return Vec::new();
        };
        body.child_elements_mut()
            .filter(|e| e.name == TABLE)
            .map(Table::new)
            .collect()
    }

    /// Every top-level paragraph, followed by every paragraph of every
    /// top-level table cell (row order, then cell order)
    pub fn all_paragraphs(&mut self) -> Vec<Paragraph<'_>> {
        let Some(body) = self.root.find_child_mut(BODY) else {
            return Vec::new();
        };

        let mut top_level = Vec::new();
        let mut in_tables = Vec::new();
        for child in body.child_elements_mut() {
            if child.name == PARAGRAPH {
                top_level.push(Paragraph::new(child));
            } else if child.name == TABLE {
                for cell in Table::new(child).into_cells() {
                    in_tables.extend(cell.into_paragraphs());
                }
            }
        }

        top_level.extend(in_tables);
        top_level
    }

    /// Grid texts of every top-level table
    pub fn table_texts(&self) -> Vec<Vec<Vec<String>>> {
        self.root
            .find_child(BODY)
            .map(|body| {
                body.child_elements()
                    .filter(|e| e.name == TABLE)
                    .map(table_texts)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Plain text of the whole document, one paragraph per line
    ///
    /// Paragraphs are listed in the same order as [`Self::all_paragraphs`].
    pub fn text(&self) -> String {
        let Some(body) = self.root.find_child(BODY) else {
            return String::new();
        };

        let mut lines: Vec<String> = body
            .child_elements()
            .filter(|e| e.name == PARAGRAPH)
            .map(paragraph_text)
            .collect();

        for table in body.child_elements().filter(|e| e.name == TABLE) {
            for row in table.child_elements().filter(|e| e.name == ROW) {
                for cell in row.child_elements().filter(|e| e.name == CELL) {
                    lines.extend(
                        cell.child_elements()
                            .filter(|e| e.name == PARAGRAPH)
                            .map(paragraph_text),
                    );
                }
            }
        }

        lines.join("\n")
    }

    /// Names of all package parts
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY_XML: &str = r#"<w:p><w:r><w:t>Buyer</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>Footer</w:t></w:r></w:p><w:sectPr/>"#;

    #[test]
    fn test_from_body_xml() {
        let doc = DocxDocument::from_body_xml(BODY_XML).unwrap();
        assert_eq!(
            doc.part_names(),
            vec!["[Content_Types].xml", "_rels/.rels", "word/document.xml"]
        );
        assert_eq!(doc.text(), "Buyer\nFooter\nCell");
    }

    #[test]
    fn test_all_paragraphs_order() {
        let mut doc = DocxDocument::from_body_xml(BODY_XML).unwrap();
        let texts: Vec<String> = doc.all_paragraphs().iter().map(|p| p.text()).collect();
        assert_eq!(texts, vec!["Buyer", "Footer", "Cell"]);
        assert_eq!(doc.paragraphs().len(), 2);
        assert_eq!(doc.tables().len(), 1);
    }

    #[test]
    fn test_round_trip_bytes() {
        let mut doc = DocxDocument::from_body_xml(BODY_XML).unwrap();
        for mut p in doc.paragraphs() {
            let text = p.text().to_uppercase();
            p.set_text(&text);
        }

        let bytes = doc.to_bytes().unwrap();
        let reopened = DocxDocument::from_bytes(&bytes).unwrap();
        assert_eq!(reopened.text(), "BUYER\nFOOTER\nCell");
        assert_eq!(reopened.table_texts(), vec![vec![vec!["Cell".to_string()]]]);
    }

    #[test]
    fn test_clone_is_independent() {
        let template = DocxDocument::from_body_xml(BODY_XML).unwrap();
        let mut copy = template.clone();
        copy.paragraphs()[0].set_text("Changed");

        assert_eq!(copy.text(), "Changed\nFooter\nCell");
        assert_eq!(template.text(), "Buyer\nFooter\nCell");
    }

    #[test]
    fn test_from_bytes_rejects_non_zip() {
        let err = DocxDocument::from_bytes(b"not a zip").unwrap_err();
        assert!(matches!(err, DocxError::OpenError(_)));
    }
}
