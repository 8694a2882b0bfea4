//! Building [`Document`]s from raw input.
//!
//! These helpers only decode data the caller already holds; fetching
//! documents from a remote service is outside this crate.
//!
//! The Docs format is the JSON structure returned by document editors such
//! as Google Docs: `body.content` is a list of structural elements holding a
//! `paragraph` (text runs, `paragraphStyle.namedStyleType`, an optional
//! `bullet`) or a `table` (`tableRows[].tableCells[].content`). List kinds
//! come from the top-level `lists` map: a nesting level with a `glyphType`
//! is ordered, one with only a `glyphSymbol` is a bullet.

use crate::detect::{decode_text, detect_format_from_str, InputFormat};
use crate::error::{Error, Result};
use crate::model::{
    Document, Element, ListInfo, ListKind, NamedStyle, Paragraph, Table, TableCell, TableRow,
};
use serde::Deserialize;
use std::collections::HashMap;

/// Build a document from input bytes, detecting the format.
///
/// # Example
///
/// ```
/// use docsight::source;
///
/// let doc = source::from_bytes(b"Plain text input.")?;
/// assert_eq!(doc.text, "Plain text input.");
/// assert!(doc.elements.is_empty());
/// # Ok::<(), docsight::Error>(())
/// ```
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    from_str(decode_text(data)?)
}

/// Build a document from decoded input, detecting the format.
pub fn from_str(input: &str) -> Result<Document> {
    let format = detect_format_from_str(input);
    log::debug!("input detected as {}", format);
    match format {
        InputFormat::PlainText => Ok(Document::from_text(input)),
        InputFormat::DocumentJson => Ok(serde_json::from_str(input)?),
        InputFormat::DocsJson => from_docs_json(input),
    }
}

/// Build a document from a Docs JSON structure.
///
/// The text is every text run concatenated in document order, table cells
/// included.
pub fn from_docs_json(json: &str) -> Result<Document> {
    let docs: DocsDocument = serde_json::from_str(json)?;
    Ok(docs.into_document())
}

/// Build a document from an already-parsed Docs JSON value.
pub fn from_docs_value(value: serde_json::Value) -> Result<Document> {
    let docs: DocsDocument =
        serde_json::from_value(value).map_err(|e| Error::Source(e.to_string()))?;
    Ok(docs.into_document())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsDocument {
    title: Option<String>,
    body: DocsBody,
    lists: HashMap<String, DocsList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsBody {
    content: Vec<DocsElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsElement {
    paragraph: Option<DocsParagraph>,
    table: Option<DocsTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsParagraph {
    elements: Vec<DocsParagraphElement>,
    paragraph_style: DocsParagraphStyle,
    bullet: Option<DocsBullet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsParagraphElement {
    text_run: Option<DocsTextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsTextRun {
    content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsParagraphStyle {
    named_style_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsBullet {
    list_id: Option<String>,
    nesting_level: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsTable {
    table_rows: Vec<DocsTableRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsTableRow {
    table_cells: Vec<DocsTableCell>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsTableCell {
    content: Vec<DocsElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsList {
    list_properties: DocsListProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsListProperties {
    nesting_levels: Vec<DocsNestingLevel>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocsNestingLevel {
    glyph_type: Option<String>,
    glyph_symbol: Option<String>,
}

impl DocsNestingLevel {
    fn kind(&self) -> ListKind {
        match self.glyph_type.as_deref() {
            Some("GLYPH_TYPE_UNSPECIFIED") | Some("NONE") | None => ListKind::Unordered,
            Some(_) if self.glyph_symbol.is_some() => ListKind::Unordered,
            Some(_) => ListKind::Ordered,
        }
    }
}

impl DocsDocument {
    fn into_document(self) -> Document {
        let mut text = String::new();
        collect_text(&self.body.content, &mut text);

        let elements = self
            .body
            .content
            .iter()
            .filter_map(|e| self.convert_element(e))
            .collect();

        Document {
            title: self.title.clone(),
            text,
            elements,
        }
    }

    fn convert_element(&self, element: &DocsElement) -> Option<Element> {
        if let Some(paragraph) = &element.paragraph {
            return Some(Element::Paragraph(self.convert_paragraph(paragraph)));
        }
        element
            .table
            .as_ref()
            .map(|table| Element::Table(self.convert_table(table)))
    }

    fn convert_paragraph(&self, paragraph: &DocsParagraph) -> Paragraph {
        let mut p = Paragraph::new();
        for run in paragraph.elements.iter().filter_map(|e| e.text_run.as_ref()) {
            p.add_text(run.content.trim_end_matches('\n'));
        }

        if let Some(style) = &paragraph.paragraph_style.named_style_type {
            match style.parse::<NamedStyle>() {
                Ok(named) => p.style.named_style = Some(named),
                Err(e) => log::warn!("treating paragraph as untyped: {}", e),
            }
        }

        if let Some(bullet) = &paragraph.bullet {
            p.style.list_info = Some(ListInfo {
                kind: self.list_kind(bullet),
                level: bullet.nesting_level,
            });
        }

        p
    }

    fn convert_table(&self, table: &DocsTable) -> Table {
        let mut out = Table::new();
        for row in &table.table_rows {
            let cells = row
                .table_cells
                .iter()
                .map(|cell| {
                    let content = cell
                        .content
                        .iter()
                        .filter_map(|e| e.paragraph.as_ref())
                        .map(|p| self.convert_paragraph(p))
                        .collect();
                    TableCell::with_content(content)
                })
                .collect();
            out.add_row(TableRow::new(cells));
        }
        out
    }

    fn list_kind(&self, bullet: &DocsBullet) -> ListKind {
        bullet
            .list_id
            .as_ref()
            .and_then(|id| self.lists.get(id))
            .and_then(|list| {
                list.list_properties
                    .nesting_levels
                    .get(bullet.nesting_level as usize)
            })
            .map(DocsNestingLevel::kind)
            .unwrap_or_default()
    }
}

fn collect_text(elements: &[DocsElement], out: &mut String) {
    for element in elements {
        if let Some(paragraph) = &element.paragraph {
            for run in paragraph.elements.iter().filter_map(|e| e.text_run.as_ref()) {
                out.push_str(&run.content);
            }
        } else if let Some(table) = &element.table {
            for cell in table.table_rows.iter().flat_map(|r| &r.table_cells) {
                collect_text(&cell.content, out);
            }
        }
    }
}
