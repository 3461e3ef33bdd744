use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, bail};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use super::{OutlineEntry, SearchableDocument, outline_label_at};

/// A PDF opened for searching. Page text is extracted eagerly at load time so
/// the scan worker never touches the lopdf document.
pub struct PdfDocument {
    page_texts: Vec<String>,
    outline: Vec<OutlineEntry>,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let doc = Document::load(path).context("failed to parse PDF")?;
        if doc.is_encrypted() {
            bail!("encrypted PDFs are not supported");
        }
        let pages = doc.get_pages();
        if pages.is_empty() {
            bail!("PDF has no pages");
        }

        let page_index_by_id: HashMap<ObjectId, usize> = pages
            .values()
            .enumerate()
            .map(|(index, id)| (*id, index))
            .collect();

        let mut page_texts = Vec::with_capacity(pages.len());
        for page_num in pages.keys() {
            let text = doc.extract_text(&[*page_num]).unwrap_or_default();
            page_texts.push(text);
        }

        let outline = read_outline(&doc, &page_index_by_id);
        debug!(
            pages = page_texts.len(),
            outline_entries = outline.len(),
            "loaded PDF"
        );

        Ok(Self {
            page_texts,
            outline,
        })
    }
}

impl SearchableDocument for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_texts.len()
    }

    fn page_text(&self, page_index: usize) -> Option<&str> {
        self.page_texts.get(page_index).map(String::as_str)
    }

    fn page_label(&self, page_index: usize) -> Option<String> {
        (page_index < self.page_texts.len()).then(|| (page_index + 1).to_string())
    }

    fn outline_label(&self, page_index: usize) -> Option<String> {
        outline_label_at(&self.outline, page_index)
    }
}

fn read_outline(doc: &Document, page_index_by_id: &HashMap<ObjectId, usize>) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    let mut visited = HashSet::new();

    let first = doc
        .catalog()
        .ok()
        .and_then(|catalog| catalog.get(b"Outlines").ok())
        .and_then(|obj| obj.as_reference().ok())
        .and_then(|id| doc.get_dictionary(id).ok())
        .and_then(|root| root.get(b"First").ok())
        .and_then(|obj| obj.as_reference().ok());

    if let Some(first) = first {
        walk_outline(doc, first, page_index_by_id, &mut visited, &mut entries);
    }

    entries.sort_by_key(|entry| entry.page_index);
    entries
}

fn walk_outline(
    doc: &Document,
    start: ObjectId,
    page_index_by_id: &HashMap<ObjectId, usize>,
    visited: &mut HashSet<ObjectId>,
    entries: &mut Vec<OutlineEntry>,
) {
    let mut next = Some(start);
    while let Some(id) = next {
        // Malformed files can link outline items in a cycle.
        if !visited.insert(id) {
            return;
        }
        let Ok(item) = doc.get_dictionary(id) else {
            return;
        };

        if let Some(title) = item.get(b"Title").ok().and_then(text_string) {
            if let Some(page_index) = outline_target_page(doc, item, page_index_by_id) {
                entries.push(OutlineEntry { title, page_index });
            }
        }

        if let Some(child) = item.get(b"First").ok().and_then(|obj| obj.as_reference().ok()) {
            walk_outline(doc, child, page_index_by_id, visited, entries);
        }
        next = item.get(b"Next").ok().and_then(|obj| obj.as_reference().ok());
    }
}

/// Destination of an outline item: either a direct /Dest or the /D of a GoTo
/// action. Named destinations are not resolved.
fn outline_target_page(
    doc: &Document,
    item: &Dictionary,
    page_index_by_id: &HashMap<ObjectId, usize>,
) -> Option<usize> {
    let dest = item.get(b"Dest").ok().or_else(|| {
        let action = resolve_dict(doc, item.get(b"A").ok()?)?;
        action.get(b"D").ok()
    })?;
    let target = resolve_array(doc, dest)?;
    let page_ref = target.first()?.as_reference().ok()?;
    page_index_by_id.get(&page_ref).copied()
}

fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn resolve_array<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Vec<Object>> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_array().ok(),
        Object::Array(array) => Some(array),
        _ => None,
    }
}

fn text_string(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_pdf_text(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// PDF text strings are either UTF-16BE with a BOM or PDFDocEncoding, which
/// is close enough to Latin-1 that a lossy UTF-8 read is acceptable.
fn decode_pdf_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf16_title() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_text(&bytes), "Hi");
    }

    #[test]
    fn test_decode_plain_title() {
        assert_eq!(decode_pdf_text(b"Intro"), "Intro");
    }

    #[test]
    fn test_text_string_from_name() {
        let obj = Object::Name(b"Summary".to_vec());
        assert_eq!(text_string(&obj), Some("Summary".to_string()));
    }

    #[test]
    fn test_text_string_rejects_non_text() {
        assert_eq!(text_string(&Object::Integer(3)), None);
    }
}
