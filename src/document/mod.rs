mod pdf;

pub use pdf::PdfDocument;

/// A loaded document the search screen can scan and label.
///
/// This is the seam to the underlying PDF engine: the interactive layer only
/// ever sees extracted page text and resolved labels, never the file format.
pub trait SearchableDocument: Send + Sync {
    fn page_count(&self) -> usize;

    /// Extracted text of a page, if the page exists.
    fn page_text(&self, page_index: usize) -> Option<&str>;

    /// Display label for a page.
    fn page_label(&self, page_index: usize) -> Option<String>;

    /// Label of the outline (table-of-contents) entry covering the page.
    fn outline_label(&self, page_index: usize) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    pub page_index: usize,
}

/// Resolves the outline entry covering `page_index`: the last entry (in page
/// order) that starts at or before the page. Expects `outline` sorted by
/// `page_index`.
pub fn outline_label_at(outline: &[OutlineEntry], page_index: usize) -> Option<String> {
    outline
        .iter()
        .take_while(|entry| entry.page_index <= page_index)
        .last()
        .map(|entry| entry.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, page_index: usize) -> OutlineEntry {
        OutlineEntry {
            title: title.to_string(),
            page_index,
        }
    }

    #[test]
    fn test_outline_label_picks_covering_entry() {
        let outline = vec![entry("Intro", 0), entry("Methods", 2), entry("Summary", 5)];

        assert_eq!(outline_label_at(&outline, 0), Some("Intro".to_string()));
        assert_eq!(outline_label_at(&outline, 1), Some("Intro".to_string()));
        assert_eq!(outline_label_at(&outline, 2), Some("Methods".to_string()));
        assert_eq!(outline_label_at(&outline, 9), Some("Summary".to_string()));
    }

    #[test]
    fn test_outline_label_before_first_entry() {
        let outline = vec![entry("Chapter 1", 3)];
        assert_eq!(outline_label_at(&outline, 1), None);
    }

    #[test]
    fn test_outline_label_empty_outline() {
        assert_eq!(outline_label_at(&[], 0), None);
    }

    #[test]
    fn test_outline_label_same_page_takes_last() {
        // Nested entries landing on the same page resolve to the deepest one.
        let outline = vec![entry("Part I", 0), entry("Chapter 1", 0)];
        assert_eq!(outline_label_at(&outline, 0), Some("Chapter 1".to_string()));
    }
}
