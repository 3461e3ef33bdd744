use crate::document::SearchableDocument;
use crate::interactive::domain::models::DocMatch;
use crate::interactive::domain::snippet::{Snippet, build_snippet};

/// Rendered content for one result row: where the match lives and what it
/// looks like in context.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub destination: String,
    pub snippet: Snippet,
}

/// Resolves a match against the document into its display row. Missing
/// outline or page labels render as empty strings.
pub fn build_row(document: &dyn SearchableDocument, result: &DocMatch) -> ResultRow {
    let outline = document.outline_label(result.page_index).unwrap_or_default();
    let page = document.page_label(result.page_index).unwrap_or_default();
    let destination = format!("{outline} Page:  {page}");

    let snippet = match document.page_text(result.page_index) {
        Some(text) => build_snippet(text, result.range.clone()),
        None => Snippet::plain(result.text.clone()),
    };

    ResultRow {
        destination,
        snippet,
    }
}
