use std::ops::Range;

use memchr::{memchr, memrchr};

use crate::interactive::constants::{SNIPPET_CHARS_AFTER, SNIPPET_CHARS_BEFORE};

/// A short text window around a match, with the matched sub-range marked for
/// highlighting. `highlight` is a byte range into `text`; `None` means the
/// match could not be located in the window and no mark is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Snippet {
    pub text: String,
    pub highlight: Option<Range<usize>>,
}

impl Snippet {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }
}

/// Builds the display snippet for a match: extend the selection a fixed
/// number of characters before and after, snap both ends outward to full line
/// boundaries, then locate the original matched text inside the window
/// case-insensitively. Only that sub-range is highlighted.
pub fn build_snippet(page_text: &str, range: Range<usize>) -> Snippet {
    if range.start > range.end
        || range.end > page_text.len()
        || !page_text.is_char_boundary(range.start)
        || !page_text.is_char_boundary(range.end)
    {
        return Snippet::plain("");
    }

    let start = step_back(page_text, range.start, SNIPPET_CHARS_BEFORE);
    let end = step_forward(page_text, range.end, SNIPPET_CHARS_AFTER);
    let (start, end) = snap_to_lines(page_text, start, end);

    let window = &page_text[start..end];
    let matched = &page_text[range];
    let highlight = find_ignore_case(window, matched, 0);

    Snippet {
        text: window.to_string(),
        highlight,
    }
}

fn step_back(text: &str, mut pos: usize, chars: usize) -> usize {
    for _ in 0..chars {
        match text[..pos].char_indices().next_back() {
            Some((index, _)) => pos = index,
            None => break,
        }
    }
    pos
}

fn step_forward(text: &str, mut pos: usize, chars: usize) -> usize {
    for _ in 0..chars {
        match text[pos..].chars().next() {
            Some(c) => pos += c.len_utf8(),
            None => break,
        }
    }
    pos
}

fn snap_to_lines(text: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let line_start = memrchr(b'\n', &bytes[..start]).map_or(0, |i| i + 1);
    let line_end = memchr(b'\n', &bytes[end..]).map_or(text.len(), |i| end + i);
    (line_start, line_end)
}

/// Case-insensitive substring search starting at byte offset `from`,
/// returning the byte range of the first occurrence in `haystack`. Unlike a
/// lowercase-then-find round trip, offsets always refer to the original
/// string even when case folding changes character lengths.
pub fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    if needle.is_empty() || from > haystack.len() || !haystack.is_char_boundary(from) {
        return None;
    }
    let folded: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    for (offset, _) in haystack[from..].char_indices() {
        let candidate = from + offset;
        if let Some(len) = prefix_match_len(&haystack[candidate..], &folded) {
            return Some(candidate..candidate + len);
        }
    }
    None
}

/// Length in bytes of the prefix of `text` that case-folds to
/// `folded_needle`, if any.
fn prefix_match_len(text: &str, folded_needle: &[char]) -> Option<usize> {
    let mut expected = folded_needle.iter();
    let mut len = 0;
    for c in text.chars() {
        if expected.len() == 0 {
            break;
        }
        for folded in c.to_lowercase() {
            match expected.next() {
                Some(&want) if want == folded => {}
                _ => return None,
            }
        }
        len += c.len_utf8();
    }
    if expected.len() == 0 { Some(len) } else { None }
}
