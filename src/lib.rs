pub mod document;
pub mod interactive;

pub use document::{OutlineEntry, PdfDocument, SearchableDocument};
pub use interactive::domain::models::{DocMatch, SearchMemory};
pub use interactive::{InteractiveSearch, SearchDelegate, SelectedMatch};
