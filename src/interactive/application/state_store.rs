use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interactive::SearchDelegate;
use crate::interactive::domain::models::{DocMatch, SearchMemory};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    documents: HashMap<String, SearchMemory>,
}

/// The persistence collaborator: a JSON state file under the user's config
/// directory holding the remembered search term and row per document.
/// Implements `SearchDelegate` so the screen can report accepted terms and
/// chosen rows directly to it.
pub struct SearchStateStore {
    path: PathBuf,
    key: String,
    state: PersistedState,
}

impl SearchStateStore {
    pub fn open(document_path: &Path) -> Result<Self> {
        let dir = dirs::config_dir()
            .context("no config directory available")?
            .join("pdfsift");
        Ok(Self::open_at(dir.join("state.json"), document_path))
    }

    pub fn open_at(path: PathBuf, document_path: &Path) -> Self {
        let key = document_path
            .canonicalize()
            .unwrap_or_else(|_| document_path.to_path_buf())
            .to_string_lossy()
            .into_owned();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "unreadable state file, starting empty");
                PersistedState::default()
            }),
            Err(_) => PersistedState::default(),
        };
        Self { path, key, state }
    }

    /// What is remembered for this document, if anything.
    pub fn memory(&self) -> SearchMemory {
        self.state.documents.get(&self.key).cloned().unwrap_or_default()
    }

    fn entry(&mut self) -> &mut SearchMemory {
        self.state.documents.entry(self.key.clone()).or_default()
    }

    fn write(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(error = %e, "could not create state directory");
                return;
            }
        }
        match serde_json::to_string_pretty(&self.state) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %e, "could not write state file");
                }
            }
            Err(e) => warn!(error = %e, "could not serialize state"),
        }
    }
}

impl SearchDelegate for SearchStateStore {
    fn save_search_term(&mut self, term: &str) {
        let entry = self.entry();
        if term.is_empty() {
            // Empty means "forget"; a remembered row is meaningless without
            // its term.
            entry.term = None;
            entry.row = None;
        } else {
            entry.term = Some(term.to_string());
        }
        self.write();
    }

    fn did_select_match(&mut self, _result: &DocMatch, row: usize) {
        self.entry().row = Some(row);
        self.write();
    }
}
