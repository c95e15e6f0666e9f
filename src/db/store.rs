use crate::libs::data_storage::DataStorage;
use crate::libs::document::Document;
use crate::libs::error::TrackerResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DOCUMENT_FILE_NAME: &str = "gdt_v1.json";
/// Overrides the document location, mostly for scripting and tests.
pub const DATA_FILE_ENV: &str = "DTRACK_DATA_FILE";

/// File-backed holder of the tracker [`Document`].
///
/// All writes go through [`Store::update`], which works on a clone of the
/// current document and persists the whole clone only when the mutator
/// succeeds.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Document,
}

impl Store {
    /// Opens the document in the user's data directory.
    pub fn new() -> TrackerResult<Self> {
        let path = match std::env::var_os(DATA_FILE_ENV) {
            Some(path) => PathBuf::from(path),
            None => DataStorage::new().get_path(DOCUMENT_FILE_NAME)?,
        };
        Ok(Self::open(path))
    }

    /// Opens the document at `path`. A missing, unreadable or malformed file
    /// yields the default document.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = Self::load(&path);
        Store { path, doc }
    }

    pub fn load(path: &Path) -> Document {
        if !path.exists() {
            return Document::default();
        }
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read document, using defaults");
                return Document::default();
            }
        };
        if raw.trim().is_empty() {
            return Document::default();
        }
        match Document::from_json(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed document, using defaults");
                Document::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Applies `mutator` to a copy of the document and persists the copy.
    /// On error neither the in-memory nor the stored document changes.
    pub fn update<T, F>(&mut self, mutator: F) -> TrackerResult<T>
    where
        F: FnOnce(&mut Document) -> TrackerResult<T>,
    {
        let mut draft = self.doc.clone();
        let out = mutator(&mut draft)?;
        self.write(&draft)?;
        self.doc = draft;
        Ok(out)
    }

    /// Overwrites the stored document wholesale.
    pub fn replace(&mut self, doc: Document) -> TrackerResult<()> {
        self.write(&doc)?;
        self.doc = doc;
        Ok(())
    }

    /// Re-reads the document from disk.
    pub fn reload(&mut self) {
        self.doc = Self::load(&self.path);
    }

    fn write(&self, doc: &Document) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(doc)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}
