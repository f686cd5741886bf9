//! File-system trace store.
//!
//! Layout on disk is one JSON document per session:
//!
//! ```text
//! <root>/
//!   session-17.json
//!   session-18.json
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, trace, warn};

use tracelane_core::trace::RawTrace;

use crate::{
    error::{IngestError, Result},
    source::TraceSource,
};

const DOCUMENT_EXTENSION: &str = "json";

/// A [`TraceSource`] reading JSON trace documents from a directory.
///
/// Session lookups read `<root>/<id>.json`. When that file does not exist the
/// identifier is treated as a message id and every document in the directory
/// is scanned, in file-name order, for a hop with that id. Documents that fail
/// to decode during the scan are skipped with a warning.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, id: &str) -> Option<PathBuf> {
        // Identifiers map to file names; anything that could escape the root is rejected.
        let is_plain = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\'])
            && !id.contains('\0');
        is_plain.then(|| self.root.join(format!("{id}.{DOCUMENT_EXTENSION}")))
    }

    fn read_document(&self, path: &Path, id: &str) -> Result<Option<RawTrace>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(IngestError::unavailable_io(
                    format!("cannot read `{}`", path.display()),
                    err,
                ));
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|err| IngestError::malformed(id, err.to_string()))
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root).map_err(|err| {
            IngestError::unavailable_io(
                format!("cannot list trace store `{}`", self.root.display()),
                err,
            )
        })?;

        let mut paths: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION)
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn find_by_message_id(&self, id: &str) -> Result<Option<RawTrace>> {
        for path in self.document_paths()? {
            let name = path.display().to_string();
            match self.read_document(&path, &name) {
                Ok(Some(trace)) if trace.contains_hop(id) => {
                    debug!(id, path = name; "Message id resolved to trace document");
                    return Ok(Some(trace));
                }
                Ok(_) => trace!(path = name; "Document does not contain message"),
                Err(err @ IngestError::TraceSourceUnavailable { .. }) => return Err(err),
                Err(err) => warn!(path = name, err:% = err; "Skipping undecodable trace document"),
            }
        }
        Ok(None)
    }
}

impl TraceSource for DirectoryStore {
    fn fetch(&self, id: &str) -> Result<RawTrace> {
        if !self.root.is_dir() {
            return Err(IngestError::unavailable(format!(
                "trace store `{}` is not a readable directory",
                self.root.display()
            )));
        }

        if let Some(path) = self.session_path(id)
            && let Some(trace) = self.read_document(&path, id)?
        {
            debug!(id, path = path.display().to_string(); "Loaded trace document");
            return Ok(trace);
        }

        self.find_by_message_id(id)?
            .ok_or_else(|| IngestError::not_found(id))
    }
}
