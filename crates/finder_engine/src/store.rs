use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use finder_logging::finder_debug;

use crate::filename::{extractor_review_filename, review_filename};
use crate::StoreError;

/// Read-only view of the directory the extractor saves reviews into.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    dir: PathBuf,
}

impl ReviewStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the extractor saves the review for `title`/`year`.
    pub fn path_for(&self, title: &str, year: &str) -> PathBuf {
        self.dir.join(extractor_review_filename(title, year))
    }

    /// The extractor's file if present, else one named by the
    /// hyphen-preserving slug.
    pub fn locate(&self, title: &str, year: &str) -> Option<PathBuf> {
        let written = self.path_for(title, year);
        if written.is_file() {
            return Some(written);
        }
        let slugged = self.dir.join(review_filename(title, year));
        slugged.is_file().then_some(slugged)
    }

    /// Reads the saved review verbatim. `Ok(None)` when no file exists.
    pub fn read(&self, title: &str, year: &str) -> Result<Option<String>, StoreError> {
        let Some(path) = self.locate(title, year) else {
            finder_debug!("No review at {:?}", self.path_for(title, year));
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
