use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use indexmap::IndexSet;

use crate::error::{AppError, AppResult};

use super::GenreLabel;

/// The fixed, ordered set of every known genre label
///
/// Loaded once at startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCatalog {
    genres: IndexSet<GenreLabel>,
    version: u64,
}

impl GenreCatalog {
    /// Builds a catalog from labels, keeping the first occurrence of duplicates
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<GenreLabel>,
    {
        let genres: IndexSet<GenreLabel> = labels.into_iter().map(Into::into).collect();

        let mut hasher = DefaultHasher::new();
        for genre in &genres {
            genre.hash(&mut hasher);
        }

        Self {
            genres,
            version: hasher.finish(),
        }
    }

    /// Parses a newline-delimited catalog; lines are trimmed and blank lines ignored
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Reads and parses the catalog file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;

        let catalog = Self::parse(&text);
        tracing::info!(
            path = %path.display(),
            genres = catalog.len(),
            "Genre catalog loaded"
        );

        Ok(catalog)
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    pub fn get(&self, index: usize) -> Option<&GenreLabel> {
        self.genres.get_index(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreLabel> {
        self.genres.iter()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Content fingerprint of the ordered labels
    pub fn version(&self) -> u64 {
        self.version
    }
}
