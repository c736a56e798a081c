use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

use super::GenreLabel;

/// Listening data for one artist in the user's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistListeningRecord {
    pub genres: Vec<GenreLabel>,
    /// Artist popularity, nominally in [0, 100]
    pub popularity: f64,
}

/// A single listening snapshot keyed by artist id
///
/// Artist order follows the request payload, which fixes the order in which
/// explored genres are visited downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    artists: IndexMap<String, ArtistListeningRecord>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an artist record, keeping the original position on replace
    pub fn insert(&mut self, artist_id: impl Into<String>, record: ArtistListeningRecord) {
        self.artists.insert(artist_id.into(), record);
    }

    /// Converts a raw request payload into a profile
    ///
    /// A missing, `null`, non-object or empty payload is a client error. A record
    /// that lacks `genres`/`popularity` or has the wrong types is a computation error.
    pub fn from_payload(payload: Option<Value>) -> AppResult<Self> {
        let object = match payload {
            Some(Value::Object(object)) => object,
            Some(Value::Null) | None => {
                return Err(AppError::InvalidInput("No data provided".to_string()))
            }
            Some(_) => {
                return Err(AppError::InvalidInput(
                    "Expected an object mapping artist ids to listening records".to_string(),
                ))
            }
        };

        if object.is_empty() {
            return Err(AppError::InvalidInput("No data provided".to_string()));
        }

        let mut profile = Self::new();
        for (artist_id, raw) in object {
            let record: ArtistListeningRecord = serde_json::from_value(raw).map_err(|e| {
                AppError::Computation(format!("Malformed record for artist '{}': {}", artist_id, e))
            })?;

            if !(0.0..=100.0).contains(&record.popularity) {
                tracing::warn!(
                    artist = %artist_id,
                    popularity = record.popularity,
                    "Artist popularity outside 0-100"
                );
            }

            profile.insert(artist_id, record);
        }

        Ok(profile)
    }

    pub fn records(&self) -> impl Iterator<Item = &ArtistListeningRecord> {
        self.artists.values()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Every genre tagged on any artist, in first-seen order
    pub fn explored_genres(&self) -> IndexSet<GenreLabel> {
        self.records()
            .flat_map(|record| record.genres.iter().cloned())
            .collect()
    }
}
