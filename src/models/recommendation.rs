use serde::Serialize;

use super::GenreLabel;

pub const NO_NEW_GENRES_MESSAGE: &str = "No new genres to recommend";

/// A candidate genre with its fused ranking score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub genre: GenreLabel,
    pub score: f64,
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenreRecommendation {
    /// Undiscovered genres, highest score first
    Recommended {
        #[serde(rename = "genreRecommendation")]
        genres: Vec<GenreLabel>,
    },
    /// Ranking produced no candidates
    NoNewGenres { message: String },
}

impl GenreRecommendation {
    pub fn no_new_genres() -> Self {
        Self::NoNewGenres {
            message: NO_NEW_GENRES_MESSAGE.to_string(),
        }
    }

    pub fn genres(&self) -> &[GenreLabel] {
        match self {
            Self::Recommended { genres } => genres,
            Self::NoNewGenres { .. } => &[],
        }
    }
}

impl From<Vec<GenreLabel>> for GenreRecommendation {
    fn from(genres: Vec<GenreLabel>) -> Self {
        if genres.is_empty() {
            Self::no_new_genres()
        } else {
            Self::Recommended { genres }
        }
    }
}
