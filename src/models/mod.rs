pub mod catalog;
pub mod profile;
pub mod recommendation;

/// Immutable string identifying a genre, e.g. `"dream-pop"`
pub type GenreLabel = String;

pub use catalog::GenreCatalog;
pub use profile::{ArtistListeningRecord, UserProfile};
pub use recommendation::{GenreRecommendation, ScoredCandidate, NO_NEW_GENRES_MESSAGE};
