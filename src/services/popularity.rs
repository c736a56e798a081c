use indexmap::IndexMap;

use crate::models::{GenreLabel, UserProfile};

/// Average artist popularity per genre for a single listening snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenrePopularityIndex {
    averages: IndexMap<GenreLabel, f64>,
}

impl GenrePopularityIndex {
    /// Average popularity of `genre`; genres absent from the profile score 0
    pub fn get(&self, genre: &str) -> f64 {
        self.averages.get(genre).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.averages.contains_key(genre)
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}

#[derive(Default)]
struct Accumulator {
    total_popularity: f64,
    count: u32,
}

/// Reduces per-artist popularity into a per-genre mean
///
/// Every (artist, genre) tag counts once: an artist tagged with k genres
/// contributes its full popularity to each of the k genres.
pub fn aggregate(profile: &UserProfile) -> GenrePopularityIndex {
    let mut accumulators: IndexMap<&str, Accumulator> = IndexMap::new();

    for record in profile.records() {
        for genre in &record.genres {
            let acc = accumulators.entry(genre.as_str()).or_default();
            acc.total_popularity += record.popularity;
            acc.count += 1;
        }
    }

    let averages = accumulators
        .into_iter()
        .map(|(genre, acc)| (genre.to_string(), acc.total_popularity / f64::from(acc.count)))
        .collect();

    GenrePopularityIndex { averages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtistListeningRecord;

    fn record(genres: &[&str], popularity: f64) -> ArtistListeningRecord {
        ArtistListeningRecord {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            popularity,
        }
    }

    #[test]
    fn test_average_across_artists() {
        let mut profile = UserProfile::new();
        profile.insert("a", record(&["rock"], 80.0));
        profile.insert("b", record(&["rock"], 40.0));

        let index = aggregate(&profile);
        assert_eq!(index.get("rock"), 60.0);
    }

    #[test]
    fn test_multi_genre_artist_counts_for_each_genre() {
        let mut profile = UserProfile::new();
        profile.insert("a", record(&["rock", "blues"], 70.0));
        profile.insert("b", record(&["blues"], 30.0));

        let index = aggregate(&profile);
        assert_eq!(index.get("rock"), 70.0);
        assert_eq!(index.get("blues"), 50.0);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_genre_defaults_to_zero() {
        let mut profile = UserProfile::new();
        profile.insert("a", record(&["rock"], 80.0));

        let index = aggregate(&profile);
        assert!(!index.contains("jazz"));
        assert_eq!(index.get("jazz"), 0.0);
    }

    #[test]
    fn test_empty_profile() {
        let index = aggregate(&UserProfile::new());
        assert!(index.is_empty());
    }
}
