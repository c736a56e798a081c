use std::collections::HashSet;

use indexmap::IndexSet;

use crate::{
    error::{AppError, AppResult},
    models::{GenreLabel, ScoredCandidate},
    services::popularity::GenrePopularityIndex,
};

pub const SIMILARITY_WEIGHT: f64 = 0.7;
pub const POPULARITY_WEIGHT: f64 = 0.3;
/// Added when a candidate shares its family token with any explored genre
pub const FAMILY_BOOST: f64 = 0.2;

/// Substring before the first hyphen, or the whole label
pub fn family_token(genre: &str) -> &str {
    genre.split('-').next().unwrap_or(genre)
}

/// Fuses similarity, popularity and the family boost for every pair, in input order
pub fn score_candidates(
    pairs: &[(GenreLabel, f64)],
    popularity: &GenrePopularityIndex,
    explored: &IndexSet<GenreLabel>,
) -> Vec<ScoredCandidate> {
    let explored_families: HashSet<&str> = explored.iter().map(|g| family_token(g)).collect();

    pairs
        .iter()
        .map(|(genre, similarity)| {
            let mut score =
                similarity * SIMILARITY_WEIGHT + popularity.get(genre) * POPULARITY_WEIGHT;
            if explored_families.contains(family_token(genre)) {
                score += FAMILY_BOOST;
            }

            tracing::debug!(genre = %genre, similarity, score, "Scored candidate");

            ScoredCandidate {
                genre: genre.clone(),
                score,
            }
        })
        .collect()
}

/// Ranks similarity pairs into at most `top_n` unique genres, highest score first
///
/// The sort is stable, so equal scores keep the order in which the pairs were
/// produced. Explored genres are never returned.
pub fn rank(
    pairs: &[(GenreLabel, f64)],
    popularity: &GenrePopularityIndex,
    explored: &IndexSet<GenreLabel>,
    top_n: usize,
) -> AppResult<Vec<GenreLabel>> {
    if top_n == 0 {
        return Err(AppError::InvalidInput("top_n must be at least 1".to_string()));
    }

    let mut candidates = score_candidates(pairs, popularity, explored);
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommendations = Vec::with_capacity(top_n.min(candidates.len()));
    for candidate in &candidates {
        if recommendations.len() >= top_n {
            break;
        }
        if explored.contains(&candidate.genre) {
            continue;
        }
        if seen.insert(candidate.genre.as_str()) {
            recommendations.push(candidate.genre.clone());
        }
    }

    Ok(recommendations)
}
