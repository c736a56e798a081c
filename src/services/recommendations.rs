use std::collections::HashSet;
use std::time::Instant;

use crate::{
    error::AppResult,
    models::{GenreCatalog, GenreRecommendation, UserProfile},
    services::{
        popularity,
        ranking,
        similarity::{self, VectorSpace},
    },
};

/// Recommends catalog genres the listener has not explored yet
///
/// Popularity and similarity are computed from this request only. When no
/// prefitted `vector_space` is supplied the TF-IDF space is fitted over the
/// catalog for this call.
pub fn recommend_genres(
    catalog: &GenreCatalog,
    profile: &UserProfile,
    vector_space: Option<&VectorSpace>,
    top_n: usize,
) -> AppResult<GenreRecommendation> {
    let start = Instant::now();

    let genre_popularity = popularity::aggregate(profile);
    let explored = profile.explored_genres();
    let undiscovered: HashSet<&str> = catalog
        .iter()
        .map(String::as_str)
        .filter(|genre| !explored.contains(*genre))
        .collect();

    tracing::info!(
        artists = profile.len(),
        explored = explored.len(),
        undiscovered = undiscovered.len(),
        top_n,
        "Computing genre recommendations"
    );

    let fitted;
    let space = match vector_space {
        Some(space) => space,
        None => {
            fitted = VectorSpace::fit(catalog)?;
            &fitted
        }
    };

    let pairs = similarity::similarities(space, catalog, &explored, &undiscovered)?;
    let genres = ranking::rank(&pairs, &genre_popularity, &explored, top_n)?;

    tracing::info!(
        candidates = pairs.len(),
        recommended = genres.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Genre recommendations computed"
    );

    Ok(GenreRecommendation::from(genres))
}
