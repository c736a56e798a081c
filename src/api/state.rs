use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    models::GenreCatalog,
    services::{GenreHierarchy, VectorSpace},
};

/// Shared application state
///
/// Built once at startup and never mutated afterwards, so handlers read it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<GenreCatalog>,
    pub hierarchy: Arc<GenreHierarchy>,
    /// Prefitted TF-IDF space, present only when vector space caching is enabled
    pub vector_space: Option<Arc<VectorSpace>>,
    pub default_top_n: usize,
}

impl AppState {
    /// Derives the hierarchy (and optionally the vector space) from the catalog
    pub fn new(catalog: GenreCatalog, config: &Config) -> AppResult<Self> {
        let hierarchy = GenreHierarchy::build(&catalog);

        let vector_space = if config.vector_space_cache {
            let space = VectorSpace::fit(&catalog)?;
            tracing::info!(
                catalog_version = space.catalog_version(),
                terms = space.vocabulary_size(),
                "Vector space cached"
            );
            Some(Arc::new(space))
        } else {
            None
        };

        tracing::info!(
            genres = catalog.len(),
            hierarchy_entries = hierarchy.len(),
            "Application state initialized"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            hierarchy: Arc::new(hierarchy),
            vector_space,
            default_top_n: config.default_top_n,
        })
    }
}
