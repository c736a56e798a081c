use indexmap::IndexMap;

use crate::models::{GenreCatalog, GenreLabel};

/// Parent/child genre relationships derived from lexical prefix containment
///
/// Not a tree: `"indie-poptimism"` is a child of both `"indie"` and `"indie-pop"`
/// when both exist in the catalog. Genres with no catalog prefix are roots and
/// always have an entry, possibly with no children. Leaf genres that do have a
/// parent get no entry of their own.
///
/// The ranker does not consult the hierarchy; it is exposed read-only as an
/// extension point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreHierarchy {
    children: IndexMap<GenreLabel, Vec<GenreLabel>>,
}

impl GenreHierarchy {
    /// Builds the hierarchy with an O(n²) prefix scan over the catalog
    pub fn build(catalog: &GenreCatalog) -> Self {
        let mut children: IndexMap<GenreLabel, Vec<GenreLabel>> = IndexMap::new();

        for genre in catalog.iter() {
            let mut parent_found = false;

            for potential_parent in catalog.iter() {
                if genre != potential_parent && genre.starts_with(potential_parent.as_str()) {
                    children
                        .entry(potential_parent.clone())
                        .or_default()
                        .push(genre.clone());
                    parent_found = true;
                }
            }

            if !parent_found {
                children.entry(genre.clone()).or_default();
            }
        }

        tracing::debug!(entries = children.len(), "Genre hierarchy built");

        Self { children }
    }

    /// Children of `genre`, in catalog order; `None` when the genre has no entry
    pub fn children(&self, genre: &str) -> Option<&[GenreLabel]> {
        self.children.get(genre).map(Vec::as_slice)
    }

    /// Catalog genres that list `genre` as a child
    pub fn parents(&self, genre: &str) -> Vec<&GenreLabel> {
        self.children
            .iter()
            .filter(|(_, kids)| kids.iter().any(|kid| kid == genre))
            .map(|(parent, _)| parent)
            .collect()
    }

    pub fn is_root(&self, genre: &str) -> bool {
        self.children.contains_key(genre) && self.parents(genre).is_empty()
    }

    pub fn roots(&self) -> Vec<&GenreLabel> {
        self.children
            .keys()
            .filter(|genre| self.is_root(genre))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
