use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use regex::Regex;

use crate::{
    error::{AppError, AppResult},
    models::{GenreCatalog, GenreLabel},
};

/// Words of two or more characters; hyphens and other punctuation split tokens
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Splits genre labels into lowercase terms
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> AppResult<Self> {
        let pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| AppError::Computation(format!("Invalid token pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Labels with no word token fall back to the whole lowercased label so that
    /// every non-empty label maps to a non-zero vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = self
            .pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect();

        if tokens.is_empty() && !lowered.trim().is_empty() {
            vec![lowered.trim().to_string()]
        } else {
            tokens
        }
    }
}

/// L2-normalised sparse vector, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn normalized(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(term, _)| *term);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in entries.iter_mut() {
                *w /= norm;
            }
        }
        Self { entries }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j, mut dot) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }
}

/// Cosine similarity of two normalised vectors, clamped to [0, 1]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    a.dot(b).clamp(0.0, 1.0)
}

/// TF-IDF vector space fitted over every label in a catalog
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, raw term counts, L2 normalisation.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// One vector per catalog genre, in catalog order
    vectors: Vec<SparseVector>,
    catalog_version: u64,
}

impl VectorSpace {
    pub fn fit(catalog: &GenreCatalog) -> AppResult<Self> {
        let tokenizer = Tokenizer::new()?;
        let documents: Vec<Vec<String>> = catalog.iter().map(|g| tokenizer.tokenize(g)).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();
        for tokens in &documents {
            let unique: IndexSet<&String> = tokens.iter().collect();
            for token in unique {
                let next = vocabulary.len();
                let term = *vocabulary.entry(token.clone()).or_insert(next);
                if term == document_frequency.len() {
                    document_frequency.push(0);
                }
                document_frequency[term] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut space = Self {
            tokenizer,
            vocabulary,
            idf,
            vectors: Vec::with_capacity(documents.len()),
            catalog_version: catalog.version(),
        };
        let vectors = documents.iter().map(|tokens| space.vectorize(tokens)).collect();
        space.vectors = vectors;

        tracing::debug!(
            genres = catalog.len(),
            terms = space.vocabulary.len(),
            "TF-IDF vector space fitted"
        );

        Ok(space)
    }

    /// Vectorises arbitrary text against the fitted vocabulary; unknown terms are dropped
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&self.tokenizer.tokenize(text))
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&term) = self.vocabulary.get(token) {
                *counts.entry(term).or_insert(0.0) += 1.0;
            }
        }

        SparseVector::normalized(
            counts
                .into_iter()
                .map(|(term, tf)| (term, tf * self.idf[term]))
                .collect(),
        )
    }

    /// Similarity of `text` against every catalog genre, in catalog order
    pub fn similarity_row(&self, text: &str) -> Vec<f64> {
        let query = self.transform(text);
        self.vectors
            .iter()
            .map(|vector| cosine_similarity(&query, vector))
            .collect()
    }

    pub fn catalog_version(&self) -> u64 {
        self.catalog_version
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Pairs every undiscovered genre with its similarity to each explored genre
///
/// Explored genres are visited in the order given and those missing from the
/// catalog are skipped. The same undiscovered genre appears once per explored
/// genre that scored against it.
pub fn similarities(
    space: &VectorSpace,
    catalog: &GenreCatalog,
    explored: &IndexSet<GenreLabel>,
    undiscovered: &HashSet<&str>,
) -> AppResult<Vec<(GenreLabel, f64)>> {
    if space.catalog_version() != catalog.version() {
        return Err(AppError::Computation(
            "Vector space was fitted on a different catalog".to_string(),
        ));
    }

    let mut pairs = Vec::new();
    for explored_genre in explored {
        if !catalog.contains(explored_genre) {
            tracing::debug!(genre = %explored_genre, "Explored genre not in catalog, skipping");
            continue;
        }

        let row = space.similarity_row(explored_genre);
        pairs.extend(
            catalog
                .iter()
                .zip(row)
                .filter(|(genre, _)| undiscovered.contains(genre.as_str()))
                .map(|(genre, similarity)| (genre.clone(), similarity)),
        );
    }

    Ok(pairs)
}
