use std::collections::HashMap;

use crate::error::LoadError;

/// Immutable holder of the title index and its similarity matrix
///
/// Row/column `i` of the matrix belongs to `titles[i]`. Scores are stored
/// row-major in a single allocation; nothing is mutated after construction,
/// so a store can be shared between request handlers behind an `Arc`.
#[derive(Debug)]
pub struct SimilarityStore {
    titles: Vec<String>,
    positions: HashMap<String, usize>,
    scores: Vec<f64>,
}

impl SimilarityStore {
    /// Builds a store from a title index and a square matrix
    ///
    /// Fails when the matrix is not `titles.len()` x `titles.len()` or holds a
    /// non-finite score. A title listed twice resolves to its first position.
    pub fn new(titles: Vec<String>, matrix: Vec<Vec<f64>>) -> Result<Self, LoadError> {
        let dimension = titles.len();

        if matrix.len() != dimension {
            return Err(LoadError::DimensionMismatch {
                titles: dimension,
                rows: matrix.len(),
            });
        }

        let mut scores = Vec::with_capacity(dimension * dimension);
        for (row, values) in matrix.into_iter().enumerate() {
            if values.len() != dimension {
                return Err(LoadError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: dimension,
                });
            }
            if let Some(column) = values.iter().position(|score| !score.is_finite()) {
                return Err(LoadError::NonFiniteScore { row, column });
            }
            scores.extend(values);
        }

        let mut positions = HashMap::with_capacity(dimension);
        for (index, title) in titles.iter().enumerate() {
            positions.entry(title.clone()).or_insert(index);
        }

        if positions.len() != dimension {
            tracing::warn!(
                titles = dimension,
                distinct = positions.len(),
                "Title index contains duplicates, lookups resolve to the first occurrence"
            );
        }

        Ok(Self {
            titles,
            positions,
            scores,
        })
    }

    /// All known titles in index order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Title at `index`, if in range
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Resolves an exact title to its row index
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    /// Similarity scores of `index` against every title, as `(column, score)`
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn row(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let dimension = self.titles.len();
        let start = index * dimension;
        self.scores[start..start + dimension]
            .iter()
            .copied()
            .enumerate()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
