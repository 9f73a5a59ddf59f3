use std::cmp::Ordering;
use std::collections::HashSet;

use crate::store::SimilarityStore;

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Ranks neighbours of a title by precomputed similarity
///
/// Borrows the store read-only and keeps nothing between calls.
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    store: &'a SimilarityStore,
}

impl<'a> Recommender<'a> {
    pub fn new(store: &'a SimilarityStore) -> Self {
        Self { store }
    }

    /// Returns up to `k` titles most similar to `title`, best first
    ///
    /// An unknown title yields an empty list. Equal scores keep title index
    /// order. The top-ranked entry is taken to be the query itself (its
    /// self-similarity is maximal in the matrix) and is skipped unchecked.
    /// When the index lists a title more than once, later copies of the query
    /// and repeats of an already returned title are passed over.
    pub fn recommend(&self, title: &str, k: usize) -> Vec<&'a str> {
        let Some(index) = self.store.index_of(title) else {
            tracing::debug!(title = %title, "Title not in index");
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f64)> = self.store.row(index).collect();
        // `sort_by` is stable, which gives the index-order tie-break.
        // Scores are finite, and -0.0 must tie with 0.0.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut seen = HashSet::new();
        ranked
            .into_iter()
            .skip(1)
            .filter_map(|(neighbour, _)| self.store.title(neighbour))
            .filter(|neighbour| *neighbour != title && seen.insert(*neighbour))
            .take(k)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store(names: &[&str], matrix: Vec<Vec<f64>>) -> SimilarityStore {
        SimilarityStore::new(names.iter().map(|n| n.to_string()).collect(), matrix).unwrap()
    }

    fn sample_store() -> SimilarityStore {
        store(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.9, 0.9, 0.1],
                vec![0.9, 1.0, 0.3, 0.6],
                vec![0.9, 0.3, 1.0, 0.2],
                vec![0.1, 0.6, 0.2, 1.0],
            ],
        )
    }

    fn score(store: &SimilarityStore, query: &str, other: &str) -> f64 {
        let row = store.index_of(query).unwrap();
        let column = store.index_of(other).unwrap();
        store.row(row).nth(column).unwrap().1
    }

    #[test]
    fn test_ties_follow_index_order() {
        let store = sample_store();
        let recommender = Recommender::new(&store);

        assert_eq!(recommender.recommend("A", 2), vec!["B", "C"]);
    }

    #[test]
    fn test_signed_zeros_tie_in_index_order() {
        let store = store(
            &["Q", "B", "C"],
            vec![
                vec![1.0, -0.0, 0.0],
                vec![-0.0, 1.0, 0.5],
                vec![0.0, 0.5, 1.0],
            ],
        );

        assert_eq!(Recommender::new(&store).recommend("Q", 2), vec!["B", "C"]);
    }

    #[test]
    fn test_duplicate_titles_never_recommended_twice() {
        let store = store(
            &["Dune", "Heat", "Dune", "Ronin", "Heat"],
            vec![
                vec![1.0, 0.1, 0.9, 0.05, 0.3],
                vec![0.1, 1.0, 0.2, 0.8, 0.9],
                vec![0.9, 0.2, 1.0, 0.1, 0.2],
                vec![0.05, 0.8, 0.1, 1.0, 0.7],
                vec![0.3, 0.9, 0.2, 0.7, 1.0],
            ],
        );
        let recommender = Recommender::new(&store);

        assert_eq!(recommender.recommend("Dune", 2), vec!["Heat", "Ronin"]);
        assert_eq!(recommender.recommend("Heat", 5), vec!["Ronin", "Dune"]);
    }

    #[test]
    fn test_unknown_title_is_empty() {
        let store = sample_store();
        let recommender = Recommender::new(&store);

        assert!(recommender.recommend("Unknown Title", 5).is_empty());
    }

    #[test]
    fn test_k_larger_than_neighbours() {
        let store = sample_store();
        let recommender = Recommender::new(&store);

        assert_eq!(recommender.recommend("D", 10), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_zero_k() {
        let store = sample_store();
        assert!(Recommender::new(&store).recommend("A", 0).is_empty());
    }

    #[test]
    fn test_single_title_has_no_neighbours() {
        let store = store(&["Solo"], vec![vec![1.0]]);
        assert!(Recommender::new(&store).recommend("Solo", 5).is_empty());
    }

    #[test]
    fn test_properties_hold_for_every_title() {
        let store = sample_store();
        let recommender = Recommender::new(&store);

        for query in store.titles() {
            for k in 0..=5 {
                let recommendations = recommender.recommend(query, k);

                assert!(recommendations.len() <= k);
                assert!(!recommendations.contains(&query.as_str()));

                let distinct: HashSet<_> = recommendations.iter().collect();
                assert_eq!(distinct.len(), recommendations.len());

                for pair in recommendations.windows(2) {
                    assert!(score(&store, query, pair[0]) >= score(&store, query, pair[1]));
                }

                assert_eq!(recommendations, recommender.recommend(query, k));
            }
        }
    }

    #[test]
    fn test_default_count() {
        let names: Vec<String> = (0..8).map(|i| format!("Movie {}", i)).collect();
        let matrix = (0..8)
            .map(|i| {
                (0..8)
                    .map(|j| if i == j { 1.0 } else { 1.0 / (1.0 + (i as f64 - j as f64).abs()) })
                    .collect()
            })
            .collect();
        let store = SimilarityStore::new(names, matrix).unwrap();

        let recommendations = Recommender::new(&store).recommend("Movie 0", DEFAULT_RECOMMENDATIONS);
        assert_eq!(
            recommendations,
            vec!["Movie 1", "Movie 2", "Movie 3", "Movie 4", "Movie 5"]
        );
    }
}
