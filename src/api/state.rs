use std::sync::Arc;

use crate::services::providers::MetadataProvider;
use crate::store::SimilarityStore;

/// Shared application state
///
/// The store is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SimilarityStore>,
    pub metadata: Arc<dyn MetadataProvider>,
    /// Recommendations per movie when a request does not ask for a count
    pub recommendation_count: usize,
}

impl AppState {
    pub fn new(
        store: Arc<SimilarityStore>,
        metadata: Arc<dyn MetadataProvider>,
        recommendation_count: usize,
    ) -> Self {
        Self {
            store,
            metadata,
            recommendation_count,
        }
    }
}
