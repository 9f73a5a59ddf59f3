//! Movie metadata provider abstraction
//!
//! The recommender only knows titles; descriptive fields (plot, cast, poster)
//! come from an external movie database behind this trait, so the HTTP client
//! can be swapped for a stub in tests.

use std::sync::Arc;

use crate::{error::AppResult, models::MovieDetails};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch metadata for a movie by exact title
    ///
    /// `Ok(None)` means the provider answered but does not know the title;
    /// `Err` means the lookup itself failed.
    async fn fetch_details(&self, title: &str) -> AppResult<Option<MovieDetails>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Fetches metadata for several titles in parallel
///
/// Results come back in input order, each paired with its title. A failed or
/// empty lookup yields `None` for that title and never affects the others.
pub async fn fetch_details_batch(
    provider: Arc<dyn MetadataProvider>,
    titles: Vec<String>,
) -> Vec<(String, Option<MovieDetails>)> {
    let mut tasks = Vec::with_capacity(titles.len());

    for title in titles {
        let provider = provider.clone();
        let query = title.clone();
        let task = tokio::spawn(async move { provider.fetch_details(&query).await });
        tasks.push((title, task));
    }

    let mut results = Vec::with_capacity(tasks.len());
    let mut error_count = 0;

    for (title, task) in tasks {
        let details = match task.await {
            Ok(Ok(details)) => details,
            Ok(Err(e)) => {
                tracing::error!(
                    title = %title,
                    provider = provider.name(),
                    error = %e,
                    "Metadata fetch failed for title"
                );
                error_count += 1;
                None
            }
            Err(e) => {
                tracing::error!(title = %title, error = %e, "Task join error");
                error_count += 1;
                None
            }
        };
        results.push((title, details));
    }

    if error_count > 0 {
        tracing::warn!(
            success_count = results.len() - error_count,
            error_count,
            "Partial metadata fetch failure"
        );
    }

    results
}
