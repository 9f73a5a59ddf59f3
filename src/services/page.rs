use std::sync::Arc;

use serde::Serialize;

use crate::{
    models::{MovieDetails, RecommendationCard},
    services::{
        providers::{fetch_details_batch, MetadataProvider},
        Recommender, SessionState,
    },
    store::SimilarityStore,
};

/// Everything the page needs to render one interaction
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageView {
    /// Nothing has been searched or selected yet
    Empty,
    /// The query is not in the title index
    NotInDatabase { title: String },
    /// The title is known but its own metadata could not be fetched
    DetailsUnavailable {
        title: String,
        recommendations: Vec<RecommendationCard>,
    },
    Movie {
        title: String,
        details: MovieDetails,
        recommendations: Vec<RecommendationCard>,
    },
}

/// Turns the current session state into a page view
///
/// The selected movie's metadata and the posters for its recommendations are
/// fetched concurrently. Metadata failures degrade to missing fields; they never
/// fail the page.
pub async fn handle_query(
    state: &SessionState,
    store: &SimilarityStore,
    provider: Arc<dyn MetadataProvider>,
    count: usize,
) -> PageView {
    let Some(title) = state.current() else {
        return PageView::Empty;
    };

    if !store.contains(title) {
        tracing::info!(title = %title, "Query not in title index");
        return PageView::NotInDatabase {
            title: title.to_string(),
        };
    }

    let recommended: Vec<String> = Recommender::new(store)
        .recommend(title, count)
        .into_iter()
        .map(str::to_string)
        .collect();

    let (details, posters) = tokio::join!(
        provider.fetch_details(title),
        fetch_details_batch(provider.clone(), recommended)
    );

    let recommendations: Vec<RecommendationCard> = posters
        .into_iter()
        .map(|(title, details)| RecommendationCard {
            poster: details.and_then(|d| d.poster),
            title,
        })
        .collect();

    tracing::info!(
        title = %title,
        recommendations = recommendations.len(),
        with_poster = recommendations.iter().filter(|c| c.poster.is_some()).count(),
        "Query handled"
    );

    match details {
        Ok(Some(details)) => PageView::Movie {
            title: title.to_string(),
            details,
            recommendations,
        },
        Ok(None) => PageView::DetailsUnavailable {
            title: title.to_string(),
            recommendations,
        },
        Err(e) => {
            tracing::error!(title = %title, error = %e, "Failed to fetch details");
            PageView::DetailsUnavailable {
                title: title.to_string(),
                recommendations,
            }
        }
    }
}
