use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::MovieDetails,
    services::{
        handle_query, normalize_title, PageView, Recommender, SessionEvent, SessionState,
    },
};

use super::{html, AppState};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub count: usize,
    pub titles: Vec<String>,
}

/// Inputs of the page: search box, browse list and clicked recommendation
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub search: Option<String>,
    pub select: Option<String>,
    pub pick: Option<String>,
}

impl PageQuery {
    /// A clicked recommendation replaces whatever was typed or selected
    fn event(&self) -> Option<SessionEvent> {
        match self.pick.as_deref().and_then(normalize_title) {
            Some(title) => Some(SessionEvent::RecommendationPicked(title.to_string())),
            None => SessionEvent::from_inputs(self.search.as_deref(), self.select.as_deref()),
        }
    }

    fn session(&self) -> SessionState {
        let state = SessionState::new();
        match self.event() {
            Some(event) => state.apply(event),
            None => state,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List every title in the index, in index order
pub async fn list_titles(State(state): State<AppState>) -> Json<TitlesResponse> {
    let titles = state.store.titles().to_vec();
    Json(TitlesResponse {
        count: titles.len(),
        titles,
    })
}

/// Most similar titles for a known title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = query.k.unwrap_or(state.recommendation_count);
    let title = normalize_title(&query.title)
        .ok_or_else(|| AppError::InvalidInput("Movie title cannot be empty".to_string()))?;

    if !state.store.contains(title) {
        return Err(AppError::NotFound(format!(
            "'{}' is not in the database",
            title
        )));
    }

    let recommendations: Vec<String> = Recommender::new(&state.store)
        .recommend(title, k)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::info!(
        request_id = %request_id,
        title = %title,
        k,
        returned = recommendations.len(),
        "Recommendations computed"
    );

    Ok(Json(RecommendationResponse {
        title: title.to_string(),
        recommendations,
    }))
}

/// Metadata for one movie from the external provider
pub async fn movie_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> AppResult<Json<MovieDetails>> {
    let title = normalize_title(&query.title)
        .ok_or_else(|| AppError::InvalidInput("Movie title cannot be empty".to_string()))?;

    state
        .metadata
        .fetch_details(title)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No details found for '{}'", title)))
}

/// The page view for the given inputs, as JSON
pub async fn page_view(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<PageView> {
    let session = query.session();
    let view = handle_query(
        &session,
        &state.store,
        state.metadata.clone(),
        state.recommendation_count,
    )
    .await;
    Json(view)
}

/// The interactive HTML page
pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let session = query.session();
    let view = handle_query(
        &session,
        &state.store,
        state.metadata.clone(),
        state.recommendation_count,
    )
    .await;

    let selected = match &view {
        PageView::Movie { title, .. } | PageView::DetailsUnavailable { title, .. } => {
            Some(title.as_str())
        }
        _ => None,
    };

    Html(html::render_page(&view, state.store.titles(), selected))
}
