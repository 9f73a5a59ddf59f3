use serde::{Deserialize, Deserializer, Serialize};

pub mod movie;

pub use movie::{or_not_available, MovieDetails, Rating, NOT_AVAILABLE};

/// A recommended title paired with its poster, if one could be fetched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub poster: Option<String>,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw response from `GET /?t={title}`
///
/// OMDb answers HTTP 200 for misses too; the `Response` field says which.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "Response")]
pub enum OmdbResponse {
    #[serde(rename = "True")]
    Found(OmdbMovie),
    #[serde(rename = "False")]
    NotFound {
        #[serde(rename = "Error", default)]
        error: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    #[serde(default, deserialize_with = "available")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub rated: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub actors: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "available")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "available")]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    pub source: String,
    pub value: String,
}

/// Maps OMDb's `"N/A"` placeholder and blank strings to `None`
fn available<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE))
}

impl From<OmdbMovie> for MovieDetails {
    fn from(movie: OmdbMovie) -> Self {
        MovieDetails {
            title: movie.title,
            year: movie.year,
            rated: movie.rated,
            runtime: movie.runtime,
            plot: movie.plot,
            genre: movie.genre,
            director: movie.director,
            cast: movie.actors,
            country: movie.country,
            poster: movie.poster,
            imdb_rating: movie.imdb_rating,
            ratings: movie
                .ratings
                .into_iter()
                .map(|rating| Rating {
                    source: rating.source,
                    value: rating.value,
                })
                .collect(),
        }
    }
}

impl OmdbResponse {
    /// The movie record, or `None` when OMDb reported a miss
    pub fn into_details(self) -> Option<MovieDetails> {
        match self {
            OmdbResponse::Found(movie) => Some(movie.into()),
            OmdbResponse::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_found_response() {
        let response: OmdbResponse = serde_json::from_value(json!({
            "Title": "Avatar",
            "Year": "2009",
            "Rated": "PG-13",
            "Runtime": "162 min",
            "Genre": "Action, Adventure, Fantasy",
            "Director": "James Cameron",
            "Actors": "Sam Worthington, Zoe Saldana, Sigourney Weaver",
            "Plot": "A paraplegic Marine dispatched to the moon Pandora...",
            "Country": "United States",
            "Poster": "https://m.media-amazon.com/images/avatar.jpg",
            "Ratings": [
                { "Source": "Internet Movie Database", "Value": "7.9/10" },
                { "Source": "Rotten Tomatoes", "Value": "81%" },
                { "Source": "Metacritic", "Value": "83/100" }
            ],
            "imdbRating": "7.9",
            "Response": "True"
        }))
        .unwrap();

        let details = response.into_details().unwrap();

        assert_eq!(details.title.as_deref(), Some("Avatar"));
        assert_eq!(details.director.as_deref(), Some("James Cameron"));
        assert_eq!(
            details.cast.as_deref(),
            Some("Sam Worthington, Zoe Saldana, Sigourney Weaver")
        );
        assert_eq!(details.imdb_rating.as_deref(), Some("7.9"));
        assert_eq!(details.ratings.len(), 3);
        assert_eq!(details.rotten_tomatoes(), Some("81%"));
    }

    #[test]
    fn test_placeholder_fields_become_none() {
        let response: OmdbResponse = serde_json::from_value(json!({
            "Title": "Obscure Film",
            "Plot": "N/A",
            "Poster": "N/A",
            "Country": "",
            "Response": "True"
        }))
        .unwrap();

        let OmdbResponse::Found(movie) = response else {
            panic!("expected a found response");
        };
        assert_eq!(movie.plot, None);
        assert_eq!(movie.poster, None);
        assert_eq!(movie.country, None);
        assert_eq!(movie.genre, None);
        assert!(movie.ratings.is_empty());
    }

    #[test]
    fn test_not_found_response() {
        let response: OmdbResponse = serde_json::from_value(json!({
            "Response": "False",
            "Error": "Movie not found!"
        }))
        .unwrap();

        assert!(matches!(
            &response,
            OmdbResponse::NotFound { error: Some(e) } if e == "Movie not found!"
        ));
        assert!(response.into_details().is_none());
    }
}
