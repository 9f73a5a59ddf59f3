use serde::{Deserialize, Serialize};

/// Text shown in place of any metadata field the API did not supply
pub const NOT_AVAILABLE: &str = "N/A";

const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";
const METACRITIC: &str = "Metacritic";

/// Descriptive metadata for a movie
///
/// Every field is optional: the metadata API omits or blanks fields freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub plot: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    /// Poster image URL
    pub poster: Option<String>,
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

/// A single review-aggregator score, e.g. `Rotten Tomatoes: 87%`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

impl MovieDetails {
    pub fn rating_from(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|rating| rating.source == source)
            .map(|rating| rating.value.as_str())
    }

    pub fn rotten_tomatoes(&self) -> Option<&str> {
        self.rating_from(ROTTEN_TOMATOES)
    }

    pub fn metacritic(&self) -> Option<&str> {
        self.rating_from(METACRITIC)
    }
}

/// Renders an optional field, substituting [`NOT_AVAILABLE`]
pub fn or_not_available(field: Option<&str>) -> &str {
    field.unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(ratings: &[(&str, &str)]) -> MovieDetails {
        MovieDetails {
            ratings: ratings
                .iter()
                .map(|(source, value)| Rating {
                    source: source.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ratings_found_by_source() {
        let details = rated(&[
            ("Internet Movie Database", "7.9/10"),
            ("Rotten Tomatoes", "81%"),
            ("Metacritic", "83/100"),
        ]);

        assert_eq!(details.rotten_tomatoes(), Some("81%"));
        assert_eq!(details.metacritic(), Some("83/100"));
    }

    #[test]
    fn test_ratings_missing_source() {
        let details = rated(&[("Internet Movie Database", "6.1/10")]);

        assert_eq!(details.rotten_tomatoes(), None);
        assert_eq!(or_not_available(details.metacritic()), "N/A");
    }
}
