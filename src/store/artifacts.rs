use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

use super::SimilarityStore;

/// Accepted shapes of the title index artifact
///
/// Either a plain list of titles or the record export of a movie table,
/// where each record carries at least a `title` column.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TitleArtifact {
    Plain(Vec<String>),
    Records(Vec<MovieRecord>),
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    title: String,
}

impl From<TitleArtifact> for Vec<String> {
    fn from(artifact: TitleArtifact) -> Self {
        match artifact {
            TitleArtifact::Plain(titles) => titles,
            TitleArtifact::Records(records) => records.into_iter().map(|r| r.title).collect(),
        }
    }
}

/// Loads a store from the two artifact files on disk
pub fn load_from_paths(
    titles_path: impl AsRef<Path>,
    similarity_path: impl AsRef<Path>,
) -> Result<SimilarityStore, LoadError> {
    let titles = open(titles_path.as_ref())?;
    let similarity = open(similarity_path.as_ref())?;

    let store = load_from_readers(titles, similarity)?;

    tracing::info!(
        titles = store.len(),
        titles_path = %titles_path.as_ref().display(),
        similarity_path = %similarity_path.as_ref().display(),
        "Similarity store loaded"
    );

    Ok(store)
}

/// Loads a store from JSON readers
///
/// The title reader yields either `["A", "B"]` or `[{"title": "A"}, ...]`;
/// the similarity reader yields an array of rows of numbers.
pub fn load_from_readers<T, S>(titles: T, similarity: S) -> Result<SimilarityStore, LoadError>
where
    T: Read,
    S: Read,
{
    let titles: TitleArtifact = serde_json::from_reader(titles)?;
    let matrix: Vec<Vec<f64>> = serde_json::from_reader(similarity)?;

    SimilarityStore::new(titles.into(), matrix)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}
