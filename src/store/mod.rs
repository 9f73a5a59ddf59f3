pub mod artifacts;
pub mod similarity;

pub use artifacts::{load_from_paths, load_from_readers};
pub use similarity::SimilarityStore;
