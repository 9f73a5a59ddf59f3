pub mod page;
pub mod providers;
pub mod recommender;
pub mod session;

pub use page::{handle_query, PageView};
pub use recommender::{Recommender, DEFAULT_RECOMMENDATIONS};
pub use session::{normalize_title, SessionEvent, SessionState};
