use serde::{Deserialize, Serialize};

/// Trims a user-supplied title; blank input is no title at all
pub fn normalize_title(input: &str) -> Option<&str> {
    Some(input.trim()).filter(|title| !title.is_empty())
}

/// A discrete user interaction that may change the movie being viewed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Free text typed into the search box
    SearchSubmitted(String),
    /// A title picked from the browse list
    BrowseSelected(String),
    /// A recommendation card was clicked
    RecommendationPicked(String),
}

impl SessionEvent {
    /// Resolves the two page inputs into one event
    ///
    /// Non-blank search text wins over the browse selection.
    pub fn from_inputs(search: Option<&str>, selected: Option<&str>) -> Option<Self> {
        let search = search.and_then(normalize_title);
        let selected = selected.and_then(normalize_title);

        match (search, selected) {
            (Some(text), _) => Some(SessionEvent::SearchSubmitted(text.to_string())),
            (None, Some(title)) => Some(SessionEvent::BrowseSelected(title.to_string())),
            (None, None) => None,
        }
    }

    fn title(&self) -> &str {
        match self {
            SessionEvent::SearchSubmitted(title)
            | SessionEvent::BrowseSelected(title)
            | SessionEvent::RecommendationPicked(title) => title,
        }
    }
}

/// The movie the user is currently looking at, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after `event`; blank input leaves it unchanged
    pub fn apply(&self, event: SessionEvent) -> Self {
        match normalize_title(event.title()) {
            Some(title) => Self {
                current: Some(title.to_string()),
            },
            None => self.clone(),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        assert_eq!(SessionState::new().current(), None);
    }

    #[test]
    fn test_each_event_sets_current() {
        let state = SessionState::new();

        let state = state.apply(SessionEvent::SearchSubmitted("Avatar".to_string()));
        assert_eq!(state.current(), Some("Avatar"));

        let state = state.apply(SessionEvent::BrowseSelected("Titanic".to_string()));
        assert_eq!(state.current(), Some("Titanic"));

        let state = state.apply(SessionEvent::RecommendationPicked("Aliens".to_string()));
        assert_eq!(state.current(), Some("Aliens"));
    }

    #[test]
    fn test_apply_does_not_mutate_previous_state() {
        let before = SessionState::new().apply(SessionEvent::BrowseSelected("Heat".to_string()));
        let after = before.apply(SessionEvent::SearchSubmitted("Ronin".to_string()));

        assert_eq!(before.current(), Some("Heat"));
        assert_eq!(after.current(), Some("Ronin"));
    }

    #[test]
    fn test_blank_input_keeps_state() {
        let state = SessionState::new().apply(SessionEvent::BrowseSelected("Heat".to_string()));
        let state = state.apply(SessionEvent::SearchSubmitted("   ".to_string()));

        assert_eq!(state.current(), Some("Heat"));
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Alien "), Some("Alien"));
        assert_eq!(normalize_title("\t"), None);
        assert_eq!(normalize_title(""), None);
    }

    #[test]
    fn test_search_text_wins_over_selection() {
        assert_eq!(
            SessionEvent::from_inputs(Some("Avatar"), Some("Titanic")),
            Some(SessionEvent::SearchSubmitted("Avatar".to_string()))
        );
        assert_eq!(
            SessionEvent::from_inputs(Some(""), Some("Titanic")),
            Some(SessionEvent::BrowseSelected("Titanic".to_string()))
        );
        assert_eq!(SessionEvent::from_inputs(None, Some(" ")), None);
        assert_eq!(SessionEvent::from_inputs(None, None), None);
    }
}
