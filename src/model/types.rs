//! Core type definitions for the application

use super::record::ResultRecord;

/// Message shown for every failed search, whatever the cause.
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// Which part of the UI receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchBar,
    Results,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::SearchBar => Focus::Results,
            Focus::Results => Focus::SearchBar,
        }
    }
}

/// How the most recent search ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

/// Lifecycle of the most recent search request
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// A request tagged with `generation` is in flight.
    Loading { generation: u64 },
    Settled(Outcome),
}

/// State owned by the controller and drawn by the view.
///
/// Results sit beside the phase rather than inside it: a failed search keeps
/// whatever the previous successful search returned.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub results: Vec<ResultRecord>,
    pub phase: SearchPhase,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Settled(Outcome::Failure(message)) => Some(message),
            _ => None,
        }
    }

    /// Generation of the in-flight request, if any.
    pub fn loading_generation(&self) -> Option<u64> {
        match self.phase {
            SearchPhase::Loading { generation } => Some(generation),
            _ => None,
        }
    }
}

/// Text input plus the one-shot banner collapse.
#[derive(Clone, Debug)]
pub struct SearchBarState {
    pub query: String,
    pub is_expanded: bool,
}

impl Default for SearchBarState {
    fn default() -> Self {
        Self {
            query: String::new(),
            is_expanded: true,
        }
    }
}

impl SearchBarState {
    pub fn push_char(&mut self, c: char, is_searching: bool) {
        if !is_searching {
            self.query.push(c);
        }
    }

    pub fn backspace(&mut self, is_searching: bool) {
        if !is_searching {
            self.query.pop();
        }
    }

    pub fn clear(&mut self, is_searching: bool) {
        if !is_searching {
            self.query.clear();
        }
    }

    /// Validate the current text and hand it back for searching.
    ///
    /// The emptiness check uses the trimmed text but the returned query is the
    /// text exactly as typed.
    pub fn submit(&mut self, is_searching: bool) -> Option<String> {
        if is_searching || self.query.trim().is_empty() {
            return None;
        }
        self.is_expanded = false;
        Some(self.query.clone())
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub selected: usize,
    pub show_help_popup: bool,
}
