//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::record::ResultRecord;
use super::types::{
    Focus, Outcome, SearchBarState, SearchPhase, UiState, ViewState, SEARCH_FAILED_MESSAGE,
};

/// Main application model containing all state
pub struct AppModel {
    view_state: Arc<Mutex<ViewState>>,
    search_bar: Arc<Mutex<SearchBarState>>,
    ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
    /// Issues request tags; the view state records which one it waits on.
    generation: Arc<Mutex<u64>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            view_state: Arc::new(Mutex::new(ViewState::default())),
            search_bar: Arc::new(Mutex::new(SearchBarState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            generation: Arc::new(Mutex::new(0)),
        }
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    pub async fn get_view_state(&self) -> ViewState {
        self.view_state.lock().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.view_state.lock().await.is_loading()
    }

    /// Enter `Loading` for a new request and return its generation tag.
    pub async fn begin_search(&self) -> u64 {
        let mut generation = self.generation.lock().await;
        *generation += 1;
        let current = *generation;

        let mut state = self.view_state.lock().await;
        state.phase = SearchPhase::Loading { generation: current };
        current
    }

    /// Apply a finished request. Returns `false` when the view is no longer
    /// waiting on `generation`; the response is then dropped.
    pub async fn settle_search<E: std::fmt::Display>(
        &self,
        generation: u64,
        result: Result<Vec<ResultRecord>, E>,
    ) -> bool {
        // check and write under one lock so a concurrent begin_search cannot
        // slip in between
        let mut state = self.view_state.lock().await;
        if state.loading_generation() != Some(generation) {
            tracing::debug!(
                generation,
                current = ?state.loading_generation(),
                "Discarding stale search response"
            );
            return false;
        }

        match result {
            Ok(results) => {
                state.results = results;
                state.phase = SearchPhase::Settled(Outcome::Success);
                drop(state);
                self.ui_state.lock().await.selected = 0;
            }
            Err(e) => {
                tracing::error!(generation, error = %e, "Search error");
                state.phase = SearchPhase::Settled(Outcome::Failure(SEARCH_FAILED_MESSAGE.to_string()));
            }
        }
        true
    }

    // ========================================================================
    // Search bar
    // ========================================================================

    pub async fn get_search_bar(&self) -> SearchBarState {
        self.search_bar.lock().await.clone()
    }

    pub async fn append_to_search(&self, c: char) {
        let is_searching = self.is_loading().await;
        self.search_bar.lock().await.push_char(c, is_searching);
    }

    pub async fn backspace_search(&self) {
        let is_searching = self.is_loading().await;
        self.search_bar.lock().await.backspace(is_searching);
    }

    pub async fn clear_search(&self) {
        let is_searching = self.is_loading().await;
        self.search_bar.lock().await.clear(is_searching);
    }

    pub async fn submit_search(&self) -> Option<String> {
        let is_searching = self.is_loading().await;
        self.search_bar.lock().await.submit(is_searching)
    }

    // ========================================================================
    // Focus, selection, popups
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_focus(&self, focus: Focus) {
        self.ui_state.lock().await.focus = focus;
    }

    pub async fn toggle_focus(&self) {
        let mut state = self.ui_state.lock().await;
        state.focus = state.focus.toggle();
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected = state.selected.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let count = self.view_state.lock().await.results.len();
        let mut state = self.ui_state.lock().await;
        if state.selected < count.saturating_sub(1) {
            state.selected += 1;
        }
    }

    pub async fn get_selected_record(&self) -> Option<ResultRecord> {
        let selected = self.ui_state.lock().await.selected;
        self.view_state.lock().await.results.get(selected).cloned()
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
