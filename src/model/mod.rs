//! Model module - Application state and data types
//!
//! - `types`: view state, search bar state and UI focus
//! - `record`: result records and their display fallbacks
//! - `search_client`: HTTP client for the search service
//! - `app_model`: Main application model with state management methods

mod types;
mod record;
mod search_client;
mod app_model;

pub use types::{
    Focus, Outcome, SearchBarState, SearchPhase, UiState, ViewState, SEARCH_FAILED_MESSAGE,
};

pub use record::ResultRecord;

pub use search_client::{PodcastSearchClient, SearchApi, SearchError};

pub use app_model::AppModel;
