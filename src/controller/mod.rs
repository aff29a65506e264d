//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! drives the search requests and updates the model.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search and episode-browse requests
//! - `playback`: Opening play URLs for the selected result

mod input;
mod search;
mod playback;

use std::sync::Arc;

use crate::model::{AppModel, SearchApi};

/// Launches a URL in the user's default handler.
pub type UrlOpener = fn(&str) -> std::io::Result<()>;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) api: Arc<dyn SearchApi>,
    pub(crate) opener: UrlOpener,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, api: Arc<dyn SearchApi>) -> Self {
        Self {
            model,
            api,
            opener: open_detached,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }
}

fn open_detached(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}
