//! Search-related controller methods

use tokio::task::JoinHandle;

use super::AppController;

impl AppController {
    /// Start a search for `query` exactly as the search bar handed it over.
    ///
    /// The request runs on its own task; the returned handle resolves once the
    /// response has been applied (or discarded as stale).
    pub async fn handle_search(&self, query: String) -> JoinHandle<()> {
        let generation = self.model.begin_search().await;
        tracing::debug!(query = %query, generation, "Performing search");

        let model = self.model.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.search(&query).await;
            if let Ok(results) = &result {
                tracing::info!(query = %query, generation, results = results.len(), "Search completed");
            }
            model.settle_search(generation, result).await;
        })
    }

    /// Load every episode the service knows about into the results list.
    pub async fn browse_episodes(&self) -> JoinHandle<()> {
        let generation = self.model.begin_search().await;
        tracing::debug!(generation, "Loading all episodes");

        let model = self.model.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.episodes().await;
            if let Ok(episodes) = &result {
                tracing::info!(generation, episodes = episodes.len(), "Episodes loaded");
            }
            model.settle_search(generation, result).await;
        })
    }
}
