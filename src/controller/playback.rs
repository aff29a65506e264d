//! Play control: hand the selected episode's media URL to the system.

use super::AppController;

impl AppController {
    /// Open the selected result's play URL. Returns the URL that was handed to
    /// the opener, or `None` when there was nothing to play.
    pub async fn play_selected(&self) -> Option<String> {
        let record = self.model.get_selected_record().await?;
        let Some(url) = record.play_url() else {
            tracing::warn!(title = record.title(), "Selected result has no playable URL");
            return None;
        };

        tracing::info!(url, "Opening play URL");
        if let Err(e) = (self.opener)(url) {
            tracing::error!(url, error = %e, "Failed to open play URL");
        }
        Some(url.to_string())
    }
}
