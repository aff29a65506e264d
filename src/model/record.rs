//! Result records as returned by the search service, plus the fallback
//! resolvers used when rendering them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single podcast episode from the search service.
///
/// Every field is optional; the service makes no promise about which ones are
/// present for a given episode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(rename = "keywords__itunes", deserialize_with = "lenient_text")]
    pub keywords: Option<String>,
    #[serde(rename = "summary__itunes", deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(rename = "content_1__url", deserialize_with = "lenient_text")]
    pub content_image_url: Option<String>,
    #[serde(rename = "thumbnail__url", deserialize_with = "lenient_text")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "image__href", deserialize_with = "lenient_text")]
    pub image_href: Option<String>,
    #[serde(rename = "content_0_player_url", deserialize_with = "lenient_text")]
    pub player_url: Option<String>,
    #[serde(rename = "enclosure__url", deserialize_with = "lenient_text")]
    pub enclosure_url: Option<String>,
}

impl ResultRecord {
    /// Image to show for the card: `content_1__url`, then `thumbnail__url`,
    /// then `image__href`.
    pub fn image_source(&self) -> Option<&str> {
        first_present(&[
            &self.content_image_url,
            &self.thumbnail_url,
            &self.image_href,
        ])
    }

    /// URL opened by the play control: `content_0_player_url`, then
    /// `enclosure__url`.
    pub fn play_url(&self) -> Option<&str> {
        first_present(&[&self.player_url, &self.enclosure_url])
    }

    /// Alt text for the image. No fallback.
    pub fn alt_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn keywords(&self) -> &str {
        self.keywords.as_deref().unwrap_or_default()
    }
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}

/// Body of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultRecord>,
}

/// Body of `GET /episodes`.
#[derive(Debug, Deserialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<ResultRecord>,
}

/// Accept any JSON scalar (or array of scalars) as display text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_text).collect();
            Some(parts.join(", "))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResultRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn image_falls_back_to_image_href() {
        let r = record(json!({ "image__href": "https://img/href.png" }));
        assert_eq!(r.image_source(), Some("https://img/href.png"));
    }

    #[test]
    fn image_prefers_content_url_over_thumbnail() {
        let r = record(json!({
            "content_1__url": "https://img/content.png",
            "thumbnail__url": "https://img/thumb.png",
        }));
        assert_eq!(r.image_source(), Some("https://img/content.png"));
    }

    #[test]
    fn empty_strings_do_not_win_the_fallback() {
        let r = record(json!({
            "content_1__url": "",
            "thumbnail__url": "https://img/thumb.png",
        }));
        assert_eq!(r.image_source(), Some("https://img/thumb.png"));
        assert_eq!(ResultRecord::default().image_source(), None);
    }

    #[test]
    fn play_url_prefers_player_then_enclosure() {
        let both = record(json!({
            "content_0_player_url": "https://player/1",
            "enclosure__url": "https://cdn/1.mp3",
        }));
        assert_eq!(both.play_url(), Some("https://player/1"));

        let enclosure = record(json!({ "enclosure__url": "https://cdn/1.mp3" }));
        assert_eq!(enclosure.play_url(), Some("https://cdn/1.mp3"));

        assert_eq!(ResultRecord::default().play_url(), None);
    }

    #[test]
    fn alt_text_does_not_fall_back_to_title() {
        let r = record(json!({ "title": "Episode" }));
        assert_eq!(r.alt_text(), "");

        let r = record(json!({ "summary__itunes": "Cover art" }));
        assert_eq!(r.alt_text(), "Cover art");
    }

    #[test]
    fn loose_values_render_as_text() {
        let r = record(json!({
            "title": 42,
            "author": null,
            "keywords__itunes": ["strategy", "business"],
            "description": true,
            "unrelated": { "nested": 1 },
        }));
        assert_eq!(r.title(), "42");
        assert_eq!(r.author, None);
        assert_eq!(r.author(), "");
        assert_eq!(r.keywords(), "strategy, business");
        assert_eq!(r.description(), "true");
    }

    #[test]
    fn search_response_requires_results() {
        let ok: SearchResponse =
            serde_json::from_value(json!({ "results": [{ "title": "A" }] })).unwrap();
        assert_eq!(ok.results.len(), 1);
        assert_eq!(ok.results[0].title(), "A");

        assert!(serde_json::from_value::<SearchResponse>(json!({ "episodes": [] })).is_err());
    }
}
