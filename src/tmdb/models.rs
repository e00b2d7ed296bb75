//! Typed records for TMDb responses.
//!
//! The provider's JSON is loosely structured: keys may be absent, and absence
//! means "no data" rather than an error. That handling is confined to this
//! decoding layer through serde defaults; everything past the decode operates
//! on fully-populated values.

use serde::Deserialize;

/// Response of the `search/movie` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Search hits, best match first. An absent key decodes as empty.
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// One title in a search response.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    /// The provider's title identifier.
    pub id: i64,
}

/// Response of the `movie/{id}/videos` endpoint.
#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    /// Video entries in provider order. An absent key decodes as empty.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// One video entry attached to a title.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    /// Hosting site, e.g. `"YouTube"`.
    #[serde(default)]
    pub site: String,
    /// Declared category, e.g. `"Trailer"` or `"Featurette"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The site's external video key.
    #[serde(default)]
    pub key: String,
    /// Whether the provider flags this as officially sanctioned content.
    #[serde(default)]
    pub official: bool,
}

/// A resolved trailer reference.
///
/// Created transiently by the resolver and consumed immediately by the
/// fetcher; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerRef {
    /// The external video key on the hosting site.
    pub key: String,
    /// Hosting site the key belongs to.
    pub site: String,
    /// Declared video category.
    pub kind: String,
    /// Official flag as reported by the provider.
    pub official: bool,
}

impl TrailerRef {
    /// The YouTube watch URL for this reference.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

impl From<&Video> for TrailerRef {
    fn from(video: &Video) -> Self {
        Self {
            key: video.key.trim().to_string(),
            site: video.site.clone(),
            kind: video.kind.clone(),
            official: video.official,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_missing_results_key() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_videos_response_missing_results_key() {
        let response: VideosResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_video_defaults_for_absent_fields() {
        let video: Video = serde_json::from_str(r#"{"key":"AAA"}"#).unwrap();
        assert_eq!(video.key, "AAA");
        assert_eq!(video.site, "");
        assert_eq!(video.kind, "");
        assert!(!video.official);
    }

    #[test]
    fn test_video_type_field_renamed() {
        let video: Video =
            serde_json::from_str(r#"{"site":"YouTube","type":"Trailer","key":"BBB"}"#).unwrap();
        assert_eq!(video.kind, "Trailer");
    }

    #[test]
    fn test_watch_url() {
        let trailer = TrailerRef {
            key: "dQw4w9WgXcQ".to_string(),
            site: "YouTube".to_string(),
            kind: "Trailer".to_string(),
            official: true,
        };
        assert_eq!(
            trailer.watch_url(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
