//! TMDb HTTP client and trailer resolution.
//!
//! The resolver is state-free and makes two remote calls in sequence: a title
//! search and a video listing for the first search hit. Candidate videos are
//! then filtered by site, category, and official flag. The selection policy
//! is precision over recall: without an officially flagged trailer the
//! resolver returns nothing rather than falling back to fan uploads.

use crate::error::{Error, Result};
use crate::tmdb::models::{SearchResponse, TrailerRef, Video, VideosResponse};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Production TMDb API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Hosting site a candidate must live on.
const TRAILER_SITE: &str = "YouTube";
/// Video category a candidate must declare.
const TRAILER_KIND: &str = "Trailer";

/// Client for The Movie Database.
///
/// Constructed once per batch. A missing or blank API key disables lookups
/// entirely: every resolution returns "no trailer" without touching the
/// network.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbClient {
    /// Create a client with the given API key.
    ///
    /// The key is trimmed; a blank key counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Point the client at a different API base URL.
    ///
    /// Primarily a seam for tests running against a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether metadata lookup is enabled (an API key is configured).
    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Resolve an official trailer reference for a title.
    ///
    /// Fails soft: every transport or decoding problem is logged at warning
    /// level and mapped to `Ok(None)`, so a metadata failure can never abort
    /// an item or the batch. The only error this returns is
    /// [`Error::Canceled`].
    pub async fn find_trailer(
        &self,
        title: &str,
        year: Option<i32>,
        language: &str,
        region: &str,
        token: &CancellationToken,
    ) -> Result<Option<TrailerRef>> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no TMDb API key configured, skipping trailer lookup");
            return Ok(None);
        };

        let lookup = self.lookup(api_key, title, year, language, region);
        let outcome = tokio::select! {
            outcome = lookup => outcome,
            _ = token.cancelled() => return Err(Error::Canceled),
        };

        match outcome {
            Ok(trailer) => Ok(trailer),
            Err(e) => {
                warn!(title, error = %e, "TMDb trailer lookup failed");
                Ok(None)
            }
        }
    }

    /// The two-call lookup chain: search, then list the first hit's videos.
    async fn lookup(
        &self,
        api_key: &str,
        title: &str,
        year: Option<i32>,
        language: &str,
        region: &str,
    ) -> Result<Option<TrailerRef>> {
        // 1) Search for the title. Adult content is always excluded.
        let mut query = vec![
            ("api_key", api_key.to_string()),
            ("query", title.to_string()),
            ("include_adult", "false".to_string()),
            ("language", language.to_string()),
            ("region", region.to_string()),
        ];
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }

        let search: SearchResponse = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(first) = search.results.first() else {
            debug!(title, "no TMDb search results");
            return Ok(None);
        };

        // 2) List the videos attached to that title.
        let videos: VideosResponse = self
            .http
            .get(format!("{}/movie/{}/videos", self.base_url, first.id))
            .query(&[("api_key", api_key), ("language", language)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(pick_official_trailer(&videos.results))
    }
}

/// Select the first officially flagged YouTube trailer, in provider order.
///
/// A candidate qualifies only if it is hosted on YouTube, declared a trailer
/// (both case-insensitive), and carries a non-empty key. Qualifying but
/// unofficial candidates never win: only officially marked trailers are
/// downloaded.
pub(crate) fn pick_official_trailer(videos: &[Video]) -> Option<TrailerRef> {
    videos
        .iter()
        .filter(|v| v.site.eq_ignore_ascii_case(TRAILER_SITE))
        .filter(|v| v.kind.eq_ignore_ascii_case(TRAILER_KIND))
        .filter(|v| !v.key.trim().is_empty())
        .find(|v| v.official)
        .map(TrailerRef::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn videos(payload: &str) -> Vec<Video> {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn test_client_blank_key_disabled() {
        assert!(!TmdbClient::new(None).enabled());
        assert!(!TmdbClient::new(Some("   ".to_string())).enabled());
        assert!(TmdbClient::new(Some("key".to_string())).enabled());
    }

    #[test]
    fn test_pick_official_wins_over_unofficial() {
        let videos = videos(
            r#"[
                {"site":"YouTube","type":"Trailer","key":"AAA","official":false},
                {"site":"YouTube","type":"Trailer","key":"BBB","official":true}
            ]"#,
        );
        let trailer = pick_official_trailer(&videos).unwrap();
        assert_eq!(trailer.key, "BBB");
        assert!(trailer.official);
    }

    #[test]
    fn test_pick_no_fallback_to_unofficial() {
        let videos = videos(r#"[{"site":"YouTube","type":"Trailer","key":"AAA","official":false}]"#);
        assert_eq!(pick_official_trailer(&videos), None);
    }

    #[test]
    fn test_pick_filters_site_and_kind() {
        let videos = videos(
            r#"[
                {"site":"Vimeo","type":"Trailer","key":"AAA","official":true},
                {"site":"YouTube","type":"Featurette","key":"BBB","official":true},
                {"site":"youtube","type":"trailer","key":"CCC","official":true}
            ]"#,
        );
        // Matching is case-insensitive, so only the third entry qualifies.
        let trailer = pick_official_trailer(&videos).unwrap();
        assert_eq!(trailer.key, "CCC");
    }

    #[test]
    fn test_pick_rejects_empty_keys() {
        let videos = videos(
            r#"[
                {"site":"YouTube","type":"Trailer","key":"  ","official":true},
                {"site":"YouTube","type":"Trailer","official":true}
            ]"#,
        );
        assert_eq!(pick_official_trailer(&videos), None);
    }

    #[test]
    fn test_pick_first_official_short_circuits() {
        let videos = videos(
            r#"[
                {"site":"YouTube","type":"Trailer","key":"FIRST","official":true},
                {"site":"YouTube","type":"Trailer","key":"SECOND","official":true}
            ]"#,
        );
        assert_eq!(pick_official_trailer(&videos).unwrap().key, "FIRST");
    }

    #[test]
    fn test_pick_empty_list() {
        assert_eq!(pick_official_trailer(&[]), None);
    }
}
