//! Preview fetching.
//!
//! The article server renders popup fragments at `/article/{slug}/popup`;
//! this module owns the client side of that contract: building the URL and
//! fetching the fragment body. The body is returned verbatim — the server
//! owns the fragment markup.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::slug::Slug;

/// How long to wait on the popup endpoint before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors produced by the preview client.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("invalid server URL: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
}

/// HTTP client for an article server's popup endpoint.
#[derive(Debug, Clone)]
pub struct PreviewClient {
    http: Client,
    base_url: Url,
}

impl PreviewClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, PreviewError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| PreviewError::InvalidBaseUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(PreviewError::InvalidBaseUrl(format!(
                "{base_url} cannot carry a path"
            )));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url })
    }

    /// URL of the popup fragment for `slug`.
    #[must_use]
    pub fn popup_url(&self, slug: &Slug) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/article/{slug}/popup",
            self.base_url.path().trim_end_matches('/')
        );
        url.set_path(&path);
        url
    }

    /// Fetch the popup fragment for `slug`.
    ///
    /// Non-2xx answers are errors; the caller decides what a failed
    /// preview means for the UI. Dropping the returned future cancels the
    /// request at the transport level.
    pub async fn fetch_popup(&self, slug: &Slug) -> Result<String, PreviewError> {
        let url = self.popup_url(slug);
        log::debug!("fetching preview from {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::Status(status));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(raw: &str) -> Slug {
        raw.parse().expect("valid slug")
    }

    #[test]
    fn popup_url_appends_the_endpoint_path() {
        let client = PreviewClient::new("http://127.0.0.1:5000").expect("valid base");
        assert_eq!(
            client.popup_url(&slug("hello-world")).as_str(),
            "http://127.0.0.1:5000/article/hello-world/popup"
        );
    }

    #[test]
    fn popup_url_tolerates_trailing_slash() {
        let client = PreviewClient::new("http://127.0.0.1:5000/").expect("valid base");
        assert_eq!(
            client.popup_url(&slug("foo")).as_str(),
            "http://127.0.0.1:5000/article/foo/popup"
        );
    }

    #[test]
    fn popup_url_preserves_a_base_path() {
        let client = PreviewClient::new("https://example.com/blog/").expect("valid base");
        assert_eq!(
            client.popup_url(&slug("foo")).as_str(),
            "https://example.com/blog/article/foo/popup"
        );
    }

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(matches!(
            PreviewClient::new("not a url"),
            Err(PreviewError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_base_url_without_a_path() {
        assert!(matches!(
            PreviewClient::new("mailto:reader@example.com"),
            Err(PreviewError::InvalidBaseUrl(_))
        ));
    }
}
