//! Test helpers for reader state tests.
//!
//! Hover commands spawn tokio tasks (debounce timers, preview fetches),
//! so a runtime must be active while a test drives the context. Tests
//! hold the guard returned by [`init`] for their whole body.

use std::sync::mpsc;
use std::sync::OnceLock;

use folio_core::{ArticleRef, Slug};

use crate::config::FolioConfig;
use crate::state::{ReaderCommand, ReaderContext};

/// Global Tokio runtime shared across all tests.
///
/// It lives in a `OnceLock` so it survives for the entire test process;
/// individual tests enter it on their own thread.
static TEST_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Enter the shared Tokio runtime on the calling thread.
///
/// Keep the returned guard alive for the duration of the test.
pub(crate) fn init() -> tokio::runtime::EnterGuard<'static> {
    let runtime = TEST_RUNTIME
        .get_or_init(|| tokio::runtime::Runtime::new().expect("tokio runtime should start"));
    runtime.enter()
}

/// Parse a slug that is known to be valid in tests.
pub(crate) fn slug(raw: &str) -> Slug {
    raw.parse().expect("test slug should be valid")
}

/// Create a `ReaderContext` over the given `(slug, title)` pairs with a
/// default config.
///
/// Returns the context together with the command sender so tests can
/// inject commands the way components and background tasks would.
pub(crate) fn test_context(
    articles: &[(&str, &str)],
) -> (ReaderContext, mpsc::Sender<ReaderCommand>) {
    let articles = articles
        .iter()
        .map(|(raw, title)| ArticleRef {
            slug: slug(raw),
            title: (*title).to_string(),
        })
        .collect();

    let (tx, rx) = mpsc::channel();
    let config = FolioConfig::default();
    let ctx = ReaderContext::new(&config, articles, rx, tx.clone())
        .expect("ReaderContext creation should succeed");
    (ctx, tx)
}

/// The snapshot entry for `slug`, panicking if the article is unknown.
pub(crate) fn snapshot_entry(
    ctx: &ReaderContext,
    raw: &str,
) -> crate::state::ArticleLinkSnapshot {
    ctx.snapshot()
        .articles
        .into_iter()
        .find(|article| article.slug == raw)
        .expect("article should be in the snapshot")
}
