//! Command and snapshot types for the reader.

use folio_core::Slug;

/// Commands sent to the reader context.
///
/// UI components and background tasks both talk to the reader by sending
/// commands; the context processes them in arrival order on the main
/// thread, so a leave that arrives before a timer expiry always wins.
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderCommand {
    /// Pointer entered an article link.
    HoverEnter(Slug),
    /// Pointer left an article link.
    HoverLeave(Slug),
    /// A hover debounce delay ran to completion.
    PreviewDelayElapsed { slug: Slug, generation: u64 },
    /// A preview fetch finished: the fragment body on success, a message
    /// on failure.
    PreviewLoaded {
        slug: Slug,
        generation: u64,
        result: Result<String, String>,
    },
}

/// A read-only snapshot of reader state for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderSnapshot {
    /// Bumped on every processed command; lets the UI detect staleness
    /// without diffing the whole snapshot.
    pub revision: u64,
    /// Articles in the reading list, in display order.
    pub articles: Vec<ArticleLinkSnapshot>,
}

/// One article link, plus its popover body when a preview is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleLinkSnapshot {
    pub slug: String,
    pub title: String,
    /// Raw HTML fragment currently displayed for this link, if any.
    pub popup_html: Option<String>,
}
