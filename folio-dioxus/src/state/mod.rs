//! Reader state management for Dioxus integration.
//!
//! The reader context lives on the main thread and owns all mutable
//! state. Components and background tasks talk to it through
//! `ReaderCommand`s over an mpsc channel, and the UI renders from
//! `ReaderSnapshot`s.
//!
//! Hover previews follow the lifecycle in [`hover`]: mouse-in arms a
//! debounce timer; if the timer expires while the pointer is still on the
//! link, the popup fragment is fetched from the server; the fetched HTML
//! shows as a popover until mouse-out. Leaving the link at any point
//! cancels whichever step is pending.

pub(crate) mod hover;
mod types;

pub use types::{ArticleLinkSnapshot, ReaderCommand, ReaderSnapshot};

use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use folio_core::{ArticleRef, PreviewClient, Slug};

use hover::{HoverPhase, HoverPhaseKind, HoverSlots};

use crate::config::FolioConfig;

/// The reader wrapper that lives on the main thread.
pub struct ReaderContext {
    articles: Vec<ArticleRef>,
    client: PreviewClient,
    hover_delay: Duration,
    hover: HoverSlots,
    command_rx: mpsc::Receiver<ReaderCommand>,
    /// Sender handed to spawned tasks so completions come back as commands.
    pub(crate) command_tx: mpsc::Sender<ReaderCommand>,
    revision: u64,
}

impl ReaderContext {
    /// Create a reader for `articles`, talking to the server named in
    /// `config`.
    pub fn new(
        config: &FolioConfig,
        articles: Vec<ArticleRef>,
        command_rx: mpsc::Receiver<ReaderCommand>,
        command_tx: mpsc::Sender<ReaderCommand>,
    ) -> Result<Self> {
        let client = PreviewClient::new(&config.preview.server_url)?;
        Ok(Self {
            articles,
            client,
            hover_delay: Duration::from_millis(config.preview.delay_ms),
            hover: HoverSlots::default(),
            command_rx,
            command_tx,
            revision: 0,
        })
    }

    /// Drain and handle every queued command.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    /// Handle a single command.
    pub(crate) fn handle_command(&mut self, cmd: ReaderCommand) {
        self.revision += 1;
        match cmd {
            ReaderCommand::HoverEnter(slug) => self.hover_enter(slug),
            ReaderCommand::HoverLeave(slug) => self.hover_leave(&slug),
            ReaderCommand::PreviewDelayElapsed { slug, generation } => {
                self.delay_elapsed(slug, generation);
            }
            ReaderCommand::PreviewLoaded {
                slug,
                generation,
                result,
            } => {
                self.preview_loaded(&slug, generation, result);
            }
        }
    }

    /// Arm the debounce timer for a freshly hovered link.
    ///
    /// Entering always starts a new interaction: pending state from a
    /// previous one is cancelled first, so rapid enter/leave/enter
    /// sequences cannot cross wires.
    fn hover_enter(&mut self, slug: Slug) {
        let generation = self.hover.begin(&slug);
        let tx = self.command_tx.clone();
        let delay = self.hover_delay;
        let task_slug = slug.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ReaderCommand::PreviewDelayElapsed {
                slug: task_slug,
                generation,
            });
        });
        self.hover
            .set_phase(&slug, generation, HoverPhase::Debouncing(handle));
    }

    /// Tear down whichever hover step is pending for the link.
    ///
    /// Exactly one of the timer, the in-flight fetch, or the popover can
    /// be active; leaving cancels it and returns the link to idle.
    fn hover_leave(&mut self, slug: &Slug) {
        match self.hover.clear(slug) {
            Some(HoverPhaseKind::Debouncing) => {
                log::debug!("hover on '{slug}' too brief, timer cancelled");
            }
            Some(HoverPhaseKind::Fetching) => {
                log::debug!("left '{slug}' mid-fetch, request aborted");
            }
            Some(HoverPhaseKind::Shown) => {
                log::debug!("popover for '{slug}' dismissed");
            }
            None => {}
        }
    }

    /// The debounce delay ran out: start fetching the popup fragment.
    ///
    /// Aborting the spawned task drops the request future, which cancels
    /// the transfer at the transport level.
    fn delay_elapsed(&mut self, slug: Slug, generation: u64) {
        if !self
            .hover
            .is_current(&slug, generation, HoverPhaseKind::Debouncing)
        {
            log::debug!("stale hover timer for '{slug}' ignored");
            return;
        }
        let client = self.client.clone();
        let tx = self.command_tx.clone();
        let task_slug = slug.clone();
        let handle = tokio::spawn(async move {
            let result = client
                .fetch_popup(&task_slug)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(ReaderCommand::PreviewLoaded {
                slug: task_slug,
                generation,
                result,
            });
        });
        self.hover
            .set_phase(&slug, generation, HoverPhase::Fetching(handle));
    }

    /// A fetch finished; show the popover or clear the slot.
    ///
    /// Every completion path leaves the slot consistent: stale results
    /// are dropped, and a failure clears the pending state so the next
    /// hover starts a clean cycle.
    fn preview_loaded(&mut self, slug: &Slug, generation: u64, result: Result<String, String>) {
        if !self
            .hover
            .is_current(slug, generation, HoverPhaseKind::Fetching)
        {
            log::debug!("stale preview result for '{slug}' ignored");
            return;
        }
        match result {
            Ok(html) => {
                log::info!("preview for '{slug}' loaded ({} bytes)", html.len());
                self.hover
                    .set_phase(slug, generation, HoverPhase::Shown(html));
            }
            Err(err) => {
                log::warn!("preview fetch for '{slug}' failed: {err}");
                self.hover.clear(slug);
            }
        }
    }

    /// Create a read-only snapshot of reader state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> ReaderSnapshot {
        ReaderSnapshot {
            revision: self.revision,
            articles: self
                .articles
                .iter()
                .map(|article| ArticleLinkSnapshot {
                    slug: article.slug.as_str().to_string(),
                    title: article.title.clone(),
                    popup_html: self.hover.shown_html(&article.slug).map(str::to_string),
                })
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn hover_phase(&self, slug: &Slug) -> Option<HoverPhaseKind> {
        self.hover.phase_kind(slug)
    }

    #[cfg(test)]
    pub(crate) fn hover_generation(&self, slug: &Slug) -> Option<u64> {
        self.hover.generation(slug)
    }
}
