//! Folio Dioxus - a desktop reading client for a Folio article server.
//!
//! This crate renders a reading list of article links and attaches a
//! debounced hover-preview lifecycle to each of them: resting the pointer
//! on a link for the configured delay fetches that article's popup
//! fragment from the server and shows it as a popover anchored to the
//! link; leaving the link cancels whichever stage is pending.
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio_dioxus::{FolioConfig, StartupAction};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = FolioConfig::load_default()?;
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _guard = runtime.enter();
//!     folio_dioxus::launch(config, StartupAction::None)
//! }
//! ```
//!
//! ## Architecture
//!
//! All mutable state lives in a single-threaded `ReaderContext`:
//!
//! 1. `ReaderContext` lives on the main thread and is never shared
//! 2. Components send `ReaderCommand`s via an mpsc channel
//! 3. Background tasks (debounce timers, preview fetches) run on tokio
//!    and report back by sending commands into the same channel
//! 4. Rendering reads immutable `ReaderSnapshot`s

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::Signal;

// Public library modules
pub mod args;
pub mod components;
pub mod config;
pub mod hooks;
pub mod state;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use args::{parse_args, StartupAction};
pub use config::FolioConfig;
pub use state::{ReaderCommand, ReaderContext, ReaderSnapshot};

// Thread-local storage for ReaderContext to allow synchronous command
// processing from Dioxus components.
thread_local! {
    pub(crate) static READER_CTX: RefCell<Option<Rc<RefCell<ReaderContext>>>> = const { RefCell::new(None) };
}

/// Stylesheet injected into the webview head.
const STYLE_SHEET: &str = include_str!("../assets/style.css");

/// Launch the Dioxus desktop application.
///
/// This function loads the reading list named by the startup action,
/// sets up the reader context and command channel, and starts the Dioxus
/// event loop.
///
/// Before calling this, ensure a Tokio runtime is active (via
/// `Runtime::enter()`).
pub fn launch(config: FolioConfig, startup_action: StartupAction) -> Result<()> {
    // Create command channel
    let (command_tx, command_rx) = mpsc::channel::<ReaderCommand>();

    let articles = match &startup_action {
        StartupAction::None => Vec::new(),
        StartupAction::OpenReadingList(path) => {
            let list = folio_core::ReadingList::load(path)?;
            log::info!("loaded {} articles from {}", list.articles.len(), path.display());
            list.articles
        }
    };

    let mut reader_ctx = ReaderContext::new(&config, articles, command_rx, command_tx.clone())?;

    // Create initial snapshot
    let initial_snapshot = reader_ctx.snapshot();

    // Wrap reader context in Rc<RefCell> for single-threaded access
    let reader_ctx = Rc::new(RefCell::new(reader_ctx));

    // Store in thread-local for synchronous command processing from Dioxus components
    READER_CTX.with(|ctx| {
        *ctx.borrow_mut() = Some(reader_ctx.clone());
    });

    // Create app state that can be shared with Dioxus
    let app_state = AppState {
        command_tx,
        snapshot: Arc::new(parking_lot::Mutex::new(initial_snapshot)),
    };

    // Clone for the closure
    let reader_ctx_clone = reader_ctx.clone();
    let snapshot_ref = app_state.snapshot.clone();

    // Build custom head: app stylesheet plus font CSS overrides from config
    let custom_head = format!("<style>{STYLE_SHEET}</style>{}", config.font_css());

    // Launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head)
                .with_custom_event_handler(move |_event, _target| {
                    // Drain async completions (timer expiries, fetch
                    // results) on each event loop iteration.
                    if let Ok(mut ctx) = reader_ctx_clone.try_borrow_mut() {
                        ctx.process_commands();
                        *snapshot_ref.lock() = ctx.snapshot();
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<ReaderCommand>,
    pub snapshot: Arc<parking_lot::Mutex<ReaderSnapshot>>,
}

impl AppState {
    /// Send a command to the reader.
    pub fn send_command(&self, cmd: ReaderCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Process pending commands and update the snapshot synchronously.
    /// This should be called after sending commands but before triggering a re-render.
    pub fn process_commands_sync(&self) {
        READER_CTX.with(|ctx| {
            if let Some(ref reader_ctx) = *ctx.borrow() {
                if let Ok(mut reader) = reader_ctx.try_borrow_mut() {
                    reader.process_commands();
                    *self.snapshot.lock() = reader.snapshot();
                }
            }
        });
    }

    /// Process pending commands, then push the fresh snapshot into the
    /// render signal.
    pub fn process_and_notify(&self, signal: &mut Signal<ReaderSnapshot>) {
        self.process_commands_sync();
        signal.set(self.get_snapshot());
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn get_snapshot(&self) -> ReaderSnapshot {
        self.snapshot.lock().clone()
    }
}
