//! Main application component.
//!
//! This is the root Dioxus component that composes the reading UI.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::ArticleList;
use crate::state::ReaderSnapshot;
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    // Get app state from context
    let app_state = use_context::<AppState>();

    // Snapshot signal shared with every component via context.
    let mut snapshot_signal = use_context_provider(|| Signal::new(app_state.get_snapshot()));

    // Async completions (timer expiries, fetch results) are drained by the
    // event-loop handler; poll the shared snapshot so they reach the render
    // tree even when no input event follows them.
    let poll_state = app_state.clone();
    use_future(move || {
        let poll_state = poll_state.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let fresh = poll_state.get_snapshot();
                if fresh.revision != snapshot_signal.peek().revision {
                    snapshot_signal.set(fresh);
                }
            }
        }
    });

    // Read the signal to subscribe to changes
    let snapshot: ReaderSnapshot = snapshot_signal.read().clone();
    let article_count = snapshot.articles.len();

    rsx! {
        document::Title { "folio" }

        div {
            class: "app-container",

            header {
                class: "app-header",
                h1 { "Folio" }
                span {
                    class: "app-subtitle",
                    "{article_count} articles"
                }
            }

            main {
                class: "app-main",
                ArticleList { articles: snapshot.articles.clone() }
            }
        }
    }
}
