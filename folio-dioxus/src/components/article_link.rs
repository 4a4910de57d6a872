//! Article link with hover-triggered preview.
//!
//! Pointer-in arms the debounce timer; pointer-out cancels whichever
//! stage is pending (timer, fetch, or shown popover). The popover renders
//! inside the link wrapper so it is anchored to, and scrolls with, its
//! article. Handlers are attached at render time, so links added to the
//! list later get the same behavior automatically.

use dioxus::prelude::*;

use folio_core::Slug;

use super::PreviewPopover;
use crate::hooks::use_snapshot_signal;
use crate::state::{ArticleLinkSnapshot, ReaderCommand};
use crate::AppState;

/// One article link plus its (optional) preview popover.
#[component]
pub fn ArticleLink(article: ArticleLinkSnapshot) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    // Slugs were validated when the reading list was loaded; a snapshot
    // entry that fails to parse here would be a bug, not user input.
    let Ok(slug) = article.slug.parse::<Slug>() else {
        log::error!("unrenderable article slug: {:?}", article.slug);
        return rsx! {};
    };

    let enter_handler = {
        let app_state = app_state.clone();
        let slug = slug.clone();
        move |_: MouseEvent| {
            app_state.send_command(ReaderCommand::HoverEnter(slug.clone()));
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let leave_handler = {
        let app_state = app_state.clone();
        let slug = slug.clone();
        move |_: MouseEvent| {
            app_state.send_command(ReaderCommand::HoverLeave(slug.clone()));
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    rsx! {
        span {
            class: "article-link-wrap",
            onmouseenter: enter_handler,
            onmouseleave: leave_handler,

            a {
                class: "article-link",
                href: "#",
                onclick: move |evt: MouseEvent| evt.prevent_default(),
                "{article.title}"
            }

            if let Some(html) = article.popup_html.clone() {
                PreviewPopover { html }
            }
        }
    }
}
