//! Integration tests for the hover-preview lifecycle.
//!
//! These tests drive `ReaderCommand` sequences through the reader context
//! and verify the resulting state, simulating pointer interactions
//! without a webview. Timer expiries and fetch completions are injected
//! as the commands the background tasks would send, which makes the
//! timing deterministic.

use crate::state::hover::HoverPhaseKind;
use crate::state::ReaderCommand;
use crate::test_helpers::{init, slug, snapshot_entry, test_context};

fn delay_elapsed(raw: &str, generation: u64) -> ReaderCommand {
    ReaderCommand::PreviewDelayElapsed {
        slug: slug(raw),
        generation,
    }
}

fn loaded_ok(raw: &str, generation: u64, html: &str) -> ReaderCommand {
    ReaderCommand::PreviewLoaded {
        slug: slug(raw),
        generation,
        result: Ok(html.to_string()),
    }
}

fn loaded_err(raw: &str, generation: u64, message: &str) -> ReaderCommand {
    ReaderCommand::PreviewLoaded {
        slug: slug(raw),
        generation,
        result: Err(message.to_string()),
    }
}

// --- Debounce ---

#[test]
fn brief_hover_cancels_the_timer() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("hello-world", "Hello, World")]);
    let s = slug("hello-world");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));
    let generation = ctx.hover_generation(&s).expect("hover tracked");

    // Pointer leaves at t=200ms, before the delay runs out.
    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    assert_eq!(ctx.hover_phase(&s), None);

    // Even if the timer's completion had already been queued, it is
    // stale now: no fetch is ever started.
    ctx.handle_command(delay_elapsed("hello-world", generation));
    assert_eq!(ctx.hover_phase(&s), None);
    assert_eq!(snapshot_entry(&ctx, "hello-world").popup_html, None);
}

// --- Sustained hover ---

#[test]
fn sustained_hover_fetches_and_shows_the_popover() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let generation = ctx.hover_generation(&s).expect("hover tracked");

    // Delay expires with the pointer still on the link: exactly one
    // fetch phase is entered.
    ctx.handle_command(delay_elapsed("foo", generation));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));

    // Response arrives with the fragment body.
    ctx.handle_command(loaded_ok("foo", generation, "<div>preview</div>"));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Shown));
    assert_eq!(
        snapshot_entry(&ctx, "foo").popup_html.as_deref(),
        Some("<div>preview</div>")
    );
}

#[test]
fn repeated_delay_expiry_does_not_start_a_second_fetch() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let generation = ctx.hover_generation(&s).expect("hover tracked");
    ctx.handle_command(delay_elapsed("foo", generation));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));

    // A duplicate expiry for the same generation finds the slot already
    // past Debouncing and is ignored.
    ctx.handle_command(delay_elapsed("foo", generation));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));
}

// --- Abort on early leave ---

#[test]
fn leaving_mid_fetch_aborts_and_ignores_the_late_response() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let generation = ctx.hover_generation(&s).expect("hover tracked");
    ctx.handle_command(delay_elapsed("foo", generation));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));

    // Pointer leaves at t=600ms, before the response.
    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    assert_eq!(ctx.hover_phase(&s), None);

    // The response arrives anyway at t=700ms: it is ignored, no popover.
    ctx.handle_command(loaded_ok("foo", generation, "<div>preview</div>"));
    assert_eq!(ctx.hover_phase(&s), None);
    assert_eq!(snapshot_entry(&ctx, "foo").popup_html, None);
}

// --- Dispose after display ---

#[test]
fn leaving_after_display_disposes_the_popover() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let generation = ctx.hover_generation(&s).expect("hover tracked");
    ctx.handle_command(delay_elapsed("foo", generation));
    ctx.handle_command(loaded_ok("foo", generation, "<div>preview</div>"));
    assert!(snapshot_entry(&ctx, "foo").popup_html.is_some());

    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    assert_eq!(ctx.hover_phase(&s), None);
    assert_eq!(snapshot_entry(&ctx, "foo").popup_html, None);
}

// --- Mutual exclusivity ---

#[test]
fn exactly_one_stage_is_active_at_every_step() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    assert_eq!(ctx.hover_phase(&s), None);

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));

    let generation = ctx.hover_generation(&s).expect("hover tracked");
    ctx.handle_command(delay_elapsed("foo", generation));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));

    ctx.handle_command(loaded_ok("foo", generation, "<p>p</p>"));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Shown));

    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    assert_eq!(ctx.hover_phase(&s), None);
}

// --- Failure handling ---

#[test]
fn fetch_failure_clears_the_pending_state() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let generation = ctx.hover_generation(&s).expect("hover tracked");
    ctx.handle_command(delay_elapsed("foo", generation));
    ctx.handle_command(loaded_err("foo", generation, "server answered 500 Internal Server Error"));

    // No popover, and nothing left pending: a later leave is a no-op and
    // a fresh hover starts a clean cycle.
    assert_eq!(ctx.hover_phase(&s), None);
    assert_eq!(snapshot_entry(&ctx, "foo").popup_html, None);

    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    assert_eq!(ctx.hover_phase(&s), None);

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));
    assert!(ctx.hover_generation(&s).expect("hover tracked") > generation);
}

// --- Re-entry ---

#[test]
fn rapid_reentry_invalidates_the_stale_timer() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let first = ctx.hover_generation(&s).expect("hover tracked");

    ctx.handle_command(ReaderCommand::HoverLeave(s.clone()));
    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let second = ctx.hover_generation(&s).expect("hover tracked");
    assert!(second > first);

    // The first interaction's timer expires after the re-entry: it must
    // not promote the new interaction's timer to a fetch.
    ctx.handle_command(delay_elapsed("foo", first));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));

    // The current interaction's own expiry still works.
    ctx.handle_command(delay_elapsed("foo", second));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Fetching));
}

#[test]
fn reentry_without_a_leave_restarts_the_interaction() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let first = ctx.hover_generation(&s).expect("hover tracked");

    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    let second = ctx.hover_generation(&s).expect("hover tracked");
    assert!(second > first);
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));

    ctx.handle_command(delay_elapsed("foo", first));
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));
}

// --- Independent links ---

#[test]
fn overlapping_hovers_on_different_links_track_independently() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo"), ("bar", "Bar")]);
    let foo = slug("foo");
    let bar = slug("bar");

    ctx.handle_command(ReaderCommand::HoverEnter(foo.clone()));
    ctx.handle_command(ReaderCommand::HoverEnter(bar.clone()));

    let bar_generation = ctx.hover_generation(&bar).expect("bar tracked");
    ctx.handle_command(delay_elapsed("bar", bar_generation));
    assert_eq!(ctx.hover_phase(&foo), Some(HoverPhaseKind::Debouncing));
    assert_eq!(ctx.hover_phase(&bar), Some(HoverPhaseKind::Fetching));

    ctx.handle_command(loaded_ok("bar", bar_generation, "<p>bar</p>"));
    assert_eq!(ctx.hover_phase(&bar), Some(HoverPhaseKind::Shown));

    // Leaving foo does not disturb bar's popover.
    ctx.handle_command(ReaderCommand::HoverLeave(foo.clone()));
    assert_eq!(ctx.hover_phase(&foo), None);
    assert_eq!(ctx.hover_phase(&bar), Some(HoverPhaseKind::Shown));
    assert_eq!(snapshot_entry(&ctx, "foo").popup_html, None);
    assert_eq!(
        snapshot_entry(&ctx, "bar").popup_html.as_deref(),
        Some("<p>bar</p>")
    );
}

// --- Snapshots ---

#[test]
fn snapshot_revision_advances_with_every_command() {
    let _guard = init();
    let (mut ctx, _tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    let before = ctx.snapshot().revision;
    ctx.handle_command(ReaderCommand::HoverEnter(s.clone()));
    ctx.handle_command(ReaderCommand::HoverLeave(s));
    let after = ctx.snapshot().revision;
    assert_eq!(after, before + 2);
}

#[test]
fn snapshot_preserves_reading_list_order() {
    let _guard = init();
    let (ctx, _tx) = test_context(&[("first", "First"), ("second", "Second"), ("third", "Third")]);

    let slugs: Vec<String> = ctx
        .snapshot()
        .articles
        .into_iter()
        .map(|article| article.slug)
        .collect();
    assert_eq!(slugs, ["first", "second", "third"]);
}

#[test]
fn commands_queue_until_processed() {
    let _guard = init();
    let (mut ctx, tx) = test_context(&[("foo", "Foo")]);
    let s = slug("foo");

    tx.send(ReaderCommand::HoverEnter(s.clone()))
        .expect("channel open");
    assert_eq!(ctx.hover_phase(&s), None);

    ctx.process_commands();
    assert_eq!(ctx.hover_phase(&s), Some(HoverPhaseKind::Debouncing));
}
