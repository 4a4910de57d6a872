//! Folio core - the headless reading engine.
//!
//! This crate owns everything about articles that does not involve a
//! window: validated article identifiers ([`Slug`]), the TOML reading-list
//! format ([`ReadingList`]), and the HTTP client that fetches preview
//! fragments from an article server ([`PreviewClient`]).
//!
//! The GUI frontend (`folio-dioxus`) builds on these types; nothing in
//! here depends on a UI toolkit.

pub mod preview;
pub mod reading_list;
pub mod slug;

pub use preview::{PreviewClient, PreviewError};
pub use reading_list::{ArticleRef, ReadingList, ReadingListError};
pub use slug::{Slug, SlugError};
