//! Reading-list pane.

use dioxus::prelude::*;

use super::ArticleLink;
use crate::state::ArticleLinkSnapshot;

/// The list of article links.
#[component]
pub fn ArticleList(articles: Vec<ArticleLinkSnapshot>) -> Element {
    rsx! {
        if articles.is_empty() {
            div {
                class: "article-list-empty",
                p { "No reading list loaded." }
                p {
                    class: "article-list-hint",
                    "Start with: flo path/to/reading_list.toml"
                }
            }
        } else {
            ul {
                class: "article-list",
                for article in articles.iter() {
                    li {
                        key: "{article.slug}",
                        ArticleLink { article: article.clone() }
                    }
                }
            }
        }
    }
}
