//! Preview popover component.

use dioxus::prelude::*;

/// Popover displaying a fetched article preview.
///
/// The body is the popup fragment exactly as the server rendered it. The
/// popover has no open/close animation; it is shown and dismissed purely
/// by the hover state machine.
#[component]
pub fn PreviewPopover(html: String) -> Element {
    rsx! {
        div {
            class: "preview-popover",
            div {
                class: "preview-popover-body",
                dangerous_inner_html: "{html}",
            }
        }
    }
}
