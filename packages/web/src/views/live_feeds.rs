use dioxus::prelude::*;

use ui::LiveFeedGrid;

#[component]
pub fn LiveFeeds() -> Element {
    rsx! {
        section {
            h2 { class: "section-title", "Live Feeds" }
            LiveFeedGrid {}
        }
    }
}
