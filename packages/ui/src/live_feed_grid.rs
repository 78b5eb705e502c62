use dioxus::prelude::*;

use api::FeedStatus;

use crate::fetch::use_live_feeds;
use crate::icons::FaVideo;
use crate::Icon;

/// Camera feed tiles.
#[component]
pub fn LiveFeedGrid() -> Element {
    let feeds = use_live_feeds();

    rsx! {
        div {
            class: "live-feed-grid",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem;",
            for feed in feeds() {
                div {
                    key: "{feed.id}",
                    class: "live-feed-tile",
                    style: "background: #111827; border-radius: 8px; padding: 1rem; color: #e5e7eb;",
                    div {
                        style: "display: flex; align-items: center; justify-content: center; height: 120px; background: #000; border-radius: 6px;",
                        Icon { icon: FaVideo, width: 28, height: 28 }
                    }
                    div {
                        style: "display: flex; justify-content: space-between; margin-top: 0.5rem; font-size: 0.8125rem;",
                        span { "{feed.name}" }
                        {match feed.status {
                            FeedStatus::Active => rsx! {
                                span { style: "color: #16a34a;", "● live" }
                            },
                            FeedStatus::Inactive => rsx! {
                                span { style: "color: #6b7280;", "○ offline" }
                            },
                        }}
                    }
                    div { style: "font-size: 0.75rem; color: #9ca3af;", "{feed.location}" }
                }
            }
        }
    }
}
