use chrono::Local;
use models::{feed::HISTORY_RESULTS, normalize::normalize, FeedSource, Reading};
use sycamore::{futures::spawn_local_scoped, prelude::*};

use super::ActivePage;
use crate::{
    controls::{ExportButton, HistoryTable},
    helpers::load_feed,
};

#[component]
pub fn HistoryPage<G: Html>(cx: Scope) -> View<G> {
    let source = use_context::<FeedSource>(cx);
    let active_page = use_context::<Signal<ActivePage>>(cx);
    let readings = create_signal(cx, Vec::<Reading>::new());

    spawn_local_scoped(cx, async move {
        if let Some(feed) = load_feed(source, HISTORY_RESULTS, "history").await {
            readings.set(normalize(&feed.feeds, &Local));
        }
    });

    let see_current = move |_| active_page.set(ActivePage::Current);

    view! { cx,
        div(class="page history-page") {
            header(class="page-header") {
                h1 { "STRAWBERRY ENVIRONMENT HISTORY" }
            }
            div(class="page-content") {
                HistoryTable(rows=readings)
                div(class="page-actions") {
                    button(class="action-button", on:click=see_current) {
                        "See Current Reading"
                    }
                    ExportButton()
                }
            }
        }
    }
}
