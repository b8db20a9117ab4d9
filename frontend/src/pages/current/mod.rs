use chrono::Local;
use models::{feed::LATEST_RESULTS, normalize::latest_reading, FeedSource, Reading};
use sycamore::{futures::spawn_local_scoped, prelude::*};

use super::ActivePage;
use crate::{
    controls::{Clock, ReadingCard},
    helpers::load_feed,
};

#[component]
pub fn CurrentReadingPage<G: Html>(cx: Scope) -> View<G> {
    let source = use_context::<FeedSource>(cx);
    let active_page = use_context::<Signal<ActivePage>>(cx);
    let latest = create_signal(cx, None::<Reading>);

    spawn_local_scoped(cx, async move {
        if let Some(feed) = load_feed(source, LATEST_RESULTS, "latest reading").await {
            if let Some(reading) = latest_reading(&feed.feeds, &Local) {
                latest.set(Some(reading));
            }
        }
    });

    let temperature = create_memo(cx, move || match &*latest.get() {
        Some(reading) => format!("{:.1} °C", reading.celcius),
        None => "...".to_string(),
    });
    let humidity = create_memo(cx, move || match &*latest.get() {
        Some(reading) => format!("{:.0}%", reading.relative_humidity),
        None => "...".to_string(),
    });

    let see_history = move |_| active_page.set(ActivePage::History);

    view! { cx,
        div(class="page current-page") {
            header(class="page-header") {
                h1 { "STRAWBERRY ENVIRONMENT" }
            }
            div(class="page-content") {
                div(class="reading-cards") {
                    ReadingCard(label="Temperature", icon="🌡️", value=temperature)
                    ReadingCard(label="Humidity", icon="💧", value=humidity)
                }
                Clock()
                div(class="page-actions") {
                    button(class="action-button", on:click=see_history) {
                        "See Previous Readings"
                    }
                }
            }
        }
    }
}
