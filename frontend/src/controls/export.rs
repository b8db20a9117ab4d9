use gloo_timers::callback::Timeout;
use models::{
    csv::{export_csv, EXPORT_FILE_NAME},
    feed::EXPORT_RESULTS,
    FeedSource,
};
use sycamore::{futures::spawn_local_scoped, prelude::*};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::helpers::{load_feed, log};

const REVOKE_DELAY_MILLIS: u32 = 1_000;

#[component]
pub fn ExportButton<G: Html>(cx: Scope) -> View<G> {
    let source = use_context::<FeedSource>(cx);

    let export = move |_| {
        spawn_local_scoped(cx, async move {
            export_history(source).await;
        })
    };

    view! { cx,
        button(class="action-button", on:click=export) {
            "Download Complete History"
        }
    }
}

async fn export_history(source: &FeedSource) {
    let Some(feed) = load_feed(source, EXPORT_RESULTS, "export").await else {
        return;
    };

    let csv = export_csv(&feed.feeds);
    if let Err(err) = download(EXPORT_FILE_NAME, &csv) {
        log(&format!("F (download) ({err:?})"));
    }
}

/// Hands `contents` to the browser as a file download.
fn download(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let Some(document) = window().and_then(|w| w.document()) else {
        return Err("no document".into());
    };

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // The object URL has to outlive the start of the download.
    Timeout::new(REVOKE_DELAY_MILLIS, move || {
        Url::revoke_object_url(&url).ok();
    })
    .forget();

    Ok(())
}
