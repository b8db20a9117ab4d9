use sycamore::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

mod current;
mod history;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivePage {
    Current,
    History,
}

impl ActivePage {
    fn from_hash(hash: &str) -> ActivePage {
        match hash.trim_start_matches('#').trim_matches('/') {
            "history" => ActivePage::History,
            _ => ActivePage::Current,
        }
    }

    fn matches_hash(self, hash: &str) -> bool {
        ActivePage::from_hash(hash) == self
    }

    fn hash(self) -> &'static str {
        match self {
            ActivePage::Current => "#/",
            ActivePage::History => "#/history",
        }
    }
}

fn current_hash() -> Option<String> {
    window().and_then(|w| w.location().hash().ok())
}

/// Page signal kept in step with the location hash in both directions, so
/// Back and Forward switch pages too.
fn create_page_signal<'a>(cx: Scope<'a>) -> &'a Signal<ActivePage> {
    let initial = current_hash()
        .map(|hash| ActivePage::from_hash(&hash))
        .unwrap_or(ActivePage::Current);

    let page = create_signal(cx, initial);

    let from_location = create_rc_signal(initial);
    let on_hash_change = {
        let from_location = from_location.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(hash) = current_hash() {
                from_location.set(ActivePage::from_hash(&hash));
            }
        })
    };
    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
            .ok();
    }
    on_cleanup(cx, move || {
        if let Some(window) = window() {
            window
                .remove_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
                .ok();
        }
    });

    create_effect(cx, move || {
        page.set(*from_location.get());
    });

    create_effect(cx, move || {
        let target = *page.get();
        let Some(hash) = current_hash() else {
            return;
        };
        if !target.matches_hash(&hash) {
            if let Some(window) = window() {
                window.location().set_hash(target.hash()).ok();
            }
        }
    });

    page
}

#[component]
pub fn PageRoot<G: Html>(cx: Scope) -> View<G> {
    let active_page = create_page_signal(cx);
    provide_context_ref(cx, active_page);

    view! { cx,
        (match *active_page.get() {
            ActivePage::Current => view! { cx, current::CurrentReadingPage() },
            ActivePage::History => view! { cx, history::HistoryPage() },
        })
    }
}
