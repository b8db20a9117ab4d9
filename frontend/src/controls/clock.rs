use chrono::Local;
use gloo_timers::callback::Interval;
use models::time::ClockDisplay;
use sycamore::prelude::*;

const TICK_MILLIS: u32 = 1_000;

/// Local wall clock, redrawn every second while mounted.
#[component]
pub fn Clock<G: Html>(cx: Scope) -> View<G> {
    let now = create_ref(cx, create_rc_signal(ClockDisplay::new(&Local::now())));

    let ticker = now.clone();
    let interval = Interval::new(TICK_MILLIS, move || {
        ticker.set(ClockDisplay::new(&Local::now()));
    });
    on_cleanup(cx, move || drop(interval));

    view! { cx,
        p(class="clock") {
            "Last Updated at " (now.get().to_string())
        }
    }
}
