#![allow(non_snake_case)]

use sycamore::prelude::*;

mod config;
mod controls;
mod pages;

mod helpers;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    sycamore::render(|cx| {
        provide_context(cx, config::feed_source());

        view! { cx,
            App()
        }
    })
}

#[component]
fn App<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        div(class="main-body") {
            pages::PageRoot()
        }
    }
}
