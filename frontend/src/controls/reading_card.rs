use sycamore::prelude::*;

#[derive(Prop)]
pub struct ReadingCardProps<'a> {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'a ReadSignal<String>,
}

#[component]
pub fn ReadingCard<'a, G: Html>(cx: Scope<'a>, props: ReadingCardProps<'a>) -> View<G> {
    let ReadingCardProps { label, icon, value } = props;

    view! { cx,
        div(class="reading-card") {
            div(class="reading-card-header") {
                span(class="reading-icon") { (icon) }
                p { (label) }
            }
            p(class="reading-value") { (value.get().to_string()) }
        }
    }
}
