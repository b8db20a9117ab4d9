use models::{
    table::{Column, PageLink, SortDirection, TableAction, TableState},
    Reading,
};
use sycamore::prelude::*;

/// Owned copy of one rendered page.
struct PageView {
    rows: Vec<Reading>,
    page: usize,
    can_previous: bool,
    can_next: bool,
    links: Vec<PageLink>,
}

impl PageView {
    fn new(state: &TableState, rows: &[Reading]) -> PageView {
        let view = state.view(rows);
        PageView {
            rows: view.rows.iter().map(|&r| r.clone()).collect(),
            page: view.page,
            can_previous: view.can_previous(),
            can_next: view.can_next(),
            links: view.pager(),
        }
    }
}

#[derive(Prop)]
pub struct HistoryTableProps<'a> {
    pub rows: &'a Signal<Vec<Reading>>,
}

#[component]
pub fn HistoryTable<'a, G: Html>(cx: Scope<'a>, props: HistoryTableProps<'a>) -> View<G> {
    let rows = props.rows;
    let state = create_signal(cx, TableState::default());
    let filter = create_signal(cx, String::new());

    let dispatch = move |action: TableAction| {
        let next = state.get_untracked().reduce(action, &rows.get_untracked());
        state.set(next);
    };

    create_effect(cx, move || {
        dispatch(TableAction::SetFilter((*filter.get()).clone()));
    });

    let page = create_memo(cx, move || PageView::new(&state.get(), &rows.get()));

    let headers = View::new_fragment(
        Column::ALL
            .iter()
            .map(|&column| {
                let arrow = move || match state.get().sort_direction(column) {
                    Some(SortDirection::Ascending) => "▲",
                    Some(SortDirection::Descending) => "▼",
                    None => "⇅",
                };
                view! { cx,
                    th {
                        button(class="sort-button", on:click=move |_| dispatch(TableAction::ToggleSort(column))) {
                            (column.title())
                            span(class="sort-arrow") { (arrow()) }
                        }
                    }
                }
            })
            .collect(),
    );

    view! { cx,
        div(class="history-table") {
            div(class="table-search") {
                input(bind:value=filter, type="text", placeholder="Search...")
            }
            table {
                thead {
                    tr { (headers) }
                }
                tbody {
                    (if page.get().rows.is_empty() {
                        view! { cx,
                            tr(class="placeholder-row") {
                                td(colspan="3") { "No results." }
                            }
                        }
                    } else {
                        View::new_fragment(page.get().rows.iter().map(|reading| row(cx, reading)).collect())
                    })
                }
            }
            div(class="pager") {
                button(
                    class=if page.get().can_previous { "pager-step" } else { "pager-step disabled" },
                    on:click=move |_| dispatch(TableAction::PreviousPage)
                ) {
                    "< Previous"
                }
                div(class="pager-pages") {
                    (View::new_fragment(
                        page.get()
                            .links
                            .iter()
                            .map(|&link| page_link(cx, link, page.get().page, dispatch))
                            .collect(),
                    ))
                }
                button(
                    class=if page.get().can_next { "pager-step" } else { "pager-step disabled" },
                    on:click=move |_| dispatch(TableAction::NextPage)
                ) {
                    "Next >"
                }
            }
        }
    }
}

fn row<G: Html>(cx: Scope<'_>, reading: &Reading) -> View<G> {
    let timestamp = reading.timestamp.clone();
    let temperature = reading.temperature.clone();
    let humidity = reading.humidity.clone();

    view! { cx,
        tr {
            td { (timestamp) }
            td { (temperature) }
            td { (humidity) }
        }
    }
}

fn page_link<'a, G: Html>(
    cx: Scope<'a>,
    link: PageLink,
    current: usize,
    dispatch: impl Fn(TableAction) + Copy + 'a,
) -> View<G> {
    match link {
        PageLink::Page(index) => {
            let class = if index == current {
                "page-button current"
            } else {
                "page-button"
            };
            view! { cx,
                button(class=class, on:click=move |_| dispatch(TableAction::GoToPage(index))) {
                    ((index + 1).to_string())
                }
            }
        }
        PageLink::Ellipsis => view! { cx,
            span(class="pager-ellipsis") { "..." }
        },
    }
}
