//! View state for the history table.
//!
//! The table never mutates itself. Every interaction is a [`TableAction`]
//! folded into a new [`TableState`], and the rows on screen are recomputed
//! from the state and the full reading list with [`TableState::view`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

pub const PAGE_SIZE: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Timestamp,
    Temperature,
    Humidity,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Timestamp, Column::Temperature, Column::Humidity];

    pub fn title(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Temperature => "Temperature",
            Column::Humidity => "Humidity",
        }
    }

    pub fn cell(self, reading: &Reading) -> &str {
        match self {
            Column::Timestamp => &reading.timestamp,
            Column::Temperature => &reading.temperature,
            Column::Humidity => &reading.humidity,
        }
    }

    fn compare(self, a: &Reading, b: &Reading) -> Ordering {
        match self {
            Column::Timestamp => a.recorded_at.cmp(&b.recorded_at),
            Column::Temperature => a.celcius.total_cmp(&b.celcius),
            Column::Humidity => a.relative_humidity.total_cmp(&b.relative_humidity),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

impl Sort {
    fn ascending(column: Column) -> Sort {
        Sort {
            column,
            direction: SortDirection::Ascending,
        }
    }

    fn descending(column: Column) -> Sort {
        Sort {
            column,
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableAction {
    SetFilter(String),
    ToggleSort(Column),
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub filter: String,
    pub sort: Option<Sort>,
    pub page: usize,
}

impl TableState {
    pub fn reduce(&self, action: TableAction, rows: &[Reading]) -> TableState {
        match action {
            TableAction::SetFilter(filter) => TableState {
                filter,
                sort: self.sort,
                page: 0,
            },
            TableAction::ToggleSort(column) => TableState {
                filter: self.filter.clone(),
                sort: toggle_sort(self.sort, column),
                page: 0,
            },
            TableAction::GoToPage(page) => self.with_page(page, rows),
            TableAction::NextPage => self.with_page(self.page.saturating_add(1), rows),
            TableAction::PreviousPage => self.with_page(self.page.saturating_sub(1), rows),
        }
    }

    fn with_page(&self, page: usize, rows: &[Reading]) -> TableState {
        let filtered = rows.iter().filter(|r| self.matches(r)).count();
        TableState {
            filter: self.filter.clone(),
            sort: self.sort,
            page: clamp_page(page, page_count(filtered)),
        }
    }

    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.sort
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    /// Case-insensitive substring match against every column.
    pub fn matches(&self, reading: &Reading) -> bool {
        let needle = self.filter.trim().to_lowercase();
        needle.is_empty()
            || Column::ALL
                .iter()
                .any(|column| column.cell(reading).to_lowercase().contains(&needle))
    }

    pub fn view<'a>(&self, rows: &'a [Reading]) -> TableView<'a> {
        let mut filtered: Vec<&Reading> = rows.iter().filter(|r| self.matches(r)).collect();

        if let Some(sort) = self.sort {
            filtered.sort_by(|a, b| match sort.direction {
                SortDirection::Ascending => sort.column.compare(a, b),
                SortDirection::Descending => sort.column.compare(b, a),
            });
        }

        let total = filtered.len();
        let page_count = page_count(total);
        let page = clamp_page(self.page, page_count);
        let rows = filtered
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        TableView {
            rows,
            page,
            page_count,
            total,
        }
    }
}

/// Timestamp flips between ascending and descending. The value columns go
/// ascending, descending, then back to unsorted.
fn toggle_sort(current: Option<Sort>, column: Column) -> Option<Sort> {
    let direction = current
        .filter(|sort| sort.column == column)
        .map(|sort| sort.direction);

    match (column, direction) {
        (_, None) => Some(Sort::ascending(column)),
        (_, Some(SortDirection::Ascending)) => Some(Sort::descending(column)),
        (Column::Timestamp, Some(SortDirection::Descending)) => Some(Sort::ascending(column)),
        (_, Some(SortDirection::Descending)) => None,
    }
}

pub fn page_count(rows: usize) -> usize {
    rows.div_ceil(PAGE_SIZE)
}

fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

/// What the table renders for one state.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Reading>,
    pub page: usize,
    pub page_count: usize,
    /// Rows left after filtering, across all pages
    pub total: usize,
}

impl TableView<'_> {
    pub fn can_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn pager(&self) -> Vec<PageLink> {
        pager(self.page, self.page_count)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// First and last page, the current page and its neighbours, with an
/// ellipsis standing in for each run of skipped pages.
pub fn pager(current: usize, page_count: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut last_shown = None::<usize>;

    for page in 0..page_count {
        let shown = page == 0 || page + 1 == page_count || page.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if matches!(last_shown, Some(prev) if page > prev + 1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(page));
        last_shown = Some(page);
    }

    links
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{feed::FeedEntry, normalize::normalize};

    fn readings(samples: &[(&str, &str, &str)]) -> Vec<Reading> {
        let feeds: Vec<_> = samples
            .iter()
            .map(|(created_at, temperature, humidity)| FeedEntry {
                created_at: created_at.to_string(),
                field1: Some(temperature.to_string()),
                field2: Some(humidity.to_string()),
            })
            .collect();
        normalize(&feeds, &Utc)
    }

    fn dozen() -> Vec<Reading> {
        let samples: Vec<_> = (0..12)
            .map(|i| (format!("2025-05-01T12:{i:02}:00Z"), format!("{}", 20 + i), "60"))
            .collect();
        let borrowed: Vec<_> = samples
            .iter()
            .map(|(t, temp, hum)| (t.as_str(), temp.as_str(), *hum))
            .collect();
        readings(&borrowed)
    }

    fn ids(view: &TableView) -> Vec<usize> {
        view.rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn timestamp_sort_uses_instant() {
        // Display strings sort the other way round lexically.
        let rows = readings(&[
            ("2025-01-01T01:00:00Z", "20", "60"),
            ("2024-12-31T23:00:00Z", "21", "60"),
            ("2025-01-01T00:30:00Z", "22", "60"),
        ]);
        assert!(rows[0].timestamp < rows[1].timestamp);

        let state = TableState::default().reduce(TableAction::ToggleSort(Column::Timestamp), &rows);
        assert_eq!(state.sort_direction(Column::Timestamp), Some(SortDirection::Ascending));
        assert_eq!(ids(&state.view(&rows)), [2, 3, 1]);

        let state = state.reduce(TableAction::ToggleSort(Column::Timestamp), &rows);
        assert_eq!(ids(&state.view(&rows)), [1, 3, 2]);

        let state = state.reduce(TableAction::ToggleSort(Column::Timestamp), &rows);
        assert_eq!(state.sort_direction(Column::Timestamp), Some(SortDirection::Ascending));
    }

    #[test]
    fn value_columns_cycle_through_unsorted() {
        let rows = readings(&[
            ("2025-05-01T12:00:00Z", "9.5", "60"),
            ("2025-05-01T12:01:00Z", "21", "60"),
            ("2025-05-01T12:02:00Z", "10", "60"),
        ]);
        let toggle = TableAction::ToggleSort(Column::Temperature);

        let asc = TableState::default().reduce(toggle.clone(), &rows);
        // Numeric order, where "10.00°C" would sort before "9.50°C" as text.
        assert_eq!(ids(&asc.view(&rows)), [1, 3, 2]);

        let desc = asc.reduce(toggle.clone(), &rows);
        assert_eq!(ids(&desc.view(&rows)), [2, 3, 1]);

        let unsorted = desc.reduce(toggle, &rows);
        assert_eq!(unsorted.sort, None);
        assert_eq!(ids(&unsorted.view(&rows)), [1, 2, 3]);
    }

    #[test]
    fn sorting_another_column_replaces_sort() {
        let rows = dozen();
        let state = TableState::default()
            .reduce(TableAction::ToggleSort(Column::Temperature), &rows)
            .reduce(TableAction::ToggleSort(Column::Humidity), &rows);

        assert_eq!(state.sort_direction(Column::Temperature), None);
        assert_eq!(state.sort_direction(Column::Humidity), Some(SortDirection::Ascending));
    }

    #[test]
    fn filter_matches_any_column() {
        let rows = readings(&[
            ("2025-05-01T12:00:00Z", "21", "60"),
            ("2025-05-01T12:01:00Z", "19", "58"),
            ("2025-05-01T12:02:00Z", "20", "62.1"),
        ]);

        let state = TableState::default().reduce(TableAction::SetFilter("21".into()), &rows);
        let view = state.view(&rows);
        assert_eq!(ids(&view), [1]);
        assert_eq!(view.total, 1);

        let state = state.reduce(TableAction::SetFilter(" 62.1 ".into()), &rows);
        assert_eq!(ids(&state.view(&rows)), [3]);

        let state = state.reduce(TableAction::SetFilter("pm".into()), &rows);
        assert_eq!(state.view(&rows).total, 3);

        let state = state.reduce(TableAction::SetFilter("°f".into()), &rows);
        let view = state.view(&rows);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 0);
        assert!(view.pager().is_empty());
    }

    #[test]
    fn twelve_rows_make_three_pages() {
        let rows = dozen();
        let state = TableState::default();
        let view = state.view(&rows);
        assert_eq!(view.page_count, 3);
        assert_eq!(ids(&view), [1, 2, 3, 4, 5]);
        assert!(!view.can_previous());
        assert!(view.can_next());

        let state = state.reduce(TableAction::GoToPage(5), &rows);
        assert_eq!(state.page, 2);
        let view = state.view(&rows);
        assert_eq!(ids(&view), [11, 12]);
        assert!(!view.can_next());

        let state = state.reduce(TableAction::NextPage, &rows);
        assert_eq!(state.page, 2);

        let state = state
            .reduce(TableAction::PreviousPage, &rows)
            .reduce(TableAction::PreviousPage, &rows)
            .reduce(TableAction::PreviousPage, &rows);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn filter_and_sort_reset_page() {
        let rows = dozen();
        let state = TableState::default().reduce(TableAction::GoToPage(2), &rows);
        assert_eq!(state.page, 2);

        let sorted = state.reduce(TableAction::ToggleSort(Column::Humidity), &rows);
        assert_eq!(sorted.page, 0);

        let filtered = state.reduce(TableAction::SetFilter("2".into()), &rows);
        assert_eq!(filtered.page, 0);
    }

    #[test]
    fn view_clamps_stale_page() {
        let rows = dozen();
        let state = TableState {
            page: 7,
            ..TableState::default()
        };
        assert_eq!(state.view(&rows).page, 2);
    }

    #[test]
    fn pager_elides_distant_pages() {
        use PageLink::*;

        assert_eq!(pager(0, 3), [Page(0), Page(1), Page(2)]);
        assert_eq!(pager(0, 10), [Page(0), Page(1), Ellipsis, Page(9)]);
        assert_eq!(
            pager(5, 10),
            [Page(0), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
        assert_eq!(pager(2, 10), [Page(0), Page(1), Page(2), Page(3), Ellipsis, Page(9)]);
        assert_eq!(pager(9, 10), [Page(0), Ellipsis, Page(8), Page(9)]);
        assert_eq!(pager(0, 1), [Page(0)]);
        assert!(pager(0, 0).is_empty());
    }
}
