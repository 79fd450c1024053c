//! The one table helper every renderer goes through. It emits its own
//! horizontal scroll wrapper and tracks the scroll position itself.

use yew::prelude::*;

use crate::config::{TABLE_SCROLLED_OFFSET_PX, TABLE_SCROLL_END_SLACK_PX};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Total rows render bold with the `total-row` class.
    pub total: bool,
    pub class: Option<&'static str>,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn total<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            total: true,
            ..Self::new(cells)
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    /// Empty for header-less key/value tables.
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Rows that are not total rows.
    pub fn body_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| !r.total)
    }

    pub fn total_row(&self) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub at_end: bool,
}

impl ScrollState {
    pub fn measure(scroll_left: i32, scroll_width: i32, client_width: i32) -> Self {
        let max_scroll = scroll_width - client_width;
        Self {
            scrolled: scroll_left > TABLE_SCROLLED_OFFSET_PX,
            at_end: scroll_left >= max_scroll - TABLE_SCROLL_END_SLACK_PX,
        }
    }

    fn classes(&self) -> Classes {
        classes!(
            "table-scroll",
            "overflow-x-auto",
            self.scrolled.then_some("scrolled"),
            self.at_end.then_some("scrolled-end")
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollTableProps {
    pub table: TableView,
}

#[function_component(ScrollTable)]
pub fn scroll_table(props: &ScrollTableProps) -> Html {
    let scroll = use_state(ScrollState::default);
    let onscroll = {
        let scroll = scroll.clone();
        Callback::from(move |e: Event| {
            let el: web_sys::Element = e.target_unchecked_into();
            let next = ScrollState::measure(el.scroll_left(), el.scroll_width(), el.client_width());
            if next != *scroll {
                scroll.set(next);
            }
        })
    };

    let table = &props.table;
    html! {
        <div class="table-wrapper">
            <div class={scroll.classes()} {onscroll}>
                <table class="w-full text-sm">
                    {
                        if table.headers.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <thead>
                                    <tr>
                                        { for table.headers.iter().map(|h| html! {
                                            <th class="text-left p-2 text-[#173E63]">{ h.clone() }</th>
                                        }) }
                                    </tr>
                                </thead>
                            }
                        }
                    }
                    <tbody>
                        { for table.rows.iter().map(render_row) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_row(row: &TableRow) -> Html {
    let class = classes!(row.total.then_some("total-row"), row.class);
    html! {
        <tr {class}>
            { for row.cells.iter().map(|cell| {
                if row.total && !cell.is_empty() {
                    html! { <td class="p-2"><strong>{ cell.clone() }</strong></td> }
                } else {
                    html! { <td class="p-2">{ cell.clone() }</td> }
                }
            }) }
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_state_thresholds() {
        assert_eq!(ScrollState::measure(0, 800, 400), ScrollState::default());
        assert_eq!(
            ScrollState::measure(21, 800, 400),
            ScrollState {
                scrolled: true,
                at_end: false
            }
        );
        assert_eq!(
            ScrollState::measure(395, 800, 400),
            ScrollState {
                scrolled: true,
                at_end: true
            }
        );
    }

    #[test]
    fn test_narrow_table_counts_as_scrolled_to_end() {
        let state = ScrollState::measure(0, 300, 300);
        assert!(state.at_end);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_total_row_lookup() {
        let mut table = TableView::new(["Category", "Amount"]);
        table.push(TableRow::new(["Savings", "₹100"]));
        table.push(TableRow::total(["Total", "₹100"]));

        assert_eq!(table.body_rows().count(), 1);
        assert_eq!(table.total_row().unwrap().cells[1], "₹100");
    }
}
