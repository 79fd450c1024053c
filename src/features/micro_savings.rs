use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{collect_entries, parse_finite, parse_number, EntryDraft};
use crate::components::layout::Panel;
use crate::components::{add_entry, bind, edit_entry, Block, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::Result;
use crate::format::format_currency;
use crate::models::{CategorySpend, MicroSavingsData, MicroSavingsRequest, MicroSavingsResult};

use super::use_feature;

pub const NO_CATEGORIES: &str = "Please add at least one category";
pub const NO_MICRO_SAVINGS: &str = "✅ No micro-savings opportunities this period";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendDraft {
    pub category: String,
    pub budgeted: String,
    pub actual: String,
}

impl EntryDraft for SpendDraft {
    type Entry = CategorySpend;

    fn parse(&self) -> Option<CategorySpend> {
        if self.category.is_empty() {
            return None;
        }
        Some(CategorySpend {
            category: self.category.clone(),
            budgeted: parse_finite(&self.budgeted)?,
            actual: parse_finite(&self.actual)?,
        })
    }
}

/// Categories are checked before the threshold.
pub fn collect_spending(drafts: &[SpendDraft], threshold: &str) -> Result<MicroSavingsRequest> {
    let transactions = collect_entries(drafts, 1, NO_CATEGORIES)?;
    Ok(MicroSavingsRequest {
        transactions,
        savings_threshold: parse_number("Savings threshold", threshold)?,
    })
}

fn trigger_table(data: &MicroSavingsData) -> TableView {
    let mut table = TableView::new(["Category", "Budgeted", "Actual", "Saved", "Action"]);
    for trigger in &data.triggers {
        table.push(TableRow::new([
            trigger.category.clone(),
            format_currency(trigger.budgeted),
            format_currency(trigger.actual),
            format_currency(trigger.saved),
            trigger.action.clone(),
        ]));
    }
    table.push(TableRow::total([
        "Total Micro-Savings".to_string(),
        String::new(),
        String::new(),
        format_currency(data.total_micro_savings),
        String::new(),
    ]));
    table
}

pub fn micro_savings_view(result: &MicroSavingsResult) -> Vec<Block> {
    let data = match &result.data {
        Some(data) if result.has_savings && !data.triggers.is_empty() => data,
        _ => return vec![Block::banner(Tone::Success, NO_MICRO_SAVINGS)],
    };

    vec![
        Block::heading("Micro-Savings Triggers"),
        Block::Table(trigger_table(data)),
        Block::toned(
            Tone::Highlight,
            format!(
                "💰 Auto-transfer {} to investments",
                format_currency(data.total_micro_savings)
            ),
        ),
    ]
}

#[function_component(MicroSavingsForm)]
pub fn micro_savings_form() -> Html {
    let form = use_feature();
    let entries = use_state(|| vec![SpendDraft::default()]);
    let threshold = use_state(|| "100".to_string());

    let onclick = {
        let form = form.clone();
        let (drafts, threshold) = ((*entries).clone(), (*threshold).clone());
        Callback::from(move |_: MouseEvent| {
            form.dispatch(
                Endpoint::MicroSavings,
                collect_spending(&drafts, &threshold),
                |result: MicroSavingsResult| micro_savings_view(&result),
            );
        })
    };

    html! {
        <Panel title="Micro-Savings Automation" subtitle="Sweep what you did not spend in each category into investments.">
            <div id="microSavingsInputs" class="space-y-3">
                { for entries.iter().enumerate().map(|(i, entry)| html! {
                    <div class="micro-entry grid grid-cols-1 md:grid-cols-3 gap-3">
                        <Field label="Category" input_type="text" placeholder="e.g., Dining" value={entry.category.clone()} on_change={edit_entry(&entries, i, |d, v| d.category = v)} />
                        <Field label="Budgeted (₹)" value={entry.budgeted.clone()} on_change={edit_entry(&entries, i, |d, v| d.budgeted = v)} min="0" step="0.01" />
                        <Field label="Actual Spent (₹)" value={entry.actual.clone()} on_change={edit_entry(&entries, i, |d, v| d.actual = v)} min="0" step="0.01" />
                    </div>
                }) }
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3 mt-3 items-end">
                <Field label="Minimum Saving to Trigger (₹)" value={(*threshold).clone()} on_change={bind(&threshold)} min="0" step="0.01" />
                <button type="button" class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={add_entry(&entries)}>{ "+ Add Category" }</button>
                <SubmitButton label="Find Micro-Savings" busy={form.is_busy()} {onclick} />
            </div>
            { form.render("microSavingsResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::blocks::find_table;

    #[test]
    fn test_empty_categories_rejected_before_threshold() {
        let err = collect_spending(&[SpendDraft::default()], "not a number").unwrap_err();
        assert_eq!(err.to_string(), NO_CATEGORIES);
    }

    #[test]
    fn test_collect_spending() {
        let drafts = vec![SpendDraft {
            category: "Dining".into(),
            budgeted: "5000".into(),
            actual: "3800".into(),
        }];
        let request = collect_spending(&drafts, "100").unwrap();
        assert_eq!(request.savings_threshold, 100.0);
        assert_eq!(request.transactions[0].actual, 3800.0);
    }

    #[test]
    fn test_missing_data_or_triggers_means_no_savings() {
        for json in [
            r#"{"has_savings": false, "data": {"triggers": [{"category": "Dining", "budgeted": 1, "actual": 0, "saved": 1, "action": "x"}], "total_micro_savings": 1}}"#,
            r#"{"has_savings": true}"#,
            r#"{"has_savings": true, "data": {"triggers": [], "total_micro_savings": 0}}"#,
        ] {
            let result: MicroSavingsResult = serde_json::from_str(json).unwrap();
            assert_eq!(
                micro_savings_view(&result),
                vec![Block::banner(Tone::Success, NO_MICRO_SAVINGS)]
            );
        }
    }

    #[test]
    fn test_trigger_table_and_transfer_line() {
        let result: MicroSavingsResult = serde_json::from_str(
            r#"{"has_savings": true, "data": {"triggers": [
                {"category": "Dining", "budgeted": 5000, "actual": 3800, "saved": 1200, "action": "Move to SIP"}
            ], "total_micro_savings": 1200}}"#,
        )
        .unwrap();

        let blocks = micro_savings_view(&result);
        let table = find_table(&blocks).unwrap();
        assert_eq!(
            table.rows[0].cells,
            vec!["Dining", "₹5,000", "₹3,800", "₹1,200", "Move to SIP"]
        );
        assert_eq!(table.total_row().unwrap().cells[3], "₹1,200");
        assert_eq!(blocks[2].plain_text(), "💰 Auto-transfer ₹1,200 to investments");
    }
}
