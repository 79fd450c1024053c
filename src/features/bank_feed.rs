use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_number, CategoryDraft};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, CategoryFields, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::Result;
use crate::format::{capitalize_first, fixed, format_currency};
use crate::models::{BankFeedRequest, BankFeedResult};

use super::use_feature;

pub fn collect_feed(income: &str, allocation: &CategoryDraft, variance: &str) -> Result<BankFeedRequest> {
    Ok(BankFeedRequest {
        monthly_income: parse_number("Monthly income", income)?,
        allocation: allocation.collect("Budgeted")?,
        variance: parse_number("Variance", variance)?,
    })
}

/// One row per category total, with the number of transactions the feed
/// assigned to that category.
pub fn category_totals_table(result: &BankFeedResult) -> TableView {
    let mut table = TableView::new(["Category", "Transactions", "Total Amount"]);
    for (category, total) in &result.category_totals {
        let count = result
            .transactions
            .iter()
            .filter(|transaction| &transaction.category == category)
            .count();
        table.push(TableRow::new([
            capitalize_first(category),
            count.to_string(),
            format_currency(*total),
        ]));
    }
    table
}

pub fn bank_feed_view(result: &BankFeedResult) -> Vec<Block> {
    vec![
        Block::heading("Bank Feed Integration (Demo)"),
        Block::labeled("Total Transactions", result.total_transactions.to_string()),
        Block::labeled(
            "Auto-Categorized",
            format!(
                "{} ({}% avg confidence)",
                result.auto_categorized_count,
                fixed(result.avg_confidence * 100.0, 1)
            ),
        ),
        Block::subheading("Category Totals"),
        Block::Table(category_totals_table(result)),
        Block::toned(Tone::Info, "💡 All transactions automatically categorized using ML"),
        Block::toned(Tone::Info, "📊 Ready for budget tracking and analysis"),
    ]
}

#[function_component(BankFeedForm)]
pub fn bank_feed_form() -> Html {
    let form = use_feature();
    let income = use_state(String::new);
    let allocation = use_state(CategoryDraft::default);
    let variance = use_state(|| "0.2".to_string());

    let onsubmit = {
        let form = form.clone();
        let (income, allocation, variance) = ((*income).clone(), (*allocation).clone(), (*variance).clone());
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::BankFeedSimulator,
                collect_feed(&income, &allocation, &variance),
                |result: BankFeedResult| bank_feed_view(&result),
            );
        }))
    };

    let set_allocation = {
        let allocation = allocation.clone();
        Callback::from(move |draft: CategoryDraft| allocation.set(draft))
    };

    html! {
        <Panel title="Bank Feed Simulator" subtitle="Generate a month of demo transactions and see them auto-categorized.">
            <form id="bankFeedForm" class="space-y-4" {onsubmit}>
                <Field label="Monthly Income (₹)" value={(*income).clone()} on_change={bind(&income)} min="0" step="0.01" required=true />
                <CategoryFields group="Budgeted" value={(*allocation).clone()} on_change={set_allocation} />
                <Field label="Spending Variance (0-1)" value={(*variance).clone()} on_change={bind(&variance)} min="0" step="0.05" required=true />
                <SubmitButton label="Simulate Feed" busy={form.is_busy()} />
            </form>
            { form.render("bankFeedResult") }
        </Panel>
    }
}
