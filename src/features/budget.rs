//! Budget allocation: the first form of the core tab. A successful result is
//! cached in application state for the combined-goals form.

use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::parse_number;
use crate::components::layout::Panel;
use crate::components::{on_submit, Block, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::Result;
use crate::format::{capitalize_first, format_currency};
use crate::models::{BudgetAllocationRequest, BudgetAllocationResult};
use crate::state::AppAction;
use crate::storage::ProfileFields;

use super::use_feature;

pub const BUDGET_READY_MESSAGE: &str =
    "✅ Budget calculated! Now you can analyze your goals below.";

pub fn collect_budget(fields: &ProfileFields) -> Result<BudgetAllocationRequest> {
    Ok(BudgetAllocationRequest {
        total_amount: parse_number("Total amount", &fields.total_amount)?,
        savings_pct: parse_number("Savings %", &fields.savings_pct)?,
        investment_pct: parse_number("Investment %", &fields.investment_pct)?,
        personal_pct: parse_number("Personal %", &fields.personal_pct)?,
        misc_pct: parse_number("Misc %", &fields.misc_pct)?,
    })
}

pub fn allocation_table(result: &BudgetAllocationResult) -> TableView {
    let mut table = TableView::new(["Category", "Amount"]);
    for (category, amount) in &result.allocation {
        table.push(TableRow::new([
            capitalize_first(category),
            format_currency(*amount),
        ]));
    }
    table.push(TableRow::total([
        "Total".to_string(),
        format_currency(result.total_allocated),
    ]));
    table
}

/// One column per period, one row per allocated category, and a total row
/// summing every value the period carries.
pub fn projection_table(result: &BudgetAllocationResult) -> TableView {
    let periods: Vec<&String> = result.projections.keys().collect();

    let mut headers = vec!["Category".to_string()];
    headers.extend(periods.iter().map(|p| p.to_string()));
    let mut table = TableView::new(headers);

    for category in result.allocation.keys() {
        let mut cells = vec![capitalize_first(category)];
        cells.extend(result.projections.values().map(|amounts| {
            amounts
                .get(category)
                .map(|amount| format_currency(*amount))
                .unwrap_or_else(|| "-".to_string())
        }));
        table.push(TableRow::new(cells));
    }

    let mut totals = vec!["Total".to_string()];
    totals.extend(
        result
            .projections
            .values()
            .map(|amounts| format_currency(amounts.values().sum())),
    );
    table.push(TableRow::total(totals));
    table
}

pub fn budget_view(result: &BudgetAllocationResult) -> Vec<Block> {
    vec![
        Block::heading("Monthly Allocation"),
        Block::Table(allocation_table(result)),
        Block::heading("Projections"),
        Block::Table(projection_table(result)),
        Block::banner(Tone::Success, BUDGET_READY_MESSAGE),
    ]
}

#[derive(Properties, PartialEq)]
pub struct BudgetFormProps {
    pub fields: ProfileFields,
    pub on_change: Callback<ProfileFields>,
}

#[function_component(BudgetForm)]
pub fn budget_form(props: &BudgetFormProps) -> Html {
    let form = use_feature();

    let setter = |apply: fn(&mut ProfileFields, String)| {
        let fields = props.fields.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = fields.clone();
            apply(&mut next, value);
            on_change.emit(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let fields = props.fields.clone();
        on_submit(Callback::from(move |_| {
            let app = form.app().cloned();
            form.dispatch(
                Endpoint::AllocateBudget,
                collect_budget(&fields),
                move |result: BudgetAllocationResult| {
                    if let Some(app) = app {
                        app.dispatch(AppAction::CacheAllocation(result.allocation.clone()));
                    }
                    budget_view(&result)
                },
            );
        }))
    };

    let fields = &props.fields;
    html! {
        <Panel title="Budget Allocation" subtitle="Split your monthly income across savings, investments, personal spending and misc.">
            <form id="budgetForm" class="grid grid-cols-1 md:grid-cols-5 gap-3 items-end" {onsubmit}>
                <Field label="Total Amount (₹)" value={fields.total_amount.clone()} on_change={setter(|f, v| f.total_amount = v)} min="0" step="0.01" required=true />
                <Field label="Savings %" value={fields.savings_pct.clone()} on_change={setter(|f, v| f.savings_pct = v)} min="0" step="0.1" required=true />
                <Field label="Investment %" value={fields.investment_pct.clone()} on_change={setter(|f, v| f.investment_pct = v)} min="0" step="0.1" required=true />
                <Field label="Personal %" value={fields.personal_pct.clone()} on_change={setter(|f, v| f.personal_pct = v)} min="0" step="0.1" required=true />
                <Field label="Misc %" value={fields.misc_pct.clone()} on_change={setter(|f, v| f.misc_pct = v)} min="0" step="0.1" required=true />
                <div class="md:col-span-5">
                    <SubmitButton label="Calculate Budget" busy={form.is_busy()} />
                </div>
            </form>
            { form.render("budgetResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::blocks::tables;
    use crate::features::submit;
    use crate::features::testing::client;
    use futures::executor::block_on;

    fn sample_result() -> BudgetAllocationResult {
        serde_json::from_str(
            r#"{
                "allocation": {"savings": 10000, "investments": 15000, "personal": 17500, "misc": 7500},
                "total_allocated": 50000,
                "projections": {
                    "3 Months": {"savings": 30000, "investments": 45000, "personal": 52500, "misc": 22500},
                    "1 Year": {"savings": 120000, "investments": 180000, "personal": 210000, "misc": 90000}
                }
            }"#,
        )
        .unwrap()
    }

    fn fields() -> ProfileFields {
        ProfileFields {
            total_amount: "50000".into(),
            savings_pct: "20".into(),
            investment_pct: "30".into(),
            personal_pct: "35".into(),
            misc_pct: "15".into(),
        }
    }

    #[test]
    fn test_collect_budget_parses_all_fields() {
        let request = collect_budget(&fields()).unwrap();
        assert_eq!(request.total_amount, 50000.0);
        assert_eq!(request.misc_pct, 15.0);
    }

    #[test]
    fn test_collect_budget_rejects_blank_total() {
        let mut fields = fields();
        fields.total_amount.clear();
        let err = collect_budget(&fields).unwrap_err();
        assert_eq!(err.to_string(), "Total amount must be a number");
    }

    #[test]
    fn test_allocation_rows_keep_server_order() {
        let table = allocation_table(&sample_result());
        let names: Vec<&str> = table.body_rows().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(names, vec!["Savings", "Investments", "Personal", "Misc"]);
        assert_eq!(table.total_row().unwrap().cells, vec!["Total", "₹50,000"]);
    }

    #[test]
    fn test_projection_totals_sum_each_period() {
        let table = projection_table(&sample_result());
        assert_eq!(table.headers, vec!["Category", "3 Months", "1 Year"]);
        assert_eq!(
            table.total_row().unwrap().cells,
            vec!["Total", "₹1,50,000", "₹6,00,000"]
        );
        assert_eq!(table.rows[0].cells, vec!["Savings", "₹30,000", "₹1,20,000"]);
    }

    #[test]
    fn test_missing_projection_cell_renders_dash() {
        let result: BudgetAllocationResult = serde_json::from_str(
            r#"{"allocation": {"savings": 100, "misc": 50}, "total_allocated": 150,
                "projections": {"Q1": {"savings": 300}}}"#,
        )
        .unwrap();
        let table = projection_table(&result);
        assert_eq!(table.rows[1].cells, vec!["Misc", "-"]);
        assert_eq!(table.total_row().unwrap().cells, vec!["Total", "₹300"]);
    }

    #[test]
    fn test_budget_view_layout() {
        let blocks = budget_view(&sample_result());
        assert_eq!(tables(&blocks).len(), 2);
        assert_eq!(
            blocks.last(),
            Some(&Block::banner(Tone::Success, BUDGET_READY_MESSAGE))
        );
    }

    #[test]
    fn test_submit_posts_budget_request() {
        let api = client(200, r#"{"allocation": {"savings": 1}, "total_allocated": 1, "projections": {}}"#);
        let result: BudgetAllocationResult =
            block_on(submit(&api, Endpoint::AllocateBudget, collect_budget(&fields()))).unwrap();

        assert_eq!(result.total_allocated, 1.0);
        let calls = api.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.test/api/allocate-budget");
        assert_eq!(calls[0].1["investment_pct"], 30.0);
    }
}
