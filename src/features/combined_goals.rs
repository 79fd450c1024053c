//! Savings and investment goals analysed together against the cached
//! allocation.

use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_finite, parse_integer, parse_number};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::{AppError, Result};
use crate::format::{capitalize_first, format_currency, format_gap, format_signed_currency};
use crate::models::{AdvisorAnalysis, Amounts, CategoryAmounts, CombinedGoalsRequest, CombinedGoalsResult};

use super::use_feature;

pub const MISSING_BUDGET_MESSAGE: &str =
    "Please calculate your budget allocation first using the Budget Allocation form above!";
pub const GOALS_MET_MESSAGE: &str = "✅ Your current allocations meet both goals!";

/// Raw text of the goal inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsDraft {
    pub savings_target: String,
    pub savings_months: String,
    pub investment_target: String,
    pub investment_months: String,
    pub annual_return: String,
}

/// Builds the request. Needs a cached allocation and a non-zero total
/// amount from the budget form; both are checked before anything else.
pub fn prepare(
    total_amount: &str,
    allocation: Option<&Amounts>,
    draft: &GoalsDraft,
) -> Result<CombinedGoalsRequest> {
    let total_income = parse_finite(total_amount).filter(|amount| *amount != 0.0);
    let (Some(total_income), Some(allocation)) = (total_income, allocation) else {
        return Err(AppError::validation(MISSING_BUDGET_MESSAGE));
    };

    Ok(CombinedGoalsRequest {
        total_income,
        allocation: allocation.clone(),
        savings_target: parse_number("Savings target", &draft.savings_target)?,
        savings_months: parse_integer("Savings timeline", &draft.savings_months)?,
        investment_target: parse_number("Investment target", &draft.investment_target)?,
        investment_months: parse_integer("Investment timeline", &draft.investment_months)?,
        annual_return: parse_number("Annual return", &draft.annual_return)?,
    })
}

fn status_mark(gap: f64) -> &'static str {
    if gap >= 0.0 {
        "✔"
    } else {
        "✗"
    }
}

pub fn goal_table(result: &CombinedGoalsResult) -> TableView {
    let mut table = TableView::new(["Goal Type", "Required Monthly", "Current Allocation", "Gap"]);
    table.push(TableRow::new([
        format!("{} Savings", status_mark(result.savings_gap)),
        format_currency(result.required_monthly_savings),
        format_currency(result.current_allocation.savings),
        format_gap(result.savings_gap),
    ]));
    table.push(TableRow::new([
        format!("{} Investments", status_mark(result.investment_gap)),
        format_currency(result.required_monthly_investment),
        format_currency(result.current_allocation.investments),
        format_gap(result.investment_gap),
    ]));
    table
}

pub fn reallocation_table(current: &CategoryAmounts, suggested: &CategoryAmounts) -> TableView {
    let mut table = TableView::new(["Category", "Current", "Suggested", "Change"]);
    for ((category, now), (_, next)) in current.iter().zip(suggested.iter()) {
        table.push(TableRow::new([
            capitalize_first(category),
            format_currency(now),
            format_currency(next),
            format_signed_currency(next - now),
        ]));
    }
    table
}

fn advisor_card(analysis: &AdvisorAnalysis) -> Block {
    let mut blocks = vec![Block::labeled("Allocation Health", analysis.allocation_health.clone())];
    let sections = [
        ("Identified Issues", &analysis.identified_leaks),
        ("Recommendations", &analysis.recommendations),
        ("Priority Actions", &analysis.priority_actions),
    ];
    for (title, items) in sections {
        if !items.is_empty() {
            blocks.push(Block::labeled(title, ""));
            blocks.push(Block::List(items.clone()));
        }
    }
    Block::card("ai-box", blocks)
}

pub fn combined_goals_view(result: &CombinedGoalsResult) -> Vec<Block> {
    let mut blocks = vec![Block::heading("Goal Analysis"), Block::Table(goal_table(result))];

    if result.goals_met {
        blocks.push(Block::banner(Tone::Success, GOALS_MET_MESSAGE));
    } else {
        blocks.push(Block::banner(
            Tone::Warning,
            format!(
                "⚠️ Total Shortfall: {}/month",
                format_currency(result.total_shortfall.unwrap_or_default())
            ),
        ));
        if let Some(suggested) = &result.new_allocation {
            blocks.push(Block::heading("Unified Reallocation Plan"));
            blocks.push(Block::Table(reallocation_table(
                &result.current_allocation,
                suggested,
            )));
        }
    }

    blocks.push(Block::heading("AI Financial Advisor"));
    blocks.push(advisor_card(&result.ai_analysis));
    blocks
}

#[derive(Properties, PartialEq)]
pub struct CombinedGoalsFormProps {
    /// Total amount currently entered in the budget form.
    pub total_amount: String,
}

#[function_component(CombinedGoalsForm)]
pub fn combined_goals_form(props: &CombinedGoalsFormProps) -> Html {
    let form = use_feature();
    let savings_target = use_state(String::new);
    let savings_months = use_state(String::new);
    let investment_target = use_state(String::new);
    let investment_months = use_state(String::new);
    let annual_return = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let total_amount = props.total_amount.clone();
        let draft = GoalsDraft {
            savings_target: (*savings_target).clone(),
            savings_months: (*savings_months).clone(),
            investment_target: (*investment_target).clone(),
            investment_months: (*investment_months).clone(),
            annual_return: (*annual_return).clone(),
        };
        on_submit(Callback::from(move |_| {
            let allocation = form.app().and_then(|app| app.allocation().cloned());
            form.dispatch(
                Endpoint::CombinedGoals,
                prepare(&total_amount, allocation.as_ref(), &draft),
                |result: CombinedGoalsResult| combined_goals_view(&result),
            );
        }))
    };

    html! {
        <Panel title="Combined Goals Analysis" subtitle="Check a savings goal and an investment goal against your current allocation.">
            <form id="combinedGoalsForm" class="grid grid-cols-1 md:grid-cols-5 gap-3 items-end" {onsubmit}>
                <Field label="Savings Target (₹)" value={(*savings_target).clone()} on_change={bind(&savings_target)} min="0" step="0.01" required=true />
                <Field label="Savings Timeline (Months)" value={(*savings_months).clone()} on_change={bind(&savings_months)} min="1" required=true />
                <Field label="Investment Target (₹)" value={(*investment_target).clone()} on_change={bind(&investment_target)} min="0" step="0.01" required=true />
                <Field label="Investment Timeline (Months)" value={(*investment_months).clone()} on_change={bind(&investment_months)} min="1" required=true />
                <Field label="Expected Annual Return (%)" value={(*annual_return).clone()} on_change={bind(&annual_return)} min="0" step="0.1" required=true />
                <div class="md:col-span-5">
                    <SubmitButton label="Analyze Goals" busy={form.is_busy()} />
                </div>
            </form>
            { form.render("combinedGoalsResult") }
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

    fn draft() -> GoalsDraft {
        GoalsDraft {
            savings_target: "120000".into(),
            savings_months: "12".into(),
            investment_target: "300000".into(),
            investment_months: "24".into(),
            annual_return: "10".into(),
        }
    }

    fn allocation() -> Amounts {
        [("savings", 10000.0), ("investments", 15000.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn result(goals_met: bool) -> CombinedGoalsResult {
        serde_json::from_value(serde_json::json!({
            "savings_gap": 500.0,
            "investment_gap": -2500.0,
            "required_monthly_savings": 9500.0,
            "required_monthly_investment": 17500.0,
            "current_allocation": {"savings": 10000, "investments": 15000, "personal": 17500, "misc": 7500},
            "goals_met": goals_met,
            "total_shortfall": 2500.0,
            "new_allocation": {"savings": 9500, "investments": 17500, "personal": 15500, "misc": 7500},
            "ai_analysis": {
                "allocation_health": "Fair",
                "identified_leaks": [],
                "recommendations": ["Trim dining out"],
                "priority_actions": ["Raise SIP by ₹2,500"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_no_cached_allocation_makes_no_call() {
        let api = client(200, "{}");
        let outcome: Result<CombinedGoalsResult> = block_on(submit(
            &api,
            Endpoint::CombinedGoals,
            prepare("50000", None, &draft()),
        ));

        assert_eq!(outcome.unwrap_err(), AppError::validation(MISSING_BUDGET_MESSAGE));
        assert!(api.transport().calls.borrow().is_empty());
    }

    #[test]
    fn test_zero_or_blank_total_is_rejected() {
        let allocation = allocation();
        for total in ["0", "", "abc"] {
            let err = prepare(total, Some(&allocation), &draft()).unwrap_err();
            assert_eq!(err.to_string(), MISSING_BUDGET_MESSAGE);
        }
    }

    #[test]
    fn test_request_carries_cached_allocation_unchanged() {
        let allocation = allocation();
        let request = prepare("50000", Some(&allocation), &draft()).unwrap();
        assert_eq!(request.allocation, allocation);
        assert_eq!(request.total_income, 50000.0);
        assert_eq!(request.investment_months, 24);
    }

    #[test]
    fn test_goal_rows_mark_gaps() {
        let table = goal_table(&result(false));
        assert_eq!(table.rows[0].cells, vec!["✔ Savings", "₹9,500", "₹10,000", "₹500"]);
        assert_eq!(
            table.rows[1].cells,
            vec!["✗ Investments", "₹17,500", "₹15,000", "-₹2,500"]
        );
    }

    #[test]
    fn test_goals_met_hides_shortfall_and_plan() {
        let blocks = combined_goals_view(&result(true));
        let text: Vec<String> = blocks.iter().map(Block::plain_text).collect();

        assert!(blocks.contains(&Block::banner(Tone::Success, GOALS_MET_MESSAGE)));
        assert!(!text.iter().any(|t| t.contains("Shortfall")));
        assert!(!text.iter().any(|t| t.contains("Unified Reallocation Plan")));
        assert_eq!(tables(&blocks).len(), 1);
    }

    #[test]
    fn test_shortfall_shows_reallocation_plan() {
        let blocks = combined_goals_view(&result(false));
        assert!(blocks.contains(&Block::banner(
            Tone::Warning,
            "⚠️ Total Shortfall: ₹2,500/month"
        )));

        let plan = tables(&blocks)[1];
        assert_eq!(plan.rows.len(), 4);
        assert_eq!(plan.rows[0].cells[3], "-₹500");
        assert_eq!(plan.rows[1].cells[3], "+₹2,500");
        assert_eq!(plan.rows[3].cells[3], "₹0");
    }

    #[test]
    fn test_advisor_skips_empty_lists() {
        let blocks = combined_goals_view(&result(true));
        let advisor = blocks.last().unwrap().plain_text();
        assert!(advisor.starts_with("Allocation Health: Fair"));
        assert!(!advisor.contains("Identified Issues"));
        assert!(advisor.contains("Recommendations"));
        assert!(advisor.contains("Raise SIP by ₹2,500"));
    }
}
