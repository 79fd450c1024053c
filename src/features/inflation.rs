use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{collect_entries, parse_number, GoalDraft};
use crate::components::layout::Panel;
use crate::components::{bind, Block, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::Result;
use crate::format::{fixed, format_currency};
use crate::models::{AdjustedGoal, InflationRequest, InflationResult};

use super::goal_conflict::GoalEntries;
use super::use_feature;

pub const NO_GOALS: &str = "Please add at least one goal";

pub fn collect_inflation(rate: &str, goals: &[GoalDraft]) -> Result<InflationRequest> {
    let goals = collect_entries(goals, 1, NO_GOALS)?;
    Ok(InflationRequest {
        goals,
        current_inflation_rate: parse_number("Inflation rate", rate)?,
    })
}

/// Original vs. adjusted figures; the adjusted row is highlighted.
pub fn comparison_table(goal: &AdjustedGoal) -> TableView {
    let mut table = TableView::default();
    table.push(TableRow::new([
        "Original Target:".to_string(),
        format_currency(goal.original_target),
        "→ Monthly:".to_string(),
        format_currency(goal.original_monthly),
    ]));
    table.push(
        TableRow::new([
            "Adjusted Target:".to_string(),
            format_currency(goal.adjusted_target),
            "→ Monthly:".to_string(),
            format_currency(goal.adjusted_monthly),
        ])
        .with_class("highlight"),
    );
    table.push(TableRow::new([
        "Inflation Impact:".to_string(),
        format_currency(goal.inflation_impact),
        "→ Increase:".to_string(),
        format!("{}/month", format_currency(goal.monthly_increase)),
    ]));
    table
}

pub fn inflation_view(result: &InflationResult) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading("Inflation Adjuster"),
        Block::labeled(
            "Inflation Rate",
            format!("{}% annually", fixed(result.inflation_rate, 1)),
        ),
    ];

    blocks.extend(result.adjusted_goals.iter().map(|goal| {
        Block::card(
            "inflation-box",
            vec![
                Block::subheading(format!(
                    "{} ({} years)",
                    goal.name.to_uppercase(),
                    fixed(goal.timeline_years, 1)
                )),
                Block::Table(comparison_table(goal)),
            ],
        )
    }));

    blocks.push(Block::card(
        "summary",
        vec![
            Block::labeled(
                "💰 Total Impact",
                format!(
                    "{} | Additional Monthly: {}",
                    format_currency(result.total_impact),
                    format_currency(result.total_monthly_increase)
                ),
            ),
            Block::toned(
                Tone::Info,
                "💡 Targets auto-adjusted to maintain purchasing power",
            ),
        ],
    ));
    blocks
}

#[function_component(InflationForm)]
pub fn inflation_form() -> Html {
    let form = use_feature();
    let rate = use_state(|| "6".to_string());
    let goals = use_state(|| vec![GoalDraft::default()]);

    let onclick = {
        let form = form.clone();
        let (rate, drafts) = ((*rate).clone(), (*goals).clone());
        Callback::from(move |_: MouseEvent| {
            form.dispatch(
                Endpoint::InflationAdjuster,
                collect_inflation(&rate, &drafts),
                |result: InflationResult| inflation_view(&result),
            );
        })
    };

    html! {
        <Panel title="Inflation Adjuster" subtitle="Restate your goals in future rupees.">
            <div class="space-y-4">
                <Field label="Current Inflation Rate (%)" value={(*rate).clone()} on_change={bind(&rate)} min="0" step="0.1" required=true />
                <GoalEntries id="inflationGoalInputs" class="inflation-goal-entry" entries={goals.clone()} />
                <SubmitButton label="Adjust for Inflation" busy={form.is_busy()} {onclick} />
            </div>
            { form.render("inflationResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::blocks::find_table;

    fn result() -> InflationResult {
        serde_json::from_str(
            r#"{"inflation_rate": 6, "total_impact": 48000, "total_monthly_increase": 1333.33,
                "adjusted_goals": [{
                    "name": "Retirement", "timeline_years": 3, "original_target": 200000,
                    "original_monthly": 5555.56, "adjusted_target": 238203, "adjusted_monthly": 6616.75,
                    "inflation_impact": 38203, "monthly_increase": 1061.19
                }]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_at_least_one_goal() {
        let err = collect_inflation("6", &[GoalDraft::default()]).unwrap_err();
        assert_eq!(err.to_string(), NO_GOALS);

        let goal = GoalDraft {
            name: "Retirement".into(),
            target_amount: "200000".into(),
            timeline_months: "36".into(),
            expected_return: "8".into(),
        };
        let request = collect_inflation("6", &[goal]).unwrap();
        assert_eq!(request.goals[0].expected_return, 8.0);
        assert_eq!(request.current_inflation_rate, 6.0);
    }

    #[test]
    fn test_goal_card_table_highlights_adjusted_row() {
        let blocks = inflation_view(&result());
        assert_eq!(blocks[1].plain_text(), "Inflation Rate: 6.0% annually");

        let table = find_table(&blocks).unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.rows[1].class, Some("highlight"));
        assert_eq!(
            table.rows[1].cells,
            vec!["Adjusted Target:", "₹2,38,203", "→ Monthly:", "₹6,616.75"]
        );
        assert_eq!(table.rows[2].cells[3], "₹1,061.19/month");
    }

    #[test]
    fn test_summary_totals() {
        let blocks = inflation_view(&result());
        let summary = blocks.last().unwrap().plain_text();
        assert!(summary.starts_with("💰 Total Impact: ₹48,000 | Additional Monthly: ₹1,333.33"));
    }
}
