//! Ranks competing goals. The server decides the order; the view keeps it.

use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{collect_entries, parse_finite, parse_number, CategoryDraft, GoalDraft};
use crate::components::layout::Panel;
use crate::components::{add_entry, bind, edit_entry, Block, CategoryFields, Field, SubmitButton, Tone};
use crate::error::Result;
use crate::format::{fixed, format_currency};
use crate::models::{GoalConflictRequest, GoalConflictResult, ScoredGoal};

use super::use_feature;

pub const TOO_FEW_GOALS: &str = "Please add at least 2 goals";
pub const NO_GOALS_TO_ANALYZE: &str = "❌ No goals to analyze";

pub fn collect_conflict(
    income: &str,
    allocation: &CategoryDraft,
    goals: &[GoalDraft],
) -> Result<GoalConflictRequest> {
    let goals = collect_entries(goals, 2, TOO_FEW_GOALS)?;
    Ok(GoalConflictRequest {
        goals,
        monthly_income: parse_number("Monthly income", income)?,
        current_allocation: allocation.collect("Current")?,
    })
}

fn goal_card(rank: usize, goal: &ScoredGoal) -> Block {
    Block::card(
        format!("goal-box {}", goal.priority_level().css_class()),
        vec![
            Block::subheading(format!(
                "#{} [{}] {}",
                rank,
                goal.priority,
                goal.name.to_uppercase()
            )),
            Block::text(format!(
                "Target: {} | Monthly: {} | Timeline: {} months",
                format_currency(goal.target_amount),
                format_currency(goal.monthly_required),
                goal.deadline_months
            )),
            Block::labeled(
                "📊 Scores",
                format!(
                    "Urgency {} | ROI {} | Feasibility {} | Total {}",
                    fixed(goal.urgency_score, 1),
                    fixed(goal.roi_score, 1),
                    fixed(goal.feasibility_score, 1),
                    fixed(goal.total_score, 1)
                ),
            ),
        ],
    )
}

fn recommendation(result: &GoalConflictResult, income: f64) -> Block {
    let top_two: f64 = result
        .scored_goals
        .iter()
        .take(2)
        .map(|goal| goal.monthly_required)
        .sum();

    let mut blocks = vec![
        Block::subheading("💡 RECOMMENDATION:"),
        Block::text(format!(
            "Focus on top {} goals first for optimal resource allocation",
            result.total_goals.min(2)
        )),
    ];
    if income > 0.0 {
        if top_two > income {
            blocks.push(Block::toned(
                Tone::Warning,
                format!(
                    "⚠️ Top 2 goals need {}/month - consider timeline adjustment",
                    format_currency(top_two)
                ),
            ));
        } else {
            blocks.push(Block::toned(
                Tone::Success,
                format!(
                    "✅ Top 2 goals achievable with {}/month ({}% of income)",
                    format_currency(top_two),
                    fixed(top_two / income * 100.0, 1)
                ),
            ));
        }
    }
    Block::card("recommendation", blocks)
}

/// `income` is the monthly income as entered; an unreadable entry counts as 0.
pub fn goal_conflict_view(result: &GoalConflictResult, income: f64) -> Vec<Block> {
    if result.scored_goals.is_empty() {
        return vec![Block::banner(Tone::Error, NO_GOALS_TO_ANALYZE)];
    }

    let goals = result
        .scored_goals
        .iter()
        .enumerate()
        .map(|(i, goal)| goal_card(i + 1, goal))
        .collect();

    vec![
        Block::heading("Goal Conflict Resolver"),
        Block::text(format!(
            "Total Goals: {} | Available Income: {}",
            result.total_goals,
            format_currency(income)
        )),
        Block::card("goals-list", goals),
        recommendation(result, income),
    ]
}

#[derive(Properties, PartialEq)]
pub struct GoalEntriesProps {
    pub id: AttrValue,
    pub class: AttrValue,
    pub entries: UseStateHandle<Vec<GoalDraft>>,
}

/// Repeated goal blocks, shared with the inflation form.
#[function_component(GoalEntries)]
pub fn goal_entries(props: &GoalEntriesProps) -> Html {
    let entries = &props.entries;
    html! {
        <div id={props.id.clone()} class="space-y-3">
            { for entries.iter().enumerate().map(|(i, entry)| html! {
                <div class={classes!(props.class.to_string(), "grid", "grid-cols-1", "md:grid-cols-4", "gap-3")}>
                    <Field label="Goal Name" input_type="text" placeholder="e.g., Car Purchase" value={entry.name.clone()} on_change={edit_entry(entries, i, |d, v| d.name = v)} />
                    <Field label="Target (₹)" value={entry.target_amount.clone()} on_change={edit_entry(entries, i, |d, v| d.target_amount = v)} min="0" step="0.01" />
                    <Field label="Timeline (Months)" value={entry.timeline_months.clone()} on_change={edit_entry(entries, i, |d, v| d.timeline_months = v)} min="1" />
                    <Field label="Expected Return (%)" value={entry.expected_return.clone()} on_change={edit_entry(entries, i, |d, v| d.expected_return = v)} min="0" step="0.01" />
                </div>
            }) }
            <button type="button" class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={add_entry(entries)}>{ "+ Add Goal" }</button>
        </div>
    }
}

#[function_component(GoalConflictForm)]
pub fn goal_conflict_form() -> Html {
    let form = use_feature();
    let income = use_state(String::new);
    let allocation = use_state(CategoryDraft::default);
    let goals = use_state(|| vec![GoalDraft::default(), GoalDraft::default()]);

    let onclick = {
        let form = form.clone();
        let (income, allocation, goals) = ((*income).clone(), (*allocation).clone(), (*goals).clone());
        Callback::from(move |_: MouseEvent| {
            let entered_income = parse_finite(&income).unwrap_or(0.0);
            form.dispatch(
                Endpoint::GoalConflictResolver,
                collect_conflict(&income, &allocation, &goals),
                move |result: GoalConflictResult| goal_conflict_view(&result, entered_income),
            );
        })
    };

    let set_allocation = {
        let allocation = allocation.clone();
        Callback::from(move |draft: CategoryDraft| allocation.set(draft))
    };

    html! {
        <Panel title="Goal Conflict Resolver" subtitle="Rank competing goals by urgency, return and feasibility.">
            <div class="space-y-4">
                <Field label="Monthly Income (₹)" value={(*income).clone()} on_change={bind(&income)} min="0" step="0.01" required=true />
                <CategoryFields group="Current" value={(*allocation).clone()} on_change={set_allocation} />
                <GoalEntries id="goalConflictInputs" class="goal-entry" entries={goals.clone()} />
                <SubmitButton label="Resolve Conflicts" busy={form.is_busy()} {onclick} />
            </div>
            { form.render("goalConflictResult") }
        </Panel>
    }
}
