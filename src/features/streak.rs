use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::parse_integer;
use crate::components::layout::Panel;
use crate::components::{bind, Block, Field, SubmitButton, Tone};
use crate::config::{MAX_STREAK_MONTHS, STREAK_GOAL_TYPE};
use crate::dom;
use crate::error::{AppError, Result};
use crate::format::fixed;
use crate::models::{MonthOutcome, StreakRequest, StreakResult};

use super::use_feature;

pub const NO_MONTHS: &str = "Please generate month inputs first";

pub fn too_many_months() -> String {
    format!("Please track at most {} months", MAX_STREAK_MONTHS)
}

/// One unchecked box per month; a negative or unreadable count gives none.
/// Counts above [`MAX_STREAK_MONTHS`] are refused.
pub fn month_inputs(raw_count: &str) -> Result<Vec<bool>> {
    let count = parse_integer("Months", raw_count).unwrap_or(0).max(0);
    match usize::try_from(count) {
        Ok(count) if count <= MAX_STREAK_MONTHS => Ok(vec![false; count]),
        _ => Err(AppError::validation(too_many_months())),
    }
}

pub fn collect_months(months: &[bool]) -> Result<StreakRequest> {
    if months.is_empty() {
        return Err(AppError::validation(NO_MONTHS));
    }
    Ok(StreakRequest {
        monthly_performance: months
            .iter()
            .map(|&success| MonthOutcome { success })
            .collect(),
        goal_type: STREAK_GOAL_TYPE.to_string(),
    })
}

pub fn streak_view(result: &StreakResult) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading("Financial Discipline Streak"),
        Block::toned(
            Tone::Highlight,
            format!("🔥 Current Streak: {} months", result.current_streak),
        ),
        Block::text(format!("🏆 Longest Streak: {} months", result.longest_streak)),
        Block::text(format!(
            "📊 Success Rate: {}% ({} months tracked)",
            fixed(result.success_rate, 1),
            result.total_months
        )),
    ];

    if let Some(milestone) = result.milestone.as_ref().filter(|m| !m.is_empty()) {
        blocks.push(Block::toned(Tone::Success, milestone.clone()));
    }

    match result.current_streak {
        0 => blocks.push(Block::toned(
            Tone::Info,
            "💪 Start fresh this month! Every expert was once a beginner.",
        )),
        streak if streak < 3 => blocks.push(Block::toned(
            Tone::Info,
            "💪 Keep pushing! Consistency builds wealth.",
        )),
        _ => {}
    }
    blocks
}

#[function_component(StreakForm)]
pub fn streak_form() -> Html {
    let form = use_feature();
    let month_count = use_state(|| "6".to_string());
    let months = use_state(Vec::<bool>::new);

    let generate = {
        let month_count = month_count.clone();
        let months = months.clone();
        Callback::from(move |_: MouseEvent| match month_inputs(&month_count) {
            Ok(inputs) => months.set(inputs),
            Err(err) => dom::alert(&err.to_string()),
        })
    };

    let onclick = {
        let form = form.clone();
        let months = (*months).clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(
                Endpoint::StreakTracking,
                collect_months(&months),
                |result: StreakResult| streak_view(&result),
            );
        })
    };

    let toggle = |index: usize| {
        let months = months.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*months).clone();
            if let Some(month) = next.get_mut(index) {
                *month = input.checked();
            }
            months.set(next);
        })
    };

    html! {
        <Panel title="Streak Tracking" subtitle="How many months in a row did you stay within budget?">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3 items-end">
                <Field label="Months to Track" value={(*month_count).clone()} on_change={bind(&month_count)} min="1" />
                <button type="button" class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={generate}>{ "Generate Months" }</button>
            </div>
            <div id="streakInputs" class="mt-3 space-y-1">
                {
                    if months.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h4 class="font-bold text-[#173E63]">{ "Did you stay within budget each month?" }</h4>
                                { for months.iter().enumerate().map(|(i, checked)| html! {
                                    <div class="streak-month flex items-center gap-2">
                                        <label class="font-bold">{ format!("Month {}:", i + 1) }</label>
                                        <input type="checkbox" checked={*checked} onchange={toggle(i)} />
                                        <span>{ "Yes, stayed within budget" }</span>
                                    </div>
                                }) }
                            </>
                        }
                    }
                }
            </div>
            <div class="mt-3">
                <SubmitButton label="Calculate Streak" busy={form.is_busy()} {onclick} />
            </div>
            { form.render("streakResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(current_streak: i64, milestone: Option<&str>) -> StreakResult {
        StreakResult {
            current_streak,
            longest_streak: 4,
            success_rate: 66.666,
            total_months: 6,
            milestone: milestone.map(str::to_string),
        }
    }

    #[test]
    fn test_month_inputs_from_count() {
        assert_eq!(month_inputs("3").unwrap(), vec![false, false, false]);
        assert!(month_inputs("-2").unwrap().is_empty());
        assert!(month_inputs("").unwrap().is_empty());
    }

    #[test]
    fn test_month_count_is_capped() {
        assert_eq!(month_inputs("120").unwrap().len(), MAX_STREAK_MONTHS);

        let err = month_inputs("121").unwrap_err();
        assert_eq!(err.to_string(), "Please track at most 120 months");
        assert!(month_inputs("4294967297").is_err());
        assert!(month_inputs("100000000000000000").is_err());
    }

    #[test]
    fn test_no_months_is_rejected() {
        assert_eq!(collect_months(&[]).unwrap_err(), AppError::validation(NO_MONTHS));
    }

    #[test]
    fn test_request_shape() {
        let request = collect_months(&[true, false, true]).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "monthly_performance": [{"success": true}, {"success": false}, {"success": true}],
                "goal_type": "budget_adherence"
            })
        );
    }

    #[test]
    fn test_summary_and_encouragement() {
        let blocks = streak_view(&result(0, None));
        assert_eq!(blocks[3].plain_text(), "📊 Success Rate: 66.7% (6 months tracked)");
        assert!(blocks.last().unwrap().plain_text().starts_with("💪 Start fresh"));

        let blocks = streak_view(&result(2, Some("🎉 2-month streak!")));
        assert_eq!(blocks[4], Block::toned(Tone::Success, "🎉 2-month streak!"));
        assert!(blocks.last().unwrap().plain_text().starts_with("💪 Keep pushing"));

        let blocks = streak_view(&result(3, None));
        assert_eq!(blocks.len(), 4);
    }
}
