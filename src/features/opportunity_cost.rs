use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_integer, parse_number};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SubmitButton, Tone};
use crate::error::Result;
use crate::format::{fixed, format_currency};
use crate::models::{OpportunityCostRequest, OpportunityCostResult};

use super::use_feature;

pub fn collect_opportunity(
    skipped_amount: &str,
    months: &str,
    annual_return_pct: &str,
) -> Result<OpportunityCostRequest> {
    Ok(OpportunityCostRequest {
        skipped_amount: parse_number("Skipped amount", skipped_amount)?,
        months: parse_integer("Months", months)?,
        annual_return_pct: parse_number("Annual return", annual_return_pct)?,
    })
}

pub fn opportunity_cost_view(result: &OpportunityCostResult) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading("Opportunity Cost Analysis"),
        Block::text(format!(
            "Skipping {}/month for {} months at {}% annual return:",
            format_currency(result.skipped_monthly),
            result.months,
            fixed(result.annual_return, 1)
        )),
        Block::labeled("Future Value Lost", format_currency(result.lost_future_value)),
        Block::labeled("With Compounding", format_currency(result.lost_compounded_value)),
        Block::Line {
            label: Some("💰 Total Opportunity Cost".to_string()),
            text: format_currency(result.total_opportunity_cost),
            tone: Some(Tone::Highlight),
        },
    ];

    // No per-month figure for a zero-month horizon.
    if result.months != 0 {
        let per_month = result.total_opportunity_cost / result.months as f64;
        blocks.push(Block::toned(
            Tone::Warning,
            format!(
                "⚠️ Every month delayed = {} less at goal",
                format_currency(per_month)
            ),
        ));
    }
    blocks
}

#[function_component(OpportunityCostForm)]
pub fn opportunity_cost_form() -> Html {
    let form = use_feature();
    let skipped = use_state(String::new);
    let months = use_state(String::new);
    let annual_return = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let (skipped, months, annual_return) =
            ((*skipped).clone(), (*months).clone(), (*annual_return).clone());
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::OpportunityCost,
                collect_opportunity(&skipped, &months, &annual_return),
                |result: OpportunityCostResult| opportunity_cost_view(&result),
            );
        }))
    };

    html! {
        <Panel title="Opportunity Cost Calculator" subtitle="What skipping a monthly contribution really costs you.">
            <form id="opportunityCostForm" class="grid grid-cols-1 md:grid-cols-3 gap-3 items-end" {onsubmit}>
                <Field label="Skipped Amount per Month (₹)" value={(*skipped).clone()} on_change={bind(&skipped)} min="0" step="0.01" required=true />
                <Field label="Months Skipped" value={(*months).clone()} on_change={bind(&months)} min="1" required=true />
                <Field label="Expected Annual Return (%)" value={(*annual_return).clone()} on_change={bind(&annual_return)} min="0" step="0.1" required=true />
                <div class="md:col-span-3">
                    <SubmitButton label="Calculate Cost" busy={form.is_busy()} />
                </div>
            </form>
            { form.render("opportunityCostResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(months: i64) -> OpportunityCostResult {
        OpportunityCostResult {
            skipped_monthly: 5000.0,
            months,
            annual_return: 12.0,
            lost_future_value: 60000.0,
            lost_compounded_value: 3870.0,
            total_opportunity_cost: 63870.0,
        }
    }

    #[test]
    fn test_collect_keeps_integer_months() {
        let request = collect_opportunity("5000", "12.5", "12").unwrap();
        assert_eq!(request.months, 12);
        assert!(collect_opportunity("", "12", "12").is_err());
    }

    #[test]
    fn test_summary_lines() {
        let blocks = opportunity_cost_view(&result(10));
        assert_eq!(
            blocks[1].plain_text(),
            "Skipping ₹5,000/month for 10 months at 12.0% annual return:"
        );
        assert_eq!(blocks[4].plain_text(), "💰 Total Opportunity Cost: ₹63,870");
        assert_eq!(
            blocks[5],
            Block::toned(Tone::Warning, "⚠️ Every month delayed = ₹6,387 less at goal")
        );
    }

    #[test]
    fn test_zero_months_omits_per_month_line() {
        let blocks = opportunity_cost_view(&result(0));
        assert_eq!(blocks.len(), 5);
        assert!(blocks.iter().all(|b| !b.plain_text().contains("Every month delayed")));
    }
}
