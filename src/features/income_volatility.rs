use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_series, require_at_least};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SubmitButton, Tone};
use crate::config::HIGH_VOLATILITY_PCT;
use crate::error::Result;
use crate::format::{fixed, format_currency};
use crate::models::{IncomeVolatilityRequest, IncomeVolatilityResult};

use super::use_feature;

pub const MIN_INCOME_MONTHS: usize = 2;
pub const TOO_FEW_INCOMES: &str = "Please enter at least 2 months of income data";

pub fn collect_history(raw: &str) -> Result<IncomeVolatilityRequest> {
    let history = require_at_least(parse_series(raw), MIN_INCOME_MONTHS, TOO_FEW_INCOMES)?;
    Ok(IncomeVolatilityRequest {
        income_history: history,
    })
}

pub fn income_volatility_view(result: &IncomeVolatilityResult) -> Vec<Block> {
    let advice = if result.volatility_pct > HIGH_VOLATILITY_PCT {
        Block::banner(
            Tone::Warning,
            format!(
                "⚠️ High income volatility detected! Build reserve fund of {} (3-month buffer)",
                format_currency(result.buffer_needed * 3.0)
            ),
        )
    } else {
        Block::banner(
            Tone::Success,
            format!(
                "✅ Moderate volatility. Maintain {} buffer",
                format_currency(result.buffer_needed * 2.0)
            ),
        )
    };

    vec![
        Block::heading("Income Volatility Buffer"),
        Block::labeled("6-Month Average Income", format_currency(result.avg_income)),
        Block::labeled(
            "Income Volatility",
            format!("{}% ({})", fixed(result.volatility_pct, 1), result.recommendation),
        ),
        Block::labeled("Recommended Safe Budget", format_currency(result.safe_budget)),
        Block::labeled("Buffer Reserve Needed", format_currency(result.buffer_needed)),
        advice,
    ]
}

#[function_component(IncomeVolatilityForm)]
pub fn income_volatility_form() -> Html {
    let form = use_feature();
    let history = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let history = (*history).clone();
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::IncomeVolatility,
                collect_history(&history),
                |result: IncomeVolatilityResult| income_volatility_view(&result),
            );
        }))
    };

    html! {
        <Panel title="Income Volatility Buffer" subtitle="For freelancers and variable earners: size a safe budget and a reserve.">
            <form id="incomeVolatilityForm" class="space-y-3" {onsubmit}>
                <Field
                    label="Monthly Income (comma-separated)"
                    value={(*history).clone()}
                    on_change={bind(&history)}
                    input_type="text"
                    placeholder="e.g., 45000, 60000, 38000, 52000"
                    required=true
                />
                <SubmitButton label="Calculate Buffer" busy={form.is_busy()} />
            </form>
            { form.render("incomeVolatilityResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(volatility_pct: f64) -> IncomeVolatilityResult {
        IncomeVolatilityResult {
            avg_income: 48750.0,
            volatility_pct,
            recommendation: "High".to_string(),
            safe_budget: 38000.0,
            buffer_needed: 10000.0,
        }
    }

    #[test]
    fn test_minimum_two_months() {
        assert!(collect_history("50000").unwrap_err().is_validation());
        assert_eq!(
            collect_history("50000, 42000").unwrap().income_history,
            vec![50000.0, 42000.0]
        );
    }

    #[test]
    fn test_high_volatility_asks_for_three_month_buffer() {
        let blocks = income_volatility_view(&result(30.5));
        assert_eq!(
            blocks.last(),
            Some(&Block::banner(
                Tone::Warning,
                "⚠️ High income volatility detected! Build reserve fund of ₹30,000 (3-month buffer)"
            ))
        );
        assert_eq!(blocks[2].plain_text(), "Income Volatility: 30.5% (High)");
    }

    #[test]
    fn test_threshold_itself_is_moderate() {
        let blocks = income_volatility_view(&result(30.0));
        assert_eq!(
            blocks.last(),
            Some(&Block::banner(Tone::Success, "✅ Moderate volatility. Maintain ₹20,000 buffer"))
        );
    }
}
