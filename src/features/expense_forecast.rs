use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_series, require_at_least};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SubmitButton};
use crate::error::Result;
use crate::format::{format_currency, ratio_as_percent};
use crate::models::{ExpenseForecastRequest, ExpenseForecastResult};

use super::use_feature;

pub const MIN_EXPENSE_MONTHS: usize = 3;
pub const TOO_FEW_EXPENSES: &str = "Please enter at least 3 months of expense data";

pub fn collect_history(raw: &str) -> Result<ExpenseForecastRequest> {
    let history = require_at_least(parse_series(raw), MIN_EXPENSE_MONTHS, TOO_FEW_EXPENSES)?;
    Ok(ExpenseForecastRequest {
        monthly_expenses_history: history,
    })
}

pub fn expense_forecast_view(result: &ExpenseForecastResult) -> Vec<Block> {
    let mut blocks = vec![Block::heading("Expense Forecast (2-3 Months)")];
    blocks.extend(result.predictions.iter().map(|prediction| {
        Block::card(
            "forecast-box",
            vec![
                Block::subheading(format!("📊 {}", prediction.kind)),
                Block::labeled("Expected Amount", format_currency(prediction.amount)),
                Block::labeled("Probability", ratio_as_percent(prediction.probability)),
                Block::labeled("Timeframe", prediction.timeframe.clone()),
                Block::labeled("💡 Suggestion", prediction.suggestion.clone()),
            ],
        )
    }));
    blocks
}

#[function_component(ExpenseForecastForm)]
pub fn expense_forecast_form() -> Html {
    let form = use_feature();
    let history = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let history = (*history).clone();
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::ExpenseForecast,
                collect_history(&history),
                |result: ExpenseForecastResult| expense_forecast_view(&result),
            );
        }))
    };

    html! {
        <Panel title="Expense Forecasting" subtitle="Predict upcoming irregular expenses from your recent spending.">
            <form id="expenseForecastForm" class="space-y-3" {onsubmit}>
                <Field
                    label="Monthly Expenses (comma-separated, oldest first)"
                    value={(*history).clone()}
                    on_change={bind(&history)}
                    input_type="text"
                    placeholder="e.g., 30000, 32000, 29500, 35000"
                    required=true
                />
                <SubmitButton label="Forecast Expenses" busy={form.is_busy()} />
            </form>
            { form.render("expenseForecastResult") }
        </Panel>
    }
}
