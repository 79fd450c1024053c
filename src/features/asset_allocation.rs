use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_integer, parse_optional_number};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SelectField, SubmitButton, Tone};
use crate::error::Result;
use crate::format::format_currency;
use crate::models::{AssetAllocationRequest, AssetAllocationResult, AssetAmounts, AssetMix};

use super::use_feature;

pub const RISK_OPTIONS: [(&str, &str); 3] = [
    ("conservative", "Conservative"),
    ("moderate", "Moderate"),
    ("aggressive", "Aggressive"),
];

const AGGRESSIVE_STOCKS_PCT: f64 = 70.0;
const CONSERVATIVE_STOCKS_PCT: f64 = 40.0;

pub fn collect_profile(
    age: &str,
    risk_tolerance: &str,
    timeline_years: &str,
    monthly_investment: &str,
) -> Result<AssetAllocationRequest> {
    Ok(AssetAllocationRequest {
        age: parse_integer("Age", age)?,
        risk_tolerance: risk_tolerance.to_string(),
        timeline_years: parse_integer("Timeline", timeline_years)?,
        monthly_investment: parse_optional_number("Monthly investment", monthly_investment)?,
    })
}

/// Rupee amounts per asset class: the server's breakdown if it sent one,
/// otherwise derived from the submitted monthly investment.
pub fn breakdown(result: &AssetAllocationResult, monthly_investment: Option<f64>) -> Option<AssetAmounts> {
    if let Some(breakdown) = result.monthly_breakdown {
        return Some(breakdown);
    }
    let monthly = monthly_investment.filter(|amount| *amount > 0.0)?;
    let mix = &result.allocation;
    Some(AssetAmounts {
        stocks: mix.stocks / 100.0 * monthly,
        bonds: mix.bonds / 100.0 * monthly,
        cash: mix.cash / 100.0 * monthly,
    })
}

fn stance(mix: &AssetMix) -> Block {
    if mix.stocks >= AGGRESSIVE_STOCKS_PCT {
        Block::toned(
            Tone::Warning,
            "⚠️ High stock allocation - suitable for long-term aggressive growth",
        )
    } else if mix.stocks <= CONSERVATIVE_STOCKS_PCT {
        Block::toned(
            Tone::Success,
            "✅ Conservative allocation - suitable for capital preservation",
        )
    } else {
        Block::toned(
            Tone::Success,
            "✅ Balanced allocation - good mix of growth and stability",
        )
    }
}

pub fn asset_allocation_view(result: &AssetAllocationResult, monthly_investment: Option<f64>) -> Vec<Block> {
    let mix = &result.allocation;
    let amounts = breakdown(result, monthly_investment);
    let line = |icon: &str, name: &str, pct: f64, amount: Option<f64>| match amount {
        Some(amount) => Block::text(format!("{} {}: {}% ({})", icon, name, pct, format_currency(amount))),
        None => Block::text(format!("{} {}: {}%", icon, name, pct)),
    };

    vec![
        Block::heading("Asset Allocation Optimizer"),
        Block::labeled("Risk Profile", mix.risk_profile.clone()),
        Block::subheading("Recommended Allocation:"),
        line("📈", "Stocks", mix.stocks, amounts.map(|a| a.stocks)),
        line("📊", "Bonds", mix.bonds, amounts.map(|a| a.bonds)),
        line("💵", "Cash", mix.cash, amounts.map(|a| a.cash)),
        Block::toned(
            Tone::Info,
            format!("💡 Rebalance when any category drifts >{}%", mix.rebalance_trigger),
        ),
        stance(mix),
    ]
}

#[function_component(AssetAllocationForm)]
pub fn asset_allocation_form() -> Html {
    let form = use_feature();
    let age = use_state(String::new);
    let risk = use_state(|| RISK_OPTIONS[1].0.to_string());
    let timeline = use_state(String::new);
    let monthly = use_state(String::new);

    let onsubmit = {
        let form = form.clone();
        let (age, risk, timeline, monthly) = (
            (*age).clone(),
            (*risk).clone(),
            (*timeline).clone(),
            (*monthly).clone(),
        );
        on_submit(Callback::from(move |_| {
            let request = collect_profile(&age, &risk, &timeline, &monthly);
            let monthly_investment = request
                .as_ref()
                .ok()
                .and_then(|request| request.monthly_investment);
            form.dispatch(
                Endpoint::AssetAllocation,
                request,
                move |result: AssetAllocationResult| asset_allocation_view(&result, monthly_investment),
            );
        }))
    };

    html! {
        <Panel title="Asset Allocation Optimizer" subtitle="A stocks, bonds and cash mix for your age, risk appetite and horizon.">
            <form id="assetAllocationForm" class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end" {onsubmit}>
                <Field label="Age" value={(*age).clone()} on_change={bind(&age)} min="18" required=true />
                <SelectField label="Risk Tolerance" value={(*risk).clone()} options={RISK_OPTIONS.to_vec()} on_change={bind(&risk)} />
                <Field label="Timeline (Years)" value={(*timeline).clone()} on_change={bind(&timeline)} min="1" required=true />
                <Field label="Monthly Investment (₹, optional)" value={(*monthly).clone()} on_change={bind(&monthly)} min="0" step="0.01" />
                <div class="md:col-span-4">
                    <SubmitButton label="Optimize Allocation" busy={form.is_busy()} />
                </div>
            </form>
            { form.render("assetAllocationResult") }
        </Panel>
    }
}
