use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::parse_number;
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, Field, SelectField, SubmitButton, Tone};
use crate::error::Result;
use crate::format::{format_currency, title_case_key};
use crate::models::{MarketAdvisorRequest, MarketAdvisorResult, MarketConditions, MarketRecommendation};

use super::asset_allocation::RISK_OPTIONS;
use super::use_feature;

pub const NO_RECOMMENDATIONS: &str = "❌ No market recommendations available";

pub const MARKET_STATUS_OPTIONS: [(&str, &str); 3] = [
    ("bull", "Bull Market"),
    ("neutral", "Neutral"),
    ("bear", "Bear Market"),
];

pub const VOLATILITY_OPTIONS: [(&str, &str); 3] = [
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

pub fn collect_market(
    status: &str,
    volatility: &str,
    investment: &str,
    risk_tolerance: &str,
) -> Result<MarketAdvisorRequest> {
    Ok(MarketAdvisorRequest {
        current_market_conditions: MarketConditions {
            status: status.to_string(),
            volatility: volatility.to_string(),
        },
        investment_allocation: parse_number("Investment allocation", investment)?,
        risk_tolerance: risk_tolerance.to_string(),
    })
}

fn risk_icon(risk_level: &str) -> &'static str {
    match risk_level {
        "High" => "🔴",
        "Medium" => "🟡",
        _ => "🟢",
    }
}

fn recommendation_card(recommendation: &MarketRecommendation) -> Block {
    Block::card(
        "market-rec",
        vec![
            Block::subheading(format!(
                "{} [{}]",
                risk_icon(&recommendation.risk_level),
                recommendation.kind.to_uppercase()
            )),
            Block::labeled("Action", recommendation.action.clone()),
            Block::labeled("Reasoning", recommendation.reasoning.clone()),
        ],
    )
}

pub fn market_advisor_view(result: &MarketAdvisorResult) -> Vec<Block> {
    if result.recommendations.is_empty() {
        return vec![Block::banner(Tone::Error, NO_RECOMMENDATIONS)];
    }

    let mut blocks = vec![
        Block::heading("Market-Aware Advisor"),
        Block::labeled(
            "📊 Current Market",
            format!("{} | Volatility: {}", result.market_status, result.volatility),
        ),
        Block::card(
            "recommendations-list",
            result.recommendations.iter().map(recommendation_card).collect(),
        ),
    ];

    if let Some(adjustments) = result.allocation_adjustments.as_ref().filter(|a| !a.is_empty()) {
        blocks.push(Block::subheading("📈 Suggested Adjustments:"));
        blocks.push(Block::List(
            adjustments
                .iter()
                .map(|(key, value)| format!("{}: {}", title_case_key(key), format_currency(*value)))
                .collect(),
        ));
    }
    blocks
}

#[function_component(MarketAdvisorForm)]
pub fn market_advisor_form() -> Html {
    let form = use_feature();
    let status = use_state(|| MARKET_STATUS_OPTIONS[1].0.to_string());
    let volatility = use_state(|| VOLATILITY_OPTIONS[1].0.to_string());
    let investment = use_state(String::new);
    let risk = use_state(|| RISK_OPTIONS[1].0.to_string());

    let onsubmit = {
        let form = form.clone();
        let (status, volatility, investment, risk) = (
            (*status).clone(),
            (*volatility).clone(),
            (*investment).clone(),
            (*risk).clone(),
        );
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::MarketAdvisor,
                collect_market(&status, &volatility, &investment, &risk),
                |result: MarketAdvisorResult| market_advisor_view(&result),
            );
        }))
    };

    html! {
        <Panel title="Market-Aware Advisor" subtitle="Adjust your investment stance to current market conditions.">
            <form id="marketAdvisorForm" class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end" {onsubmit}>
                <SelectField label="Market Status" value={(*status).clone()} options={MARKET_STATUS_OPTIONS.to_vec()} on_change={bind(&status)} />
                <SelectField label="Volatility" value={(*volatility).clone()} options={VOLATILITY_OPTIONS.to_vec()} on_change={bind(&volatility)} />
                <Field label="Monthly Investment (₹)" value={(*investment).clone()} on_change={bind(&investment)} min="0" step="0.01" required=true />
                <SelectField label="Risk Tolerance" value={(*risk).clone()} options={RISK_OPTIONS.to_vec()} on_change={bind(&risk)} />
                <div class="md:col-span-4">
                    <SubmitButton label="Get Advice" busy={form.is_busy()} />
                </div>
            </form>
            { form.render("marketAdvisorResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_nests_market_conditions() {
        let request = collect_market("bear", "high", "20000", "moderate").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "current_market_conditions": {"status": "bear", "volatility": "high"},
                "investment_allocation": 20000.0,
                "risk_tolerance": "moderate"
            })
        );
    }

    #[test]
    fn test_no_recommendations_is_an_error() {
        let result: MarketAdvisorResult =
            serde_json::from_str(r#"{"market_status": "bear", "volatility": "high"}"#).unwrap();
        assert_eq!(
            market_advisor_view(&result),
            vec![Block::banner(Tone::Error, NO_RECOMMENDATIONS)]
        );
    }

    #[test]
    fn test_cards_and_adjustments() {
        let result: MarketAdvisorResult = serde_json::from_str(
            r#"{"market_status": "Bear", "volatility": "High",
                "recommendations": [
                    {"type": "buy_the_dip", "risk_level": "Medium", "action": "Increase SIP", "reasoning": "Lower prices"},
                    {"type": "hedge", "risk_level": "Low", "action": "Add bonds", "reasoning": "Stability"}
                ],
                "allocation_adjustments": {"equity_sip": 12000, "debt_funds": 8000}}"#,
        )
        .unwrap();

        let blocks = market_advisor_view(&result);
        assert_eq!(blocks[1].plain_text(), "📊 Current Market: Bear | Volatility: High");
        let Block::Card { blocks: cards, .. } = &blocks[2] else {
            panic!("expected recommendations list");
        };
        assert!(cards[0].plain_text().starts_with("🟡 [BUY_THE_DIP]"));
        assert!(cards[1].plain_text().starts_with("🟢 [HEDGE]"));
        assert_eq!(
            blocks[4],
            Block::List(vec![
                "Equity Sip: ₹12,000".to_string(),
                "Debt Funds: ₹8,000".to_string()
            ])
        );
    }
}
