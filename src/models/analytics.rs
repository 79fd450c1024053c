use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseForecastRequest {
    pub monthly_expenses_history: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseForecastResult {
    #[serde(default)]
    pub predictions: Vec<ExpensePrediction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpensePrediction {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub probability: f64,
    pub timeframe: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeVolatilityRequest {
    pub income_history: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomeVolatilityResult {
    pub avg_income: f64,
    pub volatility_pct: f64,
    pub recommendation: String,
    pub safe_budget: f64,
    pub buffer_needed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    pub name: String,
    pub purchase_value: f64,
    pub current_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxHarvestingRequest {
    pub investments: Vec<Investment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxHarvestingResult {
    pub has_opportunities: bool,
    #[serde(default)]
    pub opportunities: Vec<HarvestOpportunity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HarvestOpportunity {
    pub name: String,
    pub loss_amount: f64,
    pub loss_pct: f64,
    pub tax_offset_benefit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityCostRequest {
    pub skipped_amount: f64,
    pub months: i64,
    pub annual_return_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpportunityCostResult {
    pub skipped_monthly: f64,
    pub months: i64,
    pub annual_return: f64,
    pub lost_future_value: f64,
    pub lost_compounded_value: f64,
    pub total_opportunity_cost: f64,
}
