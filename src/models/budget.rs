use serde::{Deserialize, Serialize};

use super::{Amounts, CategoryAmounts};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAllocationRequest {
    pub total_amount: f64,
    pub savings_pct: f64,
    pub investment_pct: f64,
    pub personal_pct: f64,
    pub misc_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetAllocationResult {
    pub allocation: Amounts,
    pub total_allocated: f64,
    #[serde(default)]
    pub projections: IndexMap<String, Amounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedGoalsRequest {
    pub total_income: f64,
    pub allocation: Amounts,
    pub savings_target: f64,
    pub savings_months: i64,
    pub investment_target: f64,
    pub investment_months: i64,
    pub annual_return: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CombinedGoalsResult {
    pub savings_gap: f64,
    pub investment_gap: f64,
    pub required_monthly_savings: f64,
    pub required_monthly_investment: f64,
    pub current_allocation: CategoryAmounts,
    pub goals_met: bool,
    #[serde(default)]
    pub total_shortfall: Option<f64>,
    #[serde(default)]
    pub new_allocation: Option<CategoryAmounts>,
    pub ai_analysis: AdvisorAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdvisorAnalysis {
    #[serde(default)]
    pub allocation_health: String,
    #[serde(default)]
    pub identified_leaks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub priority_actions: Vec<String>,
}
