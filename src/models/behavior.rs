use serde::{Deserialize, Serialize};

use super::CategoryAmounts;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetAllocationRequest {
    pub age: i64,
    pub risk_tolerance: String,
    pub timeline_years: i64,
    pub monthly_investment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetAllocationResult {
    pub allocation: AssetMix,
    #[serde(default)]
    pub monthly_breakdown: Option<AssetAmounts>,
}

/// Percentages per asset class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetMix {
    pub risk_profile: String,
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub rebalance_trigger: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AssetAmounts {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicReallocationRequest {
    pub allocation: CategoryAmounts,
    pub actual_spending: CategoryAmounts,
    pub months_tracked: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DynamicReallocationResult {
    pub has_suggestions: bool,
    #[serde(default)]
    pub suggestions: Vec<ReallocationSuggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SuggestionKind {
    DeficitCoverage,
    SurplusReallocation,
    DeficitWarning,
    EfficiencyTip,
    Other,
}

impl From<String> for SuggestionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "deficit_coverage" => SuggestionKind::DeficitCoverage,
            "surplus_reallocation" => SuggestionKind::SurplusReallocation,
            "deficit_warning" => SuggestionKind::DeficitWarning,
            "efficiency_tip" => SuggestionKind::EfficiencyTip,
            _ => SuggestionKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReallocationSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroSavingsRequest {
    pub transactions: Vec<CategorySpend>,
    pub savings_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MicroSavingsResult {
    pub has_savings: bool,
    #[serde(default)]
    pub data: Option<MicroSavingsData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MicroSavingsData {
    #[serde(default)]
    pub triggers: Vec<SavingsTrigger>,
    #[serde(default)]
    pub total_micro_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavingsTrigger {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
    pub saved: f64,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthOutcome {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakRequest {
    pub monthly_performance: Vec<MonthOutcome>,
    pub goal_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StreakResult {
    pub current_streak: i64,
    pub longest_streak: i64,
    pub success_rate: f64,
    pub total_months: i64,
    #[serde(default)]
    pub milestone: Option<String>,
}
