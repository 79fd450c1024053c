use serde::{Deserialize, Serialize};

use super::{Amounts, CategoryAmounts, GoalInput};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalConflictRequest {
    pub goals: Vec<GoalInput>,
    pub monthly_income: f64,
    pub current_allocation: CategoryAmounts,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoalConflictResult {
    #[serde(default)]
    pub total_goals: i64,
    #[serde(default)]
    pub scored_goals: Vec<ScoredGoal>,
}

/// Anything other than `High` or `Medium` is styled as low priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        match label {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl Priority {
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::High => "high-priority",
            Priority::Medium => "medium-priority",
            Priority::Low => "low-priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoredGoal {
    pub name: String,
    pub priority: String,
    pub target_amount: f64,
    pub monthly_required: f64,
    pub deadline_months: i64,
    pub urgency_score: f64,
    pub roi_score: f64,
    pub feasibility_score: f64,
    pub total_score: f64,
}

impl ScoredGoal {
    pub fn priority_level(&self) -> Priority {
        Priority::from(self.priority.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketConditions {
    pub status: String,
    pub volatility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAdvisorRequest {
    pub current_market_conditions: MarketConditions,
    pub investment_allocation: f64,
    pub risk_tolerance: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketAdvisorResult {
    #[serde(default)]
    pub market_status: String,
    #[serde(default)]
    pub volatility: String,
    #[serde(default)]
    pub recommendations: Vec<MarketRecommendation>,
    #[serde(default)]
    pub allocation_adjustments: Option<Amounts>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketRecommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_level: String,
    pub action: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflationRequest {
    pub goals: Vec<GoalInput>,
    pub current_inflation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InflationResult {
    pub inflation_rate: f64,
    #[serde(default)]
    pub adjusted_goals: Vec<AdjustedGoal>,
    pub total_impact: f64,
    pub total_monthly_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdjustedGoal {
    pub name: String,
    pub timeline_years: f64,
    pub original_target: f64,
    pub original_monthly: f64,
    pub adjusted_target: f64,
    pub adjusted_monthly: f64,
    pub inflation_impact: f64,
    pub monthly_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankFeedRequest {
    pub monthly_income: f64,
    pub allocation: CategoryAmounts,
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BankFeedResult {
    pub total_transactions: i64,
    pub auto_categorized_count: i64,
    pub avg_confidence: f64,
    #[serde(default)]
    pub category_totals: Amounts,
    #[serde(default)]
    pub transactions: Vec<FeedTransaction>,
}

/// Only the category is rendered; the remaining fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedTransaction {
    pub category: String,
}
