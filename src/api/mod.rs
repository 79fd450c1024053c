//! HTTP access to the budgeting API.
//!
//! Every feature posts one JSON body to one fixed endpoint and gets one JSON
//! body back. Calls are single-attempt: no retry, no timeout.

mod transport;

pub use transport::{GlooTransport, RawResponse, Transport};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::API_BASE_URL;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AllocateBudget,
    CombinedGoals,
    ExpenseForecast,
    IncomeVolatility,
    TaxHarvesting,
    OpportunityCost,
    AssetAllocation,
    DynamicReallocation,
    MicroSavings,
    StreakTracking,
    GoalConflictResolver,
    MarketAdvisor,
    InflationAdjuster,
    BankFeedSimulator,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AllocateBudget => "/api/allocate-budget",
            Endpoint::CombinedGoals => "/api/combined-goals",
            Endpoint::ExpenseForecast => "/api/expense-forecast",
            Endpoint::IncomeVolatility => "/api/income-volatility",
            Endpoint::TaxHarvesting => "/api/tax-harvesting",
            Endpoint::OpportunityCost => "/api/opportunity-cost",
            Endpoint::AssetAllocation => "/api/asset-allocation",
            Endpoint::DynamicReallocation => "/api/dynamic-reallocation",
            Endpoint::MicroSavings => "/api/micro-savings",
            Endpoint::StreakTracking => "/api/streak-tracking",
            Endpoint::GoalConflictResolver => "/api/goal-conflict-resolver",
            Endpoint::MarketAdvisor => "/api/market-advisor",
            Endpoint::InflationAdjuster => "/api/inflation-adjuster",
            Endpoint::BankFeedSimulator => "/api/bank-feed-simulator",
        }
    }

    /// Message shown when a failed response carries no `detail`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::AllocateBudget => "Error calculating budget",
            Endpoint::CombinedGoals => "Error analyzing goals",
            Endpoint::ExpenseForecast => "Error forecasting expenses",
            Endpoint::IncomeVolatility => "Error calculating volatility",
            Endpoint::TaxHarvesting => "Error analyzing tax harvesting",
            Endpoint::OpportunityCost => "Error calculating opportunity cost",
            Endpoint::AssetAllocation => "Error calculating asset allocation",
            Endpoint::DynamicReallocation => "Error analyzing reallocation",
            Endpoint::MicroSavings => "Error calculating micro-savings",
            Endpoint::StreakTracking => "Error tracking streak",
            Endpoint::GoalConflictResolver => "Error resolving goal conflicts",
            Endpoint::MarketAdvisor => "Error getting market advice",
            Endpoint::InflationAdjuster => "Error adjusting for inflation",
            Endpoint::BankFeedSimulator => "Error simulating bank feed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl ApiClient<GlooTransport> {
    pub fn browser() -> Self {
        Self::new(API_BASE_URL, GlooTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts `payload` and decodes the result.
    pub async fn post<Req, Res>(&self, endpoint: Endpoint, payload: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let body = serde_json::to_value(payload)?;
        log::debug!("POST {}", url);

        let response = self.transport.post_json(&url, &body).await?;
        let value = read_body(endpoint, response)?;
        serde_json::from_value(value).map_err(|e| {
            log::error!("{} returned an unexpected shape: {}", endpoint.path(), e);
            AppError::Decode(e.to_string())
        })
    }
}

/// Parses the body as JSON whatever the status, then splits success from
/// failure on the status.
pub fn read_body(endpoint: Endpoint, response: RawResponse) -> Result<Value> {
    let value: Value = serde_json::from_str(&response.body)?;

    if !response.is_success() {
        let message = value
            .get("detail")
            .and_then(detail_message)
            .unwrap_or_else(|| endpoint.fallback_message().to_string());
        log::warn!(
            "{} failed with status {}: {}",
            endpoint.path(),
            response.status,
            message
        );
        return Err(AppError::Server(message));
    }

    Ok(value)
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_endpoint_paths_are_under_api() {
        assert_eq!(Endpoint::AllocateBudget.path(), "/api/allocate-budget");
        assert_eq!(Endpoint::BankFeedSimulator.path(), "/api/bank-feed-simulator");
        assert_eq!(
            Endpoint::GoalConflictResolver.path(),
            "/api/goal-conflict-resolver"
        );
    }

    #[test]
    fn test_read_body_success() {
        let value = read_body(Endpoint::StreakTracking, raw(200, r#"{"current_streak": 2}"#)).unwrap();
        assert_eq!(value["current_streak"], 2);
    }

    #[test]
    fn test_read_body_uses_detail_on_failure() {
        let err = read_body(
            Endpoint::AllocateBudget,
            raw(422, r#"{"detail": "Percentages must sum to 100"}"#),
        )
        .unwrap_err();
        assert_eq!(err, AppError::Server("Percentages must sum to 100".to_string()));
    }

    #[test]
    fn test_read_body_falls_back_without_detail() {
        let err = read_body(Endpoint::AllocateBudget, raw(500, "{}")).unwrap_err();
        assert_eq!(err, AppError::Server("Error calculating budget".to_string()));
        assert_eq!(err.to_string(), "Error calculating budget");
    }

    #[test]
    fn test_read_body_rejects_non_json() {
        let err = read_body(Endpoint::MarketAdvisor, raw(502, "<html>Bad gateway</html>")).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let err = read_body(Endpoint::MicroSavings, raw(422, r#"{"detail": [{"msg": "bad"}]}"#)).unwrap_err();
        assert_eq!(err, AppError::Server(r#"[{"msg":"bad"}]"#.to_string()));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        #[derive(Clone)]
        struct Never;

        #[async_trait::async_trait(?Send)]
        impl Transport for Never {
            async fn post_json(&self, _url: &str, _body: &Value) -> Result<RawResponse> {
                Err(AppError::Network("unreachable".into()))
            }
        }

        let client = ApiClient::new("https://example.test/", Never);
        assert_eq!(
            client.url(Endpoint::TaxHarvesting),
            "https://example.test/api/tax-harvesting"
        );
    }
}
