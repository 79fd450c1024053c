//! Request and response shapes of the budgeting API.

mod analytics;
mod behavior;
mod budget;
mod strategy;

pub use analytics::*;
pub use behavior::*;
pub use budget::*;
pub use strategy::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category → amount, iterated in the order the server sent it.
pub type Amounts = IndexMap<String, f64>;

/// The four fixed budget categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmounts {
    pub savings: f64,
    pub investments: f64,
    pub personal: f64,
    pub misc: f64,
}

impl CategoryAmounts {
    pub const LABELS: [&'static str; 4] = ["savings", "investments", "personal", "misc"];

    pub fn get(&self, category: &str) -> Option<f64> {
        match category {
            "savings" => Some(self.savings),
            "investments" => Some(self.investments),
            "personal" => Some(self.personal),
            "misc" => Some(self.misc),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::LABELS
            .iter()
            .filter_map(move |label| self.get(label).map(|amount| (*label, amount)))
    }
}

/// A savings or investment goal as entered in the goal blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    pub name: String,
    pub target_amount: f64,
    pub timeline_months: i64,
    pub expected_return: f64,
}
