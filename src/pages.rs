//! The four tab pages. Each is a column of feature panels.

use yew::prelude::*;

use crate::features::asset_allocation::AssetAllocationForm;
use crate::features::bank_feed::BankFeedForm;
use crate::features::budget::BudgetForm;
use crate::features::combined_goals::CombinedGoalsForm;
use crate::features::dynamic_reallocation::DynamicReallocationForm;
use crate::features::expense_forecast::ExpenseForecastForm;
use crate::features::goal_conflict::GoalConflictForm;
use crate::features::income_volatility::IncomeVolatilityForm;
use crate::features::inflation::InflationForm;
use crate::features::market_advisor::MarketAdvisorForm;
use crate::features::micro_savings::MicroSavingsForm;
use crate::features::opportunity_cost::OpportunityCostForm;
use crate::features::profile::ProfilePanel;
use crate::features::streak::StreakForm;
use crate::features::tax_harvesting::TaxHarvestingForm;
use crate::storage::ProfileFields;

/// Budget inputs are owned here: the profile panel writes them and the
/// combined-goals form reads the total.
#[function_component(CorePage)]
pub fn core_page() -> Html {
    let fields = use_state(ProfileFields::cleared);
    let on_change = {
        let fields = fields.clone();
        Callback::from(move |next: ProfileFields| fields.set(next))
    };

    html! {
        <div id="core" class="space-y-6">
            <BudgetForm fields={(*fields).clone()} on_change={on_change.clone()} />
            <ProfilePanel fields={(*fields).clone()} {on_change} />
            <CombinedGoalsForm total_amount={fields.total_amount.clone()} />
        </div>
    }
}

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    html! {
        <div id="analytics" class="space-y-6">
            <ExpenseForecastForm />
            <IncomeVolatilityForm />
            <TaxHarvestingForm />
            <OpportunityCostForm />
        </div>
    }
}

#[function_component(BehavioralPage)]
pub fn behavioral_page() -> Html {
    html! {
        <div id="behavioral" class="space-y-6">
            <AssetAllocationForm />
            <DynamicReallocationForm />
            <MicroSavingsForm />
            <StreakForm />
        </div>
    }
}

#[function_component(StrategicPage)]
pub fn strategic_page() -> Html {
    html! {
        <div id="strategic" class="space-y-6">
            <GoalConflictForm />
            <MarketAdvisorForm />
            <InflationForm />
            <BankFeedForm />
        </div>
    }
}
