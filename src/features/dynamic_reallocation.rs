use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{parse_integer, CategoryDraft};
use crate::components::layout::Panel;
use crate::components::{bind, on_submit, Block, CategoryFields, Field, SubmitButton, Tone};
use crate::error::Result;
use crate::format::format_currency;
use crate::models::{DynamicReallocationRequest, DynamicReallocationResult, ReallocationSuggestion, SuggestionKind};

use super::use_feature;

pub const NO_REALLOCATION_NEEDED: &str =
    "✅ All categories being used efficiently. No reallocation needed.";

/// Groups in display order. Suggestions of any other kind are not shown.
const GROUPS: [(SuggestionKind, &str, &str); 4] = [
    (SuggestionKind::DeficitCoverage, "🔴 Overspending Coverage Plan:", "suggestion-box"),
    (SuggestionKind::SurplusReallocation, "🟢 Surplus Reallocation:", "suggestion-box"),
    (SuggestionKind::DeficitWarning, "⚠️ Budget Overruns:", "suggestion-box warning"),
    (SuggestionKind::EfficiencyTip, "💡 Efficiency Optimization:", "suggestion-box"),
];

pub fn collect_tracking(
    allocated: &CategoryDraft,
    spent: &CategoryDraft,
    months_tracked: &str,
) -> Result<DynamicReallocationRequest> {
    Ok(DynamicReallocationRequest {
        allocation: allocated.collect("Allocated")?,
        actual_spending: spent.collect("Spent")?,
        months_tracked: parse_integer("Months tracked", months_tracked)?,
    })
}

fn suggestion_card(class: &str, suggestion: &ReallocationSuggestion) -> Block {
    Block::card(
        class,
        vec![
            Block::labeled(
                suggestion.category.to_uppercase(),
                format!(
                    "Allocated {} | Spent {}",
                    format_currency(suggestion.allocated),
                    format_currency(suggestion.spent)
                ),
            ),
            Block::text(format!("💡 {}", suggestion.action)),
        ],
    )
}

pub fn dynamic_reallocation_view(result: &DynamicReallocationResult) -> Vec<Block> {
    if !result.has_suggestions || result.suggestions.is_empty() {
        return vec![Block::banner(Tone::Success, NO_REALLOCATION_NEEDED)];
    }

    let mut blocks = vec![Block::heading("Dynamic Reallocation Suggestions")];
    for (kind, title, class) in GROUPS {
        let mut group = result
            .suggestions
            .iter()
            .filter(|suggestion| suggestion.kind == kind)
            .peekable();
        if group.peek().is_none() {
            continue;
        }
        blocks.push(Block::subheading(title));
        blocks.extend(group.map(|suggestion| suggestion_card(class, suggestion)));
    }
    blocks
}

#[function_component(DynamicReallocationForm)]
pub fn dynamic_reallocation_form() -> Html {
    let form = use_feature();
    let allocated = use_state(CategoryDraft::default);
    let spent = use_state(CategoryDraft::default);
    let months = use_state(|| "1".to_string());

    let onsubmit = {
        let form = form.clone();
        let (allocated, spent, months) = ((*allocated).clone(), (*spent).clone(), (*months).clone());
        on_submit(Callback::from(move |_| {
            form.dispatch(
                Endpoint::DynamicReallocation,
                collect_tracking(&allocated, &spent, &months),
                |result: DynamicReallocationResult| dynamic_reallocation_view(&result),
            );
        }))
    };

    let set_allocated = {
        let allocated = allocated.clone();
        Callback::from(move |draft: CategoryDraft| allocated.set(draft))
    };
    let set_spent = {
        let spent = spent.clone();
        Callback::from(move |draft: CategoryDraft| spent.set(draft))
    };

    html! {
        <Panel title="Dynamic Reallocation" subtitle="Compare what you planned with what you spent and move the difference where it helps.">
            <form id="dynamicReallocationForm" class="space-y-4" {onsubmit}>
                <h4 class="font-bold text-[#173E63]">{ "Allocated" }</h4>
                <CategoryFields group="Allocated" value={(*allocated).clone()} on_change={set_allocated} />
                <h4 class="font-bold text-[#173E63]">{ "Actually Spent" }</h4>
                <CategoryFields group="Spent" value={(*spent).clone()} on_change={set_spent} />
                <Field label="Months Tracked" value={(*months).clone()} on_change={bind(&months)} min="1" required=true />
                <SubmitButton label="Analyze Spending" busy={form.is_busy()} />
            </form>
            { form.render("dynamicReallocationResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(values: [&str; 4]) -> CategoryDraft {
        CategoryDraft {
            savings: values[0].into(),
            investments: values[1].into(),
            personal: values[2].into(),
            misc: values[3].into(),
        }
    }

    fn result(json: &str) -> DynamicReallocationResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_collect_both_category_sets() {
        let request = collect_tracking(
            &draft(["10000", "15000", "17500", "7500"]),
            &draft(["10000", "15000", "21000", "4000"]),
            "3",
        )
        .unwrap();
        assert_eq!(request.actual_spending.personal, 21000.0);
        assert_eq!(request.months_tracked, 3);

        let err = collect_tracking(&draft(["1", "2", "3", "4"]), &draft(["1", "", "3", "4"]), "3")
            .unwrap_err();
        assert_eq!(err.to_string(), "Spent investments must be a number");
    }

    #[test]
    fn test_no_suggestions_message() {
        let blocks = dynamic_reallocation_view(&result(r#"{"has_suggestions": true, "suggestions": []}"#));
        assert_eq!(blocks, vec![Block::banner(Tone::Success, NO_REALLOCATION_NEEDED)]);
    }

    #[test]
    fn test_groups_follow_fixed_order() {
        let blocks = dynamic_reallocation_view(&result(
            r#"{"has_suggestions": true, "suggestions": [
                {"type": "efficiency_tip", "category": "misc", "allocated": 7500, "spent": 4000, "action": "Lower misc"},
                {"type": "deficit_warning", "category": "personal", "allocated": 17500, "spent": 21000, "action": "Cut back"},
                {"type": "deficit_coverage", "category": "personal", "allocated": 17500, "spent": 21000, "action": "Move ₹3,500 from misc"},
                {"type": "mystery", "category": "savings", "allocated": 1, "spent": 1, "action": "?"}
            ]}"#,
        ));

        let headings: Vec<String> = blocks
            .iter()
            .filter(|b| matches!(b, Block::Subheading(_)))
            .map(Block::plain_text)
            .collect();
        assert_eq!(
            headings,
            vec![
                "🔴 Overspending Coverage Plan:",
                "⚠️ Budget Overruns:",
                "💡 Efficiency Optimization:"
            ]
        );

        assert_eq!(
            blocks[2].plain_text(),
            "PERSONAL: Allocated ₹17,500 | Spent ₹21,000\n💡 Move ₹3,500 from misc"
        );
        assert!(matches!(&blocks[4], Block::Card { class, .. } if class == "suggestion-box warning"));
        assert!(!blocks.iter().any(|b| b.plain_text().contains("SAVINGS")));
    }
}
