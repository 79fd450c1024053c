use yew::prelude::*;

use crate::api::Endpoint;
use crate::collect::{collect_entries, parse_finite, EntryDraft};
use crate::components::layout::Panel;
use crate::components::{add_entry, edit_entry, Block, Field, SubmitButton, TableRow, TableView, Tone};
use crate::error::Result;
use crate::format::{fixed, format_currency};
use crate::models::{Investment, TaxHarvestingRequest, TaxHarvestingResult};

use super::use_feature;

pub const NO_INVESTMENTS: &str = "Please add at least one investment";
pub const NO_OPPORTUNITIES: &str =
    "✅ No tax-loss harvesting opportunities (all investments performing well)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentDraft {
    pub name: String,
    pub purchase_value: String,
    pub current_value: String,
}

impl EntryDraft for InvestmentDraft {
    type Entry = Investment;

    fn parse(&self) -> Option<Investment> {
        if self.name.is_empty() {
            return None;
        }
        Some(Investment {
            name: self.name.clone(),
            purchase_value: parse_finite(&self.purchase_value)?,
            current_value: parse_finite(&self.current_value)?,
        })
    }
}

pub fn collect_investments(drafts: &[InvestmentDraft]) -> Result<TaxHarvestingRequest> {
    Ok(TaxHarvestingRequest {
        investments: collect_entries(drafts, 1, NO_INVESTMENTS)?,
    })
}

pub fn tax_harvesting_view(result: &TaxHarvestingResult) -> Vec<Block> {
    if !result.has_opportunities || result.opportunities.is_empty() {
        return vec![Block::banner(Tone::Success, NO_OPPORTUNITIES)];
    }

    let mut table = TableView::new(["Investment", "Loss", "Loss %", "Tax Benefit"]);
    let mut total_benefit = 0.0;
    for opportunity in &result.opportunities {
        table.push(TableRow::new([
            opportunity.name.clone(),
            format_currency(opportunity.loss_amount),
            format!("{}%", fixed(opportunity.loss_pct, 1)),
            format_currency(opportunity.tax_offset_benefit),
        ]));
        total_benefit += opportunity.tax_offset_benefit;
    }
    table.push(TableRow::total([
        "Total Tax Benefit".to_string(),
        String::new(),
        String::new(),
        format_currency(total_benefit),
    ]));

    vec![
        Block::heading("Tax-Loss Harvesting Opportunities"),
        Block::Table(table),
        Block::toned(
            Tone::Info,
            format!(
                "💡 Selling these before year-end can offset {} in taxes",
                format_currency(total_benefit)
            ),
        ),
    ]
}

#[function_component(TaxHarvestingForm)]
pub fn tax_harvesting_form() -> Html {
    let form = use_feature();
    let entries = use_state(|| vec![InvestmentDraft::default()]);

    let onclick = {
        let form = form.clone();
        let drafts = (*entries).clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(
                Endpoint::TaxHarvesting,
                collect_investments(&drafts),
                |result: TaxHarvestingResult| tax_harvesting_view(&result),
            );
        })
    };

    html! {
        <Panel title="Tax-Loss Harvesting" subtitle="Find investments trading below cost that could offset taxable gains.">
            <div id="investmentInputs" class="space-y-3">
                { for entries.iter().enumerate().map(|(i, entry)| html! {
                    <div class="investment-entry grid grid-cols-1 md:grid-cols-3 gap-3">
                        <Field label="Investment Name" input_type="text" placeholder="e.g., Tech Stock" value={entry.name.clone()} on_change={edit_entry(&entries, i, |d, v| d.name = v)} />
                        <Field label="Purchase Value (₹)" value={entry.purchase_value.clone()} on_change={edit_entry(&entries, i, |d, v| d.purchase_value = v)} min="0" step="0.01" />
                        <Field label="Current Value (₹)" value={entry.current_value.clone()} on_change={edit_entry(&entries, i, |d, v| d.current_value = v)} min="0" step="0.01" />
                    </div>
                }) }
            </div>
            <div class="flex gap-2 mt-3">
                <button type="button" class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={add_entry(&entries)}>{ "+ Add Investment" }</button>
                <SubmitButton label="Find Opportunities" busy={form.is_busy()} {onclick} />
            </div>
            { form.render("taxHarvestingResult") }
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::blocks::find_table;

    fn draft(name: &str, purchase: &str, current: &str) -> InvestmentDraft {
        InvestmentDraft {
            name: name.into(),
            purchase_value: purchase.into(),
            current_value: current.into(),
        }
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let request = collect_investments(&[
            draft("Tech Stock", "100000", "82000"),
            draft("", "5000", "4000"),
            draft("Bond Fund", "50000", ""),
        ])
        .unwrap();
        assert_eq!(request.investments.len(), 1);
        assert_eq!(request.investments[0].current_value, 82000.0);
    }

    #[test]
    fn test_no_complete_rows_is_rejected() {
        let err = collect_investments(&[InvestmentDraft::default()]).unwrap_err();
        assert_eq!(err.to_string(), NO_INVESTMENTS);
    }

    #[test]
    fn test_no_opportunities_ignores_list_contents() {
        let result: TaxHarvestingResult = serde_json::from_str(
            r#"{"has_opportunities": false, "opportunities": [
                {"name": "X", "loss_amount": 100, "loss_pct": 10, "tax_offset_benefit": 30}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            tax_harvesting_view(&result),
            vec![Block::banner(Tone::Success, NO_OPPORTUNITIES)]
        );
    }

    #[test]
    fn test_total_benefit_sums_opportunities() {
        let result: TaxHarvestingResult = serde_json::from_str(
            r#"{"has_opportunities": true, "opportunities": [
                {"name": "Tech Stock", "loss_amount": 18000, "loss_pct": 18, "tax_offset_benefit": 5400},
                {"name": "Crypto", "loss_amount": 7000, "loss_pct": 35.27, "tax_offset_benefit": 2100}
            ]}"#,
        )
        .unwrap();

        let blocks = tax_harvesting_view(&result);
        let table = find_table(&blocks).unwrap();
        assert_eq!(table.rows[1].cells[2], "35.3%");
        assert_eq!(
            table.total_row().unwrap().cells,
            vec!["Total Tax Benefit", "", "", "₹7,500"]
        );
        assert_eq!(
            blocks[2],
            Block::toned(Tone::Info, "💡 Selling these before year-end can offset ₹7,500 in taxes")
        );
    }
}
