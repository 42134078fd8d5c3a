//! Quote calculation
//!
//! A quote is never stored; it is recomputed from the selection and the
//! provider count whenever it is read.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::money::Money;
use crate::provider_count::ProviderCount;
use crate::selection::SelectionSet;
use crate::types::ProviderArrangement;
use serde::Serialize;

/// Total cost of the selected offerings for `providers` providers.
///
/// Names in the selection that the catalog does not know contribute nothing.
pub fn quote(catalog: &Catalog, selection: &SelectionSet, providers: ProviderCount) -> Money {
    selection
        .iter()
        .filter_map(|name| catalog.get(name))
        .map(|offering| offering.unit_cost * providers.get())
        .sum()
}

/// One selected plan in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub name: String,
    pub unit_cost: Money,
    pub providers: u32,
    pub line_total: Money,
}

/// Itemised view of a quote, used for summaries and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub lines: Vec<QuoteLine>,
    /// Recorded for the customer's reference only
    pub arrangement: ProviderArrangement,
    pub providers: u32,
    pub total: Money,
}

impl QuoteBreakdown {
    /// Itemise the current selection. Lines follow selection order.
    pub fn compute(
        catalog: &Catalog,
        selection: &SelectionSet,
        providers: ProviderCount,
        arrangement: ProviderArrangement,
    ) -> Self {
        let lines: Vec<QuoteLine> = selection
            .iter()
            .filter_map(|name| catalog.get(name))
            .map(|offering| QuoteLine {
                name: offering.name.clone(),
                unit_cost: offering.unit_cost,
                providers: providers.get(),
                line_total: offering.unit_cost * providers.get(),
            })
            .collect();
        let total = lines.iter().map(|line| line.line_total).sum();

        Self {
            lines,
            arrangement,
            providers: providers.get(),
            total,
        }
    }

    /// Quote named plans with the provider count given as field text.
    ///
    /// The text is read like the form's numeric field, so anything below 1
    /// or unparseable counts as 1. Unknown plan names are an error.
    pub fn for_names<S: AsRef<str>>(
        catalog: &Catalog,
        names: &[S],
        providers: &str,
        arrangement: ProviderArrangement,
    ) -> Result<Self> {
        let selection = catalog.select_names(names)?;
        let mut count = ProviderCount::default();
        count.set_direct(providers);
        Ok(Self::compute(catalog, &selection, count, arrangement))
    }

    /// Human-readable summary, one line per plan followed by the total
    pub fn summary_lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{:<12} {} x {} = {}",
                    line.name, line.unit_cost, line.providers, line.line_total
                )
            })
            .collect();
        out.push(format!("Arrangement: {}", self.arrangement));
        out.push(format!("Estimated Cost: {}", self.total));
        out
    }
}
