//! End-to-end quote scenarios against the built-in catalog

use coverage_quote::app::AppState;
use coverage_quote::catalog::Catalog;
use coverage_quote::error::QuoteError;
use coverage_quote::money::Money;
use coverage_quote::provider_count::ProviderCount;
use coverage_quote::quote::{QuoteBreakdown, quote};
use coverage_quote::selection::SelectionSet;
use coverage_quote::types::ProviderArrangement;

fn selection(names: &[&str]) -> SelectionSet {
    let mut set = SelectionSet::new();
    for name in names {
        set.toggle(name);
    }
    set
}

#[test]
fn test_single_plan_single_provider() {
    let catalog = Catalog::builtin();
    let total = quote(&catalog, &selection(&["Aetna"]), ProviderCount::new(1));
    assert_eq!(total, Money::new(50));
}

#[test]
fn test_two_plans_three_providers() {
    let catalog = Catalog::builtin();
    let total = quote(&catalog, &selection(&["Aetna", "Cigna"]), ProviderCount::new(3));
    assert_eq!(total, Money::new(450));
}

#[test]
fn test_decrement_at_minimum_keeps_quote() {
    let mut state = AppState::default();
    state.toggle("Medicaid");
    state.toggle("Medicare");
    state.decrement_providers();

    assert_eq!(state.providers.get(), 1);
    assert_eq!(state.quote(), Money::new(1000));
}

#[test]
fn test_no_selection_is_free_at_any_count() {
    let catalog = Catalog::builtin();
    for count in [1, 2, 17, 1000] {
        assert_eq!(
            quote(&catalog, &SelectionSet::new(), ProviderCount::new(count)),
            Money::ZERO
        );
    }
}

#[test]
fn test_toggle_on_then_off_is_free() {
    let mut state = AppState::default();
    state.set_providers_direct("5");
    state.toggle("Aetna");
    state.toggle("Aetna");
    assert_eq!(state.quote(), Money::ZERO);
}

#[test]
fn test_arrangement_never_changes_total() {
    let catalog = Catalog::builtin();
    let picked = selection(&["Cigna", "Medicare"]);
    let count = ProviderCount::new(4);

    let group = QuoteBreakdown::compute(&catalog, &picked, count, ProviderArrangement::Group);
    let solo = QuoteBreakdown::compute(&catalog, &picked, count, ProviderArrangement::Solo);
    assert_eq!(group.total, solo.total);
    assert_eq!(group.total, Money::new(2400));
}

#[test]
fn test_breakdown_summary() {
    let catalog = Catalog::builtin();
    let breakdown = QuoteBreakdown::compute(
        &catalog,
        &selection(&["Cigna", "Aetna"]),
        ProviderCount::new(2),
        ProviderArrangement::Solo,
    );

    assert_eq!(breakdown.lines.len(), 2);
    assert_eq!(breakdown.lines[0].name, "Cigna");
    assert_eq!(breakdown.lines[0].line_total, Money::new(200));

    let summary = breakdown.summary_lines();
    assert_eq!(summary.last().map(String::as_str), Some("Estimated Cost: $300"));
    assert!(summary.iter().any(|line| line == "Arrangement: Solo"));
}

#[test]
fn test_breakdown_json_shape() {
    let catalog = Catalog::builtin();
    let breakdown = QuoteBreakdown::compute(
        &catalog,
        &selection(&["Aetna"]),
        ProviderCount::new(3),
        ProviderArrangement::Group,
    );

    let json = serde_json::to_value(&breakdown).expect("serializes");
    assert_eq!(json["total"], 150);
    assert_eq!(json["providers"], 3);
    assert_eq!(json["lines"][0]["name"], "Aetna");
}

// =============================================================================
// Command-line quotes
// =============================================================================

#[test]
fn test_unknown_plan_name_is_rejected() {
    let catalog = Catalog::builtin();
    let err = QuoteBreakdown::for_names(&catalog, &["Aetna", "Kaiser"], "1", Default::default())
        .unwrap_err();
    assert!(matches!(err, QuoteError::UnknownOffering(ref name) if name == "Kaiser"));
    assert_eq!(err.to_string(), "Unknown offering: Kaiser");
}

#[test]
fn test_repeated_plan_name_counts_once() {
    let catalog = Catalog::builtin();
    let names = vec!["Aetna".to_string(), "Aetna".to_string(), "Cigna".to_string()];

    let selection = catalog.select_names(&names).expect("known names");
    assert_eq!(selection.len(), 2);

    let breakdown =
        QuoteBreakdown::for_names(&catalog, &names, "3", ProviderArrangement::Group).unwrap();
    assert_eq!(breakdown.lines.len(), 2);
    assert_eq!(breakdown.total, Money::new(450));
}

#[test]
fn test_provider_text_reads_like_the_form_field() {
    let catalog = Catalog::builtin();
    for (text, expected) in [("abc", 1), ("-4", 1), ("", 1), ("2.9", 2), (" 5 ", 5)] {
        let breakdown =
            QuoteBreakdown::for_names(&catalog, &["Cigna"], text, ProviderArrangement::Solo)
                .unwrap();
        assert_eq!(breakdown.providers, expected, "input {:?}", text);
        assert_eq!(breakdown.total, Money::new(100 * u64::from(expected)));
    }
}
