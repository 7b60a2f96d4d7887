//! Advanced filter against seeded records, through both the filter itself and `Stores::rows`.

use std::cell::RefCell;
use std::rc::Rc;

use tallybook_core::filter::{FilterValues, RangeBound};
use tallybook_core::{AdvancedFilter, DatePreset, EntityKind, FilterValue};

use crate::common::{day, stores, today};

fn numbers(rows: &[tallybook_core::TableRow], column: usize) -> Vec<String> {
    rows.iter().map(|r| r.cells[column].clone()).collect()
}

#[test]
fn multi_select_matches_any_chosen_category() {
    let stores = stores();
    let mut filter = AdvancedFilter::new(EntityKind::Expense.filter_fields());
    filter.toggle_option("category", "Travel");
    filter.toggle_option("category", "Rent");

    let rows = stores.rows(EntityKind::Expense, filter.values(), "");
    assert_eq!(numbers(&rows, 1), vec!["EXP-0002", "EXP-0003"]);

    filter.toggle_option("category", "Rent");
    let rows = stores.rows(EntityKind::Expense, filter.values(), "");
    assert_eq!(numbers(&rows, 1), vec!["EXP-0002"]);
}

#[test]
fn this_month_preset_keeps_only_october_invoices() {
    let stores = stores();
    let mut filter = AdvancedFilter::new(EntityKind::Invoice.filter_fields());
    filter.apply_date_preset("date", &DatePreset::ThisMonth, today());
    assert_eq!(filter.text("date_from"), "2026-10-01");
    assert_eq!(filter.text("date_to"), "2026-10-31");

    let rows = stores.rows(EntityKind::Invoice, filter.values(), "");
    assert_eq!(numbers(&rows, 1), vec!["INV-0003", "INV-0004"]);
}

#[test]
fn number_bounds_are_inclusive_and_junk_is_ignored() {
    let stores = stores();
    let mut filter = AdvancedFilter::new(EntityKind::PaymentReceived.filter_fields());
    filter.set_number_bound("amount", RangeBound::Min, "150");
    filter.set_number_bound("amount", RangeBound::Max, "1000");
    let rows = stores.rows(EntityKind::PaymentReceived, filter.values(), "");
    assert_eq!(numbers(&rows, 1), vec!["PR-0002", "PR-0003"]);

    filter.set_number_bound("amount", RangeBound::Max, "lots");
    let rows = stores.rows(EntityKind::PaymentReceived, filter.values(), "");
    assert_eq!(rows.len(), 3);
}

#[test]
fn status_select_and_search_combine() {
    let stores = stores();
    let mut filter = AdvancedFilter::new(EntityKind::Bill.filter_fields());
    filter.set_select("status", Some("paid"));
    assert_eq!(stores.rows(EntityKind::Bill, filter.values(), "").len(), 1);
    assert!(stores.rows(EntityKind::Bill, filter.values(), "harper").is_empty());
    assert_eq!(stores.rows(EntityKind::Bill, &FilterValues::new(), "HARPER").len(), 1);
}

#[test]
fn custom_date_range_uses_typed_bounds() {
    let stores = stores();
    let mut filter = AdvancedFilter::new(EntityKind::Challan.filter_fields());
    filter.set_date_bound("date", RangeBound::Min, "2026-10-07");
    filter.set_date_bound("date", RangeBound::Max, "2026-10-15");
    let rows = stores.rows(EntityKind::Challan, filter.values(), "");
    assert_eq!(rows.len(), 2);

    let (from, to) = DatePreset::Last7Days.range(today());
    assert_eq!((from, to), (day(2026, 10, 12), today()));
}

#[test]
fn every_mutation_reports_the_full_mapping() {
    let seen: Rc<RefCell<Vec<FilterValues>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut filter = AdvancedFilter::new(EntityKind::Bill.filter_fields())
        .on_change(move |values| sink.borrow_mut().push(values.clone()));

    filter.set_select("status", Some("open"));
    filter.apply_date_preset("date", &DatePreset::Yesterday, today());
    filter.set("amount_min", FilterValue::Text(String::new()));
    assert_eq!(filter.active_filter_count(), 3);

    filter.clear_all();
    assert_eq!(filter.active_filter_count(), 0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[1].len(), 3);
    assert!(seen[3].is_empty());
}
