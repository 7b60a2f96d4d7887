//! List → delete / form → save round trips against the seeded stores.

use std::time::Duration;

use tallybook_core::detail::resolve;
use tallybook_core::filter::FilterValues;
use tallybook_core::{
    CoreError, DetailState, Entity, EntityKind, FallbackPolicy, FormData, InMemoryRepository, LineItem, ListView,
    Repository,
};

use crate::common::{id, stores, today};

#[tokio::test]
async fn confirmed_delete_removes_exactly_one_record() {
    let stores = stores();
    let before = stores.bills.len();
    let mut list = ListView::new(EntityKind::Bill);

    list.request_delete(id("bill-2"));
    let removed = list.confirm_delete(&stores.bills).await.expect("delete");

    assert_eq!(removed, Some(id("bill-2")));
    assert_eq!(stores.bills.len(), before - 1);
    let records = stores.bills.snapshot();
    assert!(records.iter().all(|b| b.id != id("bill-2")));
    assert!(matches!(
        resolve(&records, &id("bill-2"), FallbackPolicy::NotFound),
        tallybook_core::DetailSelection::NotFound(_)
    ));
}

#[tokio::test]
async fn deleting_a_missing_record_reports_not_found() {
    let stores = stores();
    let err = stores.delete(EntityKind::Quote, &id("quote-99")).await.unwrap_err();
    assert_eq!(
        err,
        CoreError::NotFound {
            kind: EntityKind::Quote,
            id: "quote-99".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn delete_waits_for_the_simulated_latency() {
    let seed = tallybook_core::seed::vendors();
    let repo = InMemoryRepository::new(seed.clone(), Duration::from_millis(1500));
    let started = tokio::time::Instant::now();
    repo.delete(&seed[0].id).await.expect("delete");
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(repo.list().await.expect("list").len(), seed.len() - 1);
}

fn bill_form(number: &str) -> FormData {
    FormData::new()
        .with("vendor_name", "Harper Office Supply")
        .with("number", number)
        .with("date", "2026-10-18")
        .with("status", "open")
}

#[tokio::test]
async fn created_bill_takes_its_amount_from_line_items() {
    let stores = stores();
    let items = vec![
        LineItem::new("n-1", "Paper", 10.0, 5.0, 0.0),
        LineItem::new("n-2", "Ink", 2.0, 75.0, 0.0),
    ];
    let new_id = stores
        .save(EntityKind::Bill, None, &bill_form("BILL-0100"), items)
        .await
        .expect("save");

    let page = stores.detail_page(EntityKind::Bill, &new_id, FallbackPolicy::NotFound);
    assert_eq!(page.state, DetailState::Found);
    let record = page.record.expect("record");
    assert_eq!(record.number, "BILL-0100");
    assert!((record.amount - 200.0).abs() < 1e-9);

    let rows = stores.rows(EntityKind::Bill, &FilterValues::new(), "");
    assert_eq!(rows.last().map(|r| r.id.clone()), Some(new_id));
}

#[tokio::test]
async fn update_keeps_store_order() {
    let stores = stores();
    let mut data = stores.form_values(EntityKind::Bill, &id("bill-2")).expect("form values");
    data.set("status", "paid");
    let items = stores.line_items(EntityKind::Bill, &id("bill-2"));
    stores
        .save(EntityKind::Bill, Some(id("bill-2")), &data, items)
        .await
        .expect("save");

    let bills = stores.bills.snapshot();
    assert_eq!(bills[1].id, id("bill-2"));
    assert_eq!(bills[1].status.as_str(), "paid");
    assert!((bills[1].amount() - 1230.0).abs() < 1e-9);
}

#[tokio::test]
async fn invalid_form_data_is_never_stored() {
    let stores = stores();
    let before = stores.count(EntityKind::Bill);
    let data = bill_form("").with("date", "not a date");
    let err = stores
        .save(EntityKind::Bill, None, &data, Vec::new())
        .await
        .unwrap_err();
    match err {
        CoreError::Validation(errors) => {
            assert!(errors.get("number").is_some());
            assert!(errors.get("date").is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(stores.count(EntityKind::Bill), before);
}

#[tokio::test]
async fn line_items_are_dropped_for_kinds_without_them() {
    let stores = stores();
    let data = FormData::new()
        .with("number", "VEN-0042")
        .with("name", "Lakeside Catering")
        .with("status", "active");
    let new_id = stores
        .save(
            EntityKind::Vendor,
            None,
            &data,
            vec![LineItem::new("x", "Ignored", 1.0, 1.0, 0.0)],
        )
        .await
        .expect("save");
    assert!(stores.line_items(EntityKind::Vendor, &new_id).is_empty());
}

#[tokio::test]
async fn reset_restores_the_seed() {
    let stores = stores();
    let seeded = stores.count(EntityKind::Invoice);
    stores.delete(EntityKind::Invoice, &id("invoice-1")).await.expect("delete");
    stores.delete(EntityKind::Invoice, &id("invoice-2")).await.expect("delete");
    assert_eq!(stores.count(EntityKind::Invoice), seeded - 2);

    stores.reset();
    assert_eq!(stores.count(EntityKind::Invoice), seeded);
    assert!(stores.summary(today()).receivables > 0.0);
}

#[test]
fn detail_page_flags_fallback_to_first_record() {
    let stores = stores();
    let page = stores.detail_page(EntityKind::Challan, &id("challan-404"), FallbackPolicy::FirstRecord);
    assert_eq!(
        page.state,
        DetailState::Fallback {
            requested: id("challan-404"),
        }
    );
    assert_eq!(page.record.map(|r| r.id), Some(id("challan-1")));
    assert_eq!(page.sidebar.len(), stores.count(EntityKind::Challan));
}
