//! Form modal lifecycle wired to the stores, the way an edit page drives it.

use std::cell::Cell;
use std::time::Duration;

use tallybook_core::{
    CoreError, EntityKind, FormModal, SubmitOutcome, SubmitStatus, GENERIC_ERROR,
};

use crate::common::{id, stores};

#[tokio::test]
async fn missing_required_fields_never_reach_the_callback() {
    let mut modal = FormModal::new("New Invoice", EntityKind::Invoice.form_fields())
        .with_auto_close(Duration::ZERO);
    modal.open();
    modal.set_value("customer_name", "Acme Corporation");

    let called = Cell::new(false);
    let outcome = modal
        .submit(|_| {
            called.set(true);
            async { Ok::<(), CoreError>(()) }
        })
        .await;

    assert!(!called.get());
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            // number, date and status are required and empty
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get("number"), Some("Invoice # is required"));
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(modal.is_open());
    assert_eq!(modal.status(), &SubmitStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn success_saves_then_closes_after_the_delay() {
    let stores = stores();
    let before = stores.count(EntityKind::Quote);
    let initial = stores.form_values(EntityKind::Quote, &id("quote-2")).expect("form values");
    let items = stores.line_items(EntityKind::Quote, &id("quote-2"));

    let mut modal = FormModal::new("Edit Quote", EntityKind::Quote.form_fields()).with_initial(initial);
    modal.open();
    modal.set_value("number", "QT-0002-R1");

    let started = tokio::time::Instant::now();
    let outcome = modal
        .submit(|data| {
            let stores = stores.clone();
            async move {
                stores
                    .save(EntityKind::Quote, Some(id("quote-2")), &data, items)
                    .await
                    .map(|_| ())
            }
        })
        .await;

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert!(!modal.is_open());
    assert_eq!(stores.count(EntityKind::Quote), before);
    assert_eq!(stores.quotes.snapshot()[1].number, "QT-0002-R1");
}

#[tokio::test]
async fn failures_keep_the_modal_open_with_a_banner() {
    let mut modal = FormModal::new("Delete", Vec::new()).with_auto_close(Duration::ZERO);
    modal.open();

    let outcome = modal
        .confirm(|| async { Err::<(), _>(CoreError::Submit(String::new())) })
        .await;
    assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_ERROR.to_string()));
    assert_eq!(modal.status(), &SubmitStatus::Error(GENERIC_ERROR.to_string()));
    assert!(modal.is_open());

    let stores = stores();
    let outcome = modal
        .confirm(|| async move { stores.delete(EntityKind::Bill, &id("bill-missing")).await })
        .await;
    assert_eq!(outcome, SubmitOutcome::Failed("Bill bill-missing not found".to_string()));
}

#[tokio::test]
async fn split_submit_lets_the_caller_await_outside_the_modal() {
    let stores = stores();
    let mut modal = FormModal::new("New Expense", EntityKind::Expense.form_fields())
        .with_auto_close(Duration::ZERO);
    modal.open();
    for (field, value) in [
        ("number", "EXP-0010"),
        ("date", "2026-10-18"),
        ("category", "Meals"),
        ("paid_through", "Petty Cash"),
        ("amount", "-4"),
    ] {
        modal.set_value(field, value);
    }
    let errors = modal.begin_submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.get("amount").is_some());

    modal.set_value("amount", "42.50");
    assert!(modal.errors().is_empty());
    let data = modal.begin_submit().expect("valid form");
    assert!(modal.is_submitting());

    let result = stores.save(EntityKind::Expense, None, &data, Vec::new()).await.map(|_| ());
    assert!(modal.finish(result));
    assert_eq!(modal.status(), &SubmitStatus::Success("Saved successfully".to_string()));
    assert_eq!(stores.count(EntityKind::Expense), 4);
}
