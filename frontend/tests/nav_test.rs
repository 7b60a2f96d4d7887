//! Sidebar, breadcrumbs and page titles for the app shell.

use pretty_assertions::assert_eq;
use tallybook_core::{EntityKind, RecordId, Route};
use tallybook_frontend::nav::{breadcrumbs, delete_prompt, is_active, nav_groups, page_title};

fn id(s: &str) -> RecordId {
    RecordId::parse(s).unwrap()
}

#[test]
fn sidebar_lists_dashboard_then_both_sections() {
    let groups = nav_groups();
    let titles: Vec<&str> = groups.iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Overview", "Purchases", "Sales"]);
    assert_eq!(groups[0].items[0].route, Route::Dashboard);

    let purchases: Vec<&str> = groups[1].items.iter().map(|i| i.label).collect();
    assert_eq!(
        purchases,
        vec!["Vendors", "Expenses", "Recurring Purchases", "Bills", "Payments Made", "Vendor Credits"]
    );
    let sales: Vec<&str> = groups[2].items.iter().map(|i| i.label).collect();
    assert_eq!(
        sales,
        vec!["Invoices", "Payments Received", "Quotes", "Credit Notes", "Delivery Challans"]
    );
}

#[test]
fn every_sidebar_item_points_at_a_list() {
    for item in nav_groups().into_iter().skip(1).flat_map(|g| g.items) {
        assert!(matches!(item.route, Route::List(_)), "{:?}", item.route);
    }
}

#[test]
fn sidebar_item_stays_active_on_detail_and_edit_pages() {
    let bills = Route::List(EntityKind::Bill);
    assert!(is_active(&bills, &Route::List(EntityKind::Bill)));
    assert!(is_active(&bills, &Route::View(EntityKind::Bill, id("bill-2"))));
    assert!(is_active(&bills, &Route::Edit(EntityKind::Bill, id("bill-2"))));
    assert!(is_active(&bills, &Route::New(EntityKind::Bill)));
    assert!(!is_active(&bills, &Route::List(EntityKind::Invoice)));
    assert!(!is_active(&bills, &Route::Dashboard));
    assert!(is_active(&Route::Dashboard, &Route::Dashboard));
}

#[test]
fn breadcrumbs_link_back_to_the_list() {
    let crumbs = breadcrumbs(&Route::View(EntityKind::Invoice, id("invoice-3")));
    assert_eq!(
        crumbs,
        vec![
            ("Sales".to_string(), None),
            ("Invoices".to_string(), Some(Route::List(EntityKind::Invoice))),
            ("invoice-3".to_string(), None),
        ]
    );
}

#[test]
fn list_breadcrumb_has_no_self_link() {
    let crumbs = breadcrumbs(&Route::List(EntityKind::Vendor));
    assert_eq!(
        crumbs,
        vec![("Purchases".to_string(), None), ("Vendors".to_string(), None)]
    );
}

#[test]
fn new_and_edit_breadcrumbs() {
    let new = breadcrumbs(&Route::New(EntityKind::Quote));
    assert_eq!(new.last().map(|c| c.0.as_str()), Some("New Quote"));
    let edit = breadcrumbs(&Route::Edit(EntityKind::Bill, id("bill-1")));
    assert_eq!(edit.last().map(|c| c.0.as_str()), Some("Edit bill-1"));
    assert_eq!(breadcrumbs(&Route::Dashboard), vec![("Dashboard".to_string(), None)]);
}

#[test]
fn page_titles() {
    assert_eq!(page_title(&Route::List(EntityKind::Challan)), "Delivery Challans");
    assert_eq!(page_title(&Route::New(EntityKind::CreditNote)), "New Credit Note");
    assert_eq!(page_title(&Route::Edit(EntityKind::PaymentMade, id("payment-made-1"))), "Edit Payment Made");
    assert_eq!(page_title(&Route::View(EntityKind::Expense, id("expense-1"))), "Expense");
    assert_eq!(page_title(&Route::NotFound("/nope".to_string())), "Page not found");
}

#[test]
fn delete_prompt_names_the_record() {
    assert_eq!(
        delete_prompt(EntityKind::VendorCredit, "VC-0002"),
        "Delete vendor credit VC-0002? This cannot be undone."
    );
}
