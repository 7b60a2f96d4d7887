use tallybook_core::detail::switch_to;
use tallybook_core::{EntityKind, FallbackPolicy, ListView, Route, Section};

use crate::common::{id, stores};

#[test]
fn every_kind_has_list_new_edit_and_view_pages() {
    for kind in EntityKind::ALL {
        let list = ListView::new(*kind);
        let record = id(&format!("{}-1", kind.slug()));
        for route in [
            Route::List(*kind),
            list.add_new_route(),
            list.edit_route(&record),
            list.view_route(&record),
        ] {
            assert_eq!(Route::parse(&route.path()), route, "{}", route);
            assert!(route.in_app());
        }
    }
}

#[test]
fn sections_own_their_paths() {
    for kind in Section::Purchases.kinds() {
        assert!(Route::List(kind).path().starts_with("/purchases/"));
    }
    for kind in Section::Sales.kinds() {
        assert!(Route::List(kind).path().starts_with("/sales/"));
    }
    assert_eq!(Route::parse("/purchases/invoices"), Route::NotFound("/purchases/invoices".to_string()));
    assert!(!Route::Login.in_app());
}

#[test]
fn sidebar_switch_lands_on_the_sibling_view() {
    let stores = stores();
    let page = stores.detail_page(EntityKind::Invoice, &id("invoice-1"), FallbackPolicy::NotFound);
    let sibling = &page.sidebar[2];
    assert!(!sibling.selected);
    let route = switch_to(page.kind, &sibling.id);
    assert_eq!(route.path(), "/sales/invoices/view/invoice-3");
}

#[test]
fn invoice_mail_link_is_percent_encoded() {
    let stores = stores();
    let page = stores.detail_page(EntityKind::Invoice, &id("invoice-1"), FallbackPolicy::NotFound);
    let mail = page.record.and_then(|r| r.mail).expect("invoice has a mail draft");
    let href = mail.href();
    assert!(href.starts_with("mailto:ap@wayne-enterprises.com?subject="));
    assert!(href.contains("INV-0001"));
    assert!(!href.contains(' '));
}
