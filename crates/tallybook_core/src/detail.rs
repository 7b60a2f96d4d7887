//! Master-detail: resolve one record by id, list its siblings for quick
//! switching, and lay out its line items read-only.

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::models::{Entity, EntityKind, LineItem, RecordDetail};
use crate::routes::Route;

/// What to show when the requested id is not in the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Show the first record and flag that it was substituted.
    #[default]
    FirstRecord,
    NotFound,
}

impl FallbackPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first_record" => Some(FallbackPolicy::FirstRecord),
            "not_found" | "none" => Some(FallbackPolicy::NotFound),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DetailSelection<'a, T> {
    Found(&'a T),
    /// `requested` was missing; `shown` is the first record instead.
    Fallback { requested: RecordId, shown: &'a T },
    NotFound(RecordId),
    /// Nothing to show at all.
    Empty,
}

impl<'a, T> DetailSelection<'a, T> {
    pub fn record(&self) -> Option<&'a T> {
        match self {
            DetailSelection::Found(r) => Some(*r),
            DetailSelection::Fallback { shown, .. } => Some(*shown),
            DetailSelection::NotFound(_) | DetailSelection::Empty => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DetailSelection::Fallback { .. })
    }
}

pub fn resolve<'a, T: Entity>(records: &'a [T], id: &RecordId, policy: FallbackPolicy) -> DetailSelection<'a, T> {
    if let Some(found) = records.iter().find(|r| r.id() == id) {
        return DetailSelection::Found(found);
    }
    match (records.first(), policy) {
        (None, _) => DetailSelection::Empty,
        (Some(first), FallbackPolicy::FirstRecord) => DetailSelection::Fallback {
            requested: id.clone(),
            shown: first,
        },
        (Some(_), FallbackPolicy::NotFound) => DetailSelection::NotFound(id.clone()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarEntry {
    pub id: RecordId,
    pub number: String,
    pub party: Option<String>,
    pub amount: f64,
    pub selected: bool,
}

/// Every sibling record, in store order, with the shown one marked.
pub fn sidebar<T: Entity>(records: &[T], selected: Option<&RecordId>) -> Vec<SidebarEntry> {
    records
        .iter()
        .map(|r| SidebarEntry {
            id: r.id().clone(),
            number: r.number().to_string(),
            party: r.party().map(String::from),
            amount: r.amount(),
            selected: selected == Some(r.id()),
        })
        .collect()
}

/// Route for switching the detail page to another sibling.
pub fn switch_to(kind: EntityKind, id: &RecordId) -> Route {
    Route::View(kind, id.clone())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub quantity: f64,
    pub rate: f64,
    pub discount: f64,
    /// quantity × rate
    pub amount: f64,
}

/// Read-only items table with its footer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemsTable {
    pub rows: Vec<ItemRow>,
    pub subtotal: f64,
    /// Discount actually applied; a row never goes below zero.
    pub discount: f64,
    pub balance_due: f64,
}

impl ItemsTable {
    pub fn new(items: &[LineItem]) -> Self {
        let rows: Vec<ItemRow> = items
            .iter()
            .map(|i| ItemRow {
                name: i.name.clone(),
                quantity: i.quantity,
                rate: i.rate,
                discount: i.discount,
                amount: i.gross(),
            })
            .collect();
        ItemsTable {
            subtotal: rows.iter().map(|r| r.amount).sum(),
            discount: items.iter().map(|i| i.gross() - i.total()).sum(),
            balance_due: crate::models::items_total(items),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Found,
    Fallback { requested: RecordId },
    NotFound { requested: RecordId },
    Empty,
}

/// Owned view of a detail page, built from a snapshot of the store.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailPage {
    pub kind: EntityKind,
    pub state: DetailState,
    pub record: Option<RecordDetail>,
    pub sidebar: Vec<SidebarEntry>,
    pub items: ItemsTable,
}

impl DetailPage {
    pub fn build<T: Entity>(records: &[T], id: &RecordId, policy: FallbackPolicy) -> Self {
        let selection = resolve(records, id, policy);
        let record = selection.record();
        let state = match &selection {
            DetailSelection::Found(_) => DetailState::Found,
            DetailSelection::Fallback { requested, .. } => DetailState::Fallback {
                requested: requested.clone(),
            },
            DetailSelection::NotFound(requested) => DetailState::NotFound {
                requested: requested.clone(),
            },
            DetailSelection::Empty => DetailState::Empty,
        };
        DetailPage {
            kind: T::KIND,
            state,
            record: record.map(Entity::detail),
            sidebar: sidebar(records, record.map(Entity::id)),
            items: record.map(|r| ItemsTable::new(r.line_items())).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Invoice, InvoiceStatus};
    use chrono::NaiveDate;

    fn invoice(id: &str, items: Vec<LineItem>) -> Invoice {
        Invoice {
            id: RecordId(id.to_string()),
            number: format!("INV-{}", id),
            customer_name: "Wayne Enterprises".to_string(),
            customer_email: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            due_date: None,
            status: InvoiceStatus::Sent,
            line_items: items,
            notes: None,
        }
    }

    fn id(s: &str) -> RecordId {
        RecordId(s.to_string())
    }

    #[test]
    fn missing_id_follows_policy() {
        let records = vec![invoice("a", vec![]), invoice("b", vec![])];
        assert_eq!(resolve(&records, &id("b"), FallbackPolicy::NotFound).record(), Some(&records[1]));

        let fallback = resolve(&records, &id("zz"), FallbackPolicy::FirstRecord);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.record(), Some(&records[0]));

        assert_eq!(
            resolve(&records, &id("zz"), FallbackPolicy::NotFound),
            DetailSelection::NotFound(id("zz"))
        );
        let empty: Vec<Invoice> = Vec::new();
        assert_eq!(resolve(&empty, &id("zz"), FallbackPolicy::FirstRecord), DetailSelection::Empty);
    }

    #[test]
    fn sidebar_marks_selection() {
        let records = vec![invoice("a", vec![]), invoice("b", vec![])];
        let entries = sidebar(&records, Some(&id("b")));
        assert_eq!(entries.iter().filter(|e| e.selected).count(), 1);
        assert!(entries[1].selected);
        assert_eq!(switch_to(EntityKind::Invoice, &entries[0].id).path(), "/sales/invoices/view/a");
    }

    #[test]
    fn items_table_uses_gross_amounts() {
        let table = ItemsTable::new(&[
            LineItem::new("1", "Paper", 10.0, 5.0, 0.0),
            LineItem::new("2", "Ink", 2.0, 75.0, 30.0),
        ]);
        assert_eq!(table.rows[1].amount, 150.0);
        assert_eq!(table.subtotal, 200.0);
        assert_eq!(table.discount, 30.0);
        assert_eq!(table.balance_due, 170.0);
    }

    #[test]
    fn items_footer_adds_up_when_discount_exceeds_gross() {
        let table = ItemsTable::new(&[
            LineItem::new("1", "Free sample", 1.0, 5.0, 9.0),
            LineItem::new("2", "Paper", 2.0, 10.0, 0.0),
        ]);
        assert_eq!(table.subtotal, 25.0);
        assert_eq!(table.discount, 5.0);
        assert_eq!(table.balance_due, 20.0);
        assert_eq!(table.subtotal - table.discount, table.balance_due);
    }

    #[test]
    fn page_reports_fallback() {
        let records = vec![invoice("a", vec![LineItem::new("1", "Paper", 1.0, 4.0, 0.0)])];
        let page = DetailPage::build(&records, &id("gone"), FallbackPolicy::FirstRecord);
        assert_eq!(page.state, DetailState::Fallback { requested: id("gone") });
        assert_eq!(page.record.map(|r| r.number), Some("INV-a".to_string()));
        assert!(page.sidebar[0].selected);
        assert_eq!(page.items.balance_due, 4.0);

        let page = DetailPage::build(&records, &id("gone"), FallbackPolicy::NotFound);
        assert!(page.record.is_none());
        assert!(page.sidebar.iter().all(|e| !e.selected));
    }
}
