//! The app root's set of entity stores, one per kind, with kind-dispatched
//! operations for pages that only know an [`EntityKind`].

use chrono::NaiveDate;

use crate::config::Config;
use crate::core_log;
use crate::detail::{DetailPage, FallbackPolicy};
use crate::error::{CoreError, Result};
use crate::filter::{AdvancedFilter, FilterValues};
use crate::form::{validate, FormData};
use crate::ids::RecordId;
use crate::list::{visible_rows, ListView};
use crate::models::{
    Bill, BillStatus, Challan, CreditNote, Entity, EntityKind, Expense, Invoice, InvoiceStatus, LineItem,
    PaymentMade, PaymentReceived, Quote, RecurringPurchase, TableRow, Vendor, VendorCredit,
};
use crate::seed;
use crate::store::{InMemoryRepository, Repository};

/// Runs `$body` with `$repo` bound to the store for `$kind`.
macro_rules! with_repo {
    ($stores:expr, $kind:expr, |$repo:ident| $body:expr) => {
        match $kind {
            EntityKind::Vendor => { let $repo = &$stores.vendors; $body }
            EntityKind::Expense => { let $repo = &$stores.expenses; $body }
            EntityKind::RecurringPurchase => { let $repo = &$stores.recurring_purchases; $body }
            EntityKind::Bill => { let $repo = &$stores.bills; $body }
            EntityKind::PaymentMade => { let $repo = &$stores.payments_made; $body }
            EntityKind::VendorCredit => { let $repo = &$stores.vendor_credits; $body }
            EntityKind::Invoice => { let $repo = &$stores.invoices; $body }
            EntityKind::PaymentReceived => { let $repo = &$stores.payments_received; $body }
            EntityKind::Quote => { let $repo = &$stores.quotes; $body }
            EntityKind::CreditNote => { let $repo = &$stores.credit_notes; $body }
            EntityKind::Challan => { let $repo = &$stores.challans; $body }
        }
    };
}

#[derive(Clone, Debug)]
pub struct Stores {
    pub vendors: InMemoryRepository<Vendor>,
    pub expenses: InMemoryRepository<Expense>,
    pub recurring_purchases: InMemoryRepository<RecurringPurchase>,
    pub bills: InMemoryRepository<Bill>,
    pub payments_made: InMemoryRepository<PaymentMade>,
    pub vendor_credits: InMemoryRepository<VendorCredit>,
    pub invoices: InMemoryRepository<Invoice>,
    pub payments_received: InMemoryRepository<PaymentReceived>,
    pub quotes: InMemoryRepository<Quote>,
    pub credit_notes: InMemoryRepository<CreditNote>,
    pub challans: InMemoryRepository<Challan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpcomingPurchase {
    pub id: RecordId,
    pub profile_name: String,
    pub vendor_name: String,
    pub next_date: NaiveDate,
    pub amount: f64,
}

/// Figures for the dashboard cards.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    /// Sent and overdue invoices.
    pub receivables: f64,
    /// Open and overdue bills.
    pub payables: f64,
    pub overdue_invoices: usize,
    pub overdue_bills: usize,
    pub counts: Vec<(EntityKind, usize)>,
    pub upcoming: Vec<UpcomingPurchase>,
}

impl Stores {
    pub fn seeded(config: &Config) -> Self {
        let latency = config.latency;
        let stores = Stores {
            vendors: InMemoryRepository::new(seed::vendors(), latency),
            expenses: InMemoryRepository::new(seed::expenses(), latency),
            recurring_purchases: InMemoryRepository::new(seed::recurring_purchases(), latency),
            bills: InMemoryRepository::new(seed::bills(), latency),
            payments_made: InMemoryRepository::new(seed::payments_made(), latency),
            vendor_credits: InMemoryRepository::new(seed::vendor_credits(), latency),
            invoices: InMemoryRepository::new(seed::invoices(), latency),
            payments_received: InMemoryRepository::new(seed::payments_received(), latency),
            quotes: InMemoryRepository::new(seed::quotes(), latency),
            credit_notes: InMemoryRepository::new(seed::credit_notes(), latency),
            challans: InMemoryRepository::new(seed::challans(), latency),
        };
        core_log!("[tallybook] stores seeded (latency={}ms)", latency.as_millis());
        stores
    }

    /// Every store back to its seed data.
    pub fn reset(&self) {
        for kind in EntityKind::ALL {
            with_repo!(self, *kind, |repo| repo.reset());
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        with_repo!(self, kind, |repo| repo.len())
    }

    /// Table rows passing `values` (as reported by the filter bar) and `search`.
    pub fn rows(&self, kind: EntityKind, values: &FilterValues, search: &str) -> Vec<TableRow> {
        let filter = AdvancedFilter::new(kind.filter_fields()).with_values(values.clone());
        with_repo!(self, kind, |repo| visible_rows(&repo.snapshot(), Some(&filter), search))
    }

    pub fn detail_page(&self, kind: EntityKind, id: &RecordId, policy: FallbackPolicy) -> DetailPage {
        with_repo!(self, kind, |repo| DetailPage::build(&repo.snapshot(), id, policy))
    }

    /// Form values for editing `id`, or `None` when it is gone.
    pub fn form_values(&self, kind: EntityKind, id: &RecordId) -> Option<FormData> {
        with_repo!(self, kind, |repo| repo.find(id).map(|r| r.to_form()))
    }

    /// Human-readable reference of `id` ("BILL-0002"), used in prompts.
    pub fn number(&self, kind: EntityKind, id: &RecordId) -> Option<String> {
        with_repo!(self, kind, |repo| repo.find(id).map(|r| r.number().to_string()))
    }

    pub fn line_items(&self, kind: EntityKind, id: &RecordId) -> Vec<LineItem> {
        with_repo!(self, kind, |repo| repo
            .find(id)
            .map(|r| r.line_items().to_vec())
            .unwrap_or_default())
    }

    pub async fn delete(&self, kind: EntityKind, id: &RecordId) -> Result<()> {
        with_repo!(self, kind, |repo| repo.delete(id).await)
    }

    /// Run the list's confirmed delete against the store for its kind.
    pub async fn confirm_delete(&self, view: &mut ListView) -> Result<Option<RecordId>> {
        with_repo!(self, view.kind(), |repo| view.confirm_delete(repo).await)
    }

    /// Create (`id` is `None`) or update a record from submitted form data.
    /// Returns the saved record's id.
    pub async fn save(
        &self,
        kind: EntityKind,
        id: Option<RecordId>,
        data: &FormData,
        items: Vec<LineItem>,
    ) -> Result<RecordId> {
        with_repo!(self, kind, |repo| save_in(repo, id, data, items).await)
    }

    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        let invoices = self.invoices.snapshot();
        let bills = self.bills.snapshot();
        let unpaid_invoices = invoices
            .iter()
            .filter(|i| matches!(i.status, InvoiceStatus::Sent | InvoiceStatus::Overdue));
        let unpaid_bills = bills
            .iter()
            .filter(|b| matches!(b.status, BillStatus::Open | BillStatus::Overdue));

        let mut upcoming: Vec<UpcomingPurchase> = self
            .recurring_purchases
            .snapshot()
            .iter()
            .filter_map(|r| {
                r.next_date(today).map(|next_date| UpcomingPurchase {
                    id: r.id.clone(),
                    profile_name: r.profile_name.clone(),
                    vendor_name: r.vendor_name.clone(),
                    next_date,
                    amount: r.amount(),
                })
            })
            .collect();
        upcoming.sort_by_key(|u| u.next_date);

        DashboardSummary {
            receivables: unpaid_invoices.map(Entity::amount).sum(),
            payables: unpaid_bills.map(Entity::amount).sum(),
            overdue_invoices: invoices.iter().filter(|i| i.status == InvoiceStatus::Overdue).count(),
            overdue_bills: bills.iter().filter(|b| b.status == BillStatus::Overdue).count(),
            counts: EntityKind::ALL.iter().map(|k| (*k, self.count(*k))).collect(),
            upcoming,
        }
    }
}

async fn save_in<T: Entity>(
    repo: &InMemoryRepository<T>,
    id: Option<RecordId>,
    data: &FormData,
    items: Vec<LineItem>,
) -> Result<RecordId> {
    let errors = validate(&T::form_fields(), data);
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }
    let items = if T::KIND.has_line_items() { items } else { Vec::new() };
    let saved = match id {
        Some(id) => repo.update(T::from_form(id, data, items)?).await?,
        None => repo.create(T::from_form(RecordId::generate(), data, items)?).await?,
    };
    Ok(saved.id().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_seeded() {
        let stores = Stores::seeded(&Config::for_tests());
        for kind in EntityKind::ALL {
            assert!(stores.count(*kind) >= 3, "{} has too few seed records", kind);
        }
    }

    #[test]
    fn number_looks_up_the_reference_not_a_column() {
        let stores = Stores::seeded(&Config::for_tests());
        let vendor = &seed::vendors()[0];
        assert_eq!(stores.number(EntityKind::Vendor, &vendor.id), Some(vendor.number.clone()));
        // Vendors show the display name in the second column.
        let row = &stores.rows(EntityKind::Vendor, &FilterValues::new(), "")[0];
        assert_ne!(row.cells[1], vendor.number);
        assert_eq!(stores.number(EntityKind::Vendor, &RecordId("gone".to_string())), None);
    }

    #[tokio::test]
    async fn confirm_delete_dispatches_on_the_view_kind() {
        let stores = Stores::seeded(&Config::for_tests());
        let mut view = ListView::new(EntityKind::Quote);
        let id = RecordId("quote-2".to_string());
        view.request_delete(id.clone());

        let removed = stores.confirm_delete(&mut view).await.unwrap();

        assert_eq!(removed, Some(id.clone()));
        assert_eq!(view.pending_delete(), None);
        assert_eq!(stores.number(EntityKind::Quote, &id), None);
        assert_eq!(stores.count(EntityKind::Quote), seed::quotes().len() - 1);
        assert_eq!(stores.confirm_delete(&mut view).await.unwrap(), None);
    }

    #[test]
    fn summary_skips_paid_and_draft() {
        let stores = Stores::seeded(&Config::for_tests());
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let summary = stores.summary(today);
        // INV-0001 (overdue) and INV-0003 (sent)
        assert!((summary.receivables - (2_000.0 + 657.0)).abs() < 1e-9);
        assert_eq!(summary.overdue_invoices, 1);
        assert_eq!(summary.overdue_bills, 1);
        assert!(summary.upcoming.iter().all(|u| u.next_date >= today));
        assert_eq!(summary.upcoming.len(), 2);
    }
}
