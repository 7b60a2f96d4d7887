use serde::{Deserialize, Serialize};

use crate::filter::FilterField;
use crate::form::FieldSpec;

use super::{
    Bill, Challan, CreditNote, Entity, Expense, Invoice, PaymentMade, PaymentReceived, Quote,
    RecurringPurchase, Vendor, VendorCredit,
};

/// Top-level navigation group a kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Purchases,
    Sales,
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Purchases => "purchases",
            Section::Sales => "sales",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Purchases => "Purchases",
            Section::Sales => "Sales",
        }
    }

    pub fn kinds(&self) -> Vec<EntityKind> {
        EntityKind::ALL
            .iter()
            .copied()
            .filter(|k| k.section() == *self)
            .collect()
    }
}

/// Entity kind; also the table kind a list view renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vendor,
    Expense,
    RecurringPurchase,
    Bill,
    PaymentMade,
    VendorCredit,
    Invoice,
    PaymentReceived,
    Quote,
    CreditNote,
    Challan,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Vendor,
        EntityKind::Expense,
        EntityKind::RecurringPurchase,
        EntityKind::Bill,
        EntityKind::PaymentMade,
        EntityKind::VendorCredit,
        EntityKind::Invoice,
        EntityKind::PaymentReceived,
        EntityKind::Quote,
        EntityKind::CreditNote,
        EntityKind::Challan,
    ];

    pub fn section(&self) -> Section {
        match self {
            EntityKind::Vendor
            | EntityKind::Expense
            | EntityKind::RecurringPurchase
            | EntityKind::Bill
            | EntityKind::PaymentMade
            | EntityKind::VendorCredit => Section::Purchases,
            EntityKind::Invoice
            | EntityKind::PaymentReceived
            | EntityKind::Quote
            | EntityKind::CreditNote
            | EntityKind::Challan => Section::Sales,
        }
    }

    /// Path segment under the section ("bills" in `/purchases/bills`).
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendors",
            EntityKind::Expense => "expenses",
            EntityKind::RecurringPurchase => "recurring-purchases",
            EntityKind::Bill => "bills",
            EntityKind::PaymentMade => "payments-made",
            EntityKind::VendorCredit => "vendor-credits",
            EntityKind::Invoice => "invoices",
            EntityKind::PaymentReceived => "payments-received",
            EntityKind::Quote => "quotes",
            EntityKind::CreditNote => "credit-notes",
            EntityKind::Challan => "challans",
        }
    }

    pub fn from_slug(section: &str, slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.section().slug() == section && k.slug() == slug)
    }

    /// Plural page title.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "Vendors",
            EntityKind::Expense => "Expenses",
            EntityKind::RecurringPurchase => "Recurring Purchases",
            EntityKind::Bill => "Bills",
            EntityKind::PaymentMade => "Payments Made",
            EntityKind::VendorCredit => "Vendor Credits",
            EntityKind::Invoice => "Invoices",
            EntityKind::PaymentReceived => "Payments Received",
            EntityKind::Quote => "Quotes",
            EntityKind::CreditNote => "Credit Notes",
            EntityKind::Challan => "Delivery Challans",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "Vendor",
            EntityKind::Expense => "Expense",
            EntityKind::RecurringPurchase => "Recurring Purchase",
            EntityKind::Bill => "Bill",
            EntityKind::PaymentMade => "Payment Made",
            EntityKind::VendorCredit => "Vendor Credit",
            EntityKind::Invoice => "Invoice",
            EntityKind::PaymentReceived => "Payment Received",
            EntityKind::Quote => "Quote",
            EntityKind::CreditNote => "Credit Note",
            EntityKind::Challan => "Delivery Challan",
        }
    }

    /// Kinds whose records carry line items and an items-derived amount.
    pub fn has_line_items(&self) -> bool {
        !matches!(
            self,
            EntityKind::Vendor
                | EntityKind::Expense
                | EntityKind::PaymentMade
                | EntityKind::PaymentReceived
        )
    }

    /// List table headers; row cells line up with these.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Vendor => &["Code", "Name", "Company", "Email", "Payables", "Status"],
            EntityKind::Expense => &["Date", "Number", "Category", "Vendor", "Paid Through", "Amount"],
            EntityKind::RecurringPurchase => {
                &["Profile", "Number", "Vendor", "Frequency", "Start Date", "Amount", "Status"]
            }
            EntityKind::Bill => &["Date", "Bill #", "Vendor", "Due Date", "Status", "Amount"],
            EntityKind::PaymentMade => &["Date", "Payment #", "Vendor", "Bill #", "Mode", "Amount"],
            EntityKind::VendorCredit => &["Date", "Credit #", "Vendor", "Bill #", "Status", "Amount"],
            EntityKind::Invoice => &["Date", "Invoice #", "Customer", "Due Date", "Status", "Amount"],
            EntityKind::PaymentReceived => {
                &["Date", "Payment #", "Customer", "Invoice #", "Mode", "Amount"]
            }
            EntityKind::Quote => &["Date", "Quote #", "Customer", "Expiry", "Status", "Amount"],
            EntityKind::CreditNote => &["Date", "Credit Note #", "Customer", "Invoice #", "Status", "Amount"],
            EntityKind::Challan => &["Date", "Challan #", "Customer", "Type", "Status", "Amount"],
        }
    }

    pub fn form_fields(&self) -> Vec<FieldSpec> {
        match self {
            EntityKind::Vendor => Vendor::form_fields(),
            EntityKind::Expense => Expense::form_fields(),
            EntityKind::RecurringPurchase => RecurringPurchase::form_fields(),
            EntityKind::Bill => Bill::form_fields(),
            EntityKind::PaymentMade => PaymentMade::form_fields(),
            EntityKind::VendorCredit => VendorCredit::form_fields(),
            EntityKind::Invoice => Invoice::form_fields(),
            EntityKind::PaymentReceived => PaymentReceived::form_fields(),
            EntityKind::Quote => Quote::form_fields(),
            EntityKind::CreditNote => CreditNote::form_fields(),
            EntityKind::Challan => Challan::form_fields(),
        }
    }

    pub fn filter_fields(&self) -> Vec<FilterField> {
        match self {
            EntityKind::Vendor => Vendor::filter_fields(),
            EntityKind::Expense => Expense::filter_fields(),
            EntityKind::RecurringPurchase => RecurringPurchase::filter_fields(),
            EntityKind::Bill => Bill::filter_fields(),
            EntityKind::PaymentMade => PaymentMade::filter_fields(),
            EntityKind::VendorCredit => VendorCredit::filter_fields(),
            EntityKind::Invoice => Invoice::filter_fields(),
            EntityKind::PaymentReceived => PaymentReceived::filter_fields(),
            EntityKind::Quote => Quote::filter_fields(),
            EntityKind::CreditNote => CreditNote::filter_fields(),
            EntityKind::Challan => Challan::filter_fields(),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_within_a_section() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_slug(kind.section().slug(), kind.slug()), Some(*kind));
        }
        assert_eq!(EntityKind::from_slug("sales", "bills"), None);
    }

    #[test]
    fn sections_partition_all_kinds() {
        let purchases = Section::Purchases.kinds();
        let sales = Section::Sales.kinds();
        assert_eq!(purchases.len() + sales.len(), EntityKind::ALL.len());
        assert!(purchases.contains(&EntityKind::Bill));
        assert!(sales.contains(&EntityKind::Challan));
    }
}
