//! Business entities. Each kind is an explicit struct implementing [`Entity`];
//! name references between kinds (vendor name, bill number) are denormalized strings.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[macro_use]
mod labelled;

mod bill;
mod challan;
mod credit_note;
mod currency;
mod expense;
mod invoice;
mod kind;
mod line_item;
mod payment_made;
mod payment_received;
mod quote;
mod recurring_purchase;
mod status;
mod vendor;
mod vendor_credit;

pub use bill::Bill;
pub use challan::Challan;
pub use credit_note::CreditNote;
pub use currency::Currency;
pub use expense::Expense;
pub use invoice::Invoice;
pub use kind::{EntityKind, Section};
pub use line_item::{items_total, LineItem};
pub use payment_made::PaymentMade;
pub use payment_received::PaymentReceived;
pub use quote::Quote;
pub use recurring_purchase::RecurringPurchase;
pub use status::{
    BillStatus, ChallanStatus, ChallanType, CreditStatus, Frequency, InvoiceStatus, PaymentMode,
    QuoteStatus, RecurringStatus, VendorStatus,
};
pub use vendor::Vendor;
pub use vendor_credit::VendorCredit;

/// A record field as seen by filters.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// One rendered table row: cells line up with [`EntityKind::columns`].
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: RecordId,
    pub cells: Vec<String>,
}

/// Everything a detail page shows about one record.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDetail {
    pub id: RecordId,
    pub kind: EntityKind,
    pub number: String,
    pub party: Option<String>,
    pub amount: f64,
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
    pub fields: Vec<(String, String)>,
    pub line_items: Vec<LineItem>,
    pub mail: Option<MailDraft>,
    pub json: String,
}

pub trait Entity: Clone + std::fmt::Debug + PartialEq + Serialize + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &RecordId;

    /// Human-readable reference ("INV-0004").
    fn number(&self) -> &str;

    /// Vendor or customer name shown beside the number.
    fn party(&self) -> Option<&str>;

    fn amount(&self) -> f64;

    fn date(&self) -> Option<NaiveDate>;

    /// Wire string of the record's status, matched by the status filter.
    fn status(&self) -> Option<&'static str> {
        None
    }

    fn status_label(&self) -> Option<&'static str> {
        None
    }

    fn line_items(&self) -> &[LineItem] {
        &[]
    }

    /// Value of a filterable field, by filter field id.
    fn field(&self, field_id: &str) -> Option<FieldValue> {
        match field_id {
            "number" => Some(FieldValue::text(self.number())),
            "party" => self.party().map(FieldValue::text),
            "amount" => Some(FieldValue::Number(self.amount())),
            "date" => self.date().map(FieldValue::Date),
            "status" => self.status().map(FieldValue::text),
            _ => None,
        }
    }

    /// Table cells, one per column of `Self::KIND.columns()`.
    fn cells(&self) -> Vec<String>;

    /// Kind-specific label/value pairs for the detail page.
    fn detail_fields(&self) -> Vec<(String, String)>;

    fn mail_draft(&self) -> Option<MailDraft> {
        None
    }

    fn form_fields() -> Vec<FieldSpec>;

    fn filter_fields() -> Vec<FilterField>;

    fn to_form(&self) -> FormData;

    /// Build a record from validated form data. Documents take their line items separately.
    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self>;

    fn row(&self) -> TableRow {
        TableRow {
            id: self.id().clone(),
            cells: self.cells(),
        }
    }

    /// Case-insensitive substring match on number and party.
    fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.number().to_lowercase().contains(&q)
            || self.party().is_some_and(|p| p.to_lowercase().contains(&q))
    }

    fn detail(&self) -> RecordDetail {
        RecordDetail {
            id: self.id().clone(),
            kind: Self::KIND,
            number: self.number().to_string(),
            party: self.party().map(String::from),
            amount: self.amount(),
            status: self.status_label().map(String::from),
            date: self.date(),
            fields: self.detail_fields(),
            line_items: self.line_items().to_vec(),
            mail: self.mail_draft(),
            json: serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }
}

pub(crate) fn opt_cell(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

pub(crate) fn amount_cell(value: f64) -> String {
    crate::format::format_amount(value)
}

pub(crate) fn date_cell(value: Option<NaiveDate>) -> String {
    value.map(crate::format::format_date).unwrap_or_else(|| "-".to_string())
}
