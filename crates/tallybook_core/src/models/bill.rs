use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, items_total, opt_cell, BillStatus, Entity, EntityKind, LineItem};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::{format_amount, iso_date};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: RecordId,
    pub number: String,
    pub vendor_name: String,
    pub order_number: Option<String>,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: BillStatus,
    pub line_items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Entity for Bill {
    const KIND: EntityKind = EntityKind::Bill;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn party(&self) -> Option<&str> {
        Some(&self.vendor_name)
    }

    fn amount(&self) -> f64 {
        items_total(&self.line_items)
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn status(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.label())
    }

    fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(Some(self.date)),
            self.number.clone(),
            self.vendor_name.clone(),
            date_cell(self.due_date),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Order Number".to_string(), opt_cell(self.order_number.as_deref())),
            ("Due Date".to_string(), date_cell(self.due_date)),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn mail_draft(&self) -> Option<MailDraft> {
        Some(MailDraft::new(
            None,
            format!("Bill {} from {}", self.number, self.vendor_name),
            format!(
                "Bill {} dated {} for {}.",
                self.number,
                iso_date(self.date),
                format_amount(self.amount())
            ),
        ))
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("vendor_name", "Vendor Name").required(),
            FieldSpec::text("number", "Bill #").required(),
            FieldSpec::text("order_number", "Order Number"),
            FieldSpec::date("date", "Bill Date").required(),
            FieldSpec::date("due_date", "Due Date"),
            FieldSpec::select("status", "Status", BillStatus::options()).required(),
            FieldSpec::text_area("notes", "Notes"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", BillStatus::options()).primary(),
            FilterField::date_range("date", "Bill Date").primary(),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("vendor_name", &self.vendor_name)
            .with("number", &self.number)
            .with_opt("order_number", self.order_number.clone())
            .with("date", iso_date(self.date))
            .with_opt("due_date", self.due_date.map(iso_date))
            .with("status", self.status.as_str())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(Bill {
            id,
            number: data.required_text("number")?,
            vendor_name: data.required_text("vendor_name")?,
            order_number: data.opt_text("order_number"),
            date: data.date("date")?,
            due_date: data.opt_date("due_date")?,
            status: data.choice("status", BillStatus::parse)?,
            line_items: items,
            notes: data.opt_text("notes"),
        })
    }
}
