use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, items_total, opt_cell, Entity, EntityKind, InvoiceStatus, LineItem};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::{format_amount, iso_date};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: RecordId,
    pub number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub line_items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Entity for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn party(&self) -> Option<&str> {
        Some(&self.customer_name)
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
            self.customer_name.clone(),
            date_cell(self.due_date),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Customer Email".to_string(), opt_cell(self.customer_email.as_deref())),
            ("Due Date".to_string(), date_cell(self.due_date)),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn mail_draft(&self) -> Option<MailDraft> {
        let due = match self.due_date {
            Some(d) => format!(" due on {}", iso_date(d)),
            None => String::new(),
        };
        Some(MailDraft::new(
            self.customer_email.as_deref(),
            format!("Invoice {} from Tallybook", self.number),
            format!(
                "Dear {},\n\nPlease find invoice {} for {}{}.\n\nThank you for your business.",
                self.customer_name,
                self.number,
                format_amount(self.amount()),
                due
            ),
        ))
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("customer_name", "Customer Name").required(),
            FieldSpec::email("customer_email", "Customer Email"),
            FieldSpec::text("number", "Invoice #").required(),
            FieldSpec::date("date", "Invoice Date").required(),
            FieldSpec::date("due_date", "Due Date"),
            FieldSpec::select("status", "Status", InvoiceStatus::options()).required(),
            FieldSpec::text_area("notes", "Customer Notes"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", InvoiceStatus::options()).primary(),
            FilterField::date_range("date", "Invoice Date").primary(),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("customer_name", &self.customer_name)
            .with_opt("customer_email", self.customer_email.clone())
            .with("number", &self.number)
            .with("date", iso_date(self.date))
            .with_opt("due_date", self.due_date.map(iso_date))
            .with("status", self.status.as_str())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(Invoice {
            id,
            number: data.required_text("number")?,
            customer_name: data.required_text("customer_name")?,
            customer_email: data.opt_text("customer_email"),
            date: data.date("date")?,
            due_date: data.opt_date("due_date")?,
            status: data.choice("status", InvoiceStatus::parse)?,
            line_items: items,
            notes: data.opt_text("notes"),
        })
    }
}
