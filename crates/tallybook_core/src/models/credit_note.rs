use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, items_total, opt_cell, CreditStatus, Entity, EntityKind, LineItem};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::{format_amount, iso_date};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditNote {
    pub id: RecordId,
    pub number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub invoice_number: Option<String>,
    pub date: NaiveDate,
    pub status: CreditStatus,
    pub line_items: Vec<LineItem>,
    pub reason: Option<String>,
}

impl Entity for CreditNote {
    const KIND: EntityKind = EntityKind::CreditNote;

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
            opt_cell(self.invoice_number.as_deref()),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Customer Email".to_string(), opt_cell(self.customer_email.as_deref())),
            ("Invoice #".to_string(), opt_cell(self.invoice_number.as_deref())),
            ("Reason".to_string(), opt_cell(self.reason.as_deref())),
        ]
    }

    fn mail_draft(&self) -> Option<MailDraft> {
        Some(MailDraft::new(
            self.customer_email.as_deref(),
            format!("Credit note {} from Tallybook", self.number),
            format!(
                "Dear {},\n\nWe have issued credit note {} for {}.",
                self.customer_name,
                self.number,
                format_amount(self.amount())
            ),
        ))
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("customer_name", "Customer Name").required(),
            FieldSpec::email("customer_email", "Customer Email"),
            FieldSpec::text("number", "Credit Note #").required(),
            FieldSpec::text("invoice_number", "Invoice #"),
            FieldSpec::date("date", "Credit Note Date").required(),
            FieldSpec::select("status", "Status", CreditStatus::options()).required(),
            FieldSpec::text_area("reason", "Reason"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", CreditStatus::options()).primary(),
            FilterField::date_range("date", "Date"),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("customer_name", &self.customer_name)
            .with_opt("customer_email", self.customer_email.clone())
            .with("number", &self.number)
            .with_opt("invoice_number", self.invoice_number.clone())
            .with("date", iso_date(self.date))
            .with("status", self.status.as_str())
            .with_opt("reason", self.reason.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(CreditNote {
            id,
            number: data.required_text("number")?,
            customer_name: data.required_text("customer_name")?,
            customer_email: data.opt_text("customer_email"),
            invoice_number: data.opt_text("invoice_number"),
            date: data.date("date")?,
            status: data.choice("status", CreditStatus::parse)?,
            line_items: items,
            reason: data.opt_text("reason"),
        })
    }
}
