use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, items_total, opt_cell, Entity, EntityKind, LineItem, QuoteStatus};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::{format_amount, iso_date};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: RecordId,
    pub number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub status: QuoteStatus,
    pub line_items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Entity for Quote {
    const KIND: EntityKind = EntityKind::Quote;

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
            date_cell(self.expiry_date),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Customer Email".to_string(), opt_cell(self.customer_email.as_deref())),
            ("Expiry Date".to_string(), date_cell(self.expiry_date)),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn mail_draft(&self) -> Option<MailDraft> {
        Some(MailDraft::new(
            self.customer_email.as_deref(),
            format!("Quote {} from Tallybook", self.number),
            format!(
                "Dear {},\n\nHere is quote {} for {}. Let us know if you would like to go ahead.",
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
            FieldSpec::text("number", "Quote #").required(),
            FieldSpec::date("date", "Quote Date").required(),
            FieldSpec::date("expiry_date", "Expiry Date"),
            FieldSpec::select("status", "Status", QuoteStatus::options()).required(),
            FieldSpec::text_area("notes", "Customer Notes"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", QuoteStatus::options()).primary(),
            FilterField::date_range("date", "Quote Date"),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("customer_name", &self.customer_name)
            .with_opt("customer_email", self.customer_email.clone())
            .with("number", &self.number)
            .with("date", iso_date(self.date))
            .with_opt("expiry_date", self.expiry_date.map(iso_date))
            .with("status", self.status.as_str())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(Quote {
            id,
            number: data.required_text("number")?,
            customer_name: data.required_text("customer_name")?,
            customer_email: data.opt_text("customer_email"),
            date: data.date("date")?,
            expiry_date: data.opt_date("expiry_date")?,
            status: data.choice("status", QuoteStatus::parse)?,
            line_items: items,
            notes: data.opt_text("notes"),
        })
    }
}
