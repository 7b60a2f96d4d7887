use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, opt_cell, Entity, EntityKind, FieldValue, LineItem, PaymentMode};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::iso_date;
use crate::ids::RecordId;

/// Payment collected from a customer, optionally against an invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceived {
    pub id: RecordId,
    pub number: String,
    pub customer_name: String,
    pub invoice_number: Option<String>,
    pub date: NaiveDate,
    pub mode: PaymentMode,
    pub amount: f64,
    pub reference: Option<String>,
}

impl Entity for PaymentReceived {
    const KIND: EntityKind = EntityKind::PaymentReceived;

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
        self.amount
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn field(&self, field_id: &str) -> Option<FieldValue> {
        match field_id {
            "mode" => Some(FieldValue::text(self.mode.as_str())),
            "number" => Some(FieldValue::text(&self.number)),
            "party" => Some(FieldValue::text(&self.customer_name)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "date" => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(Some(self.date)),
            self.number.clone(),
            self.customer_name.clone(),
            opt_cell(self.invoice_number.as_deref()),
            self.mode.label().to_string(),
            amount_cell(self.amount),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Invoice #".to_string(), opt_cell(self.invoice_number.as_deref())),
            ("Payment Mode".to_string(), self.mode.label().to_string()),
            ("Reference".to_string(), opt_cell(self.reference.as_deref())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("customer_name", "Customer Name").required(),
            FieldSpec::text("number", "Payment #").required(),
            FieldSpec::text("invoice_number", "Invoice #"),
            FieldSpec::date("date", "Payment Date").required(),
            FieldSpec::select("mode", "Payment Mode", PaymentMode::options()).required(),
            FieldSpec::amount("amount", "Amount Received").required(),
            FieldSpec::text("reference", "Reference #"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::date_range("date", "Payment Date").primary(),
            FilterField::multi_select("mode", "Payment Mode", PaymentMode::options()),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("customer_name", &self.customer_name)
            .with("number", &self.number)
            .with_opt("invoice_number", self.invoice_number.clone())
            .with("date", iso_date(self.date))
            .with("mode", self.mode.as_str())
            .with("amount", self.amount.to_string())
            .with_opt("reference", self.reference.clone())
    }

    fn from_form(id: RecordId, data: &FormData, _items: Vec<LineItem>) -> Result<Self> {
        Ok(PaymentReceived {
            id,
            number: data.required_text("number")?,
            customer_name: data.required_text("customer_name")?,
            invoice_number: data.opt_text("invoice_number"),
            date: data.date("date")?,
            mode: data.choice("mode", PaymentMode::parse)?,
            amount: data.number("amount")?,
            reference: data.opt_text("reference"),
        })
    }
}
