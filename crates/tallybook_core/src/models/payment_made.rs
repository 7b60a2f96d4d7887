use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, opt_cell, Entity, EntityKind, FieldValue, LineItem, PaymentMode};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::iso_date;
use crate::ids::RecordId;

/// Payment sent to a vendor, optionally against a bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMade {
    pub id: RecordId,
    pub number: String,
    pub vendor_name: String,
    pub bill_number: Option<String>,
    pub date: NaiveDate,
    pub mode: PaymentMode,
    pub amount: f64,
    pub reference: Option<String>,
}

impl Entity for PaymentMade {
    const KIND: EntityKind = EntityKind::PaymentMade;

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
        self.amount
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn field(&self, field_id: &str) -> Option<FieldValue> {
        match field_id {
            "mode" => Some(FieldValue::text(self.mode.as_str())),
            "number" => Some(FieldValue::text(&self.number)),
            "party" => Some(FieldValue::text(&self.vendor_name)),
            "amount" => Some(FieldValue::Number(self.amount)),
            "date" => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(Some(self.date)),
            self.number.clone(),
            self.vendor_name.clone(),
            opt_cell(self.bill_number.as_deref()),
            self.mode.label().to_string(),
            amount_cell(self.amount),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Bill #".to_string(), opt_cell(self.bill_number.as_deref())),
            ("Payment Mode".to_string(), self.mode.label().to_string()),
            ("Reference".to_string(), opt_cell(self.reference.as_deref())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("vendor_name", "Vendor Name").required(),
            FieldSpec::text("number", "Payment #").required(),
            FieldSpec::text("bill_number", "Bill #"),
            FieldSpec::date("date", "Payment Date").required(),
            FieldSpec::select("mode", "Payment Mode", PaymentMode::options()).required(),
            FieldSpec::amount("amount", "Amount Paid").required(),
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
            .with("vendor_name", &self.vendor_name)
            .with("number", &self.number)
            .with_opt("bill_number", self.bill_number.clone())
            .with("date", iso_date(self.date))
            .with("mode", self.mode.as_str())
            .with("amount", self.amount.to_string())
            .with_opt("reference", self.reference.clone())
    }

    fn from_form(id: RecordId, data: &FormData, _items: Vec<LineItem>) -> Result<Self> {
        Ok(PaymentMade {
            id,
            number: data.required_text("number")?,
            vendor_name: data.required_text("vendor_name")?,
            bill_number: data.opt_text("bill_number"),
            date: data.date("date")?,
            mode: data.choice("mode", PaymentMode::parse)?,
            amount: data.number("amount")?,
            reference: data.opt_text("reference"),
        })
    }
}
