use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, items_total, opt_cell, CreditStatus, Entity, EntityKind, LineItem};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::iso_date;
use crate::ids::RecordId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorCredit {
    pub id: RecordId,
    pub number: String,
    pub vendor_name: String,
    pub bill_number: Option<String>,
    pub date: NaiveDate,
    pub status: CreditStatus,
    pub line_items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Entity for VendorCredit {
    const KIND: EntityKind = EntityKind::VendorCredit;

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
            opt_cell(self.bill_number.as_deref()),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Bill #".to_string(), opt_cell(self.bill_number.as_deref())),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("vendor_name", "Vendor Name").required(),
            FieldSpec::text("number", "Credit Note #").required(),
            FieldSpec::text("bill_number", "Bill #"),
            FieldSpec::date("date", "Date").required(),
            FieldSpec::select("status", "Status", CreditStatus::options()).required(),
            FieldSpec::text_area("notes", "Notes"),
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
            .with("vendor_name", &self.vendor_name)
            .with("number", &self.number)
            .with_opt("bill_number", self.bill_number.clone())
            .with("date", iso_date(self.date))
            .with("status", self.status.as_str())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(VendorCredit {
            id,
            number: data.required_text("number")?,
            vendor_name: data.required_text("vendor_name")?,
            bill_number: data.opt_text("bill_number"),
            date: data.date("date")?,
            status: data.choice("status", CreditStatus::parse)?,
            line_items: items,
            notes: data.opt_text("notes"),
        })
    }
}
