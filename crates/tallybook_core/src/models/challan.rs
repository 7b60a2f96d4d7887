use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    amount_cell, date_cell, items_total, opt_cell, ChallanStatus, ChallanType, Entity, EntityKind,
    FieldValue, LineItem,
};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::iso_date;
use crate::ids::RecordId;

/// Delivery challan: goods sent to a customer ahead of (or without) an invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challan {
    pub id: RecordId,
    pub number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub challan_type: ChallanType,
    pub status: ChallanStatus,
    pub line_items: Vec<LineItem>,
    pub notes: Option<String>,
}

impl Entity for Challan {
    const KIND: EntityKind = EntityKind::Challan;

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

    fn field(&self, field_id: &str) -> Option<FieldValue> {
        match field_id {
            "challan_type" => Some(FieldValue::text(self.challan_type.as_str())),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "number" => Some(FieldValue::text(&self.number)),
            "party" => Some(FieldValue::text(&self.customer_name)),
            "amount" => Some(FieldValue::Number(self.amount())),
            "date" => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(Some(self.date)),
            self.number.clone(),
            self.customer_name.clone(),
            self.challan_type.label().to_string(),
            self.status.label().to_string(),
            amount_cell(self.amount()),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Challan Type".to_string(), self.challan_type.label().to_string()),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("customer_name", "Customer Name").required(),
            FieldSpec::text("number", "Challan #").required(),
            FieldSpec::date("date", "Challan Date").required(),
            FieldSpec::select("challan_type", "Challan Type", ChallanType::options()).required(),
            FieldSpec::select("status", "Status", ChallanStatus::options()).required(),
            FieldSpec::text_area("notes", "Notes"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", ChallanStatus::options()).primary(),
            FilterField::multi_select("challan_type", "Type", ChallanType::options()),
            FilterField::date_range("date", "Challan Date"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("customer_name", &self.customer_name)
            .with("number", &self.number)
            .with("date", iso_date(self.date))
            .with("challan_type", self.challan_type.as_str())
            .with("status", self.status.as_str())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(Challan {
            id,
            number: data.required_text("number")?,
            customer_name: data.required_text("customer_name")?,
            date: data.date("date")?,
            challan_type: data.choice("challan_type", ChallanType::parse)?,
            status: data.choice("status", ChallanStatus::parse)?,
            line_items: items,
            notes: data.opt_text("notes"),
        })
    }
}
