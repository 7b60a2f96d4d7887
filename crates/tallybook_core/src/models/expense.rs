use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, date_cell, opt_cell, Entity, EntityKind, FieldValue, LineItem};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData, SelectOption};
use crate::ids::RecordId;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Office Supplies",
    "Travel",
    "Meals",
    "Fuel",
    "Rent",
    "Utilities",
    "Software",
];

pub const PAID_THROUGH: &[&str] = &["Petty Cash", "Business Checking", "Company Card"];

fn plain_options(values: &[&str]) -> Vec<SelectOption> {
    values.iter().map(|v| SelectOption::plain(v)).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub number: String,
    pub date: NaiveDate,
    pub category: String,
    pub vendor_name: Option<String>,
    pub paid_through: String,
    pub amount: f64,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl Entity for Expense {
    const KIND: EntityKind = EntityKind::Expense;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn party(&self) -> Option<&str> {
        self.vendor_name.as_deref()
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn field(&self, field_id: &str) -> Option<FieldValue> {
        match field_id {
            "category" => Some(FieldValue::text(&self.category)),
            "paid_through" => Some(FieldValue::text(&self.paid_through)),
            "number" => Some(FieldValue::text(&self.number)),
            "party" => self.vendor_name.as_deref().map(FieldValue::text),
            "amount" => Some(FieldValue::Number(self.amount)),
            "date" => Some(FieldValue::Date(self.date)),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            date_cell(Some(self.date)),
            self.number.clone(),
            self.category.clone(),
            opt_cell(self.vendor_name.as_deref()),
            self.paid_through.clone(),
            amount_cell(self.amount),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Category".to_string(), self.category.clone()),
            ("Paid Through".to_string(), self.paid_through.clone()),
            ("Reference".to_string(), opt_cell(self.reference.as_deref())),
            ("Notes".to_string(), opt_cell(self.notes.as_deref())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("number", "Expense #").required(),
            FieldSpec::date("date", "Date").required(),
            FieldSpec::select("category", "Category", plain_options(EXPENSE_CATEGORIES)).required(),
            FieldSpec::text("vendor_name", "Vendor"),
            FieldSpec::select("paid_through", "Paid Through", plain_options(PAID_THROUGH)).required(),
            FieldSpec::amount("amount", "Amount").required(),
            FieldSpec::text("reference", "Reference #"),
            FieldSpec::text_area("notes", "Notes"),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::date_range("date", "Date").primary(),
            FilterField::multi_select("category", "Category", plain_options(EXPENSE_CATEGORIES)).primary(),
            FilterField::select("paid_through", "Paid Through", plain_options(PAID_THROUGH)),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("number", &self.number)
            .with("date", crate::format::iso_date(self.date))
            .with("category", &self.category)
            .with_opt("vendor_name", self.vendor_name.clone())
            .with("paid_through", &self.paid_through)
            .with("amount", self.amount.to_string())
            .with_opt("reference", self.reference.clone())
            .with_opt("notes", self.notes.clone())
    }

    fn from_form(id: RecordId, data: &FormData, _items: Vec<LineItem>) -> Result<Self> {
        Ok(Expense {
            id,
            number: data.required_text("number")?,
            date: data.date("date")?,
            category: data.required_text("category")?,
            vendor_name: data.opt_text("vendor_name"),
            paid_through: data.required_text("paid_through")?,
            amount: data.number("amount")?,
            reference: data.opt_text("reference"),
            notes: data.opt_text("notes"),
        })
    }
}
