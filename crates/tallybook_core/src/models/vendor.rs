use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount_cell, opt_cell, Entity, EntityKind, LineItem, VendorStatus};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::ids::RecordId;
use crate::mail::MailDraft;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: RecordId,
    /// Vendor code ("VEN-0001").
    pub number: String,
    pub name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Outstanding payables.
    pub payables: f64,
    pub status: VendorStatus,
}

impl Entity for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn party(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn amount(&self) -> f64 {
        self.payables
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    fn status(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.label())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.name.clone(),
            opt_cell(self.company_name.as_deref()),
            opt_cell(self.email.as_deref()),
            amount_cell(self.payables),
            self.status.label().to_string(),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Company".to_string(), opt_cell(self.company_name.as_deref())),
            ("Email".to_string(), opt_cell(self.email.as_deref())),
            ("Phone".to_string(), opt_cell(self.phone.as_deref())),
        ]
    }

    fn mail_draft(&self) -> Option<MailDraft> {
        let email = self.email.as_deref()?;
        Some(MailDraft::new(Some(email), format!("Hello {}", self.name), ""))
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("number", "Vendor Code").required().placeholder("VEN-0001"),
            FieldSpec::text("name", "Display Name").required(),
            FieldSpec::text("company_name", "Company Name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("phone", "Phone"),
            FieldSpec::amount("payables", "Opening Payables"),
            FieldSpec::select("status", "Status", VendorStatus::options()).required(),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", VendorStatus::options()).primary(),
            FilterField::number_range("amount", "Payables"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("number", &self.number)
            .with("name", &self.name)
            .with_opt("company_name", self.company_name.clone())
            .with_opt("email", self.email.clone())
            .with_opt("phone", self.phone.clone())
            .with("payables", self.payables.to_string())
            .with("status", self.status.as_str())
    }

    fn from_form(id: RecordId, data: &FormData, _items: Vec<LineItem>) -> Result<Self> {
        Ok(Vendor {
            id,
            number: data.required_text("number")?,
            name: data.required_text("name")?,
            company_name: data.opt_text("company_name"),
            email: data.opt_text("email"),
            phone: data.opt_text("phone"),
            payables: data.number("payables")?,
            status: data.choice("status", VendorStatus::parse)?,
        })
    }
}
