use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{
    amount_cell, date_cell, items_total, Entity, EntityKind, FieldValue, Frequency, LineItem,
    RecurringStatus,
};
use crate::error::Result;
use crate::filter::FilterField;
use crate::form::{FieldSpec, FormData};
use crate::format::iso_date;
use crate::ids::RecordId;

/// A purchase profile that raises a bill on a fixed schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecurringPurchase {
    pub id: RecordId,
    pub number: String,
    pub profile_name: String,
    pub vendor_name: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: RecurringStatus,
    pub line_items: Vec<LineItem>,
}

impl RecurringPurchase {
    /// First scheduled date on or after `today`; `None` once stopped or past the end date.
    pub fn next_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.status == RecurringStatus::Stopped {
            return None;
        }
        let mut step = 0u32;
        loop {
            let candidate = match self.frequency {
                Frequency::Weekly => self.start_date + Duration::weeks(i64::from(step)),
                Frequency::Monthly => self.start_date.checked_add_months(Months::new(step))?,
                Frequency::Yearly => self.start_date.checked_add_months(Months::new(step * 12))?,
            };
            if self.end_date.is_some_and(|end| candidate > end) {
                return None;
            }
            if candidate >= today {
                return Some(candidate);
            }
            step += 1;
        }
    }
}

impl Entity for RecurringPurchase {
    const KIND: EntityKind = EntityKind::RecurringPurchase;

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
        Some(self.start_date)
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
            "frequency" => Some(FieldValue::text(self.frequency.as_str())),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "number" => Some(FieldValue::text(&self.number)),
            "party" => Some(FieldValue::text(&self.vendor_name)),
            "amount" => Some(FieldValue::Number(self.amount())),
            "date" => Some(FieldValue::Date(self.start_date)),
            _ => None,
        }
    }

    /// Profile name leads the search alongside number and vendor.
    fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.profile_name.to_lowercase().contains(&q)
            || self.number.to_lowercase().contains(&q)
            || self.vendor_name.to_lowercase().contains(&q)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.profile_name.clone(),
            self.number.clone(),
            self.vendor_name.clone(),
            self.frequency.label().to_string(),
            date_cell(Some(self.start_date)),
            amount_cell(self.amount()),
            self.status.label().to_string(),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Profile".to_string(), self.profile_name.clone()),
            ("Repeats".to_string(), self.frequency.label().to_string()),
            ("Ends".to_string(), self.end_date.map(crate::format::format_date).unwrap_or_else(|| "Never".to_string())),
        ]
    }

    fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("profile_name", "Profile Name").required(),
            FieldSpec::text("vendor_name", "Vendor Name").required(),
            FieldSpec::text("number", "Reference #").required(),
            FieldSpec::select("frequency", "Repeat Every", Frequency::options()).required(),
            FieldSpec::date("start_date", "Start Date").required(),
            FieldSpec::date("end_date", "End Date"),
            FieldSpec::select("status", "Status", RecurringStatus::options()).required(),
        ]
    }

    fn filter_fields() -> Vec<FilterField> {
        vec![
            FilterField::select("status", "Status", RecurringStatus::options()).primary(),
            FilterField::multi_select("frequency", "Frequency", Frequency::options()),
            FilterField::number_range("amount", "Amount"),
        ]
    }

    fn to_form(&self) -> FormData {
        FormData::new()
            .with("profile_name", &self.profile_name)
            .with("vendor_name", &self.vendor_name)
            .with("number", &self.number)
            .with("frequency", self.frequency.as_str())
            .with("start_date", iso_date(self.start_date))
            .with_opt("end_date", self.end_date.map(iso_date))
            .with("status", self.status.as_str())
    }

    fn from_form(id: RecordId, data: &FormData, items: Vec<LineItem>) -> Result<Self> {
        Ok(RecurringPurchase {
            id,
            number: data.required_text("number")?,
            profile_name: data.required_text("profile_name")?,
            vendor_name: data.required_text("vendor_name")?,
            frequency: data.choice("frequency", Frequency::parse)?,
            start_date: data.date("start_date")?,
            end_date: data.opt_date("end_date")?,
            status: data.choice("status", RecurringStatus::parse)?,
            line_items: items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(frequency: Frequency, end: Option<NaiveDate>) -> RecurringPurchase {
        RecurringPurchase {
            id: RecordId("rp-t".to_string()),
            number: "RP-T".to_string(),
            profile_name: "Office lease".to_string(),
            vendor_name: "Landmark Properties".to_string(),
            frequency,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            end_date: end,
            status: RecurringStatus::Active,
            line_items: vec![],
        }
    }

    #[test]
    fn next_monthly_date_clamps_to_month_end() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(
            profile(Frequency::Monthly, None).next_date(today),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
    }

    #[test]
    fn next_date_respects_end_and_status() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 31);
        assert_eq!(profile(Frequency::Monthly, end).next_date(today), None);
        let mut stopped = profile(Frequency::Weekly, None);
        stopped.status = RecurringStatus::Stopped;
        assert_eq!(stopped.next_date(today), None);
        assert_eq!(
            profile(Frequency::Yearly, None).next_date(today),
            NaiveDate::from_ymd_opt(2027, 1, 31)
        );
    }
}
