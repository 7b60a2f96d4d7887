//! Advanced filter: field descriptors, the id -> value mapping the UI edits,
//! and the record predicate derived from it.
//!
//! Range fields store their bounds under derived keys: `{id}_from`/`{id}_to`
//! for dates (ISO strings) and `{id}_min`/`{id}_max` for numbers.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::form::SelectOption;
use crate::format::{iso_date, ISO_DATE};
use crate::models::{Entity, FieldValue};

#[derive(Clone, Debug, PartialEq)]
pub enum FilterKind {
    Select(Vec<SelectOption>),
    DateRange,
    NumberRange,
    MultiSelect(Vec<SelectOption>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    /// Primary fields render in the always-visible filter bar.
    pub primary: bool,
}

impl FilterField {
    pub fn select(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        FilterField { id, label, kind: FilterKind::Select(options), primary: false }
    }

    pub fn date_range(id: &'static str, label: &'static str) -> Self {
        FilterField { id, label, kind: FilterKind::DateRange, primary: false }
    }

    pub fn number_range(id: &'static str, label: &'static str) -> Self {
        FilterField { id, label, kind: FilterKind::NumberRange, primary: false }
    }

    pub fn multi_select(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        FilterField { id, label, kind: FilterKind::MultiSelect(options), primary: false }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Text(String),
    List(Vec<String>),
}

impl FilterValue {
    /// Null, empty strings and empty lists do not count as active.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Null => false,
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::List(v) => !v.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

pub type FilterValues = BTreeMap<String, FilterValue>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Yesterday,
    Last7Days,
    ThisMonth,
    LastMonth,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl DatePreset {
    /// Inclusive (from, to) relative to `today`.
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            DatePreset::Today => (today, today),
            DatePreset::Yesterday => {
                let d = today - Duration::days(1);
                (d, d)
            }
            DatePreset::Last7Days => (today - Duration::days(6), today),
            DatePreset::ThisMonth => (first_of_month(today), last_of_month(today)),
            DatePreset::LastMonth => {
                let end = first_of_month(today) - Duration::days(1);
                (first_of_month(end), end)
            }
            DatePreset::Custom { from, to } => (*from, *to),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Yesterday => "Yesterday",
            DatePreset::Last7Days => "Last 7 days",
            DatePreset::ThisMonth => "This month",
            DatePreset::LastMonth => "Last month",
            DatePreset::Custom { .. } => "Custom range",
        }
    }
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

fn last_of_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 { (d.year() + 1, 1) } else { (d.year(), d.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
        .map(|next| next - Duration::days(1))
        .unwrap_or(d)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

pub fn from_key(id: &str) -> String {
    format!("{}_from", id)
}

pub fn to_key(id: &str) -> String {
    format!("{}_to", id)
}

pub fn min_key(id: &str) -> String {
    format!("{}_min", id)
}

pub fn max_key(id: &str) -> String {
    format!("{}_max", id)
}

type Listener = Box<dyn FnMut(&FilterValues)>;

/// Filter state for one list page. Every mutation re-notifies the listener with the full mapping.
pub struct AdvancedFilter {
    fields: Vec<FilterField>,
    values: FilterValues,
    on_change: Option<Listener>,
}

impl fmt::Debug for AdvancedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvancedFilter")
            .field("fields", &self.fields)
            .field("values", &self.values)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl AdvancedFilter {
    pub fn new(fields: Vec<FilterField>) -> Self {
        AdvancedFilter {
            fields,
            values: FilterValues::new(),
            on_change: None,
        }
    }

    /// Rebuild a filter from values reported earlier, without notifying.
    pub fn with_values(mut self, values: FilterValues) -> Self {
        self.values = values;
        self
    }

    pub fn on_change(mut self, listener: impl FnMut(&FilterValues) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn primary_fields(&self) -> impl Iterator<Item = &FilterField> {
        self.fields.iter().filter(|f| f.primary)
    }

    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> &str {
        self.values.get(key).and_then(FilterValue::as_text).unwrap_or("")
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.values);
        }
    }

    /// Raw write of one key.
    pub fn set(&mut self, key: &str, value: FilterValue) {
        self.values.insert(key.to_string(), value);
        self.notify();
    }

    /// Select field; `None` or empty clears it.
    pub fn set_select(&mut self, id: &str, value: Option<&str>) {
        let value = match value {
            Some(v) if !v.is_empty() => FilterValue::Text(v.to_string()),
            _ => FilterValue::Null,
        };
        self.set(id, value);
    }

    /// Writes `{id}_from` and `{id}_to` for the preset.
    pub fn apply_date_preset(&mut self, id: &str, preset: &DatePreset, today: NaiveDate) {
        let (from, to) = preset.range(today);
        self.values.insert(from_key(id), FilterValue::Text(iso_date(from)));
        self.values.insert(to_key(id), FilterValue::Text(iso_date(to)));
        self.notify();
    }

    /// One end of a custom date range, as typed.
    pub fn set_date_bound(&mut self, id: &str, bound: RangeBound, text: &str) {
        let key = match bound {
            RangeBound::Min => from_key(id),
            RangeBound::Max => to_key(id),
        };
        self.set(&key, FilterValue::Text(text.trim().to_string()));
    }

    pub fn set_number_bound(&mut self, id: &str, bound: RangeBound, text: &str) {
        let key = match bound {
            RangeBound::Min => min_key(id),
            RangeBound::Max => max_key(id),
        };
        self.set(&key, FilterValue::Text(text.trim().to_string()));
    }

    /// Adds the option when absent, removes it when present.
    pub fn toggle_option(&mut self, id: &str, option: &str) {
        let mut list = match self.values.remove(id) {
            Some(FilterValue::List(list)) => list,
            _ => Vec::new(),
        };
        if let Some(pos) = list.iter().position(|o| o == option) {
            list.remove(pos);
        } else {
            list.push(option.to_string());
        }
        self.values.insert(id.to_string(), FilterValue::List(list));
        self.notify();
    }

    pub fn is_selected(&self, id: &str, option: &str) -> bool {
        matches!(self.values.get(id), Some(FilterValue::List(list)) if list.iter().any(|o| o == option))
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
        self.notify();
    }

    pub fn active_filter_count(&self) -> usize {
        self.values.values().filter(|v| v.is_active()).count()
    }

    /// Whether a record passes every active filter. A record lacking a filtered field fails.
    pub fn matches<T: Entity>(&self, record: &T) -> bool {
        self.fields.iter().all(|field| self.field_matches(field, record))
    }

    pub fn apply<'a, T: Entity>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    fn field_matches<T: Entity>(&self, field: &FilterField, record: &T) -> bool {
        let value = record.field(field.id);
        match &field.kind {
            FilterKind::Select(_) => match self.text(field.id) {
                "" => true,
                wanted => value
                    .as_ref()
                    .and_then(FieldValue::as_text)
                    .is_some_and(|v| v.eq_ignore_ascii_case(wanted)),
            },
            FilterKind::MultiSelect(_) => match self.values.get(field.id) {
                Some(FilterValue::List(list)) if !list.is_empty() => value
                    .as_ref()
                    .and_then(FieldValue::as_text)
                    .is_some_and(|v| list.iter().any(|o| o.eq_ignore_ascii_case(v))),
                _ => true,
            },
            FilterKind::DateRange => {
                let from = parse_date(self.text(&from_key(field.id)));
                let to = parse_date(self.text(&to_key(field.id)));
                if from.is_none() && to.is_none() {
                    return true;
                }
                match value.as_ref().and_then(FieldValue::as_date) {
                    Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
                    None => false,
                }
            }
            FilterKind::NumberRange => {
                let min = parse_bound(self.text(&min_key(field.id)));
                let max = parse_bound(self.text(&max_key(field.id)));
                if min.is_none() && max.is_none() {
                    return true;
                }
                match value.as_ref().and_then(FieldValue::as_number) {
                    Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                    None => false,
                }
            }
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE).ok()
}

fn parse_bound(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields() -> Vec<FilterField> {
        vec![
            FilterField::date_range("date", "Date").primary(),
            FilterField::number_range("amount", "Amount"),
            FilterField::select("status", "Status", vec![SelectOption::plain("paid")]),
            FilterField::multi_select("category", "Category", vec![SelectOption::plain("Travel")]),
        ]
    }

    #[test]
    fn today_and_yesterday_presets() {
        let today = day(2026, 10, 18);
        let mut filter = AdvancedFilter::new(fields());
        filter.apply_date_preset("date", &DatePreset::Today, today);
        assert_eq!(filter.text("date_from"), "2026-10-18");
        assert_eq!(filter.text("date_to"), "2026-10-18");
        filter.apply_date_preset("date", &DatePreset::Yesterday, today);
        assert_eq!(filter.text("date_from"), "2026-10-17");
        assert_eq!(filter.text("date_to"), "2026-10-17");
    }

    #[test]
    fn month_presets_cover_whole_months() {
        assert_eq!(
            DatePreset::ThisMonth.range(day(2024, 2, 10)),
            (day(2024, 2, 1), day(2024, 2, 29))
        );
        assert_eq!(
            DatePreset::ThisMonth.range(day(2026, 12, 5)),
            (day(2026, 12, 1), day(2026, 12, 31))
        );
        assert_eq!(
            DatePreset::LastMonth.range(day(2026, 1, 15)),
            (day(2025, 12, 1), day(2025, 12, 31))
        );
        assert_eq!(DatePreset::Last7Days.range(day(2026, 10, 18)).0, day(2026, 10, 12));
    }

    #[test]
    fn active_count_skips_empty_values() {
        let mut filter = AdvancedFilter::new(fields());
        filter.set("status", FilterValue::Null);
        filter.set("amount_min", FilterValue::Text(String::new()));
        filter.set("category", FilterValue::List(vec![]));
        assert_eq!(filter.active_filter_count(), 0);

        filter.set_select("status", Some("paid"));
        filter.toggle_option("category", "Travel");
        filter.set_number_bound("amount", RangeBound::Max, "500");
        assert_eq!(filter.active_filter_count(), 3);

        filter.toggle_option("category", "Travel");
        assert_eq!(filter.active_filter_count(), 2);
        assert!(!filter.is_selected("category", "Travel"));
    }

    #[test]
    fn clear_all_empties_and_notifies() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();
        let mut filter = AdvancedFilter::new(fields()).on_change(move |values| {
            sink.borrow_mut().push(values.len());
        });
        filter.set_select("status", Some("paid"));
        filter.apply_date_preset("date", &DatePreset::Today, day(2026, 10, 18));
        filter.clear_all();
        assert!(filter.values().is_empty());
        assert_eq!(*seen.borrow(), vec![1, 3, 0]);
    }
}
