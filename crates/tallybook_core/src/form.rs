//! Field-driven forms: specs, validation, and the modal submit lifecycle.
//!
//! A [`FormModal`] is open or closed, and its submission is idle, submitting,
//! succeeded or failed. Required checks run before validators; a form with any
//! failing field never reaches the submit callback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::core_log;
use crate::error::{CoreError, Result};
use crate::store::pause;

/// Banner text used when a failed submit carries no message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value doubles as its label.
    pub fn plain(value: &str) -> Self {
        Self::new(value, value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Password,
    Number,
    Date,
    Select(Vec<SelectOption>),
}

/// Per-field checks, run on non-empty values after the required check.
#[derive(Clone, Copy)]
pub enum Validator {
    Email,
    Number,
    NonNegative,
    Date,
    MinLength(usize),
    Custom(fn(&str) -> std::result::Result<(), String>),
}

impl Validator {
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match self {
            Validator::Email => {
                let valid = match value.split_once('@') {
                    Some((local, domain)) => {
                        !local.is_empty()
                            && domain.contains('.')
                            && !domain.starts_with('.')
                            && !domain.ends_with('.')
                            && !value.contains(char::is_whitespace)
                    }
                    None => false,
                };
                if valid {
                    Ok(())
                } else {
                    Err("Enter a valid email address".to_string())
                }
            }
            Validator::Number => value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|_| ())
                .ok_or_else(|| "Enter a number".to_string()),
            Validator::NonNegative => match value.parse::<f64>() {
                Ok(n) if n.is_finite() && n >= 0.0 => Ok(()),
                Ok(_) => Err("Must be zero or more".to_string()),
                Err(_) => Err("Enter a number".to_string()),
            },
            Validator::Date => NaiveDate::parse_from_str(value, crate::format::ISO_DATE)
                .map(|_| ())
                .map_err(|_| "Enter a date as YYYY-MM-DD".to_string()),
            Validator::MinLength(n) => {
                if value.chars().count() >= *n {
                    Ok(())
                } else {
                    Err(format!("Must be at least {} characters", n))
                }
            }
            Validator::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Email => f.write_str("Email"),
            Validator::Number => f.write_str("Number"),
            Validator::NonNegative => f.write_str("NonNegative"),
            Validator::Date => f.write_str("Date"),
            Validator::MinLength(n) => write!(f, "MinLength({})", n),
            Validator::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Validator::Email, Validator::Email)
            | (Validator::Number, Validator::Number)
            | (Validator::NonNegative, Validator::NonNegative)
            | (Validator::Date, Validator::Date) => true,
            (Validator::MinLength(a), Validator::MinLength(b)) => a == b,
            (Validator::Custom(a), Validator::Custom(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub validator: Option<Validator>,
}

impl FieldSpec {
    pub fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            id,
            label,
            kind,
            required: false,
            placeholder: None,
            validator: None,
        }
    }

    pub fn text(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn text_area(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::TextArea)
    }

    pub fn email(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Email).validate(Validator::Email)
    }

    pub fn password(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Password)
    }

    /// Non-negative amount field.
    pub fn amount(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Number).validate(Validator::NonNegative)
    }

    pub fn date(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Date).validate(Validator::Date)
    }

    pub fn select(id: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self::new(id, label, FieldKind::Select(options))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Required check, then validator. Empty optional fields pass.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            if self.required {
                return Err(format!("{} is required", self.label));
            }
            return Ok(());
        }
        if let FieldKind::Select(options) = &self.kind {
            if !options.iter().any(|o| o.value == value) {
                return Err(format!("Choose a valid {}", self.label.to_lowercase()));
            }
        }
        match &self.validator {
            Some(v) => v.check(value),
            None => Ok(()),
        }
    }
}

/// Raw text values keyed by field id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    /// Sets the value when present; absent optionals stay unset.
    pub fn with_opt(self, id: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with(id, v),
            None => self,
        }
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.0.insert(id.to_string(), value.into());
    }

    /// Value for a field; empty when unset.
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    fn invalid(id: &str, message: impl Into<String>) -> CoreError {
        let mut errors = ValidationErrors::default();
        errors.insert(id, message);
        CoreError::Validation(errors)
    }

    pub fn required_text(&self, id: &str) -> Result<String> {
        let v = self.get(id).trim();
        if v.is_empty() {
            return Err(Self::invalid(id, format!("{} is required", id)));
        }
        Ok(v.to_string())
    }

    pub fn opt_text(&self, id: &str) -> Option<String> {
        let v = self.get(id).trim();
        (!v.is_empty()).then(|| v.to_string())
    }

    pub fn number(&self, id: &str) -> Result<f64> {
        let v = self.get(id).trim();
        if v.is_empty() {
            return Ok(0.0);
        }
        v.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| Self::invalid(id, "Enter a number"))
    }

    pub fn date(&self, id: &str) -> Result<NaiveDate> {
        self.opt_date(id)?
            .ok_or_else(|| Self::invalid(id, format!("{} is required", id)))
    }

    pub fn opt_date(&self, id: &str) -> Result<Option<NaiveDate>> {
        let v = self.get(id).trim();
        if v.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(v, crate::format::ISO_DATE)
            .map(Some)
            .map_err(|_| Self::invalid(id, "Enter a date as YYYY-MM-DD"))
    }

    /// Parse a select value with the enum's own parser.
    pub fn choice<T>(&self, id: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        parse(self.get(id)).ok_or_else(|| Self::invalid(id, "Choose an option"))
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        FormData(iter.into_iter().collect())
    }
}

/// Inline error messages keyed by field id; at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, id: &str, message: impl Into<String>) {
        self.0.insert(id.to_string(), message.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn remove(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validate every field; one error entry per failing field.
pub fn validate(fields: &[FieldSpec], data: &FormData) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in fields {
        if let Err(message) = field.check(data.get(field.id)) {
            errors.insert(field.id, message);
        }
    }
    errors
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the callback was not called.
    Invalid(ValidationErrors),
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormModal {
    title: String,
    fields: Vec<FieldSpec>,
    initial: FormData,
    values: FormData,
    errors: ValidationErrors,
    status: SubmitStatus,
    open: bool,
    success_message: String,
    auto_close: Duration,
}

impl FormModal {
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        FormModal {
            title: title.into(),
            fields,
            initial: FormData::new(),
            values: FormData::new(),
            errors: ValidationErrors::default(),
            status: SubmitStatus::Idle,
            open: false,
            success_message: "Saved successfully".to_string(),
            auto_close: DEFAULT_AUTO_CLOSE,
        }
    }

    pub fn with_initial(mut self, values: FormData) -> Self {
        self.values = values.clone();
        self.initial = values;
        self
    }

    pub fn with_auto_close(mut self, delay: Duration) -> Self {
        self.auto_close = delay;
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn values(&self) -> &FormData {
        &self.values
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn auto_close_delay(&self) -> Duration {
        self.auto_close
    }

    /// Open with the initial values and a clean slate.
    pub fn open(&mut self) {
        self.values = self.initial.clone();
        self.errors = ValidationErrors::default();
        self.status = SubmitStatus::Idle;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.status = SubmitStatus::Idle;
        self.errors = ValidationErrors::default();
    }

    /// Editing a field clears its inline error.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.values.set(id, value);
        self.errors.remove(id);
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.fields, &self.values)
    }

    /// First half of a submit: validate and, when clean, mark as submitting.
    pub fn begin_submit(&mut self) -> std::result::Result<FormData, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            core_log!("[tallybook] form '{}' rejected: {} invalid field(s)", self.title, errors.len());
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = ValidationErrors::default();
        self.status = SubmitStatus::Submitting;
        Ok(self.values.clone())
    }

    /// First half of a confirm: no field validation.
    pub fn begin_confirm(&mut self) {
        self.status = SubmitStatus::Submitting;
    }

    /// Second half of a submit or confirm. Returns true on success.
    pub fn finish<E: fmt::Display>(&mut self, result: std::result::Result<(), E>) -> bool {
        match result {
            Ok(()) => {
                core_log!("[tallybook] form '{}' submitted", self.title);
                self.status = SubmitStatus::Success(self.success_message.clone());
                true
            }
            Err(e) => {
                let message = e.to_string();
                let message = if message.trim().is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    message
                };
                core_log!("[tallybook] form '{}' failed: {}", self.title, message);
                self.status = SubmitStatus::Error(message);
                false
            }
        }
    }

    /// Validate, call `on_submit`, show the banner, and auto-close on success.
    pub async fn submit<F, Fut, E>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormData) -> Fut,
        Fut: Future<Output = std::result::Result<(), E>>,
        E: fmt::Display,
    {
        submit_in(self, on_submit).await
    }

    /// Destructive action without field validation; same banner behaviour as submit.
    pub async fn confirm<F, Fut, E>(&mut self, on_confirm: F) -> SubmitOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<(), E>>,
        E: fmt::Display,
    {
        confirm_in(self, on_confirm).await
    }
}

/// Somewhere a [`FormModal`] lives: owned, or behind a UI signal. Each access is
/// short; the async lifecycle below never keeps one open across an await, so the
/// banner can render while the callback and the auto-close delay run.
pub trait FormCell {
    fn with<R>(&mut self, f: impl FnOnce(&mut FormModal) -> R) -> R;
}

impl FormCell for FormModal {
    fn with<R>(&mut self, f: impl FnOnce(&mut FormModal) -> R) -> R {
        f(self)
    }
}

/// [`FormModal::submit`] for a form held in any [`FormCell`].
pub async fn submit_in<C, F, Fut, E>(cell: &mut C, on_submit: F) -> SubmitOutcome
where
    C: FormCell,
    F: FnOnce(FormData) -> Fut,
    Fut: Future<Output = std::result::Result<(), E>>,
    E: fmt::Display,
{
    let data = match cell.with(FormModal::begin_submit) {
        Ok(data) => data,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    let result = on_submit(data).await;
    settle_in(cell, result).await
}

/// [`FormModal::confirm`] for a form held in any [`FormCell`].
pub async fn confirm_in<C, F, Fut, E>(cell: &mut C, on_confirm: F) -> SubmitOutcome
where
    C: FormCell,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<(), E>>,
    E: fmt::Display,
{
    cell.with(FormModal::begin_confirm);
    let result = on_confirm().await;
    settle_in(cell, result).await
}

async fn settle_in<C: FormCell, E: fmt::Display>(cell: &mut C, result: std::result::Result<(), E>) -> SubmitOutcome {
    let delay = cell.with(|form| form.finish(result).then(|| form.auto_close));
    if let Some(delay) = delay {
        pause(delay).await;
        cell.with(FormModal::close);
        return SubmitOutcome::Succeeded;
    }
    cell.with(|form| match &form.status {
        SubmitStatus::Error(message) => SubmitOutcome::Failed(message.clone()),
        _ => SubmitOutcome::Failed(GENERIC_ERROR.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Name").required(),
            FieldSpec::email("email", "Email"),
            FieldSpec::amount("amount", "Amount").required(),
            FieldSpec::select(
                "mode",
                "Mode",
                vec![SelectOption::plain("cash"), SelectOption::plain("card")],
            ),
        ]
    }

    #[test]
    fn one_error_per_missing_required_field() {
        let errors = validate(&fields(), &FormData::new());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("amount"), Some("Amount is required"));
    }

    #[test]
    fn validators_run_only_on_filled_fields() {
        let data = FormData::new()
            .with("name", "Acme")
            .with("amount", "-3")
            .with("email", "not-an-email")
            .with("mode", "barter");
        let errors = validate(&fields(), &data);
        assert_eq!(errors.get("amount"), Some("Must be zero or more"));
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
        assert_eq!(errors.get("mode"), Some("Choose a valid mode"));

        let ok = FormData::new().with("name", "Acme").with("amount", "12.5");
        assert!(validate(&fields(), &ok).is_empty());
    }

    #[test]
    fn custom_and_length_validators() {
        fn no_spaces(v: &str) -> std::result::Result<(), String> {
            if v.contains(' ') {
                Err("No spaces".to_string())
            } else {
                Ok(())
            }
        }
        assert_eq!(Validator::Custom(no_spaces).check("a b"), Err("No spaces".to_string()));
        assert!(Validator::Custom(no_spaces).check("ab").is_ok());
        assert!(Validator::MinLength(8).check("short").is_err());
        assert!(Validator::Date.check("2026-02-30").is_err());
        assert!(Validator::Date.check("2026-02-28").is_ok());
    }

    #[test]
    fn set_value_clears_that_fields_error() {
        let mut modal = FormModal::new("Vendor", fields());
        modal.open();
        assert!(modal.begin_submit().is_err());
        assert!(modal.errors().get("name").is_some());
        modal.set_value("name", "Acme");
        assert!(modal.errors().get("name").is_none());
        assert!(modal.errors().get("amount").is_some());
    }

    #[test]
    fn finish_uses_generic_message_for_empty_errors() {
        let mut modal = FormModal::new("Vendor", fields());
        modal.begin_confirm();
        assert!(!modal.finish(Err("  ")));
        assert_eq!(modal.status(), &SubmitStatus::Error(GENERIC_ERROR.to_string()));
    }

    #[test]
    fn form_data_readers() {
        let data = FormData::new()
            .with("qty", "")
            .with("rate", "abc")
            .with("due", "2026-10-18");
        assert_eq!(data.number("qty").unwrap(), 0.0);
        assert!(data.number("rate").is_err());
        assert_eq!(data.opt_date("due").unwrap(), NaiveDate::from_ymd_opt(2026, 10, 18));
        assert_eq!(data.opt_date("missing").unwrap(), None);
        assert!(data.required_text("missing").is_err());
    }

    /// Form held behind a shared cell, the way a UI signal holds it.
    struct Shared(std::rc::Rc<std::cell::RefCell<FormModal>>);

    impl FormCell for Shared {
        fn with<R>(&mut self, f: impl FnOnce(&mut FormModal) -> R) -> R {
            f(&mut self.0.borrow_mut())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn shared_form_stays_readable_while_confirm_runs() {
        let form = std::rc::Rc::new(std::cell::RefCell::new(
            FormModal::new("Delete bill", vec![])
                .with_auto_close(Duration::from_millis(1500))
                .with_success_message("Bill deleted"),
        ));
        form.borrow_mut().open();
        let mut cell = Shared(form.clone());
        let during_action = form.clone();
        let during_delay = form.clone();

        let (outcome, banner) = tokio::join!(
            confirm_in(&mut cell, || async move {
                assert!(during_action.borrow().is_submitting());
                Ok::<(), String>(())
            }),
            async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                during_delay.borrow().status().clone()
            }
        );

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(banner, SubmitStatus::Success("Bill deleted".to_string()));
        assert!(!form.borrow().is_open());
    }

    #[tokio::test]
    async fn shared_form_keeps_error_banner_open() {
        let form = std::rc::Rc::new(std::cell::RefCell::new(FormModal::new("Edit bill", fields())));
        form.borrow_mut().open();
        form.borrow_mut().set_value("name", "Paper");
        form.borrow_mut().set_value("amount", "12");
        let mut cell = Shared(form.clone());

        let outcome = submit_in(&mut cell, |_| async { Err::<(), _>("Bill bill-9 not found") }).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Bill bill-9 not found".to_string()));
        assert!(form.borrow().is_open());
        assert_eq!(form.borrow().status(), &SubmitStatus::Error("Bill bill-9 not found".to_string()));
    }
}
