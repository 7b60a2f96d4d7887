//! Core forms held in Dioxus signals.

use dioxus::prelude::*;
use tallybook_core::{FormCell, FormModal};

/// A [`FormModal`] stored in a signal. Each access is one short write, so the
/// page keeps rendering the banner while a submit or confirm is in flight.
#[derive(Clone, Copy)]
pub struct SignalForm(pub Signal<FormModal>);

impl FormCell for SignalForm {
    fn with<R>(&mut self, f: impl FnOnce(&mut FormModal) -> R) -> R {
        f(&mut self.0.write())
    }
}
