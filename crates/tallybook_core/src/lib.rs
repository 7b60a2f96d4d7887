//! Tallybook's view-model layer: entity stores, the advanced filter, the form
//! modal, master-detail resolution and the line-item editor. No UI code lives here.

pub mod cart;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod form;
pub mod format;
pub mod ids;
pub mod list;
#[doc(hidden)]
pub mod log_bridge;
pub mod mail;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;
pub mod stores;

pub use cart::{parse_number, CartEditor, CartRow, LineField};
pub use config::Config;
pub use detail::{DetailPage, DetailSelection, DetailState, FallbackPolicy, ItemsTable, SidebarEntry};
pub use error::{CoreError, Result};
pub use filter::{AdvancedFilter, DatePreset, FilterField, FilterKind, FilterValue, FilterValues, RangeBound};
pub use form::{
    confirm_in, submit_in, FieldKind, FieldSpec, FormCell, FormData, FormModal, SelectOption, SubmitOutcome,
    SubmitStatus, ValidationErrors, Validator, GENERIC_ERROR,
};
pub use ids::{LineItemId, RecordId};
pub use list::ListView;
pub use mail::MailDraft;
pub use models::{Currency, Entity, EntityKind, LineItem, RecordDetail, Section, TableRow};
pub use routes::Route;
pub use store::{InMemoryRepository, Repository};
pub use stores::{DashboardSummary, Stores, UpcomingPurchase};

/// Drain buffered core log lines (for the UI's activity panel).
pub fn drain_logs() -> Vec<String> {
    log_bridge::drain_logs()
}
