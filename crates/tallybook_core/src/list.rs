//! List pages: rows for the table, navigation targets, and the delete confirmation.

use crate::core_log;
use crate::error::Result;
use crate::filter::AdvancedFilter;
use crate::ids::RecordId;
use crate::models::{Entity, EntityKind, TableRow};
use crate::routes::Route;
use crate::store::Repository;

/// Rows that pass the filter and the search box, in store order.
pub fn visible_rows<T: Entity>(records: &[T], filter: Option<&AdvancedFilter>, search: &str) -> Vec<TableRow> {
    records
        .iter()
        .filter(|r| filter.map_or(true, |f| f.matches(*r)))
        .filter(|r| r.matches_search(search))
        .map(Entity::row)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    kind: EntityKind,
    search: String,
    pending_delete: Option<RecordId>,
}

impl ListView {
    pub fn new(kind: EntityKind) -> Self {
        ListView {
            kind,
            search: String::new(),
            pending_delete: None,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.kind.columns()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn rows<T: Entity>(&self, records: &[T], filter: Option<&AdvancedFilter>) -> Vec<TableRow> {
        visible_rows(records, filter, &self.search)
    }

    pub fn add_new_route(&self) -> Route {
        Route::New(self.kind)
    }

    pub fn edit_route(&self, id: &RecordId) -> Route {
        Route::Edit(self.kind, id.clone())
    }

    pub fn view_route(&self, id: &RecordId) -> Route {
        Route::View(self.kind, id.clone())
    }

    /// Opens the confirmation dialog for `id`.
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Closes the dialog and hands back the id to delete.
    pub fn take_pending_delete(&mut self) -> Option<RecordId> {
        self.pending_delete.take()
    }

    /// Delete the pending record. Returns the removed id, or `None` when nothing was pending.
    /// A failed delete stays pending so the dialog can retry.
    pub async fn confirm_delete<R: Repository>(&mut self, repo: &R) -> Result<Option<RecordId>> {
        let Some(id) = self.take_pending_delete() else {
            return Ok(None);
        };
        core_log!("[tallybook] delete {} {} confirmed", self.kind, id);
        if let Err(e) = repo.delete(&id).await {
            self.pending_delete = Some(id);
            return Err(e);
        }
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterField;
    use crate::models::{Vendor, VendorStatus};
    use crate::store::InMemoryRepository;
    use std::time::Duration;

    fn vendor(id: &str, name: &str, status: VendorStatus) -> Vendor {
        Vendor {
            id: RecordId(id.to_string()),
            number: format!("VEN-{}", id),
            name: name.to_string(),
            company_name: None,
            email: None,
            phone: None,
            payables: 10.0,
            status,
        }
    }

    #[test]
    fn search_and_filter_combine() {
        let records = vec![
            vendor("1", "Acme Supplies", VendorStatus::Active),
            vendor("2", "Acme Freight", VendorStatus::Inactive),
            vendor("3", "Globex", VendorStatus::Active),
        ];
        let mut filter = AdvancedFilter::new(vec![FilterField::select("status", "Status", VendorStatus::options())]);
        filter.set_select("status", Some("active"));

        let mut view = ListView::new(EntityKind::Vendor);
        view.set_search("acme");
        let ids: Vec<String> = view.rows(&records, Some(&filter)).into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(view.rows(&records, None).len(), 2);
    }

    #[test]
    fn cancel_clears_pending() {
        let mut view = ListView::new(EntityKind::Vendor);
        view.request_delete(RecordId("1".to_string()));
        assert!(view.pending_delete().is_some());
        view.cancel_delete();
        assert_eq!(view.pending_delete(), None);
        assert_eq!(view.add_new_route().path(), "/purchases/vendors/new");
    }

    #[tokio::test]
    async fn confirm_removes_the_pending_record() {
        let repo = InMemoryRepository::new(
            vec![vendor("1", "Acme", VendorStatus::Active), vendor("2", "Globex", VendorStatus::Active)],
            Duration::ZERO,
        );
        let mut view = ListView::new(EntityKind::Vendor);
        assert_eq!(view.confirm_delete(&repo).await.unwrap(), None);

        view.request_delete(RecordId("1".to_string()));
        let removed = view.confirm_delete(&repo).await.unwrap();
        assert_eq!(removed, Some(RecordId("1".to_string())));
        assert_eq!(repo.len(), 1);
        assert!(view.pending_delete().is_none());
    }

    #[tokio::test]
    async fn failed_delete_stays_pending() {
        let repo = InMemoryRepository::new(vec![vendor("1", "Acme", VendorStatus::Active)], Duration::ZERO);
        let mut view = ListView::new(EntityKind::Vendor);
        view.request_delete(RecordId("9".to_string()));

        assert!(view.confirm_delete(&repo).await.is_err());
        assert_eq!(view.pending_delete(), Some(&RecordId("9".to_string())));
        assert_eq!(repo.len(), 1);
    }
}
