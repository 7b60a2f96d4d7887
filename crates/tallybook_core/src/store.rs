//! Entity stores: the async repository seam and its in-memory implementation.
//!
//! The in-memory store holds one ordered collection per entity kind. Reads are
//! immediate; mutations wait out a simulated network latency first. No lock is
//! held across an await.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::core_log;
use crate::error::{CoreError, Result};
use crate::ids::RecordId;
use crate::models::Entity;

/// Sleep for `duration`. Zero returns without touching a timer. Browser builds
/// sleep on `setTimeout` since tokio has no timer driver on wasm32.
pub async fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Record access for one entity kind. A remote-backed implementation can replace
/// the in-memory one without touching the views.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Record: Entity;

    async fn list(&self) -> Result<Vec<Self::Record>>;

    async fn get(&self, id: &RecordId) -> Result<Self::Record>;

    /// Insert at the end. Fails when the id is already taken.
    async fn create(&self, record: Self::Record) -> Result<Self::Record>;

    /// Replace in place, keeping position.
    async fn update(&self, record: Self::Record) -> Result<Self::Record>;

    async fn delete(&self, id: &RecordId) -> Result<()>;
}

#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
    seed: Arc<Vec<T>>,
    latency: Duration,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        InMemoryRepository {
            records: Arc::clone(&self.records),
            seed: Arc::clone(&self.seed),
            latency: self.latency,
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Seeded store. Later duplicates of a seed id are dropped.
    pub fn new(seed: Vec<T>, latency: Duration) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(seed.len());
        for record in seed {
            if unique.iter().any(|r| r.id() == record.id()) {
                core_log!("[tallybook] seed for {} has duplicate id {}, dropped", T::KIND, record.id());
                continue;
            }
            unique.push(record);
        }
        InMemoryRepository {
            records: Arc::new(RwLock::new(unique.clone())),
            seed: Arc::new(unique),
            latency,
        }
    }

    pub fn empty(latency: Duration) -> Self {
        Self::new(Vec::new(), latency)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Current records in store order.
    pub fn snapshot(&self) -> Vec<T> {
        self.read().clone()
    }

    pub fn find(&self, id: &RecordId) -> Option<T> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Back to the seed data.
    pub fn reset(&self) {
        let seed = self.seed.as_ref().clone();
        core_log!("[tallybook] store {} reset to {} seed record(s)", T::KIND, seed.len());
        *self.write() = seed;
    }

    fn not_found(id: &RecordId) -> CoreError {
        CoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }
}

impl<T: Entity> Repository for InMemoryRepository<T> {
    type Record = T;

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: &RecordId) -> Result<T> {
        self.find(id).ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, record: T) -> Result<T> {
        pause(self.latency).await;
        let mut records = self.write();
        if records.iter().any(|r| r.id() == record.id()) {
            core_log!("[tallybook] create {} rejected: duplicate id {}", T::KIND, record.id());
            return Err(CoreError::DuplicateId {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
        core_log!("[tallybook] created {} {} ({})", T::KIND, record.id(), record.number());
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> Result<T> {
        pause(self.latency).await;
        let mut records = self.write();
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                core_log!("[tallybook] updated {} {} ({})", T::KIND, record.id(), record.number());
                *slot = record.clone();
                Ok(record)
            }
            None => {
                core_log!("[tallybook] update {} {} failed: not found", T::KIND, record.id());
                Err(Self::not_found(record.id()))
            }
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        pause(self.latency).await;
        let mut records = self.write();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            core_log!("[tallybook] delete {} {} failed: not found", T::KIND, id);
            return Err(Self::not_found(id));
        }
        core_log!("[tallybook] deleted {} {}", T::KIND, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Vendor, VendorStatus};

    fn vendor(id: &str, name: &str) -> Vendor {
        Vendor {
            id: RecordId(id.to_string()),
            number: format!("VEN-{}", id),
            name: name.to_string(),
            company_name: None,
            email: None,
            phone: None,
            payables: 0.0,
            status: VendorStatus::Active,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let repo = InMemoryRepository::new(vec![vendor("v1", "Acme")], Duration::ZERO);
        let err = repo.create(vendor("v1", "Other")).await.unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_position() {
        let repo = InMemoryRepository::new(
            vec![vendor("v1", "Acme"), vendor("v2", "Globex"), vendor("v3", "Initech")],
            Duration::ZERO,
        );
        repo.update(vendor("v2", "Globex Corp")).await.unwrap();
        let names: Vec<String> = repo.snapshot().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Acme", "Globex Corp", "Initech"]);
        assert!(repo.update(vendor("v9", "Nobody")).await.is_err());
    }

    #[tokio::test]
    async fn reset_restores_seed_across_clones() {
        let repo = InMemoryRepository::new(vec![vendor("v1", "Acme")], Duration::ZERO);
        let handle = repo.clone();
        handle.delete(&RecordId("v1".to_string())).await.unwrap();
        assert!(repo.is_empty());
        repo.reset();
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn duplicate_seed_ids_are_dropped() {
        let repo = InMemoryRepository::new(
            vec![vendor("v1", "Acme"), vendor("v1", "Shadow")],
            Duration::ZERO,
        );
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.snapshot()[0].name, "Acme");
    }

    #[tokio::test(start_paused = true)]
    async fn mutations_wait_out_the_latency() {
        let repo = InMemoryRepository::new(vec![vendor("v1", "Acme")], Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        repo.delete(&RecordId("v1".to_string())).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
