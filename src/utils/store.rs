use crate::modules::{dish::repository::Dish, order::repository::Order};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A stored entity addressable by its id.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> &str;
}

/// Insertion-ordered collection of records keyed by id.
#[derive(Clone)]
pub struct Collection<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(vec![])),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn insert(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    /// Swaps the record sharing `record`'s id, keeping its position.
    pub async fn replace(&self, record: T) -> Option<T> {
        let mut records = self.records.write().await;
        let slot = records.iter_mut().find(|r| r.id() == record.id())?;
        *slot = record.clone();
        Some(record)
    }

    /// Like `replace`, but only when `allowed` holds for the live record.
    pub async fn replace_if<F>(&self, record: T, allowed: F) -> Guarded<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let mut records = self.records.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Guarded::Missing;
        };
        if !allowed(slot) {
            return Guarded::Refused(slot.clone());
        }
        *slot = record.clone();
        Guarded::Applied(record)
    }

    /// Removes the record with `id` only when `allowed` holds for it.
    pub async fn remove_if<F>(&self, id: &str, allowed: F) -> Guarded<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Guarded::Missing;
        };
        if !allowed(&records[index]) {
            return Guarded::Refused(records[index].clone());
        }
        Guarded::Applied(records.remove(index))
    }
}

/// Outcome of a mutation that re-checks the stored record under the write lock.
#[derive(Debug, PartialEq)]
pub enum Guarded<T> {
    Applied(T),
    /// Carries the live record that failed the check.
    Refused(T),
    Missing,
}

#[derive(Clone, Default)]
pub struct Store {
    pub dishes: Collection<Dish>,
    pub orders: Collection<Order>,
}

#[derive(Deserialize, Default)]
struct Seed {
    #[serde(default)]
    dishes: Vec<Dish>,
    #[serde(default)]
    orders: Vec<Order>,
}

#[derive(Debug)]
pub enum Error {
    FailedToReadSeedFile,
    FailedToParseSeedFile,
}

impl Store {
    pub async fn load(seed_path: &str) -> Result<Self, Error> {
        let raw = tokio::fs::read_to_string(seed_path).await.map_err(|err| {
            tracing::error!("Failed to read seed file {}: {}", seed_path, err);
            Error::FailedToReadSeedFile
        })?;

        let seed = serde_json::from_str::<Seed>(&raw).map_err(|err| {
            tracing::error!("Failed to parse seed file {}: {}", seed_path, err);
            Error::FailedToParseSeedFile
        })?;

        tracing::info!(
            "Seeded store with {} dishes and {} orders",
            seed.dishes.len(),
            seed.orders.len()
        );

        Ok(Self {
            dishes: Collection::new(seed.dishes),
            orders: Collection::new(seed.orders),
        })
    }
}
