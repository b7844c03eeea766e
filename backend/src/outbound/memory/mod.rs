//! Process-local `ResourceRepository` used when no database is configured.
//!
//! Records live in a mutex-guarded vector in insertion order. Uniqueness and
//! merge semantics match the PostgreSQL adapter, so the HTTP contract is the
//! same whichever store backs it. Data is lost on restart.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{ResourceRepository, ResourceRepositoryError};
use crate::domain::{Payload, Record, RecordId, Resource, ValidationError, apply_patch};

/// In-memory implementation of the resource repository port.
pub struct InMemoryResourceRepository<E> {
    records: Mutex<Vec<Record<E>>>,
    clock: Arc<dyn Clock>,
}

impl<E: Resource> InMemoryResourceRepository<E> {
    /// Create an empty store stamping records with `clock`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use site_backend::domain::Offer;
    /// use site_backend::outbound::memory::InMemoryResourceRepository;
    ///
    /// let offers = InMemoryResourceRepository::<Offer>::new(Arc::new(DefaultClock));
    /// # let _ = offers;
    /// ```
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Record<E>>>, ResourceRepositoryError> {
        self.records.lock().map_err(|_| {
            ResourceRepositoryError::connection(format!("{} store lock poisoned", E::KIND))
        })
    }
}

/// Reject `body` if another record already holds one of its unique values.
fn ensure_unique<E: Resource>(
    records: &[Record<E>],
    body: &E,
    except: Option<RecordId>,
) -> Result<(), ResourceRepositoryError> {
    for key in body.unique_keys() {
        let clash = records
            .iter()
            .filter(|record| Some(record.id()) != except)
            .any(|record| record.body().unique_keys().contains(&key));
        if clash {
            return Err(ResourceRepositoryError::rejected(
                ValidationError::duplicate(key.field),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl<E: Resource> ResourceRepository<E> for InMemoryResourceRepository<E> {
    async fn find_all(&self) -> Result<Vec<Record<E>>, ResourceRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<Record<E>>, ResourceRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|record| record.id() == *id)
            .cloned())
    }

    async fn create(&self, body: E) -> Result<Record<E>, ResourceRepositoryError> {
        body.check().map_err(ResourceRepositoryError::rejected)?;
        let mut records = self.lock()?;
        ensure_unique(&records, &body, None)?;

        let now = self.clock.utc();
        let record = Record::from_parts(RecordId::random(), now, now, body);
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: Payload,
    ) -> Result<Option<Record<E>>, ResourceRepositoryError> {
        let mut records = self.lock()?;
        let Some(index) = records.iter().position(|record| record.id() == *id) else {
            return Ok(None);
        };

        let merged = apply_patch(records[index].body(), &patch)
            .map_err(ResourceRepositoryError::rejected)?;
        ensure_unique(&records, &merged, Some(*id))?;

        let updated = records[index].clone().revised(merged, self.clock.utc());
        records[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, ResourceRepositoryError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| record.id() != *id);
        Ok(records.len() != before)
    }
}
