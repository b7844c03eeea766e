//! PostgreSQL-backed `ResourceRepository` storing JSONB documents.
//!
//! Every collection shares the `documents` table. Rows are filtered by
//! collection name, so one repository instance only ever sees its own
//! entity type. Uniqueness is enforced by partial unique indexes whose names
//! encode the offending field.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{ResourceRepository, ResourceRepositoryError};
use crate::domain::{Payload, Record, RecordId, Resource, ValidationError, apply_patch};

use super::diesel_basic_error_mapping::{
    map_basic_diesel_error, map_basic_pool_error, unique_field_from_constraint,
};
use super::models::{DocumentRow, NewDocumentRow};
use super::pool::{DbPool, PoolError};
use super::schema::documents;

/// Diesel-backed implementation of the resource repository port.
pub struct DieselDocumentRepository<E> {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for DieselDocumentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
            entity: PhantomData,
        }
    }
}

impl<E: Resource> DieselDocumentRepository<E> {
    /// Create a repository for `E`'s collection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use site_backend::domain::BlogPost;
    /// use site_backend::outbound::persistence::{DbPool, DieselDocumentRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/site")).await?;
    /// let blogs = DieselDocumentRepository::<BlogPost>::new(pool, Arc::new(DefaultClock));
    /// # let _ = blogs;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            clock,
            entity: PhantomData,
        }
    }

    fn collection() -> &'static str {
        E::KIND.collection()
    }
}

/// Failure inside the update transaction.
enum UpdateError {
    Diesel(DieselError),
    Repository(ResourceRepositoryError),
}

impl From<DieselError> for UpdateError {
    fn from(value: DieselError) -> Self {
        Self::Diesel(value)
    }
}

fn map_pool_error(error: PoolError) -> ResourceRepositoryError {
    map_basic_pool_error(error, ResourceRepositoryError::connection)
}

fn map_diesel_error(error: DieselError, collection: &str) -> ResourceRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        let field = unique_field_from_constraint(info.as_ref(), collection).unwrap_or("value");
        return ResourceRepositoryError::rejected(ValidationError::duplicate(field));
    }
    map_basic_diesel_error(
        error,
        ResourceRepositoryError::query,
        ResourceRepositoryError::connection,
    )
}

fn encode_body<E: Resource>(body: &E) -> Result<serde_json::Value, ResourceRepositoryError> {
    serde_json::to_value(body).map_err(|err| {
        ResourceRepositoryError::query(format!("encode {} document: {err}", E::KIND))
    })
}

fn row_to_record<E: Resource>(row: DocumentRow) -> Result<Record<E>, ResourceRepositoryError> {
    let DocumentRow {
        id,
        collection,
        body,
        created_at,
        updated_at,
    } = row;
    if collection != E::KIND.collection() {
        return Err(ResourceRepositoryError::query(format!(
            "document {id} belongs to {collection}, not {}",
            E::KIND.collection()
        )));
    }
    let body: E = serde_json::from_value(body).map_err(|err| {
        ResourceRepositoryError::query(format!("decode {} document {id}: {err}", E::KIND))
    })?;
    Ok(Record::from_parts(
        RecordId::from_uuid(id),
        created_at,
        updated_at,
        body,
    ))
}

#[async_trait]
impl<E: Resource> ResourceRepository<E> for DieselDocumentRepository<E> {
    async fn find_all(&self) -> Result<Vec<Record<E>>, ResourceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::collection.eq(Self::collection()))
            .order((documents::created_at.asc(), documents::id.asc()))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Self::collection()))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<Record<E>>, ResourceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = documents::table
            .filter(documents::id.eq(id.as_uuid()))
            .filter(documents::collection.eq(Self::collection()))
            .select(DocumentRow::as_select())
            .first::<DocumentRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, Self::collection()))?;

        row.map(row_to_record).transpose()
    }

    async fn create(&self, body: E) -> Result<Record<E>, ResourceRepositoryError> {
        body.check().map_err(ResourceRepositoryError::rejected)?;
        let encoded = encode_body(&body)?;
        let now = self.clock.utc();
        let new_row = NewDocumentRow {
            id: Uuid::new_v4(),
            collection: Self::collection(),
            body: &encoded,
            created_at: now,
            updated_at: now,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(documents::table)
            .values(&new_row)
            .returning(DocumentRow::as_returning())
            .get_result::<DocumentRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Self::collection()))?;

        row_to_record(row)
    }

    async fn update(
        &self,
        id: &RecordId,
        patch: Payload,
    ) -> Result<Option<Record<E>>, ResourceRepositoryError> {
        let id = *id.as_uuid();
        let collection = Self::collection();
        let now = self.clock.utc();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction::<_, UpdateError, _>(|conn| {
                async move {
                    let current = documents::table
                        .filter(documents::id.eq(id))
                        .filter(documents::collection.eq(collection))
                        .select(DocumentRow::as_select())
                        .for_update()
                        .first::<DocumentRow>(conn)
                        .await
                        .optional()?;
                    let Some(current) = current else {
                        return Ok(None);
                    };

                    let record = row_to_record::<E>(current).map_err(UpdateError::Repository)?;
                    let merged = apply_patch(record.body(), &patch).map_err(|err| {
                        UpdateError::Repository(ResourceRepositoryError::rejected(err))
                    })?;
                    let encoded = encode_body(&merged).map_err(UpdateError::Repository)?;

                    let row = diesel::update(documents::table.filter(documents::id.eq(id)))
                        .set((documents::body.eq(&encoded), documents::updated_at.eq(now)))
                        .returning(DocumentRow::as_returning())
                        .get_result::<DocumentRow>(conn)
                        .await?;
                    Ok(Some(row))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| match err {
                UpdateError::Diesel(err) => map_diesel_error(err, collection),
                UpdateError::Repository(err) => err,
            })?;

        outcome.map(row_to_record).transpose()
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, ResourceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            documents::table
                .filter(documents::id.eq(id.as_uuid()))
                .filter(documents::collection.eq(Self::collection())),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, Self::collection()))?;

        Ok(removed > 0)
    }
}
