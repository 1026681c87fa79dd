//! `PostgreSQL` repository implementation for maintenance record storage.

use super::{
    models::{NewRecordRow, RecordChangesetRow, RecordRow},
    schema::maintenance_records,
};
use crate::config::DatabaseConfig;
use crate::record::{
    domain::{
        MaintenanceRecord, PersistedRecordData, RecordChanges, RecordDraft, RecordId, RecordStatus,
    },
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by record adapters.
pub type RecordPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds the process-wide connection pool from database configuration.
///
/// The pool is intended to be created once at startup and handed to
/// [`PostgresRecordRepository::new`]; dropping the repository tears the
/// connections down.
///
/// # Errors
///
/// Returns [`RecordRepositoryError::Persistence`] when the pool cannot be
/// constructed.
pub fn build_pool(config: &DatabaseConfig) -> RecordRepositoryResult<RecordPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(&config.url);
    Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .map_err(RecordRepositoryError::persistence)
}

/// `PostgreSQL`-backed record repository.
#[derive(Debug, Clone)]
pub struct PostgresRecordRepository {
    pool: RecordPgPool,
}

impl PostgresRecordRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RecordPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RecordRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecordRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RecordRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RecordRepositoryError::persistence)?
    }
}

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn insert(
        &self,
        draft: &RecordDraft,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<MaintenanceRecord> {
        let new_row = to_new_row(draft, timestamp)?;

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(maintenance_records::table)
                .values(&new_row)
                .returning(RecordRow::as_returning())
                .get_result::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            row_to_record(row)
        })
        .await
    }

    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<MaintenanceRecord>> {
        self.run_blocking(move |connection| {
            let row = maintenance_records::table
                .filter(maintenance_records::id.eq(id.value()))
                .select(RecordRow::as_select())
                .first::<RecordRow>(connection)
                .optional()
                .map_err(RecordRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        self.run_blocking(move |connection| {
            let rows = maintenance_records::table
                .order(maintenance_records::created_at.desc())
                .select(RecordRow::as_select())
                .load::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn update(
        &self,
        id: RecordId,
        changes: &RecordChanges,
        timestamp: DateTime<Utc>,
    ) -> RecordRepositoryResult<Option<MaintenanceRecord>> {
        let changeset = to_changeset_row(changes, timestamp)?;

        self.run_blocking(move |connection| {
            let row = diesel::update(
                maintenance_records::table.filter(maintenance_records::id.eq(id.value())),
            )
            .set(&changeset)
            .returning(RecordRow::as_returning())
            .get_result::<RecordRow>(connection)
            .optional()
            .map_err(RecordRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn delete(&self, id: RecordId) -> RecordRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(
                maintenance_records::table.filter(maintenance_records::id.eq(id.value())),
            )
            .execute(connection)
            .map_err(RecordRepositoryError::persistence)?;
            Ok(deleted_count > 0)
        })
        .await
    }

    async fn list_by_equipment(
        &self,
        equipment: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let equipment = equipment.to_owned();
        self.run_blocking(move |connection| {
            let rows = maintenance_records::table
                .filter(maintenance_records::equipment.eq(&equipment))
                .order(maintenance_records::date.desc())
                .select(RecordRow::as_select())
                .load::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn list_by_technician(
        &self,
        technician: &str,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let technician = technician.to_owned();
        self.run_blocking(move |connection| {
            let rows = maintenance_records::table
                .filter(maintenance_records::technician.eq(&technician))
                .order(maintenance_records::date.desc())
                .select(RecordRow::as_select())
                .load::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn list_by_status(
        &self,
        status: RecordStatus,
    ) -> RecordRepositoryResult<Vec<MaintenanceRecord>> {
        let status_label = status.as_str();
        self.run_blocking(move |connection| {
            let rows = maintenance_records::table
                .filter(maintenance_records::status.eq(status_label))
                .order(maintenance_records::date.desc())
                .select(RecordRow::as_select())
                .load::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }
}

fn to_new_row(draft: &RecordDraft, timestamp: DateTime<Utc>) -> RecordRepositoryResult<NewRecordRow> {
    let tasks = serde_json::to_value(draft.tasks()).map_err(RecordRepositoryError::persistence)?;

    Ok(NewRecordRow {
        equipment: draft.equipment().to_owned(),
        user: draft.user().to_owned(),
        technician: draft.technician().to_owned(),
        date: draft.date(),
        tasks,
        status: draft.status().as_str().to_owned(),
        notes: draft.notes().map(ToOwned::to_owned),
        created_at: timestamp,
        updated_at: timestamp,
    })
}

fn to_changeset_row(
    changes: &RecordChanges,
    timestamp: DateTime<Utc>,
) -> RecordRepositoryResult<RecordChangesetRow> {
    let tasks = changes
        .tasks()
        .map(serde_json::to_value)
        .transpose()
        .map_err(RecordRepositoryError::persistence)?;

    Ok(RecordChangesetRow {
        equipment: changes.equipment().map(ToOwned::to_owned),
        user: changes.user().map(ToOwned::to_owned),
        technician: changes.technician().map(ToOwned::to_owned),
        date: changes.date(),
        tasks,
        status: changes.status().map(|status| status.as_str().to_owned()),
        notes: changes.notes().map(|notes| notes.map(ToOwned::to_owned)),
        updated_at: timestamp,
    })
}

fn row_to_record(row: RecordRow) -> RecordRepositoryResult<MaintenanceRecord> {
    let RecordRow {
        id,
        equipment,
        user,
        technician,
        date,
        tasks: persisted_tasks,
        status: persisted_status,
        notes,
        created_at,
        updated_at,
    } = row;

    let tasks: Vec<String> = serde_json::from_value(persisted_tasks)
        .map_err(RecordRepositoryError::invalid_persisted_data)?;
    let status = RecordStatus::try_from(persisted_status.as_str())
        .map_err(RecordRepositoryError::invalid_persisted_data)?;

    let data = PersistedRecordData {
        id: RecordId::new(id),
        equipment,
        user,
        technician,
        date,
        tasks,
        status,
        notes,
        created_at,
        updated_at,
    };
    Ok(MaintenanceRecord::from_persisted(data))
}
