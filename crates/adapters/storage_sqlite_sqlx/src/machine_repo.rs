//! `SQLite` implementation of [`MachineRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use machinehub_app::ports::MachineRepository;
use machinehub_domain::error::{ConflictError, MachineHubError};
use machinehub_domain::id::MachineId;
use machinehub_domain::machine::Machine;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Machine`].
struct Wrapper(Machine);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let outlet_number: i64 = row.try_get("outlet")?;
        let status: String = row.try_get("status")?;

        Ok(Self(Machine {
            id: MachineId::from(id),
            name,
            outlet_number,
            status,
        }))
    }
}

const INSERT: &str = "INSERT INTO machines (id, name, outlet, status) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, outlet, status FROM machines WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, outlet, status FROM machines";
const UPDATE: &str = "UPDATE machines SET name = ?, outlet = ?, status = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM machines WHERE id = ?";

/// `SQLite`-backed machine repository.
#[derive(Clone)]
pub struct SqliteMachineRepository {
    pool: SqlitePool,
}

impl SqliteMachineRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MachineRepository for SqliteMachineRepository {
    fn create(
        &self,
        machine: Machine,
    ) -> impl Future<Output = Result<Machine, MachineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(machine.id.as_str())
                .bind(&machine.name)
                .bind(machine.outlet_number)
                .bind(&machine.status)
                .execute(&pool)
                .await
                .map_err(StorageError::from);

            match result {
                Ok(_) => Ok(machine),
                Err(err) if err.is_unique_violation() => {
                    Err(MachineHubError::from(ConflictError {
                        entity: "Machine",
                        id: machine.id.into_inner(),
                    }))
                }
                Err(err) => Err(MachineHubError::from(err)),
            }
        }
    }

    fn get_by_id(
        &self,
        id: &MachineId,
    ) -> impl Future<Output = Result<Option<Machine>, MachineHubError>> + Send {
        let pool = self.pool.clone();
        let id = id.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Machine>, MachineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        machine: Machine,
    ) -> impl Future<Output = Result<Machine, MachineHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&machine.name)
                .bind(machine.outlet_number)
                .bind(&machine.status)
                .bind(machine.id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(machine_id = %machine.id, "update matched no rows");
            }

            Ok(machine)
        }
    }

    fn delete(&self, id: &MachineId) -> impl Future<Output = Result<(), MachineHubError>> + Send {
        let pool = self.pool.clone();
        let id = id.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
