//! SQLite-backed ticket store.
//!
//! Dates are stored as Unix milliseconds, so any sub-millisecond part of a
//! timestamp is dropped on write. Returned tickets are truncated the same
//! way so they compare equal to what a later read produces.

use crate::{DbError, Result as DbErrorResult, TicketStore};

use th_core::{Clock, Ticket, TicketPriority};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::{Row, SqliteConnection, SqlitePool};

const TABLE: &str = "tickets";

const CHECKPOINT_PASSIVE: &str = "PRAGMA wal_checkpoint(PASSIVE)";
const CHECKPOINT_TRUNCATE: &str = "PRAGMA wal_checkpoint(TRUNCATE)";

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i64,
    name: String,
    date: i64,
    problem_description: String,
    status: String,
    priority: i64,
}

impl TicketRow {
    #[track_caller]
    fn into_ticket(self) -> DbErrorResult<Ticket> {
        let date = DateTime::from_timestamp_millis(self.date).ok_or_else(|| DbError::InvalidRow {
            table: TABLE,
            message: format!("Invalid timestamp in tickets.date: {}", self.date),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let priority =
            TicketPriority::try_from(self.priority).map_err(|e| DbError::InvalidRow {
                table: TABLE,
                message: format!("Invalid priority in tickets.priority: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Ticket {
            id: self.id,
            name: self.name,
            date,
            problem_description: self.problem_description,
            status: self.status,
            priority,
        })
    }
}

pub struct SqliteTicketStore {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteTicketStore {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn to_millis(date: DateTime<Utc>) -> i64 {
        date.timestamp_millis()
    }
}

#[async_trait]
impl TicketStore for SqliteTicketStore {
    async fn list_all(&self) -> DbErrorResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT id, name, date, problem_description, status, priority
                FROM tickets
                ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(TicketRow::into_ticket)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn get_by_id(&self, id: i64) -> DbErrorResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT id, name, date, problem_description, status, priority
                FROM tickets
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TicketRow::into_ticket).transpose()
    }

    async fn create(&self, ticket: Ticket) -> DbErrorResult<Ticket> {
        let date = self.clock.now().trunc_subsecs(3);

        let result = sqlx::query(
            r#"
                INSERT INTO tickets (name, date, problem_description, status, priority)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&ticket.name)
        .bind(Self::to_millis(date))
        .bind(&ticket.problem_description)
        .bind(&ticket.status)
        .bind(ticket.priority.code())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Created ticket {} ({})", id, ticket.name);

        Ok(Ticket { id, date, ..ticket })
    }

    async fn update(&self, ticket: Ticket) -> DbErrorResult<Ticket> {
        let date = ticket.date.trunc_subsecs(3);

        let result = sqlx::query(
            r#"
                UPDATE tickets
                SET name = ?, date = ?, problem_description = ?, status = ?, priority = ?
                WHERE id = ?
            "#,
        )
        .bind(&ticket.name)
        .bind(Self::to_millis(date))
        .bind(&ticket.problem_description)
        .bind(&ticket.status)
        .bind(ticket.priority.code())
        .bind(ticket.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::TicketNotFound {
                id: ticket.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Updated ticket {}", ticket.id);

        Ok(Ticket { date, ..ticket })
    }

    async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        debug!("Delete ticket {}: removed={}", id, removed);

        Ok(removed)
    }

    async fn persist(&self) -> DbErrorResult<bool> {
        let mut conn = self.pool.acquire().await?;

        // TRUNCATE reports (0, 0) once the WAL is reset, so count with PASSIVE first
        let (_, copied) = wal_checkpoint(&mut conn, CHECKPOINT_PASSIVE).await?;
        wal_checkpoint(&mut conn, CHECKPOINT_TRUNCATE).await?;

        debug!("WAL checkpoint wrote {} frame(s)", copied);

        Ok(copied > 0)
    }
}

/// Run a checkpoint pragma, returning (log frames, checkpointed frames).
///
/// Non-WAL databases report -1 for both; those are clamped to 0.
async fn wal_checkpoint(
    conn: &mut SqliteConnection,
    pragma: &'static str,
) -> DbErrorResult<(i64, i64)> {
    let row = sqlx::query(pragma)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => Ok((
            row.try_get::<i64, _>(1)?.max(0),
            row.try_get::<i64, _>(2)?.max(0),
        )),
        None => Ok((0, 0)),
    }
}
