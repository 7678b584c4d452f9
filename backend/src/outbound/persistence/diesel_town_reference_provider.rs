//! PostgreSQL-backed town reference adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use fake_person::Town;

use crate::domain::ports::{TownReferenceError, TownReferenceProvider};

use super::diesel_helpers::{map_diesel_error_message, map_pool_error_message};
use super::models::TownRow;
use super::pool::{DbPool, PoolError};
use super::schema::postal_code;

/// Reads the `postal_code` table through a Diesel pool.
#[derive(Clone)]
pub struct DieselTownReferenceProvider {
    pool: DbPool,
}

impl DieselTownReferenceProvider {
    /// Create a provider over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TownReferenceError {
    TownReferenceError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> TownReferenceError {
    TownReferenceError::query(map_diesel_error_message(error, "load towns"))
}

fn row_to_town(row: TownRow) -> Result<Town, TownReferenceError> {
    let weight = u64::try_from(row.weight).map_err(|_| {
        TownReferenceError::query(format!(
            "town '{}' has negative weight {}",
            row.code, row.weight
        ))
    })?;
    Town::new(row.code, row.town_name, weight)
        .map_err(|err| TownReferenceError::query(err.to_string()))
}

#[async_trait]
impl TownReferenceProvider for DieselTownReferenceProvider {
    async fn load_towns(&self) -> Result<Vec<Town>, TownReferenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TownRow> = postal_code::table
            .select(TownRow::as_select())
            .order(postal_code::code.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_town).collect()
    }

    fn source(&self) -> &'static str {
        "postgres"
    }
}
