//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; adapters convert them into
//! engine types before returning.

use diesel::prelude::*;

use super::schema::postal_code;

/// Row read from the `postal_code` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = postal_code)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TownRow {
    pub code: String,
    pub town_name: String,
    pub weight: i64,
}
