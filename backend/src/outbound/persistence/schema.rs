//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! when the migrations change.

diesel::table! {
    /// Danish postal towns with a population-proxy weight.
    ///
    /// Read once at startup to build the weighted town table.
    postal_code (code) {
        /// Four-digit postal code. Renamed because a column may not share
        /// its table's name.
        #[sql_name = "postal_code"]
        code -> Varchar,
        /// Town name as written in postal addresses.
        town_name -> Varchar,
        /// Relative selection weight; must be positive.
        weight -> Int8,
    }
}
