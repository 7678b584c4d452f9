//! Integration tests for `DieselTownReferenceProvider` against embedded
//! PostgreSQL.
//!
//! Each test provisions a temporary database, applies the backend's Diesel
//! migrations and loads the seeded `postal_code` table through the port.
//! Set `SKIP_TEST_CLUSTER=1` to skip when the cluster cannot start.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use fake_person::{ReferenceDataError, TownTable};
use fake_person_api::domain::ports::TownReferenceProvider;
use fake_person_api::outbound::persistence::{DbPool, DieselTownReferenceProvider, PoolConfig};
use fake_person_api::startup::{StartupError, load_generator};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

struct TestContext {
    runtime: Runtime,
    provider: DieselTownReferenceProvider,
    database_url: String,
    _database: TemporaryDatabase,
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("{err:?}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}

fn setup_test_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster_handle().map_err(|err| format!("{err:?}"))?;
    let database = cluster
        .temporary_database(format!("test_{}", uuid::Uuid::new_v4().simple()))
        .map_err(|err| format!("{err:?}"))?;
    let database_url = database.url().to_owned();
    migrate_schema(&database_url)?;

    let pool = runtime
        .block_on(DbPool::new(
            PoolConfig::new(&database_url)
                .with_max_size(2)
                .with_min_idle(Some(1)),
        ))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        provider: DieselTownReferenceProvider::new(pool),
        database_url,
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_test_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) if should_skip_test_cluster() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}

#[rstest]
fn seeded_rows_match_the_bundled_town_table(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let towns = ctx
        .runtime
        .block_on(ctx.provider.load_towns())
        .expect("seeded towns load");

    let mut bundled = TownTable::bundled()
        .expect("bundled towns parse")
        .towns()
        .to_vec();
    bundled.sort_by(|a, b| a.postal_code().cmp(b.postal_code()));
    assert_eq!(towns, bundled);

    let table = TownTable::new(towns).expect("seeded towns form a valid table");
    assert!(table.towns().iter().any(|t| t.town_name() == "Aarhus C"));
    assert_eq!(ctx.provider.source(), "postgres");
}

#[rstest]
fn seeded_rows_are_ordered_by_postal_code(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let towns = ctx
        .runtime
        .block_on(ctx.provider.load_towns())
        .expect("seeded towns load");

    assert!(
        towns
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.postal_code() < b.postal_code()))
    );
}

#[rstest]
fn empty_table_aborts_generator_startup(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let mut conn = PgConnection::establish(&ctx.database_url).expect("connect");
    diesel::sql_query("DELETE FROM postal_code")
        .execute(&mut conn)
        .expect("clear towns");

    let err = ctx
        .runtime
        .block_on(load_generator(None, &ctx.provider))
        .expect_err("empty table");
    assert!(
        matches!(err, StartupError::TownTable(ReferenceDataError::EmptyTownTable)),
        "{err}"
    );
}
