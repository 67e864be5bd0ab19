//! Embedded PostgreSQL for integration tests.
//!
//! One cluster is shared per test binary; every test gets its own temporary
//! database with the crate's embedded migrations applied. When
//! `PG_RUNTIME_DIR` or `PG_DATA_DIR` is unset, both point at fresh
//! directories under the target dir for the duration of the bootstrap.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use cafe::outbound::persistence::run_pending_migrations_blocking;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn pg_embed_dir() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"))
        .join("pg-embed")
        .join(format!("cafe-{}-{}", std::process::id(), Uuid::new_v4()))
}

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_override {
        let base = pg_embed_dir();
        let runtime_dir = base.join("install");
        let data_dir = base.join("data");
        std::fs::create_dir_all(&runtime_dir).map_err(|err| err.to_string())?;
        std::fs::create_dir_all(&data_dir).map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    pg_embedded_setup_unpriv::test_support::shared_cluster_handle()
        .map_err(|err| format!("bootstrap embedded postgres: {err:?}"))
}

/// A fresh database with every embedded migration applied.
///
/// Returns the versions the migration run applied alongside the database.
pub fn migrated_database() -> Result<(TemporaryDatabase, Vec<String>), String> {
    let database = shared_cluster()?
        .temporary_database(format!("cafe_test_{}", Uuid::new_v4().simple()))
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    let url = database.url().to_string();
    let applied = run_pending_migrations_blocking(&url)
        .map_err(|err| format!("migrate temporary database: {err}"))?;
    Ok((database, applied))
}
