use std::sync::Arc;

use accountlist_core::db::{self, DbPool};
use tempfile::TempDir;

/// Creates a migrated scratch database in a temp directory.
///
/// The TempDir must stay alive for the duration of the test; the database
/// file is removed with it.
pub fn setup_test_db() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let app_data_dir = dir.path().to_string_lossy().to_string();

    let db_path = db::init(&app_data_dir).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (dir, pool)
}
