use league_stats::database::{JsonFileStore, StoreConfig};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

/// A file-backed store in a fresh temporary directory. Keep the `TempDir`
/// alive for as long as the store is used.
pub fn temp_store() -> (TempDir, JsonFileStore) {
    init_test_env();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonFileStore::new(StoreConfig::with_data_dir(dir.path()));

    (dir, store)
}
