#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::db::client::DbClient;

    /**
     * Open DB in a fresh temporary directory, directory lives as long as returned handle
     */
    pub fn create_test_db() -> (TempDir, Arc<DbClient>) {
        let db_dir = "db";

        let test_dir = TempDir::new().unwrap();

        let test_dir_path = test_dir.path().join(db_dir);

        let db_client = Arc::new(DbClient::open(&test_dir_path).unwrap());

        (test_dir, db_client)
    }
}
