use std::{path::PathBuf, sync::Arc};

use log::debug;
use polodb_core::{Collection, Database};
use tokio::sync::Mutex;

use super::{errors::repository_error::RepositoryError, traits::document::Document};

pub struct DbClient {
    instance: Arc<Mutex<Database>>,
}

impl DbClient {
    /**
     * Open DB at given path, creating it if needed
     */
    pub fn open(db_path: &PathBuf) -> Result<Self, RepositoryError> {
        debug!("Opening database at {}...", db_path.display());

        let db = Database::open_path(db_path)?;

        let instance = Self {
            instance: Arc::new(Mutex::new(db)),
        };

        debug!("Done opening database at {} !", db_path.display());

        Ok(instance)
    }

    /**
     * Run operation against collection of given document type
     *
     * Operation runs on blocking pool while holding DB lock
     */
    pub async fn run<D, R, F>(&self, operation: F) -> Result<R, RepositoryError>
    where
        D: Document,
        R: Send + 'static,
        F: FnOnce(Collection<D>) -> Result<R, RepositoryError> + Send + 'static,
    {
        let instance = Arc::clone(&self.instance);

        tokio::task::spawn_blocking(move || {
            let db = instance.blocking_lock();

            let collection = db.collection::<D>(D::collection_name());

            operation(collection)
        })
        .await?
    }
}

impl TryFrom<&PathBuf> for DbClient {
    type Error = RepositoryError;

    /**
     * New instance from DB path
     */
    fn try_from(db_path: &PathBuf) -> Result<Self, Self::Error> {
        Self::open(db_path)
    }
}
