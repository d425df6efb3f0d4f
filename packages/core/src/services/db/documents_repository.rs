use log::debug;
use polodb_core::{
    bson::{doc, to_document, Document as BsonDocument},
    CollectionT,
};
use std::{marker::PhantomData, sync::Arc};
use uuid::Uuid;

use crate::db::{
    client::DbClient,
    errors::repository_error::RepositoryError,
    traits::{document::Document, repository::Repository},
};

/**
 * Repository storing one document type in its own collection
 */
pub struct DocumentsRepository<D> {
    db_client: Arc<DbClient>,
    document: PhantomData<fn() -> D>,
}

impl<D: Document> DocumentsRepository<D> {
    /**
     * Filter matching document by key
     */
    fn key_filter(key: &String) -> BsonDocument {
        let mut filter = BsonDocument::new();

        filter.insert(D::KEY_FIELD, key.clone());

        filter
    }
}

#[async_trait::async_trait]
impl<D: Document> Repository<D, String> for DocumentsRepository<D> {
    /**
     * Create document under a new key
     */
    async fn create(&self, document: &D) -> Result<D, RepositoryError> {
        debug!("Adding new document to {}...", D::collection_name());

        let mut created = document.clone();
        created.set_key(&Uuid::new_v4().to_string());

        let created = self
            .db_client
            .run::<D, _, _>(move |collection| {
                collection.insert_one(&created)?;

                Ok(created)
            })
            .await?;

        debug!(
            "Done adding document {} to {} !",
            created.get_key(),
            D::collection_name()
        );

        Ok(created)
    }

    async fn read_all(&self) -> Result<Vec<D>, RepositoryError> {
        debug!("Reading all documents from {}...", D::collection_name());

        let docs = self
            .db_client
            .run::<D, _, _>(|collection| {
                let cursor = collection.find(doc! {}).run()?;

                let docs = cursor.collect::<Result<Vec<D>, _>>()?;

                Ok(docs)
            })
            .await?;

        debug!(
            "Done reading {} documents from {} !",
            docs.len(),
            D::collection_name()
        );

        Ok(docs)
    }

    /**
     * Read document by key
     */
    async fn read_by_key(&self, key: &String) -> Result<Option<D>, RepositoryError> {
        debug!("Searching document {} in {}...", key, D::collection_name());

        let filter = Self::key_filter(key);

        let db_response = self
            .db_client
            .run::<D, _, _>(move |collection| Ok(collection.find_one(filter)?))
            .await?;

        debug!("Done searching document {} !", key);

        Ok(db_response)
    }

    /**
     * Update document, stored key is kept whatever the given document holds
     */
    async fn update(&self, key: &String, document: &D) -> Result<(), RepositoryError> {
        debug!("Updating document {} in {}...", key, D::collection_name());

        let mut updated = document.clone();
        updated.set_key(key);

        let fields = to_document(&updated)?;
        let filter = Self::key_filter(key);
        let missing_key = key.clone();

        self.db_client
            .run::<D, _, _>(move |collection| {
                if collection.find_one(filter.clone())?.is_none() {
                    return Err(RepositoryError::NotFound(missing_key));
                }

                collection.update_one(
                    filter,
                    doc! {
                        "$set": fields
                    },
                )?;

                Ok(())
            })
            .await?;

        debug!("Done updating document {} !", key);

        Ok(())
    }

    /**
     * Delete document, missing documents are reported as not found
     */
    async fn delete(&self, key: &String) -> Result<(), RepositoryError> {
        debug!("Deleting document {} from {}...", key, D::collection_name());

        let filter = Self::key_filter(key);
        let missing_key = key.clone();

        self.db_client
            .run::<D, _, _>(move |collection| {
                let result = collection.delete_one(filter)?;

                if result.deleted_count == 0 {
                    return Err(RepositoryError::NotFound(missing_key));
                }

                Ok(())
            })
            .await?;

        debug!("Done deleting document {} !", key);

        Ok(())
    }

    /**
     * Check if exists by key
     */
    async fn exists_by_key(&self, key: &String) -> Result<bool, RepositoryError> {
        debug!("Checking if document {} exists...", key);

        let exists = self.read_by_key(key).await?.is_some();

        debug!("Done checking if document {} exists ! ({})", key, exists);

        Ok(exists)
    }
}

impl<D> From<&Arc<DbClient>> for DocumentsRepository<D> {
    fn from(value: &Arc<DbClient>) -> Self {
        Self {
            db_client: Arc::clone(value),
            document: PhantomData,
        }
    }
}
