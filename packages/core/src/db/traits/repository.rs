use crate::db::errors::repository_error::RepositoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Repository<T: Send + Sync + 'static, K: Send + Sync + 'static>: Send + Sync {
    /**
     * Store document under a freshly generated key, returning stored document
     */
    async fn create(&self, document: &T) -> Result<T, RepositoryError>;
    async fn read_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn read_by_key(&self, key: &K) -> Result<Option<T>, RepositoryError>;
    async fn update(&self, key: &K, document: &T) -> Result<(), RepositoryError>;
    async fn delete(&self, key: &K) -> Result<(), RepositoryError>;

    async fn exists_by_key(&self, key: &K) -> Result<bool, RepositoryError>;
}
