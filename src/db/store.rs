use crate::models;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write collided with the unique index on `product.name`.
    #[error("product name already exists")]
    DuplicateName,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a unique violation to [`StoreError::DuplicateName`], everything else stays a database error.
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateName;
            }
        }
        StoreError::Database(err)
    }
}

/// Persistence collaborator for products.
///
/// Implementations must reject a second product with the same name on
/// `insert` and `update` with [`StoreError::DuplicateName`], and `fetch_all`
/// must return records newest first.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StoreError>;

    async fn fetch_by_name(&self, name: &str) -> Result<Option<models::Product>, StoreError>;

    async fn fetch_all(&self) -> Result<Vec<models::Product>, StoreError>;

    async fn insert(&self, product: models::Product) -> Result<models::Product, StoreError>;

    async fn update(&self, product: models::Product) -> Result<models::Product, StoreError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
