use crate::db::{ProductStore, StoreError};
use crate::models;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store with the same uniqueness and ordering rules as the `product` table.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<models::Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<models::Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.name == name).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<models::Product>, StoreError> {
        let products = self.products.read().await;
        // newest insert first when timestamps tie
        let mut list: Vec<models::Product> = products.iter().rev().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn insert(&self, product: models::Product) -> Result<models::Product, StoreError> {
        let mut products = self.products.write().await;
        if products.iter().any(|item| item.name == product.name) {
            return Err(StoreError::DuplicateName);
        }
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: models::Product) -> Result<models::Product, StoreError> {
        let mut products = self.products.write().await;
        if products
            .iter()
            .any(|item| item.name == product.name && item.id != product.id)
        {
            return Err(StoreError::DuplicateName);
        }

        match products.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.name = product.name;
                item.description = product.description;
                item.manager = product.manager;
                item.status = product.status;
                item.updated_at = product.updated_at;
                Ok(item.clone())
            }
            None => Err(StoreError::Database(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|product| product.id != id);
        Ok(products.len() < before)
    }
}
