use crate::db::{ProductStore, StoreError};
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StoreError> {
        tracing::info!("Fetch product {}", id);
        sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product WHERE id=$1 LIMIT 1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch product, error: {:?}", err);
                StoreError::Database(err)
            })
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<models::Product>, StoreError> {
        let query_span = tracing::info_span!("Check product existence by name.");
        sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product WHERE name=$1 LIMIT 1"#)
            .bind(name)
            .fetch_optional(&self.pool)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to execute fetch query: {:?}", err);
                StoreError::Database(err)
            })
    }

    async fn fetch_all(&self) -> Result<Vec<models::Product>, StoreError> {
        let query_span = tracing::info_span!("Fetch all products.");
        sqlx::query_as::<_, models::Product>(
            r#"
            SELECT
                *
            FROM product
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            StoreError::Database(err)
        })
    }

    async fn insert(&self, product: models::Product) -> Result<models::Product, StoreError> {
        let query_span = tracing::info_span!("Saving new product into the database");
        sqlx::query_as::<_, models::Product>(
            r#"
            INSERT INTO product (
            id,
            name,
            description,
            manager,
            password,
            status,
            created_at,
            updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *;
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.manager)
        .bind(&product.password)
        .bind(product.status)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map(|product| {
            tracing::info!("New product {} has been saved to database", product.id);
            product
        })
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            StoreError::from_write(err)
        })
    }

    async fn update(&self, product: models::Product) -> Result<models::Product, StoreError> {
        let query_span = tracing::info_span!("Updating product");
        sqlx::query_as::<_, models::Product>(
            r#"
            UPDATE product
            SET
                name=$2,
                description=$3,
                manager=$4,
                status=$5,
                updated_at=$6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.manager)
        .bind(product.status)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map(|product| {
            tracing::info!("Product {} has been updated", product.id);
            product
        })
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            StoreError::from_write(err)
        })
    }

    #[tracing::instrument(name = "Delete product.", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        tracing::info!("Delete product {}", id);
        sqlx::query::<sqlx::Postgres>("DELETE FROM product WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected() > 0)
            .map_err(|err| {
                tracing::error!("Failed to delete product: {:?}", err);
                StoreError::Database(err)
            })
    }
}
