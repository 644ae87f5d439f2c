//! Product service - the five catalog operations.
//!
//! Each operation validates its input in a fixed order, consults the store
//! and returns either the affected record or a [`ProductError`] that knows
//! how to render itself as an HTTP response.

use crate::db::{ProductStore, StoreError};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{Product, ProductStatus};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Result type for product operations
pub type Result<T> = std::result::Result<T, ProductError>;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingField(Vec<&'static str>),
    #[error("Product is already registered.")]
    DuplicateName,
    #[error("Product does not exist.")]
    NotFound,
    #[error("status must be FOR_SALE or SOLD_OUT.")]
    InvalidStatus,
    #[error("Invalid product name: {0}")]
    InvalidField(String),
    #[error("Password does not match.")]
    PasswordMismatch,
    #[error("Internal server error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName => ProductError::DuplicateName,
            err => ProductError::Store(err),
        }
    }
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::DuplicateName
            | Self::InvalidStatus
            | Self::InvalidField(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PasswordMismatch => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Store(err) = self {
            tracing::error!("Product store failure: {:?}", err);
        }
        JsonResponse::<()>::build().to_response(self.status_code(), self.to_string())
    }
}

// Unparseable ids can never resolve to a record.
fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| ProductError::NotFound)
}

fn required(value: Option<String>) -> String {
    value.unwrap_or_default()
}

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    enforce_name_length: bool,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            enforce_name_length: false,
        }
    }

    /// Also run names through [`forms::NameSchema`] on create and update.
    pub fn with_name_length_check(mut self, enabled: bool) -> Self {
        self.enforce_name_length = enabled;
        self
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if self.enforce_name_length {
            forms::NameSchema::check(name).map_err(ProductError::InvalidField)?;
        }
        Ok(())
    }

    async fn ensure_name_free(&self, name: &str) -> Result<()> {
        match self.store.fetch_by_name(name).await? {
            Some(_) => Err(ProductError::DuplicateName),
            None => Ok(()),
        }
    }

    async fn fetch_existing(&self, id: &str) -> Result<Product> {
        let id = parse_id(id)?;
        self.store.fetch(id).await?.ok_or(ProductError::NotFound)
    }

    /// The name lookup runs before the presence check, so a taken name is
    /// reported even when other fields are missing.
    pub async fn create(&self, form: forms::CreateProduct) -> Result<Product> {
        self.ensure_name_free(form.name.as_deref().unwrap_or_default())
            .await?;

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ProductError::MissingField(missing));
        }
        let name = required(form.name);
        self.check_name(&name)?;

        let product = Product::new(
            name,
            required(form.description),
            required(form.manager),
            required(form.password),
        );
        let product = self.store.insert(product).await?;
        tracing::info!("Created {}", product);
        Ok(product)
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.store.fetch_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Product> {
        self.fetch_existing(id).await
    }

    /// Full replace of name, description, manager and status. The duplicate
    /// lookup does not exclude the record itself, so keeping the current name
    /// is reported as [`ProductError::DuplicateName`].
    pub async fn update(&self, id: &str, form: forms::UpdateProduct) -> Result<Product> {
        let mut product = self.fetch_existing(id).await?;

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ProductError::MissingField(missing));
        }
        let name = required(form.name);
        self.ensure_name_free(&name).await?;

        let status: ProductStatus = required(form.status)
            .parse()
            .map_err(|_| ProductError::InvalidStatus)?;
        self.check_name(&name)?;

        product.name = name;
        product.description = required(form.description);
        product.manager = required(form.manager);
        product.status = status;
        product.updated_at = Utc::now();

        let product = self.store.update(product).await?;
        tracing::info!("Updated {}", product);
        Ok(product)
    }

    pub async fn delete(&self, id: &str, form: forms::DeleteProduct) -> Result<Uuid> {
        let product = self.fetch_existing(id).await?;

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ProductError::MissingField(missing));
        }
        if required(form.password) != product.password {
            tracing::debug!("Password mismatch on delete of product {}", product.id);
            return Err(ProductError::PasswordMismatch);
        }

        if !self.store.delete(product.id).await? {
            return Err(ProductError::NotFound);
        }
        tracing::info!("Deleted product {}", product.id);
        Ok(product.id)
    }
}
