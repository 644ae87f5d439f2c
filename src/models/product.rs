use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE", type_name = "varchar")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    ForSale,
    SoldOut,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::ForSale => "FOR_SALE",
            ProductStatus::SoldOut => "SOLD_OUT",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus;

// Exact, case-sensitive match only.
impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOR_SALE" => Ok(ProductStatus::ForSale),
            "SOLD_OUT" => Ok(ProductStatus::SoldOut),
            _ => Err(UnknownStatus),
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub manager: String,
    pub password: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// A fresh record: new id, `FOR_SALE`, both timestamps taken from the same instant.
    pub fn new(name: String, description: String, manager: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            manager,
            password,
            status: ProductStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

// Keeps the password out of logs.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "product {} name: {} manager: {} status: {}",
            self.id, self.name, self.manager, self.status
        )
    }
}
