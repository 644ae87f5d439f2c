pub mod memory;
pub mod product;
mod store;

pub use memory::MemoryProductStore;
pub use product::PgProductStore;
pub use store::{ProductStore, StoreError};
