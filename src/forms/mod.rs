pub mod product;

pub use product::{CreateProduct, DeleteProduct, NameSchema, UpdateProduct};
