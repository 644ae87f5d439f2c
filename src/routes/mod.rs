mod health_checks;
pub mod product;

pub use health_checks::*;
