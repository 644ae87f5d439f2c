pub(crate) mod json;
pub(crate) mod payload;

pub use json::*;
pub use payload::Payload;
