pub mod cors;
pub mod validate;

pub use cors::cors_layer;
pub use validate::ValidatedJson;
