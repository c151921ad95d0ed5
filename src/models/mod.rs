pub mod status_check;

pub use status_check::{StatusCheck, StatusCheckCreate};

use std::collections::HashMap;

/// Semantic checks applied after a request model has deserialized.
pub trait Validate {
    /// Field name -> problem, for every field that fails
    fn validate(&self) -> Result<(), HashMap<String, String>>;
}
