//! Custom extractors.

mod params;
mod validated_json;

pub use params::{MultiQuery, Path, Query};
pub use validated_json::{flatten_validation_errors, ValidatedJson, ValidatedJsonList};
