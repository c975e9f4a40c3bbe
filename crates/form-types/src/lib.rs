pub mod types;

pub use types::{FieldName, FormData, ValidationErrors};
