pub mod error;
pub mod types;

pub use error::{validate_comment_body, ValidationError, MAX_COMMENT_LENGTH};
pub use types::*;
