use thiserror::Error;

/// Upper bound on the number of characters in a comment body.
pub const MAX_COMMENT_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("comment must not be empty")]
    EmptyComment,
    #[error("comment is too long ({actual} characters, at most {max} allowed)")]
    CommentTooLong { max: usize, actual: usize },
}

/// Check a comment body before it is sent. The body itself is never altered.
pub fn validate_comment_body(body: &str) -> Result<(), ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError::EmptyComment);
    }

    let actual = body.chars().count();
    if actual > MAX_COMMENT_LENGTH {
        return Err(ValidationError::CommentTooLong {
            max: MAX_COMMENT_LENGTH,
            actual,
        });
    }

    Ok(())
}
