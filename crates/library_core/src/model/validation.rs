//! Field rules shared by catalog entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for free-text fields such as titles and names.
pub const MAX_TEXT_CHARS: usize = 255;

/// Field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty or whitespace only.
    BlankField(&'static str),
    /// Text field exceeds [`MAX_TEXT_CHARS`].
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// Update request carries no identifier.
    MissingId(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::FieldTooLong { field, max, actual } => {
                write!(f, "{field} must be at most {max} characters, got {actual}")
            }
            Self::MissingId(entity) => write!(f, "{entity} id is required for update"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    let actual = value.chars().count();
    if actual > MAX_TEXT_CHARS {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_TEXT_CHARS,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_text, ValidationError, MAX_TEXT_CHARS};

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            require_text("title", " \t"),
            Err(ValidationError::BlankField("title"))
        );
    }

    #[test]
    fn length_is_counted_in_chars() {
        let at_limit = "é".repeat(MAX_TEXT_CHARS);
        assert!(require_text("name", &at_limit).is_ok());

        let over = "é".repeat(MAX_TEXT_CHARS + 1);
        assert!(matches!(
            require_text("name", &over),
            Err(ValidationError::FieldTooLong { actual, .. }) if actual == MAX_TEXT_CHARS + 1
        ));
    }
}
