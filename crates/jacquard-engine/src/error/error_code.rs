//! Error codes for the expansion diagnostic system.
//!
//! Error codes are organized by pipeline phase:
//! - `E0xx` - Build errors (raw record to element)
//! - `E1xx` - Grammar errors (relationship descriptors)
//! - `E2xx` - Validation errors (cross-references)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Build Errors (E0xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// A record omits `label`, or supplies one that is empty after trimming.
    E001,

    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Malformed relationship descriptor.
    ///
    /// After token expansion the descriptor matches none of the accepted
    /// shapes `A -> B`, `A - B`, `A <- B`.
    E100,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Unknown alias reference.
    ///
    /// An element's expressions mention an alias no element in the model
    /// carries.
    E200,

    /// Invalid mode.
    ///
    /// The mode is not one of `match`, `merge`, or `create`
    /// (case-insensitive).
    E201,

    /// Duplicate alias.
    ///
    /// Two or more elements share an alias, so cross-references between
    /// elements would be ambiguous.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Build errors
            ErrorCode::E001 => "E001",
            // Grammar errors
            ErrorCode::E100 => "E100",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Build errors
            ErrorCode::E001 => "missing required field",
            // Grammar errors
            ErrorCode::E100 => "malformed relationship descriptor",
            // Validation errors
            ErrorCode::E200 => "unknown alias reference",
            ErrorCode::E201 => "invalid mode",
            ErrorCode::E202 => "duplicate alias",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "missing required field");
        assert_eq!(ErrorCode::E200.description(), "unknown alias reference");
        assert_eq!(ErrorCode::E202.description(), "duplicate alias");
    }
}
