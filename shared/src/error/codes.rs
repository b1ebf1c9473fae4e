//! Unified error codes for the warehouse service
//!
//! Error codes are shared by the server and the client. They are organized
//! by category:
//! - 0xxx: General errors
//! - 1xxx: Layout errors (structural validation of a warehouse submission)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format (body could not be parsed)
    InvalidFormat = 6,

    // ==================== 1xxx: Layout ====================
    /// Submission does not contain exactly 12 distinct zone labels
    ZoneCountMismatch = 1001,
    /// Zone label outside 1..=12
    ZoneLabelOutOfRange = 1002,
    /// Same zone label submitted twice
    DuplicateZoneLabel = 1003,
    /// Zone holds more than 10 shelves
    TooManyShelves = 1004,
    /// Shelf name used more than once in the warehouse
    DuplicateShelfName = 1005,
    /// Shelf name empty or whitespace only
    BlankShelfName = 1006,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Configuration error (startup)
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",

            // Layout
            ErrorCode::ZoneCountMismatch => "Warehouse must have exactly 12 zones labeled 1-12",
            ErrorCode::ZoneLabelOutOfRange => "Zone label must be between 1 and 12",
            ErrorCode::DuplicateZoneLabel => "Zone label is used more than once",
            ErrorCode::TooManyShelves => "A zone may hold at most 10 shelves",
            ErrorCode::DuplicateShelfName => "Duplicate shelf names are not allowed",
            ErrorCode::BlankShelfName => "Shelf name must not be blank",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),

            // Layout
            1001 => Ok(ErrorCode::ZoneCountMismatch),
            1002 => Ok(ErrorCode::ZoneLabelOutOfRange),
            1003 => Ok(ErrorCode::DuplicateZoneLabel),
            1004 => Ok(ErrorCode::TooManyShelves),
            1005 => Ok(ErrorCode::DuplicateShelfName),
            1006 => Ok(ErrorCode::BlankShelfName),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);

        assert_eq!(ErrorCode::ZoneCountMismatch.code(), 1001);
        assert_eq!(ErrorCode::ZoneLabelOutOfRange.code(), 1002);
        assert_eq!(ErrorCode::DuplicateZoneLabel.code(), 1003);
        assert_eq!(ErrorCode::TooManyShelves.code(), 1004);
        assert_eq!(ErrorCode::DuplicateShelfName.code(), 1005);
        assert_eq!(ErrorCode::BlankShelfName.code(), 1006);

        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::DuplicateShelfName.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1005), Ok(ErrorCode::DuplicateShelfName));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
        assert_eq!(ErrorCode::try_from(1999), Err(InvalidErrorCode(1999)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::TooManyShelves).unwrap();
        assert_eq!(json, "1004");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("1003").unwrap();
        assert_eq!(code, ErrorCode::DuplicateZoneLabel);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("4242");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::ZoneLabelOutOfRange), "1002");
    }

    #[test]
    fn test_invalid_error_code_display() {
        assert_eq!(InvalidErrorCode(77).to_string(), "invalid error code: 77");
    }
}
