//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::DatabaseError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (unparsable body and layout errors)
            Self::InvalidFormat
            | Self::ZoneCountMismatch
            | Self::ZoneLabelOutOfRange
            | Self::DuplicateZoneLabel
            | Self::TooManyShelves
            | Self::DuplicateShelfName
            | Self::BlankShelfName => StatusCode::BAD_REQUEST,
        }
    }
}
