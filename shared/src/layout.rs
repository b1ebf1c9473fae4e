//! Structural validation of a warehouse layout
//!
//! [`validate_layout`] is the authoritative check run by the server before
//! anything is written. It is a pure function over the submitted zones so it
//! can be exercised without a network or a database. The form client runs a
//! weaker, advisory check of its own before submission.

use std::collections::HashSet;

use thiserror::Error;

use crate::error::{AppError, ErrorCode};
use crate::models::Zone;

/// Number of zones every warehouse has
pub const ZONE_COUNT: usize = 12;
/// Lowest valid zone label
pub const MIN_ZONE_LABEL: i32 = 1;
/// Highest valid zone label
pub const MAX_ZONE_LABEL: i32 = 12;
/// Maximum shelves in a single zone
pub const MAX_SHELVES_PER_ZONE: usize = 10;

/// Reason a submitted layout was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected {expected} distinct zone labels, got {found}")]
    ZoneCountMismatch { expected: usize, found: usize },

    #[error("zone label {label} is outside 1..=12")]
    ZoneLabelOutOfRange { label: i32 },

    #[error("zone label {label} appears more than once")]
    DuplicateZoneLabel { label: i32 },

    #[error("zone {label} has {count} shelves (max 10)")]
    TooManyShelves { label: i32, count: usize },

    #[error("shelf name {name:?} in zone {label} is already used")]
    DuplicateShelfName { label: i32, name: String },

    #[error("zone {label} has a blank shelf name")]
    BlankShelfName { label: i32 },
}

impl LayoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ZoneCountMismatch { .. } => ErrorCode::ZoneCountMismatch,
            Self::ZoneLabelOutOfRange { .. } => ErrorCode::ZoneLabelOutOfRange,
            Self::DuplicateZoneLabel { .. } => ErrorCode::DuplicateZoneLabel,
            Self::TooManyShelves { .. } => ErrorCode::TooManyShelves,
            Self::DuplicateShelfName { .. } => ErrorCode::DuplicateShelfName,
            Self::BlankShelfName { .. } => ErrorCode::BlankShelfName,
        }
    }
}

impl From<LayoutError> for AppError {
    fn from(err: LayoutError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            LayoutError::ZoneCountMismatch { expected, found } => app
                .with_detail("expected", expected)
                .with_detail("found", found),
            LayoutError::ZoneLabelOutOfRange { label }
            | LayoutError::DuplicateZoneLabel { label }
            | LayoutError::BlankShelfName { label } => app.with_detail("label", label),
            LayoutError::TooManyShelves { label, count } => app
                .with_detail("label", label)
                .with_detail("count", count),
            LayoutError::DuplicateShelfName { label, name } => app
                .with_detail("label", label)
                .with_detail("shelf", name),
        }
    }
}

/// Counts of a layout that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSummary {
    pub zone_count: usize,
    pub shelf_count: usize,
}

/// True when `label` is a valid zone label
pub fn is_valid_label(label: i32) -> bool {
    (MIN_ZONE_LABEL..=MAX_ZONE_LABEL).contains(&label)
}

/// True when a shelf name is empty or whitespace only
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Validate a submitted warehouse layout.
///
/// Zones may arrive in any order. Fails on the first violation found while
/// scanning zones in submission order; the zone-count check runs last.
pub fn validate_layout(zones: &[Zone]) -> Result<LayoutSummary, LayoutError> {
    let mut labels: HashSet<i32> = HashSet::with_capacity(ZONE_COUNT);
    let mut names: HashSet<&str> = HashSet::new();

    for zone in zones {
        if !is_valid_label(zone.label) {
            return Err(LayoutError::ZoneLabelOutOfRange { label: zone.label });
        }
        if !labels.insert(zone.label) {
            return Err(LayoutError::DuplicateZoneLabel { label: zone.label });
        }

        if zone.shelves.len() > MAX_SHELVES_PER_ZONE {
            return Err(LayoutError::TooManyShelves {
                label: zone.label,
                count: zone.shelves.len(),
            });
        }

        for shelf in &zone.shelves {
            if is_blank(&shelf.name) {
                return Err(LayoutError::BlankShelfName { label: zone.label });
            }
            if !names.insert(shelf.name.as_str()) {
                return Err(LayoutError::DuplicateShelfName {
                    label: zone.label,
                    name: shelf.name.clone(),
                });
            }
        }
    }

    if labels.len() != ZONE_COUNT {
        return Err(LayoutError::ZoneCountMismatch {
            expected: ZONE_COUNT,
            found: labels.len(),
        });
    }

    Ok(LayoutSummary {
        zone_count: labels.len(),
        shelf_count: names.len(),
    })
}
