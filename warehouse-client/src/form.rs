//! Layout form state
//!
//! The form edits one zone at a time: the user picks a zone, sets how many
//! shelf inputs it has, types names and commits. Every operation takes `&self`
//! and returns a new [`FormState`], so a failed operation leaves the caller's
//! state untouched.

use std::collections::HashSet;
use std::fmt;

use shared::layout::{
    MAX_SHELVES_PER_ZONE, MAX_ZONE_LABEL, MIN_ZONE_LABEL, ZONE_COUNT, is_blank, is_valid_label,
};
use shared::models::{Shelf, WarehouseCreated, Zone};
use thiserror::Error;

use crate::{ClientError, WarehouseApi};

/// Number of shelf name inputs on the form
pub const SLOT_COUNT: usize = MAX_SHELVES_PER_ZONE;

/// Message shown once the whole layout has been accepted
pub const SUBMITTED_MESSAGE: &str = "Warehouse data successfully submitted.";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Zone {label} is outside 1..=12")]
    ZoneOutOfRange { label: i32 },

    #[error("Shelf slot {index} does not exist")]
    SlotOutOfRange { index: usize },

    #[error("Duplicate shelf names are not allowed!")]
    DuplicateShelfName { name: String },

    #[error("Shelf {slot} needs a name")]
    BlankShelfName { slot: usize },

    #[error("{count} shelves given, a zone holds at most 10")]
    TooManyShelves { count: usize },

    #[error("Submission failed: {0}")]
    Submit(#[from] ClientError),
}

pub type FormResult<T> = Result<T, FormError>;

/// Step for the shelf count buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfDelta {
    Increase,
    Decrease,
}

/// Outcome of a successful zone commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Committed {
    pub label: i32,
}

impl fmt::Display for Committed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {} successfully saved.", self.label)
    }
}

/// Client-side layout being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    zones: Vec<Zone>,
    active_zone: i32,
    shelf_count: usize,
    slots: [String; SLOT_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Blank layout: twelve empty zones, zone 1 active, no shelves
    pub fn new() -> Self {
        Self {
            zones: (MIN_ZONE_LABEL..=MAX_ZONE_LABEL).map(Zone::empty).collect(),
            active_zone: MIN_ZONE_LABEL,
            shelf_count: 0,
            slots: Default::default(),
        }
    }

    pub fn reset_all(&self) -> Self {
        Self::new()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn active_zone(&self) -> i32 {
        self.active_zone
    }

    pub fn shelf_count(&self) -> usize {
        self.shelf_count
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Stored entry for `label`
    pub fn zone(&self, label: i32) -> Option<&Zone> {
        self.zones.iter().find(|z| z.label == label)
    }

    fn active_index(&self) -> usize {
        (self.active_zone - MIN_ZONE_LABEL) as usize
    }

    /// Make `label` the active zone and load its saved shelves into the inputs
    pub fn select_zone(&self, label: i32) -> FormResult<Self> {
        if !is_valid_label(label) {
            return Err(FormError::ZoneOutOfRange { label });
        }

        let mut next = self.clone();
        next.active_zone = label;
        next.slots = Default::default();

        let names: Vec<&str> = self
            .zone(label)
            .map(|z| z.shelf_names().collect())
            .unwrap_or_default();
        next.shelf_count = names.len().min(SLOT_COUNT);
        for (slot, name) in next.slots.iter_mut().zip(names) {
            *slot = name.to_string();
        }

        Ok(next)
    }

    /// Grow or shrink the number of shelf inputs, clamped to `0..=10`.
    /// Slot text is kept when shrinking.
    pub fn adjust_shelf_count(&self, delta: ShelfDelta) -> Self {
        let mut next = self.clone();
        next.shelf_count = match delta {
            ShelfDelta::Increase => (self.shelf_count + 1).min(SLOT_COUNT),
            ShelfDelta::Decrease => self.shelf_count.saturating_sub(1),
        };
        next
    }

    pub fn set_slot(&self, index: usize, value: impl Into<String>) -> FormResult<Self> {
        if index >= SLOT_COUNT {
            return Err(FormError::SlotOutOfRange { index });
        }
        let mut next = self.clone();
        next.slots[index] = value.into();
        Ok(next)
    }

    /// Replace the active zone's shelves with `names`.
    ///
    /// Rejects blank names, more than ten names, and any name already used by
    /// another zone or repeated in `names`. The server validates again on
    /// submit.
    pub fn commit_zone<I, S>(&self, names: I) -> FormResult<(Self, Committed)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() > MAX_SHELVES_PER_ZONE {
            return Err(FormError::TooManyShelves { count: names.len() });
        }
        if let Some(slot) = names.iter().position(|n| is_blank(n)) {
            return Err(FormError::BlankShelfName { slot: slot + 1 });
        }

        let mut taken: HashSet<&str> = self
            .zones
            .iter()
            .filter(|z| z.label != self.active_zone)
            .flat_map(|z| z.shelf_names())
            .collect();
        for name in &names {
            if !taken.insert(name.as_str()) {
                return Err(FormError::DuplicateShelfName { name: name.clone() });
            }
        }

        // Zones hold labels 1..=12 in order and `active_zone` is range-checked.
        let mut next = self.clone();
        if let Some(zone) = next.zones.get_mut(self.active_index()) {
            zone.shelves = names.iter().map(Shelf::new).collect();
        }

        next.shelf_count = names.len();
        next.slots = Default::default();
        for (slot, name) in next.slots.iter_mut().zip(names) {
            *slot = name;
        }

        tracing::debug!(zone = self.active_zone, shelves = next.shelf_count, "Zone committed");
        Ok((
            next,
            Committed {
                label: self.active_zone,
            },
        ))
    }

    /// Commit the first `shelf_count` input slots to the active zone
    pub fn commit_active_zone(&self) -> FormResult<(Self, Committed)> {
        self.commit_zone(self.slots.iter().take(self.shelf_count).cloned())
    }

    /// Send the whole layout in one request.
    ///
    /// On success returns a blank form and the server's receipt. On failure
    /// the caller keeps its current state.
    pub async fn submit_all(&self, api: &dyn WarehouseApi) -> FormResult<(Self, WarehouseCreated)> {
        debug_assert_eq!(self.zones.len(), ZONE_COUNT);
        match api.add_warehouse(&self.zones).await {
            Ok(created) => {
                tracing::info!(warehouse_id = created.warehouse_id, "{}", SUBMITTED_MESSAGE);
                Ok((self.reset_all(), created))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Warehouse submission failed");
                Err(e.into())
            }
        }
    }
}
