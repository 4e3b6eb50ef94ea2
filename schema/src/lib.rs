// Monster Battle Schema - Shared type definitions
// This crate contains the static catalogs and persisted record shapes that are
// shared between the main monster-battle crate and anything reading its saves.

// Re-export the main types
pub use encounter_types::*;
pub use monster_names::*;
pub use save_data::*;

pub mod encounter_types;
pub mod monster_names;
pub mod save_data;

// Catalog traits, so dependents can count and iterate catalogs without naming strum.
pub use strum::{EnumCount, IntoEnumIterator};
