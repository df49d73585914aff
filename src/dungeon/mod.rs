//! The dungeon ladder: floors, bosses and their shadow payloads.

pub mod bosses;
pub mod catalog;
pub mod types;

pub use catalog::{boss_profile, build_ladder, floor_definition, is_boss_floor};
pub use types::*;
