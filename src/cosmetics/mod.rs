//! Titles and avatar frames: non-equipment rewards with no stat effect.

pub mod collection;
pub mod generation;
pub mod types;

pub use collection::CosmeticCollection;
pub use generation::{generate_cosmetic, generate_frame, generate_title};
pub use types::*;
