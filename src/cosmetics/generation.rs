//! Procedural titles and avatar frames.
//!
//! Names are a random prefix plus a random suffix. Collisions between drops
//! are expected; drops are keyed by id, not by name.

use super::types::{CosmeticDrop, CosmeticGrade, CosmeticKind, FrameRank};
use crate::core::constants::{COSMETIC_TOP_BUCKET_FLOOR, COSMETIC_UPPER_BUCKET_FLOOR};
use crate::core::rng::{uuid_from_source, RandomSource};
use crate::rarity::RarityTier;

pub const TITLE_PREFIXES: [&str; 20] = [
    "Shadow", "Iron", "Crimson", "Silent", "Eternal", "Frost", "Storm", "Blood", "Ashen",
    "Gilded", "Hollow", "Radiant", "Savage", "Phantom", "Abyssal", "Wandering", "Fallen",
    "Burning", "Obsidian", "Sovereign",
];

pub const TITLE_SUFFIXES: [&str; 20] = [
    "Slayer", "Monarch", "Hunter", "Reaper", "Warden", "Conqueror", "Vanguard", "Sentinel",
    "Executioner", "Seeker", "Breaker", "Champion", "Survivor", "Tyrant", "Stalker", "Knight",
    "Herald", "Sage", "Wolf", "King",
];

pub const FRAME_SUFFIXES: [&str; 20] = [
    "Halo", "Crest", "Aegis", "Sigil", "Crown", "Wreath", "Ring", "Mantle", "Seal", "Veil",
    "Bastion", "Lattice", "Gate", "Eclipse", "Corona", "Throne", "Thorns", "Chains", "Wings",
    "Spiral",
];

pub const FRAME_MATERIALS: [&str; 8] = [
    "Obsidian", "Gilded", "Silver", "Runed", "Bone", "Crystal", "Ember", "Void-glass",
];

/// Title rarity bucket by floor depth. Even the lowest bucket sits above
/// the common range.
pub fn title_rarity_for_floor(floor: u32) -> RarityTier {
    if floor > COSMETIC_TOP_BUCKET_FLOOR {
        RarityTier::Mythic
    } else if floor > COSMETIC_UPPER_BUCKET_FLOOR {
        RarityTier::Legendary
    } else {
        RarityTier::Epic
    }
}

pub fn frame_rank_for_floor(floor: u32) -> FrameRank {
    if floor > COSMETIC_UPPER_BUCKET_FLOOR {
        FrameRank::SS
    } else {
        FrameRank::S
    }
}

/// Effect name plus the tier colour, e.g. `"golden aura #ff8000"`.
fn title_style(rarity: RarityTier) -> String {
    let effect = match rarity {
        RarityTier::Mythic => "crimson flare",
        RarityTier::Legendary => "golden aura",
        _ => "violet shimmer",
    };
    let (r, g, b) = rarity.color_rgb();
    format!("{effect} #{r:02x}{g:02x}{b:02x}")
}

fn frame_effect(rank: FrameRank) -> &'static str {
    match rank {
        FrameRank::S => "filigree",
        FrameRank::SS => "animated starfire",
    }
}

/// Draw order: prefix, suffix, id.
pub fn generate_title(floor: u32, rng: &mut impl RandomSource) -> CosmeticDrop {
    let prefix = rng.pick(&TITLE_PREFIXES);
    let suffix = rng.pick(&TITLE_SUFFIXES);
    let rarity = title_rarity_for_floor(floor);

    CosmeticDrop {
        id: uuid_from_source(rng),
        kind: CosmeticKind::Title,
        name: format!("{} {}", prefix, suffix),
        grade: CosmeticGrade::Rarity(rarity),
        style: title_style(rarity),
        floor,
    }
}

/// Draw order: prefix, suffix, material, id.
pub fn generate_frame(floor: u32, rng: &mut impl RandomSource) -> CosmeticDrop {
    let prefix = rng.pick(&TITLE_PREFIXES);
    let suffix = rng.pick(&FRAME_SUFFIXES);
    let material = rng.pick(&FRAME_MATERIALS);
    let rank = frame_rank_for_floor(floor);

    CosmeticDrop {
        id: uuid_from_source(rng),
        kind: CosmeticKind::Frame,
        name: format!("{} {}", prefix, suffix),
        grade: CosmeticGrade::Rank(rank),
        style: format!("{} {}", material, frame_effect(rank)),
        floor,
    }
}

pub fn generate_cosmetic(
    kind: CosmeticKind,
    floor: u32,
    rng: &mut impl RandomSource,
) -> CosmeticDrop {
    match kind {
        CosmeticKind::Title => generate_title(floor, rng),
        CosmeticKind::Frame => generate_frame(floor, rng),
    }
}
