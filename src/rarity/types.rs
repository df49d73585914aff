use serde::{Deserialize, Serialize};

/// Item quality, ordered from most common to most exclusive.
///
/// The first eight tiers are "standard" and carry base roll weights.
/// The rest are zone-exclusive: weight 0 in the base table, reachable only
/// once a floor has unlocked them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Ancient = 6,
    Divine = 7,
    // Zone-exclusive
    Celestial = 8,
    Primordial = 9,
    Eternal = 10,
    Abyssal = 11,
    Astral = 12,
    Infernal = 13,
    Seraphic = 14,
    Runic = 15,
    Nether = 16,
    Empyrean = 17,
    Cosmic = 18,
    Void = 19,
    Chaos = 20,
    Ethereal = 21,
    Sovereign = 22,
    Transcendent = 23,
    Apocryphal = 24,
    Paradox = 25,
    Singularity = 26,
    Infinity = 27,
    Genesis = 28,
    Omega = 29,
}

impl RarityTier {
    pub const COUNT: usize = 30;
    pub const STANDARD_COUNT: usize = 8;

    pub const ALL: [RarityTier; Self::COUNT] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Legendary,
        RarityTier::Mythic,
        RarityTier::Ancient,
        RarityTier::Divine,
        RarityTier::Celestial,
        RarityTier::Primordial,
        RarityTier::Eternal,
        RarityTier::Abyssal,
        RarityTier::Astral,
        RarityTier::Infernal,
        RarityTier::Seraphic,
        RarityTier::Runic,
        RarityTier::Nether,
        RarityTier::Empyrean,
        RarityTier::Cosmic,
        RarityTier::Void,
        RarityTier::Chaos,
        RarityTier::Ethereal,
        RarityTier::Sovereign,
        RarityTier::Transcendent,
        RarityTier::Apocryphal,
        RarityTier::Paradox,
        RarityTier::Singularity,
        RarityTier::Infinity,
        RarityTier::Genesis,
        RarityTier::Omega,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_zone_exclusive(self) -> bool {
        self.index() >= Self::STANDARD_COUNT
    }

    /// Returns the display name for this rarity tier.
    pub fn name(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
            RarityTier::Mythic => "Mythic",
            RarityTier::Ancient => "Ancient",
            RarityTier::Divine => "Divine",
            RarityTier::Celestial => "Celestial",
            RarityTier::Primordial => "Primordial",
            RarityTier::Eternal => "Eternal",
            RarityTier::Abyssal => "Abyssal",
            RarityTier::Astral => "Astral",
            RarityTier::Infernal => "Infernal",
            RarityTier::Seraphic => "Seraphic",
            RarityTier::Runic => "Runic",
            RarityTier::Nether => "Nether",
            RarityTier::Empyrean => "Empyrean",
            RarityTier::Cosmic => "Cosmic",
            RarityTier::Void => "Void",
            RarityTier::Chaos => "Chaos",
            RarityTier::Ethereal => "Ethereal",
            RarityTier::Sovereign => "Sovereign",
            RarityTier::Transcendent => "Transcendent",
            RarityTier::Apocryphal => "Apocryphal",
            RarityTier::Paradox => "Paradox",
            RarityTier::Singularity => "Singularity",
            RarityTier::Infinity => "Infinity",
            RarityTier::Genesis => "Genesis",
            RarityTier::Omega => "Omega",
        }
    }

    /// Number of stat rolls an item of this tier carries (1-5).
    pub fn stat_count(self) -> usize {
        match self {
            RarityTier::Common => 1,
            RarityTier::Uncommon | RarityTier::Rare => 2,
            RarityTier::Epic => 3,
            RarityTier::Legendary | RarityTier::Mythic => 4,
            _ => 5,
        }
    }

    /// Inclusive range for each stat roll. Kept within 1..=5 at every tier.
    pub fn stat_range(self) -> (u32, u32) {
        match self {
            RarityTier::Common => (1, 1),
            RarityTier::Uncommon => (1, 2),
            RarityTier::Rare => (1, 3),
            RarityTier::Epic => (2, 3),
            RarityTier::Legendary => (2, 4),
            RarityTier::Mythic => (3, 4),
            RarityTier::Ancient => (3, 5),
            RarityTier::Divine => (4, 5),
            _ => (4, 5),
        }
    }

    /// Enhancement level cap.
    pub fn max_level(self) -> u32 {
        match self {
            RarityTier::Common | RarityTier::Uncommon => 10,
            RarityTier::Rare | RarityTier::Epic => 15,
            RarityTier::Legendary | RarityTier::Mythic => 20,
            RarityTier::Ancient | RarityTier::Divine => 25,
            _ => 30,
        }
    }

    /// Adjectives used to name items of this tier.
    pub fn adjectives(self) -> &'static [&'static str] {
        match self {
            RarityTier::Common => &["Worn", "Plain", "Rusty", "Simple"],
            RarityTier::Uncommon => &["Sturdy", "Polished", "Reliable", "Fine"],
            RarityTier::Rare => &["Gleaming", "Tempered", "Keen", "Runed"],
            RarityTier::Epic => &["Radiant", "Vicious", "Storm-forged", "Exalted"],
            RarityTier::Legendary => &["Heroic", "Fabled", "Kingslayer's", "Dragonbone"],
            RarityTier::Mythic => &["Mythbound", "Starlit", "Worldsplitter's"],
            RarityTier::Ancient => &["Ancient", "Forgotten", "Titan's"],
            RarityTier::Divine => &["Divine", "Hallowed", "Godforged"],
            RarityTier::Celestial => &["Celestial", "Heavenly"],
            RarityTier::Primordial => &["Primordial", "Elder"],
            RarityTier::Eternal => &["Eternal", "Undying"],
            RarityTier::Abyssal => &["Abyssal", "Deepborn"],
            RarityTier::Astral => &["Astral", "Starwoven"],
            RarityTier::Infernal => &["Infernal", "Hellfire"],
            RarityTier::Seraphic => &["Seraphic", "Winged"],
            RarityTier::Runic => &["Runic", "Glyphbound"],
            RarityTier::Nether => &["Nether", "Gloom-touched"],
            RarityTier::Empyrean => &["Empyrean", "Skyborne"],
            RarityTier::Cosmic => &["Cosmic", "Nebular"],
            RarityTier::Void => &["Voidtouched", "Hollow"],
            RarityTier::Chaos => &["Chaotic", "Maddening"],
            RarityTier::Ethereal => &["Ethereal", "Phantom"],
            RarityTier::Sovereign => &["Sovereign", "Monarch's"],
            RarityTier::Transcendent => &["Transcendent", "Ascended"],
            RarityTier::Apocryphal => &["Apocryphal", "Unwritten"],
            RarityTier::Paradox => &["Paradoxical", "Timeworn"],
            RarityTier::Singularity => &["Singular", "Collapsing"],
            RarityTier::Infinity => &["Infinite", "Boundless"],
            RarityTier::Genesis => &["Genesis", "First-light"],
            RarityTier::Omega => &["Omega", "Final"],
        }
    }

    /// Display colour as RGB.
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            RarityTier::Common => (200, 200, 200),
            RarityTier::Uncommon => (30, 255, 30),
            RarityTier::Rare => (0, 112, 221),
            RarityTier::Epic => (163, 53, 238),
            RarityTier::Legendary => (255, 128, 0),
            RarityTier::Mythic => (255, 40, 40),
            RarityTier::Ancient => (230, 204, 128),
            RarityTier::Divine => (255, 240, 160),
            // Zone-exclusive tiers share a bright palette
            _ => (0, 255, 255),
        }
    }
}

impl std::fmt::Display for RarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RarityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RarityTier::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown rarity tier '{s}'"))
    }
}
