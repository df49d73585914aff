//! Fixed boss roster and floor themes.

use crate::scaling::FloorTier;

/// A boss guarding every tenth floor.
#[derive(Debug, Clone, Copy)]
pub struct BossEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub shadow_name: &'static str,
}

/// Bosses in ladder order. Boss N guards floor 10*N; the roster repeats
/// once exhausted.
pub const BOSS_ROSTER: [BossEntry; 12] = [
    BossEntry {
        name: "Kasaka",
        title: "Venom-Fanged Serpent",
        shadow_name: "Fang",
    },
    BossEntry {
        name: "Cerberus",
        title: "Gatekeeper of Hell",
        shadow_name: "Hound",
    },
    BossEntry {
        name: "Igris",
        title: "Blood-Red Commander",
        shadow_name: "Igris",
    },
    BossEntry {
        name: "Vulcan",
        title: "Demon King of Flame",
        shadow_name: "Ember",
    },
    BossEntry {
        name: "Baruka",
        title: "Ice Elf Chieftain",
        shadow_name: "Frost",
    },
    BossEntry {
        name: "Kargalgan",
        title: "High Orc Shaman",
        shadow_name: "Tusk",
    },
    BossEntry {
        name: "Beru",
        title: "Ant King",
        shadow_name: "Beru",
    },
    BossEntry {
        name: "Metus",
        title: "Lich of the Deep",
        shadow_name: "Gloom",
    },
    BossEntry {
        name: "Kamish",
        title: "Ancient Dragon",
        shadow_name: "Kamish",
    },
    BossEntry {
        name: "Legia",
        title: "Giant King",
        shadow_name: "Titan",
    },
    BossEntry {
        name: "Querehsha",
        title: "Queen of Plagues",
        shadow_name: "Blight",
    },
    BossEntry {
        name: "Antares",
        title: "Monarch of Destruction",
        shadow_name: "Ruin",
    },
];

pub fn boss_entry(boss_index: u32) -> &'static BossEntry {
    let idx = (boss_index.saturating_sub(1) as usize) % BOSS_ROSTER.len();
    &BOSS_ROSTER[idx]
}

/// How many times the roster has wrapped by this boss (1-based).
pub fn boss_incarnation(boss_index: u32) -> u32 {
    boss_index.saturating_sub(1) / BOSS_ROSTER.len() as u32 + 1
}

pub fn floor_theme(tier: FloorTier) -> &'static str {
    match tier {
        FloorTier::E => "Goblin Warrens",
        FloorTier::D => "Sunken Catacombs",
        FloorTier::C => "Frost Halls",
        FloorTier::B => "Ember Depths",
        FloorTier::A => "Shadow Citadel",
        FloorTier::S => "Demon Castle",
        FloorTier::SS => "Sky Spire",
        FloorTier::SSS => "Monarch's Throne",
    }
}

/// Tier-specific crafting material every floor of that tier may drop.
pub fn floor_material(tier: FloorTier) -> &'static str {
    match tier {
        FloorTier::E => "Goblin Tooth",
        FloorTier::D => "Bone Dust",
        FloorTier::C => "Frost Shard",
        FloorTier::B => "Ember Core",
        FloorTier::A => "Shadow Essence",
        FloorTier::S => "Demon Horn",
        FloorTier::SS => "Storm Feather",
        FloorTier::SSS => "Monarch Fragment",
    }
}

/// Loose rewards every floor declares.
pub const COMMON_REWARD_ITEMS: [&str; 2] = ["Mana Crystal", "Healing Potion"];

/// Extra loose reward declared by boss floors.
pub const BOSS_REWARD_ITEM: &str = "Boss Core";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_wraps() {
        assert_eq!(boss_entry(1).name, "Kasaka");
        assert_eq!(boss_entry(12).name, "Antares");
        assert_eq!(boss_entry(13).name, "Kasaka");
        assert_eq!(boss_incarnation(12), 1);
        assert_eq!(boss_incarnation(13), 2);
    }

    #[test]
    fn test_every_tier_has_theme_and_material() {
        for tier in FloorTier::ALL {
            assert!(!floor_theme(tier).is_empty());
            assert!(!floor_material(tier).is_empty());
        }
    }
}
