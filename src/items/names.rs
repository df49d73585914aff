use super::types::EquipmentSlot;
use crate::core::rng::RandomSource;
use crate::rarity::RarityTier;

pub fn base_nouns(slot: EquipmentSlot) -> &'static [&'static str] {
    match slot {
        EquipmentSlot::Weapon => &["Sword", "Axe", "Mace", "Dagger", "Greatsword", "Spear"],
        EquipmentSlot::Armor => &["Leather Armor", "Chain Mail", "Plate Mail", "Scale Mail"],
        EquipmentSlot::Helmet => &["Cap", "Helm", "Crown", "Coif"],
        EquipmentSlot::Gloves => &["Gloves", "Gauntlets", "Mitts", "Handwraps"],
        EquipmentSlot::Boots => &["Boots", "Greaves", "Shoes", "Sabatons"],
        EquipmentSlot::Amulet => &["Amulet", "Pendant", "Necklace", "Talisman"],
        EquipmentSlot::Ring => &["Ring", "Band", "Circle", "Loop"],
    }
}

/// `"{adjective} {noun}"`, adjective from the rarity, noun from the slot.
pub fn generate_item_name(
    rarity: RarityTier,
    slot: EquipmentSlot,
    rng: &mut impl RandomSource,
) -> String {
    let adjective = rng.pick(rarity.adjectives());
    let noun = rng.pick(base_nouns(slot));
    format!("{} {}", adjective, noun)
}
