use crate::cosmetics::CosmeticDrop;
use crate::dungeon::ShadowProfile;
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Everything a single dungeon run pays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBundle {
    pub floor: u32,
    pub victory: bool,
    pub xp: u64,
    pub gold: u64,
    /// Loose reward tags granted from the floor's reward list.
    pub loose_rewards: Vec<String>,
    /// Empty on defeat; one or two items on victory.
    pub equipment: Vec<Item>,
    pub title: Option<CosmeticDrop>,
    pub frame: Option<CosmeticDrop>,
    /// Present only on boss victories.
    pub shadow: Option<ShadowProfile>,
}

impl RewardBundle {
    pub fn defeat(floor: u32, xp: u64) -> Self {
        Self {
            floor,
            victory: false,
            xp,
            gold: 0,
            loose_rewards: Vec::new(),
            equipment: Vec::new(),
            title: None,
            frame: None,
            shadow: None,
        }
    }

    pub fn cosmetics(&self) -> impl Iterator<Item = &CosmeticDrop> {
        self.title.iter().chain(self.frame.iter())
    }

    pub fn has_cosmetic(&self) -> bool {
        self.title.is_some() || self.frame.is_some()
    }
}
