use crate::rarity::RarityTier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CosmeticKind {
    Title,
    Frame,
}

impl std::str::FromStr for CosmeticKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(CosmeticKind::Title),
            "frame" => Ok(CosmeticKind::Frame),
            _ => Err(format!("unknown cosmetic kind '{s}'")),
        }
    }
}

/// Frames only use the two top rank letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FrameRank {
    S,
    SS,
}

impl FrameRank {
    pub fn label(&self) -> &'static str {
        match self {
            FrameRank::S => "S",
            FrameRank::SS => "SS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CosmeticGrade {
    /// Titles bucket into the rarity enumeration.
    Rarity(RarityTier),
    /// Frames carry a rank letter.
    Rank(FrameRank),
}

/// A title or avatar frame. Immutable once generated; names may repeat
/// across drops, ids never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmeticDrop {
    pub id: Uuid,
    pub kind: CosmeticKind,
    pub name: String,
    pub grade: CosmeticGrade,
    /// Visual style descriptor for the renderer.
    pub style: String,
    /// Floor the drop was generated for.
    pub floor: u32,
}
