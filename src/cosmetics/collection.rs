use super::types::{CosmeticDrop, CosmeticKind};
use serde::{Deserialize, Serialize};

/// The player's unlocked titles and frames.
///
/// Acquisition is idempotent by name: a second drop with a name already
/// owned for that kind is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CosmeticCollection {
    pub titles: Vec<CosmeticDrop>,
    pub frames: Vec<CosmeticDrop>,
}

impl CosmeticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, kind: CosmeticKind) -> &Vec<CosmeticDrop> {
        match kind {
            CosmeticKind::Title => &self.titles,
            CosmeticKind::Frame => &self.frames,
        }
    }

    pub fn owns(&self, kind: CosmeticKind, name: &str) -> bool {
        self.list(kind).iter().any(|d| d.name == name)
    }

    /// Returns true if the drop was new.
    pub fn acquire(&mut self, drop: CosmeticDrop) -> bool {
        if self.owns(drop.kind, &drop.name) {
            return false;
        }
        match drop.kind {
            CosmeticKind::Title => self.titles.push(drop),
            CosmeticKind::Frame => self.frames.push(drop),
        }
        true
    }

    pub fn len(&self) -> usize {
        self.titles.len() + self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmetics::generation::{generate_frame, generate_title};
    use crate::core::rng::ScriptedSource;

    #[test]
    fn test_duplicate_name_is_noop() {
        let mut coll = CosmeticCollection::new();
        let first = generate_title(5, &mut ScriptedSource::new(vec![0.0, 0.0, 0.1, 0.2]));
        let again = generate_title(5, &mut ScriptedSource::new(vec![0.0, 0.0, 0.3, 0.4]));
        assert_eq!(first.name, again.name);
        assert_ne!(first.id, again.id);

        assert!(coll.acquire(first));
        assert!(!coll.acquire(again));
        assert_eq!(coll.titles.len(), 1);
    }

    #[test]
    fn test_same_name_different_kind_both_kept() {
        let mut coll = CosmeticCollection::new();
        let title = generate_title(5, &mut ScriptedSource::constant(0.0));
        let frame = generate_frame(5, &mut ScriptedSource::constant(0.0));
        assert!(coll.acquire(title));
        assert!(coll.acquire(frame));
        assert_eq!(coll.len(), 2);
        assert!(coll.owns(CosmeticKind::Title, "Shadow Slayer"));
        assert!(coll.owns(CosmeticKind::Frame, "Shadow Halo"));
    }
}
