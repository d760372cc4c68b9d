use super::SnapshotStore;
use crate::error::Result;
use crate::model::Garment;

/// In-memory snapshot storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    garments: Vec<Garment>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_garments(garments: Vec<Garment>) -> Self {
        Self { garments, saves: 0 }
    }

    /// How many times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Garment>> {
        Ok(self.garments.clone())
    }

    fn save(&mut self, garments: &[Garment]) -> Result<()> {
        self.garments = garments.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{AmericanSize, Garment, HatStyle, SkirtLength, SleeveLength};

    /// Four garments, one per variant:
    /// blue hat 33/L, green skirt 50/M, red shirt 51/S, red pants 33/XL.
    pub fn sample_wardrobe() -> Vec<Garment> {
        vec![
            Garment::hat("blue", 33, AmericanSize::L, true, HatStyle::Cap).unwrap(),
            Garment::skirt("green", 50, AmericanSize::M, SkirtLength::Midi).unwrap(),
            Garment::shirt("red", 51, AmericanSize::S, SleeveLength::Long).unwrap(),
            Garment::pants("red", 33, AmericanSize::Xl, true).unwrap(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_wardrobe;
    use super::*;

    #[test]
    fn save_replaces_previous_snapshot() {
        let mut store = InMemoryStore::with_garments(sample_wardrobe());
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 1);
    }
}
