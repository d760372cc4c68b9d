use crate::error::Result;
use crate::model::{AmericanSize, Category, Garment, HatStyle, SkirtLength, SleeveLength};
use std::fmt;
use uuid::Uuid;

/// A single-field change to apply to a stored garment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarmentUpdate {
    Color(String),
    EuropeanSize(i32),
    AmericanSize(AmericanSize),
    Category(Category),
    Waterproof(bool),
    HatStyle(HatStyle),
    HasPockets(bool),
    SleeveLength(SleeveLength),
    SkirtLength(SkirtLength),
}

impl GarmentUpdate {
    pub fn apply(&self, garment: &mut Garment) -> Result<()> {
        match self {
            GarmentUpdate::Color(color) => garment.set_color(color.clone()),
            GarmentUpdate::EuropeanSize(size) => garment.set_european_size(*size),
            GarmentUpdate::AmericanSize(size) => garment.set_american_size(*size),
            GarmentUpdate::Category(category) => garment.set_category(*category),
            GarmentUpdate::Waterproof(value) => garment.set_waterproof(*value),
            GarmentUpdate::HatStyle(style) => garment.set_hat_style(*style),
            GarmentUpdate::HasPockets(value) => garment.set_has_pockets(*value),
            GarmentUpdate::SleeveLength(length) => garment.set_sleeve_length(*length),
            GarmentUpdate::SkirtLength(length) => garment.set_skirt_length(*length),
        }
    }
}

impl fmt::Display for GarmentUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GarmentUpdate::Color(v) => write!(f, "color -> {}", v),
            GarmentUpdate::EuropeanSize(v) => write!(f, "european size -> {}", v),
            GarmentUpdate::AmericanSize(v) => write!(f, "american size -> {}", v),
            GarmentUpdate::Category(v) => write!(f, "type -> {}", v),
            GarmentUpdate::Waterproof(v) => write!(f, "waterproof -> {}", v),
            GarmentUpdate::HatStyle(v) => write!(f, "hat style -> {}", v),
            GarmentUpdate::HasPockets(v) => write!(f, "pockets -> {}", v),
            GarmentUpdate::SleeveLength(v) => write!(f, "sleeve length -> {}", v),
            GarmentUpdate::SkirtLength(v) => write!(f, "skirt length -> {}", v),
        }
    }
}

/// Applies `update` to the first garment with `id`.
///
/// Returns `Ok(false)` when no garment has that id. Setter failures propagate
/// unchanged and the garment keeps its previous state.
pub fn run(garments: &mut [Garment], id: Uuid, update: &GarmentUpdate) -> Result<bool> {
    match garments.iter_mut().find(|g| g.id() == id) {
        Some(garment) => {
            update.apply(garment)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClosetError;
    use crate::store::memory::fixtures::sample_wardrobe;

    #[test]
    fn updates_color_in_place() {
        let mut garments = sample_wardrobe();
        let id = garments[1].id();
        let updated = run(&mut garments, id, &GarmentUpdate::Color("olive".into())).unwrap();
        assert!(updated);
        assert_eq!(garments[1].color(), "olive");
        assert_eq!(garments[1].id(), id);
    }

    #[test]
    fn unknown_id_is_not_updated() {
        let mut garments = sample_wardrobe();
        let before = garments.clone();
        let updated = run(&mut garments, Uuid::new_v4(), &GarmentUpdate::EuropeanSize(40)).unwrap();
        assert!(!updated);
        assert_eq!(garments, before);
    }

    #[test]
    fn validation_failure_propagates_and_keeps_state() {
        let mut garments = sample_wardrobe();
        let id = garments[0].id();
        let err = run(&mut garments, id, &GarmentUpdate::EuropeanSize(99)).unwrap_err();
        assert_eq!(err.field(), Some("european size"));
        assert_eq!(garments[0].european_size(), 33);
    }

    #[test]
    fn category_change_on_pinned_variant_fails() {
        let mut garments = sample_wardrobe();
        let pants_id = garments[3].id();
        let err = run(
            &mut garments,
            pants_id,
            &GarmentUpdate::Category(Category::Skirt),
        )
        .unwrap_err();
        assert!(matches!(err, ClosetError::UnsupportedMutation(_)));
        assert_eq!(garments[3].category(), Category::Pants);
    }

    #[test]
    fn variant_attribute_update() {
        let mut garments = sample_wardrobe();
        let hat_id = garments[0].id();
        run(&mut garments, hat_id, &GarmentUpdate::HatStyle(HatStyle::Panama)).unwrap();
        assert_eq!(
            garments[0].kind(),
            &crate::model::GarmentKind::Hat {
                waterproof: true,
                style: HatStyle::Panama
            }
        );
    }
}
