use crate::error::{ClosetError, Result};
use crate::model::{AmericanSize, Category, Garment};
use uuid::Uuid;

/// First garment whose identifier matches.
pub fn by_id(garments: &[Garment], id: Uuid) -> Option<Garment> {
    garments.iter().find(|g| g.id() == id).cloned()
}

pub fn by_category(garments: &[Garment], category: Category) -> Vec<Garment> {
    filter(garments, |g| g.category() == category)
}

/// Exact, case-sensitive color match.
pub fn by_color(garments: &[Garment], color: &str) -> Vec<Garment> {
    filter(garments, |g| g.color() == color)
}

pub fn by_american_size(garments: &[Garment], size: AmericanSize) -> Vec<Garment> {
    filter(garments, |g| g.american_size() == size)
}

/// Garments with `min < european size <= max`.
pub fn by_european_size_range(garments: &[Garment], min: i32, max: i32) -> Result<Vec<Garment>> {
    if min >= max {
        return Err(ClosetError::InvalidRange { min, max });
    }
    Ok(filter(garments, |g| {
        g.european_size() > min && g.european_size() <= max
    }))
}

fn filter<F>(garments: &[Garment], predicate: F) -> Vec<Garment>
where
    F: Fn(&Garment) -> bool,
{
    garments.iter().filter(|g| predicate(g)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_wardrobe;

    #[test]
    fn finds_by_id() {
        let garments = sample_wardrobe();
        let wanted = garments[2].id();
        let found = by_id(&garments, wanted).unwrap();
        assert_eq!(found.id(), wanted);
        assert!(by_id(&garments, Uuid::new_v4()).is_none());
    }

    #[test]
    fn filters_by_category() {
        let garments = sample_wardrobe();
        let hats = by_category(&garments, Category::Hat);
        assert_eq!(hats.len(), 1);
        assert_eq!(hats[0].color(), "blue");
    }

    #[test]
    fn filters_by_color_preserving_order() {
        let garments = sample_wardrobe();
        let reds = by_color(&garments, "red");
        let categories: Vec<_> = reds.iter().map(|g| g.category()).collect();
        assert_eq!(categories, vec![Category::Shirt, Category::Pants]);
        assert!(by_color(&garments, "Red").is_empty());
    }

    #[test]
    fn filters_by_american_size() {
        let garments = sample_wardrobe();
        let mediums = by_american_size(&garments, AmericanSize::M);
        assert_eq!(mediums.len(), 1);
        assert_eq!(mediums[0].category(), Category::Skirt);
    }

    #[test]
    fn range_is_exclusive_below_and_inclusive_above() {
        let garments = sample_wardrobe();
        let small = by_european_size_range(&garments, 30, 35).unwrap();
        assert_eq!(small.len(), 2);
        assert!(small.iter().all(|g| g.european_size() == 33));

        let mid = by_european_size_range(&garments, 33, 50).unwrap();
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].european_size(), 50);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let garments = sample_wardrobe();
        assert!(matches!(
            by_european_size_range(&garments, 35, 34),
            Err(ClosetError::InvalidRange { min: 35, max: 34 })
        ));
        assert!(by_european_size_range(&garments, 40, 40).is_err());
    }
}
