use crate::model::Garment;
use std::cmp::Ordering;

/// Named orderings offered by the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Category,
    Color,
    AmericanSize,
    EuropeanSize,
    Default,
}

impl SortKey {
    pub fn compare(&self, a: &Garment, b: &Garment) -> Ordering {
        match self {
            SortKey::Category => a.category().cmp(&b.category()),
            SortKey::Color => a.color().cmp(b.color()),
            SortKey::AmericanSize => a.american_size().cmp(&b.american_size()),
            SortKey::EuropeanSize => a.european_size().cmp(&b.european_size()),
            SortKey::Default => Garment::default_order(a, b),
        }
    }
}

/// A sorted copy by european size, then color. The input is untouched.
pub fn sorted_default(garments: &[Garment]) -> Vec<Garment> {
    sorted_by(garments, Garment::default_order)
}

/// A stably sorted copy using `compare`. The input is untouched.
pub fn sorted_by<F>(garments: &[Garment], compare: F) -> Vec<Garment>
where
    F: FnMut(&Garment, &Garment) -> Ordering,
{
    let mut copy = garments.to_vec();
    copy.sort_by(compare);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AmericanSize, Category, SkirtLength, SleeveLength};

    fn three() -> Vec<Garment> {
        vec![
            Garment::shirt("red", 51, AmericanSize::S, SleeveLength::Long).unwrap(),
            Garment::generic("red", Category::Hat, 33, AmericanSize::L).unwrap(),
            Garment::skirt("green", 50, AmericanSize::M, SkirtLength::Midi).unwrap(),
        ]
    }

    #[test]
    fn default_sort_by_size_then_color() {
        let garments = three();
        let ids_before: Vec<_> = garments.iter().map(|g| g.id()).collect();

        let sorted = sorted_default(&garments);
        let view: Vec<_> = sorted
            .iter()
            .map(|g| (g.european_size(), g.color().to_string()))
            .collect();
        assert_eq!(
            view,
            vec![
                (33, "red".to_string()),
                (50, "green".to_string()),
                (51, "red".to_string())
            ]
        );

        let ids_after: Vec<_> = garments.iter().map(|g| g.id()).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn default_sort_breaks_size_ties_by_color() {
        let garments = vec![
            Garment::generic("red", Category::Pants, 40, AmericanSize::M).unwrap(),
            Garment::generic("black", Category::Pants, 40, AmericanSize::M).unwrap(),
        ];
        let sorted = sorted_default(&garments);
        assert_eq!(sorted[0].color(), "black");
    }

    #[test]
    fn custom_sort_is_stable() {
        let garments = three();
        let sorted = sorted_by(&garments, |a, b| SortKey::Color.compare(a, b));
        assert_eq!(sorted[0].color(), "green");
        // both reds keep their source order
        assert_eq!(sorted[1].id(), garments[0].id());
        assert_eq!(sorted[2].id(), garments[1].id());
    }

    #[test]
    fn sort_keys_order_enums_by_declaration() {
        let garments = three();
        let by_size = sorted_by(&garments, |a, b| SortKey::AmericanSize.compare(a, b));
        let sizes: Vec<_> = by_size.iter().map(|g| g.american_size()).collect();
        assert_eq!(sizes, vec![AmericanSize::S, AmericanSize::M, AmericanSize::L]);

        let by_type = sorted_by(&garments, |a, b| SortKey::Category.compare(a, b));
        assert_eq!(by_type[0].category(), Category::Hat);
    }

    #[test]
    fn sorting_empty_is_empty() {
        assert!(sorted_default(&[]).is_empty());
    }
}
