use crate::model::Garment;
use uuid::Uuid;

/// Removes the first garment with `id`, returning whether one was removed.
///
/// An absent id is simply "not found".
pub fn run(garments: &mut Vec<Garment>, id: Option<Uuid>) -> bool {
    let Some(id) = id else {
        return false;
    };
    match garments.iter().position(|g| g.id() == id) {
        Some(index) => {
            garments.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::find;
    use crate::store::memory::fixtures::sample_wardrobe;

    #[test]
    fn deletes_present_id() {
        let mut garments = sample_wardrobe();
        let id = garments[1].id();
        assert!(run(&mut garments, Some(id)));
        assert_eq!(garments.len(), 3);
        assert!(find::by_id(&garments, id).is_none());
    }

    #[test]
    fn missing_id_leaves_collection_alone() {
        let mut garments = sample_wardrobe();
        assert!(!run(&mut garments, Some(Uuid::new_v4())));
        assert_eq!(garments.len(), 4);
    }

    #[test]
    fn absent_id_is_not_found() {
        let mut garments = sample_wardrobe();
        assert!(!run(&mut garments, None));
        assert_eq!(garments.len(), 4);
    }

    #[test]
    fn keeps_order_of_remaining() {
        let mut garments = sample_wardrobe();
        let expected: Vec<_> = vec![garments[0].id(), garments[2].id(), garments[3].id()];
        let id = garments[1].id();
        run(&mut garments, Some(id));
        let remaining: Vec<_> = garments.iter().map(|g| g.id()).collect();
        assert_eq!(remaining, expected);
    }
}
