use crate::error::Result;
use crate::model::{Garment, GarmentForm};

/// Builds a garment from `form`.
///
/// Fails with the first invalid field. Appending is left to the caller so every
/// insertion goes through [`crate::api::Closet::add`].
pub fn run(form: &GarmentForm) -> Result<Garment> {
    let garment = form.build()?;
    tracing::debug!(id = %garment.id(), template = ?form.template(), "form built");
    Ok(garment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, FormField, GarmentKind, GarmentTemplate, HatStyle};

    fn hat_form() -> GarmentForm {
        GarmentForm::new(GarmentTemplate::Hat)
            .with(FormField::Color, "black")
            .with(FormField::EuropeanSize, "55")
            .with(FormField::AmericanSize, "L")
            .with(FormField::Waterproof, "no")
            .with(FormField::HatStyle, "fedora")
    }

    #[test]
    fn builds_valid_garment() {
        let hat = run(&hat_form()).unwrap();
        assert_eq!(hat.category(), Category::Hat);
        assert_eq!(
            hat.kind(),
            &GarmentKind::Hat {
                waterproof: false,
                style: HatStyle::Fedora
            }
        );
    }

    #[test]
    fn invalid_size_is_rejected() {
        let form = hat_form().with(FormField::EuropeanSize, "60");
        let err = run(&form).unwrap_err();
        assert_eq!(err.field(), Some("european size"));
    }

    #[test]
    fn reports_first_invalid_field() {
        let form = hat_form()
            .with(FormField::Color, "  ")
            .with(FormField::AmericanSize, "huge");
        assert_eq!(run(&form).unwrap_err().field(), Some("color"));
    }
}
