use crate::model::{
    AmericanSize, Category, FormField, GarmentKind, HatStyle, SkirtLength, SleeveLength,
};

/// Selection that leaves a sub-menu (or the program, from the main menu).
pub const BACK: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub code: u32,
    pub label: &'static str,
}

/// A numbered option list shown before reading one selection.
///
/// Menus are built per view and never shared or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub options: Vec<MenuOption>,
}

impl Menu {
    fn build(title: &'static str, options: &[(u32, &'static str)]) -> Self {
        Self {
            title,
            options: options
                .iter()
                .map(|&(code, label)| MenuOption { code, label })
                .collect(),
        }
    }

    pub fn has(&self, code: u32) -> bool {
        self.options.iter().any(|o| o.code == code)
    }

    pub fn main() -> Self {
        Self::build(
            "Main menu:",
            &[
                (1, "Create a clothes"),
                (2, "List all clothes"),
                (3, "Search clothes"),
                (4, "Sort clothes"),
                (5, "Update clothes"),
                (6, "Delete clothes"),
                (BACK, "Exit"),
            ],
        )
    }

    pub fn create() -> Self {
        Self::build(
            "Create menu:",
            &[
                (1, "Create pants"),
                (2, "Create shirt"),
                (3, "Create hat"),
                (4, "Create skirt"),
                (5, "Create default clothes"),
                (BACK, "Go back"),
            ],
        )
    }

    pub fn search() -> Self {
        Self::build(
            "Search menu:",
            &[
                (1, "Search by type"),
                (2, "Search by color"),
                (3, "Search by american size"),
                (4, "Search by european size (between min and max)"),
                (5, "Search by uuid"),
                (BACK, "Go back"),
            ],
        )
    }

    pub fn sort() -> Self {
        Self::build(
            "Sort menu:",
            &[
                (1, "Sort by type"),
                (2, "Sort by color"),
                (3, "Sort by american size"),
                (4, "Sort by european size"),
                (5, "Sort by default"),
                (BACK, "Go back"),
            ],
        )
    }

    /// Attribute menu for one garment; options 5 and 6 depend on its kind.
    pub fn update(kind: &GarmentKind) -> Self {
        let mut options = vec![
            (1, "Update color of the clothes"),
            (2, "Update european size of the clothes"),
            (3, "Update american size of the clothes"),
            (4, "Update type of the clothes"),
        ];
        match kind {
            GarmentKind::Generic => {}
            GarmentKind::Hat { .. } => {
                options.push((5, "Update whether the hat is waterproof"));
                options.push((6, "Update hat style"));
            }
            GarmentKind::Pants { .. } => options.push((5, "Update whether the pants have pockets")),
            GarmentKind::Shirt { .. } => options.push((5, "Update sleeve length")),
            GarmentKind::Skirt { .. } => options.push((5, "Update skirt length")),
        }
        options.push((BACK, "Go back"));
        Self::build("Update menu:", &options)
    }

    pub fn delete_confirm() -> Self {
        Self::build(
            "Delete the clothes?",
            &[(1, "Yes."), (2, "No."), (BACK, "Go back")],
        )
    }
}

/// Prompt text for one field of the create form.
pub fn field_prompt(field: FormField) -> String {
    match field {
        FormField::Color => "Please enter the color of the clothes:".to_string(),
        FormField::Category => format!(
            "Please enter the type of the clothes {}:",
            Category::choices()
        ),
        FormField::EuropeanSize => "Please enter european size of the clothes (33-59):".to_string(),
        FormField::AmericanSize => format!(
            "Please enter american size of the clothes {}:",
            AmericanSize::choices()
        ),
        FormField::Waterproof => "Is the hat waterproof? (true/false):".to_string(),
        FormField::HatStyle => format!("Enter hat style {}:", HatStyle::choices()),
        FormField::HasPockets => "Do the pants have pockets? (true/false):".to_string(),
        FormField::SleeveLength => format!("Enter shirt sleeve length {}:", SleeveLength::choices()),
        FormField::SkirtLength => format!("Enter skirt length {}:", SkirtLength::choices()),
    }
}
