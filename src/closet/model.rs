//! # Garment Model
//!
//! A [`Garment`] is one record of the wardrobe. Every garment shares the same base
//! fields (color, category, european size, american size) and carries a
//! [`GarmentKind`] with the fields specific to its variant.
//!
//! ## Validation
//!
//! A garment can never be built or mutated into an invalid state. Constructors check
//! fields in a fixed order and stop at the first failure:
//!
//! ```text
//! color -> category -> european size -> american size -> variant fields
//! ```
//!
//! Every setter re-validates its single field with the same rule the constructor
//! uses, and leaves all other fields untouched when it fails.
//!
//! ## Pinned Categories
//!
//! Hats, pants, shirts and skirts pin their category at construction. Only the
//! generic kind allows [`Garment::set_category`]; for the others it always fails
//! with [`ClosetError::UnsupportedMutation`].
//!
//! ## Identity
//!
//! The identifier is assigned once at creation and is used only for lookup.
//! Equality and hashing are defined over the value fields and the variant payload;
//! two garments with different identifiers but identical values compare equal.

use crate::error::{ClosetError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// European sizes must be strictly greater than this.
pub const MIN_EUROPEAN_SIZE: i32 = 32;
/// European sizes must be strictly less than this.
pub const MAX_EUROPEAN_SIZE: i32 = 60;

/// Declares a closed, text-parsable enumeration.
///
/// Parsing is case-insensitive and fails with `InvalidFieldValue` for `$field`.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Accepted values, formatted for prompts: `[A, B, C]`.
            pub fn choices() -> String {
                let names: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("[{}]", names.join(", "))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ClosetError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        ClosetError::invalid_field(
                            $field,
                            format!("expected one of {}, got '{}'", Self::choices(), wanted),
                        )
                    })
            }
        }
    };
}

text_enum!(
    /// The fixed set of garment categories ("type" in the menus).
    Category, "type" {
        Hat => "HAT",
        Pants => "PANTS",
        Skirt => "SKIRT",
        Shirt => "SHIRT",
    }
);

text_enum!(
    /// US letter sizes, ordered from smallest to largest.
    AmericanSize, "american size" {
        S => "S",
        M => "M",
        L => "L",
        Xl => "XL",
        Xxl => "XXL",
        Xxxl => "XXXL",
    }
);

text_enum!(
    HatStyle, "hat style" {
        Cap => "CAP",
        Beanie => "BEANIE",
        Fedora => "FEDORA",
        Panama => "PANAMA",
    }
);

text_enum!(
    SleeveLength, "sleeve length" {
        Short => "SHORT",
        Long => "LONG",
        Sleeveless => "SLEEVELESS",
    }
);

text_enum!(
    SkirtLength, "skirt length" {
        Mini => "MINI",
        Midi => "MIDI",
        Maxi => "MAXI",
    }
);

/// Variant payload of a garment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum GarmentKind {
    Generic,
    Hat { waterproof: bool, style: HatStyle },
    Pants { has_pockets: bool },
    Shirt { sleeve_length: SleeveLength },
    Skirt { length: SkirtLength },
}

impl GarmentKind {
    /// The category this kind fixes, or `None` for the generic kind.
    pub fn pinned_category(&self) -> Option<Category> {
        match self {
            GarmentKind::Generic => None,
            GarmentKind::Hat { .. } => Some(Category::Hat),
            GarmentKind::Pants { .. } => Some(Category::Pants),
            GarmentKind::Shirt { .. } => Some(Category::Shirt),
            GarmentKind::Skirt { .. } => Some(Category::Skirt),
        }
    }

    /// Default payload for the kind matching `category`.
    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Hat => GarmentKind::Hat {
                waterproof: false,
                style: HatStyle::Cap,
            },
            Category::Pants => GarmentKind::Pants { has_pockets: false },
            Category::Shirt => GarmentKind::Shirt {
                sleeve_length: SleeveLength::Short,
            },
            Category::Skirt => GarmentKind::Skirt {
                length: SkirtLength::Midi,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GarmentKind::Generic => "Clothes",
            GarmentKind::Hat { .. } => "Hat",
            GarmentKind::Pants { .. } => "Pants",
            GarmentKind::Shirt { .. } => "Shirt",
            GarmentKind::Skirt { .. } => "Skirt",
        }
    }
}

/// One garment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GarmentRecord", into = "GarmentRecord")]
pub struct Garment {
    id: Uuid,
    color: String,
    category: Category,
    european_size: i32,
    american_size: AmericanSize,
    kind: GarmentKind,
}

impl Garment {
    /// Builds a garment, validating color, category, then european size.
    ///
    /// For pinned kinds the category must match the kind.
    pub fn new(
        color: impl Into<String>,
        category: Category,
        european_size: i32,
        american_size: AmericanSize,
        kind: GarmentKind,
    ) -> Result<Self> {
        let color = color.into();
        validate_color(&color)?;
        validate_category(category, &kind)?;
        validate_european_size(european_size)?;

        Ok(Self {
            id: Uuid::new_v4(),
            color,
            category,
            european_size,
            american_size,
            kind,
        })
    }

    pub fn generic(
        color: impl Into<String>,
        category: Category,
        european_size: i32,
        american_size: AmericanSize,
    ) -> Result<Self> {
        Self::new(
            color,
            category,
            european_size,
            american_size,
            GarmentKind::Generic,
        )
    }

    pub fn hat(
        color: impl Into<String>,
        european_size: i32,
        american_size: AmericanSize,
        waterproof: bool,
        style: HatStyle,
    ) -> Result<Self> {
        Self::new(
            color,
            Category::Hat,
            european_size,
            american_size,
            GarmentKind::Hat { waterproof, style },
        )
    }

    pub fn pants(
        color: impl Into<String>,
        european_size: i32,
        american_size: AmericanSize,
        has_pockets: bool,
    ) -> Result<Self> {
        Self::new(
            color,
            Category::Pants,
            european_size,
            american_size,
            GarmentKind::Pants { has_pockets },
        )
    }

    pub fn shirt(
        color: impl Into<String>,
        european_size: i32,
        american_size: AmericanSize,
        sleeve_length: SleeveLength,
    ) -> Result<Self> {
        Self::new(
            color,
            Category::Shirt,
            european_size,
            american_size,
            GarmentKind::Shirt { sleeve_length },
        )
    }

    pub fn skirt(
        color: impl Into<String>,
        european_size: i32,
        american_size: AmericanSize,
        length: SkirtLength,
    ) -> Result<Self> {
        Self::new(
            color,
            Category::Skirt,
            european_size,
            american_size,
            GarmentKind::Skirt { length },
        )
    }

    /// Copies the value fields into a new garment of the given kind.
    ///
    /// The copy gets a fresh identifier. Pinned kinds take their own category,
    /// the generic kind keeps this garment's category.
    pub fn copy_as(&self, kind: GarmentKind) -> Garment {
        Garment {
            id: Uuid::new_v4(),
            color: self.color.clone(),
            category: kind.pinned_category().unwrap_or(self.category),
            european_size: self.european_size,
            american_size: self.american_size,
            kind,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn european_size(&self) -> i32 {
        self.european_size
    }

    pub fn american_size(&self) -> AmericanSize {
        self.american_size
    }

    pub fn kind(&self) -> &GarmentKind {
        &self.kind
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> Result<()> {
        let color = color.into();
        validate_color(&color)?;
        self.color = color;
        Ok(())
    }

    pub fn set_european_size(&mut self, size: i32) -> Result<()> {
        validate_european_size(size)?;
        self.european_size = size;
        Ok(())
    }

    pub fn set_american_size(&mut self, size: AmericanSize) -> Result<()> {
        self.american_size = size;
        Ok(())
    }

    /// Only the generic kind may change category.
    pub fn set_category(&mut self, category: Category) -> Result<()> {
        if let Some(pinned) = self.kind.pinned_category() {
            return Err(ClosetError::UnsupportedMutation(format!(
                "type of {} is always {}",
                self.kind.name(),
                pinned
            )));
        }
        self.category = category;
        Ok(())
    }

    pub fn set_waterproof(&mut self, value: bool) -> Result<()> {
        match &mut self.kind {
            GarmentKind::Hat { waterproof, .. } => {
                *waterproof = value;
                Ok(())
            }
            other => Err(not_applicable("waterproof", other)),
        }
    }

    pub fn set_hat_style(&mut self, value: HatStyle) -> Result<()> {
        match &mut self.kind {
            GarmentKind::Hat { style, .. } => {
                *style = value;
                Ok(())
            }
            other => Err(not_applicable("hat style", other)),
        }
    }

    pub fn set_has_pockets(&mut self, value: bool) -> Result<()> {
        match &mut self.kind {
            GarmentKind::Pants { has_pockets } => {
                *has_pockets = value;
                Ok(())
            }
            other => Err(not_applicable("pockets", other)),
        }
    }

    pub fn set_sleeve_length(&mut self, value: SleeveLength) -> Result<()> {
        match &mut self.kind {
            GarmentKind::Shirt { sleeve_length } => {
                *sleeve_length = value;
                Ok(())
            }
            other => Err(not_applicable("sleeve length", other)),
        }
    }

    pub fn set_skirt_length(&mut self, value: SkirtLength) -> Result<()> {
        match &mut self.kind {
            GarmentKind::Skirt { length } => {
                *length = value;
                Ok(())
            }
            other => Err(not_applicable("skirt length", other)),
        }
    }

    /// Default ordering: european size ascending, then color ascending.
    pub fn default_order(a: &Garment, b: &Garment) -> Ordering {
        a.european_size
            .cmp(&b.european_size)
            .then_with(|| a.color.cmp(&b.color))
    }
}

fn not_applicable(field: &str, kind: &GarmentKind) -> ClosetError {
    ClosetError::UnsupportedMutation(format!("{} has no {} attribute", kind.name(), field))
}

impl PartialEq for Garment {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.category == other.category
            && self.european_size == other.european_size
            && self.american_size == other.american_size
            && self.kind == other.kind
    }
}

impl Eq for Garment {}

impl Hash for Garment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.category.hash(state);
        self.european_size.hash(state);
        self.american_size.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Garment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{uuid={}, color='{}', type='{}', europeanSize={}, americanSize='{}'",
            self.kind.name(),
            self.id,
            self.color,
            self.category,
            self.european_size,
            self.american_size
        )?;
        match &self.kind {
            GarmentKind::Generic => {}
            GarmentKind::Hat { waterproof, style } => {
                write!(f, ", hatStyle={}, isWaterproof={}", style, waterproof)?
            }
            GarmentKind::Pants { has_pockets } => write!(f, ", hasPockets={}", has_pockets)?,
            GarmentKind::Shirt { sleeve_length } => {
                write!(f, ", sleeveLength={}", sleeve_length)?
            }
            GarmentKind::Skirt { length } => write!(f, ", length={}", length)?,
        }
        f.write_str("}")
    }
}

/// Serialized shape of a garment. Deserializing goes back through validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GarmentRecord {
    id: Uuid,
    color: String,
    category: Category,
    european_size: i32,
    american_size: AmericanSize,
    kind: GarmentKind,
}

impl TryFrom<GarmentRecord> for Garment {
    type Error = ClosetError;

    fn try_from(record: GarmentRecord) -> Result<Self> {
        validate_color(&record.color)?;
        validate_category(record.category, &record.kind)?;
        validate_european_size(record.european_size)?;
        Ok(Garment {
            id: record.id,
            color: record.color,
            category: record.category,
            european_size: record.european_size,
            american_size: record.american_size,
            kind: record.kind,
        })
    }
}

impl From<Garment> for GarmentRecord {
    fn from(garment: Garment) -> Self {
        GarmentRecord {
            id: garment.id,
            color: garment.color,
            category: garment.category,
            european_size: garment.european_size,
            american_size: garment.american_size,
            kind: garment.kind,
        }
    }
}

fn validate_color(color: &str) -> Result<()> {
    if color.trim().is_empty() {
        return Err(ClosetError::invalid_field("color", "must not be empty or blank"));
    }
    Ok(())
}

fn validate_category(category: Category, kind: &GarmentKind) -> Result<()> {
    match kind.pinned_category() {
        Some(pinned) if pinned != category => Err(ClosetError::invalid_field(
            "type",
            format!("{} must have type {}, got {}", kind.name(), pinned, category),
        )),
        _ => Ok(()),
    }
}

fn validate_european_size(size: i32) -> Result<()> {
    if size <= MIN_EUROPEAN_SIZE || size >= MAX_EUROPEAN_SIZE {
        return Err(ClosetError::invalid_field(
            "european size",
            format!(
                "has to be between {} and {} (exclusive), got {}",
                MIN_EUROPEAN_SIZE, MAX_EUROPEAN_SIZE, size
            ),
        ));
    }
    Ok(())
}

/// Parses a european size from text; non-numbers are an invalid field value.
pub fn parse_european_size(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    let size = trimmed.parse::<i32>().map_err(|_| {
        ClosetError::invalid_field("european size", format!("'{}' is not a number", trimmed))
    })?;
    validate_european_size(size)?;
    Ok(size)
}

/// Parses a yes/no answer for a boolean attribute.
pub fn parse_flag(field: &'static str, input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => Ok(true),
        "false" | "no" | "n" => Ok(false),
        other => Err(ClosetError::invalid_field(
            field,
            format!("expected true or false, got '{}'", other),
        )),
    }
}

/// What the user is creating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentTemplate {
    Generic,
    Hat,
    Pants,
    Shirt,
    Skirt,
}

/// A single text input of a [`GarmentForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Color,
    Category,
    EuropeanSize,
    AmericanSize,
    Waterproof,
    HatStyle,
    HasPockets,
    SleeveLength,
    SkirtLength,
}

impl GarmentTemplate {
    /// Fields of this template, in validation order.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Color];
        if *self == GarmentTemplate::Generic {
            fields.push(FormField::Category);
        }
        fields.push(FormField::EuropeanSize);
        fields.push(FormField::AmericanSize);
        match self {
            GarmentTemplate::Generic => {}
            GarmentTemplate::Hat => {
                fields.push(FormField::Waterproof);
                fields.push(FormField::HatStyle);
            }
            GarmentTemplate::Pants => fields.push(FormField::HasPockets),
            GarmentTemplate::Shirt => fields.push(FormField::SleeveLength),
            GarmentTemplate::Skirt => fields.push(FormField::SkirtLength),
        }
        fields
    }
}

/// Raw text collected for a new garment.
///
/// [`GarmentForm::build`] parses and validates the values in the order given by
/// [`GarmentTemplate::fields`], failing on the first bad one. Missing values are
/// treated as empty text.
#[derive(Debug, Clone)]
pub struct GarmentForm {
    template: GarmentTemplate,
    values: HashMap<FormField, String>,
}

impl GarmentForm {
    pub fn new(template: GarmentTemplate) -> Self {
        Self {
            template,
            values: HashMap::new(),
        }
    }

    pub fn template(&self) -> GarmentTemplate {
        self.template
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn build(&self) -> Result<Garment> {
        let color = self.value(FormField::Color);
        validate_color(color)?;

        let category = match self.template {
            GarmentTemplate::Generic => self.value(FormField::Category).parse::<Category>()?,
            GarmentTemplate::Hat => Category::Hat,
            GarmentTemplate::Pants => Category::Pants,
            GarmentTemplate::Shirt => Category::Shirt,
            GarmentTemplate::Skirt => Category::Skirt,
        };
        let european_size = parse_european_size(self.value(FormField::EuropeanSize))?;
        let american_size = self.value(FormField::AmericanSize).parse::<AmericanSize>()?;

        let kind = match self.template {
            GarmentTemplate::Generic => GarmentKind::Generic,
            GarmentTemplate::Hat => GarmentKind::Hat {
                waterproof: parse_flag("waterproof", self.value(FormField::Waterproof))?,
                style: self.value(FormField::HatStyle).parse()?,
            },
            GarmentTemplate::Pants => GarmentKind::Pants {
                has_pockets: parse_flag("pockets", self.value(FormField::HasPockets))?,
            },
            GarmentTemplate::Shirt => GarmentKind::Shirt {
                sleeve_length: self.value(FormField::SleeveLength).parse()?,
            },
            GarmentTemplate::Skirt => GarmentKind::Skirt {
                length: self.value(FormField::SkirtLength).parse()?,
            },
        };

        Garment::new(color, category, european_size, american_size, kind)
    }
}
