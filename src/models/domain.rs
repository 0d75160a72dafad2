use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The seven fixed need categories.
///
/// Declaration order is the scoring and explanation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Preservation,
    Gratification,
    Definition,
    Acceptance,
    Expression,
    Reflection,
    Knowledge,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Preservation,
        Category::Gratification,
        Category::Definition,
        Category::Acceptance,
        Category::Expression,
        Category::Reflection,
        Category::Knowledge,
    ];

    /// Display name, matching the stored JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Preservation => "Preservation",
            Category::Gratification => "Gratification",
            Category::Definition => "Definition",
            Category::Acceptance => "Acceptance",
            Category::Expression => "Expression",
            Category::Reflection => "Reflection",
            Category::Knowledge => "Knowledge",
        }
    }
}

/// One boolean flag per category.
///
/// A key absent from the JSON reads as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    #[serde(rename = "Preservation", default)]
    pub preservation: bool,
    #[serde(rename = "Gratification", default)]
    pub gratification: bool,
    #[serde(rename = "Definition", default)]
    pub definition: bool,
    #[serde(rename = "Acceptance", default)]
    pub acceptance: bool,
    #[serde(rename = "Expression", default)]
    pub expression: bool,
    #[serde(rename = "Reflection", default)]
    pub reflection: bool,
    #[serde(rename = "Knowledge", default)]
    pub knowledge: bool,
}

impl CategorySet {
    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Preservation => self.preservation,
            Category::Gratification => self.gratification,
            Category::Definition => self.definition,
            Category::Acceptance => self.acceptance,
            Category::Expression => self.expression,
            Category::Reflection => self.reflection,
            Category::Knowledge => self.knowledge,
        }
    }

    pub fn set(&mut self, category: Category, value: bool) {
        match category {
            Category::Preservation => self.preservation = value,
            Category::Gratification => self.gratification = value,
            Category::Definition => self.definition = value,
            Category::Acceptance => self.acceptance = value,
            Category::Expression => self.expression = value,
            Category::Reflection => self.reflection = value,
            Category::Knowledge => self.knowledge = value,
        }
    }

    /// Build a set with only the given categories flagged.
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut set = Self::default();
        for &category in categories {
            set.set(category, true);
        }
        set
    }
}

/// Upper body clothing color.
///
/// A closed enum so an unfilled form value ("") is rejected at
/// deserialization rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpperColor {
    White,
    Black,
    Gray,
    Brown,
    Red,
    Green,
    Blue,
    Purple,
    Orange,
    Yellow,
    None,
}

/// Lower body clothing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LowerColor {
    White,
    Black,
    Gray,
    Brown,
    Blue,
    Other,
    None,
}

/// The hair field that is actually meaningful for a given appearance.
///
/// `has_facial_hair` applies only when `is_male` is set, `has_long_hair`
/// only when it is not; storage keeps both, this picks the relevant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HairTrait {
    FacialHair(bool),
    LongHair(bool),
}

/// Visual appearance description, as submitted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(rename = "isMale", default)]
    pub is_male: bool,
    #[serde(rename = "isTaller", default)]
    pub is_taller: bool,
    #[serde(rename = "isOlder", default)]
    pub is_older: bool,
    #[serde(rename = "hasFacialHair", default)]
    pub has_facial_hair: bool,
    #[serde(rename = "hasLongHair", default)]
    pub has_long_hair: bool,
    #[serde(rename = "wearsGlasses", default)]
    pub wears_glasses: bool,
    #[serde(rename = "upperColor")]
    pub upper_color: UpperColor,
    #[serde(rename = "lowerColor")]
    pub lower_color: LowerColor,
}

impl Appearance {
    /// The relevant hair trait for this appearance.
    pub fn hair_trait(&self) -> HairTrait {
        if self.is_male {
            HairTrait::FacialHair(self.has_facial_hair)
        } else {
            HairTrait::LongHair(self.has_long_hair)
        }
    }
}

/// The user-submitted payload: what they request, what they offer,
/// and how they look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub requests: CategorySet,
    pub offers: CategorySet,
    pub description: Appearance,
}

/// A stored user record. Immutable once created; the store owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub coordinates: String,
    #[serde(rename = "userData")]
    pub user_data: UserData,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
