//! Domain types representing spending categories and their display tags.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::common::*;

/// A user-defined spending bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub color: ColorTag,
}

impl Category {
    pub fn new(name: impl Into<String>, color: ColorTag) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
        }
    }

    /// Icon derived from the category name.
    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::for_name(&self.name)
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.color)
    }
}

/// Symbolic color tag drawn from the fixed category palette.
///
/// Unrecognized names collapse into [`ColorTag::Gray`], the neutral fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTag {
    Orange,
    Blue,
    Green,
    Purple,
    Red,
    Pink,
    Yellow,
    Teal,
    Cyan,
    Indigo,
    Mint,
    #[default]
    Gray,
}

impl ColorTag {
    /// Selectable palette entries, excluding the fallback.
    pub const PALETTE: [ColorTag; 11] = [
        ColorTag::Orange,
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Red,
        ColorTag::Pink,
        ColorTag::Yellow,
        ColorTag::Teal,
        ColorTag::Cyan,
        ColorTag::Indigo,
        ColorTag::Mint,
    ];

    pub fn from_name(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "orange" => ColorTag::Orange,
            "blue" => ColorTag::Blue,
            "green" => ColorTag::Green,
            "purple" => ColorTag::Purple,
            "red" => ColorTag::Red,
            "pink" => ColorTag::Pink,
            "yellow" => ColorTag::Yellow,
            "teal" => ColorTag::Teal,
            "cyan" => ColorTag::Cyan,
            "indigo" => ColorTag::Indigo,
            "mint" => ColorTag::Mint,
            _ => ColorTag::Gray,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Orange => "orange",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Red => "red",
            ColorTag::Pink => "pink",
            ColorTag::Yellow => "yellow",
            ColorTag::Teal => "teal",
            ColorTag::Cyan => "cyan",
            ColorTag::Indigo => "indigo",
            ColorTag::Mint => "mint",
            ColorTag::Gray => "gray",
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, ColorTag::Gray)
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColorTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|raw| ColorTag::from_name(&raw))
            .unwrap_or_default())
    }
}

/// Icon shown next to a category, keyed by well-known category names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    Food,
    Transport,
    Shopping,
    Home,
    Health,
    Entertainment,
    Fitness,
    Education,
    Travel,
    Subscriptions,
    Tag,
}

impl CategoryIcon {
    pub fn for_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "food" | "comida" => CategoryIcon::Food,
            "transport" | "transporte" => CategoryIcon::Transport,
            "shopping" | "compras" => CategoryIcon::Shopping,
            "home" | "hogar" => CategoryIcon::Home,
            "health" | "salud" => CategoryIcon::Health,
            "entertainment" => CategoryIcon::Entertainment,
            "gym" | "fitness" => CategoryIcon::Fitness,
            "education" | "educacion" => CategoryIcon::Education,
            "travel" | "viaje" => CategoryIcon::Travel,
            "subscriptions" => CategoryIcon::Subscriptions,
            _ => CategoryIcon::Tag,
        }
    }

    /// Symbol identifier handed to the rendering layer.
    pub fn symbol(self) -> &'static str {
        match self {
            CategoryIcon::Food => "fork.knife",
            CategoryIcon::Transport => "car.fill",
            CategoryIcon::Shopping => "bag.fill",
            CategoryIcon::Home => "house.fill",
            CategoryIcon::Health => "heart.fill",
            CategoryIcon::Entertainment => "gamecontroller.fill",
            CategoryIcon::Fitness => "dumbbell.fill",
            CategoryIcon::Education => "book.fill",
            CategoryIcon::Travel => "airplane",
            CategoryIcon::Subscriptions => "repeat.circle.fill",
            CategoryIcon::Tag => "tag.fill",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
