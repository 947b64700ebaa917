//! Difficulty, word category and the game mode they form together

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word category tag
///
/// `Easy` and `Hard` back the two fixed difficulties; the remaining four are the
/// player-selectable custom categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Easy,
    Hard,
    Animals,
    Countries,
    Movies,
    Mixed,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Hard,
        Self::Animals,
        Self::Countries,
        Self::Movies,
        Self::Mixed,
    ];

    /// The custom categories, in menu order (menu keys 1-4)
    pub const CUSTOM: [Self; 4] = [Self::Animals, Self::Countries, Self::Movies, Self::Mixed];

    /// File stem of the word list backing this category
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
            Self::Animals => "animals",
            Self::Countries => "countries",
            Self::Movies => "movies",
            Self::Mixed => "mixed",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
            Self::Animals => "Animals",
            Self::Countries => "Countries",
            Self::Movies => "Movies",
            Self::Mixed => "Mixed",
        }
    }

    #[must_use]
    pub const fn is_custom(self) -> bool {
        !matches!(self, Self::Easy | Self::Hard)
    }

    /// Parse a category from its name or stem (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Easy),
            lower => Self::ALL.into_iter().find(|c| c.stem() == lower),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("unknown category '{s}' (expected easy, hard, animals, countries, movies or mixed)")
        })
    }
}

/// Difficulty chosen at the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
    Custom,
}

impl Difficulty {
    /// Parse a difficulty menu answer: `1`/`easy`/`normal`, `2`/`hard`, `3`/`custom`
    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" | "normal" => Some(Self::Easy),
            "2" | "hard" => Some(Self::Hard),
            "3" | "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Normal",
            Self::Hard => "Hard",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The selected difficulty together with the category its words come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameMode {
    difficulty: Difficulty,
    category: Category,
}

impl GameMode {
    #[must_use]
    pub const fn easy() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            category: Category::Easy,
        }
    }

    #[must_use]
    pub const fn hard() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            category: Category::Hard,
        }
    }

    /// Custom play over one of the custom categories
    ///
    /// Returns `None` for `Easy`/`Hard`, which are not custom categories.
    #[must_use]
    pub const fn custom(category: Category) -> Option<Self> {
        if category.is_custom() {
            Some(Self {
                difficulty: Difficulty::Custom,
                category,
            })
        } else {
            None
        }
    }

    /// Mode whose words come from `category`
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Easy => Self::easy(),
            Category::Hard => Self::hard(),
            _ => Self {
                difficulty: Difficulty::Custom,
                category,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.difficulty {
            Difficulty::Custom => write!(f, "Custom ({})", self.category),
            difficulty => write!(f, "{difficulty}"),
        }
    }
}
