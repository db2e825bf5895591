//! Spectrum cards and the themes that group them.

use serde::{Deserialize, Serialize};

/// Two opposing labels marking the ends of a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumCard {
    pub left: String,
    pub right: String,
}

impl SpectrumCard {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A named, ordered list of cards.
///
/// Cards are identified by their position in `cards`; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// One-line blurb for the theme menu. May be empty.
    pub description: String,
    pub cards: Vec<SpectrumCard>,
}

impl Theme {
    pub fn new(name: impl Into<String>, cards: Vec<SpectrumCard>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cards,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn from_pairs(name: &str, pairs: &[(&str, &str)]) -> Self {
        Self::new(
            name,
            pairs
                .iter()
                .map(|(left, right)| SpectrumCard::new(*left, *right))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
