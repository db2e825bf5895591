//! User-authored spectrum cards, kept as a JSON array on disk.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    error::{Result, StoreError},
    game::{SpectrumCard, Theme},
};

const CARDS_FILE: &str = "custom-cards.json";

/// Cards needed before the custom theme can be played.
pub const MIN_PLAYABLE: usize = 3;
/// Longest label accepted for either side of a card.
pub const MAX_LABEL_CHARS: usize = 30;
pub const THEME_NAME: &str = "Custom";
pub const THEME_DESCRIPTION: &str = "Your own cards, saved on this machine";

#[derive(Debug, Clone)]
pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(CARDS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored cards, for display. A missing file means no cards; an
    /// unreadable one is logged and treated the same way. Edits go through
    /// `try_load` so they never overwrite a file they could not read.
    pub fn load(&self) -> Vec<SpectrumCard> {
        match self.try_load() {
            Ok(cards) => cards,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to load custom cards: {e}");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<SpectrumCard>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, cards: &[SpectrumCard]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(cards)?)?;
        Ok(())
    }

    /// Validate and append a card, returning the updated list.
    pub fn add(&self, left: &str, right: &str) -> Result<Vec<SpectrumCard>> {
        let card = SpectrumCard::new(validate_label(left)?, validate_label(right)?);
        let mut cards = self.try_load()?;
        info!(left = %card.left, right = %card.right, "Custom card added");
        cards.push(card);
        self.save(&cards)?;
        Ok(cards)
    }

    pub fn remove(&self, index: usize) -> Result<Vec<SpectrumCard>> {
        let mut cards = self.try_load()?;
        if index >= cards.len() {
            return Err(StoreError::NoSuchCard {
                index,
                len: cards.len(),
            }
            .into());
        }
        let removed = cards.remove(index);
        info!(left = %removed.left, right = %removed.right, "Custom card removed");
        self.save(&cards)?;
        Ok(cards)
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Custom cards cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The stored cards as a playable theme, or `None` below the minimum.
    pub fn theme(&self) -> Option<Theme> {
        let cards = self.load();
        (cards.len() >= MIN_PLAYABLE)
            .then(|| Theme::new(THEME_NAME, cards).with_description(THEME_DESCRIPTION))
    }
}

/// Trim a label and check it fits on a card.
pub fn validate_label(label: &str) -> std::result::Result<String, StoreError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyLabel);
    }
    if trimmed.chars().count() > MAX_LABEL_CHARS {
        return Err(StoreError::LabelTooLong {
            label: trimmed.to_string(),
            max: MAX_LABEL_CHARS,
        });
    }
    Ok(trimmed.to_string())
}
