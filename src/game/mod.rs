//! Game rules: cards, deck, scoring and the turn state machine.

pub mod card;
pub mod confirm;
pub mod deck;
pub mod scoring;
pub mod team;
pub mod themes;
pub mod timer;
pub mod turn;

pub use card::{SpectrumCard, Theme};
pub use confirm::ConfirmGate;
pub use deck::Deck;
pub use scoring::ScoreBand;
pub use team::{Roster, Team};
pub use turn::{Game, Phase};
