//! Pre-game configuration: team names and turn time.

use crate::game::{
    timer::{DEFAULT_SECONDS, MAX_SECONDS, STEP_SECONDS},
    Roster, Team,
};

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 4;

const FUN_TEAM_NAMES: &[&str] = &[
    "Mind Readers", "Vibe Checkers", "Psychic Pineapples", "Wavelength Wizards",
    "Frequency Freaks", "Telepathic Tacos", "Spectral Spies", "Quantum Quokkas",
    "Cosmic Cruisers", "Brainy Bunch", "Thought Police", "Mental Gymnasts",
    "Third Eye Blind", "Crystal Ballers", "Future Tellers", "Remote Viewers",
    "Astral Travelers", "Ghost Hunters", "Medium Rare", "ESP-ecially Good",
    "Brainwave Surfers", "Synapse Snappers", "Neural Network", "Cerebral Assassins",
    "Thought Bubbles", "Mind Melders", "Head Case", "Psy-Kicks",
    "Telekinesis Club", "Precognition Pros", "Deja Vu", "Sixth Sense",
    "Mystic Moguls", "Oracle Squad", "Prophecy Peeps", "Clairvoyant Crew",
    "Tarot Terrors", "Zodiac Zebras", "Horoscope Heroes", "Palm Readers",
    "Tea Leaf Team", "Ouija Boarders", "Seance Squad", "Ectoplasm Enthusiasts",
    "Supernatural Squad", "Paranormal Pals", "Alien Abductees", "Tin Foil Hats",
    "Conspiracy Theorists", "Area 51 Raiders",
];

/// Editable team list and timer, turned into a `Roster` when the game starts.
#[derive(Debug, Clone)]
pub struct TeamSetup {
    names: Vec<String>,
    timer_seconds: u32,
    rng: fastrand::Rng,
}

impl TeamSetup {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Two random, distinct default names and the default timer.
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        let mut setup = Self {
            names: Vec::with_capacity(MAX_TEAMS),
            timer_seconds: DEFAULT_SECONDS,
            rng,
        };
        while setup.names.len() < MIN_TEAMS {
            setup.add_team();
        }
        setup
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub const fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn can_add(&self) -> bool {
        self.names.len() < MAX_TEAMS
    }

    pub fn can_remove(&self) -> bool {
        self.names.len() > MIN_TEAMS
    }

    /// Add a team with an unused fun name, or `Team <letter>` when none is left.
    pub fn add_team(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        let available: Vec<&str> = FUN_TEAM_NAMES
            .iter()
            .copied()
            .filter(|name| !self.names.iter().any(|n| n == name))
            .collect();
        let name = self.rng.choice(available).map_or_else(
            || format!("Team {}", char::from(b'A' + self.names.len() as u8)),
            str::to_string,
        );
        self.names.push(name);
        true
    }

    pub fn remove_team(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.names.len() {
            return false;
        }
        self.names.remove(index);
        true
    }

    pub fn name_mut(&mut self, index: usize) -> Option<&mut String> {
        self.names.get_mut(index)
    }

    pub fn increase_timer(&mut self) {
        self.timer_seconds = (self.timer_seconds + STEP_SECONDS).min(MAX_SECONDS);
    }

    pub fn decrease_timer(&mut self) {
        self.timer_seconds = self.timer_seconds.saturating_sub(STEP_SECONDS);
    }

    /// Build the teams; blank names fall back to `Team <n>`.
    pub fn roster(&self) -> Roster {
        Roster::new(
            self.names
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let trimmed = name.trim();
                    if trimmed.is_empty() {
                        Team::new(idx, format!("Team {}", idx + 1))
                    } else {
                        Team::new(idx, trimmed)
                    }
                })
                .collect(),
        )
    }
}

impl Default for TeamSetup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> TeamSetup {
        TeamSetup::with_rng(fastrand::Rng::with_seed(5))
    }

    #[test]
    fn test_starts_with_two_distinct_names() {
        let setup = setup();
        assert_eq!(setup.names().len(), MIN_TEAMS);
        assert_ne!(setup.names()[0], setup.names()[1]);
        assert_eq!(setup.timer_seconds(), DEFAULT_SECONDS);
    }

    #[test]
    fn test_team_count_bounds() {
        let mut setup = setup();
        assert!(!setup.remove_team(0), "Never below two teams");
        assert!(setup.add_team());
        assert!(setup.add_team());
        assert!(!setup.add_team(), "Never above four teams");
        assert!(setup.remove_team(3));
        assert_eq!(setup.names().len(), 3);
    }

    #[test]
    fn test_blank_names_fall_back() {
        let mut setup = setup();
        *setup.name_mut(0).unwrap() = "   ".to_string();
        *setup.name_mut(1).unwrap() = "  Owls ".to_string();
        let roster = setup.roster();
        assert_eq!(roster.teams()[0].name, "Team 1");
        assert_eq!(roster.teams()[1].name, "Owls");
        assert_eq!(roster.teams()[1].id, "team-1");
        assert!(roster.teams().iter().all(|t| t.score == 0));
    }

    #[test]
    fn test_timer_steps_and_bounds() {
        let mut setup = setup();
        for _ in 0..30 {
            setup.increase_timer();
        }
        assert_eq!(setup.timer_seconds(), MAX_SECONDS);
        for _ in 0..30 {
            setup.decrease_timer();
        }
        assert_eq!(setup.timer_seconds(), 0, "Zero disables the timer");
    }
}
