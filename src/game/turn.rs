//! Turn state machine.
//!
//! ```text
//! TurnStart -> PsychicView -> Guessing -> Reveal -> TurnStart | GameOver
//!                  |              |
//!                  +-- timeout ---+--> Reveal (0 points)
//! PsychicView -- skip --> TurnStart
//! ```
//!
//! Every transition is a method that returns `true` when it was applied and
//! `false` when the action is not valid in the current phase; rejected actions
//! leave the game untouched.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::{
    card::SpectrumCard,
    confirm::{ConfirmGate, Pending},
    deck::Deck,
    scoring::{self, ScoreBand},
    team::{Roster, Team},
    timer::{TimerStatus, TurnTimer},
};

/// Lowest target the psychic can be dealt.
pub const TARGET_MIN: u8 = 10;
/// Highest target the psychic can be dealt.
pub const TARGET_MAX: u8 = 89;
/// Where the dial needle rests at the start of a turn.
pub const GUESS_START: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next team's psychic to take the device.
    TurnStart,
    /// Psychic sees the target and thinks of a clue.
    PsychicView,
    /// Team moves the dial with the target hidden.
    Guessing,
    /// Target shown, points awarded.
    Reveal,
    /// Playing loop finished.
    GameOver,
}

impl Phase {
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::PsychicView | Self::Guessing)
    }
}

/// Destructive actions routed through the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SkipTurn,
    EndGame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnState {
    pub active_team: usize,
    pub spectrum: Option<SpectrumCard>,
    pub target: u8,
    pub guess: f64,
    pub round_score: u32,
    /// The turn ended because the timer ran out.
    pub timed_out: bool,
}

impl TurnState {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_points(self.round_score)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            active_team: 0,
            spectrum: None,
            target: 50,
            guess: GUESS_START,
            round_score: 0,
            timed_out: false,
        }
    }
}

pub struct Game {
    roster: Roster,
    deck: Deck,
    timer: TurnTimer,
    phase: Phase,
    turn: TurnState,
    cover_closed: bool,
    confirming_guess: bool,
    confirm: ConfirmGate<GameAction>,
    rng: fastrand::Rng,
}

impl Game {
    /// Start a game at `TurnStart` with the first team active.
    pub fn new(roster: Roster, deck: Deck, timer_seconds: u32) -> Self {
        Self::with_rng(roster, deck, timer_seconds, fastrand::Rng::new())
    }

    pub fn with_rng(roster: Roster, deck: Deck, timer_seconds: u32, rng: fastrand::Rng) -> Self {
        info!(teams = roster.len(), timer_seconds, theme = %deck.theme().name, "Game started");
        Self {
            roster,
            deck,
            timer: TurnTimer::new(timer_seconds),
            phase: Phase::TurnStart,
            turn: TurnState::default(),
            cover_closed: false,
            confirming_guess: false,
            confirm: ConfirmGate::new(),
            rng,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.roster.get(self.turn.active_team)
    }

    pub const fn cover_closed(&self) -> bool {
        self.cover_closed
    }

    pub const fn is_confirming_guess(&self) -> bool {
        self.confirming_guess
    }

    pub fn time_left(&self, now: Instant) -> Option<u32> {
        self.timer.remaining(now)
    }

    pub const fn pending_confirmation(&self) -> Option<&Pending<GameAction>> {
        self.confirm.pending()
    }

    /// Whether the dial accepts input right now.
    pub const fn dial_interactive(&self) -> bool {
        matches!(self.phase, Phase::Guessing) && !self.confirming_guess
    }

    /// Psychic takes the device: deal a card and a fresh target.
    pub fn start_turn(&mut self, now: Instant) -> bool {
        if self.phase != Phase::TurnStart {
            return self.reject("start turn");
        }
        let Some(spectrum) = self.deck.draw() else {
            warn!(theme = %self.deck.theme().name, "Active theme has no cards");
            return false;
        };

        self.turn.target = self.rng.u8(TARGET_MIN..=TARGET_MAX);
        self.turn.guess = GUESS_START;
        self.turn.round_score = 0;
        self.turn.timed_out = false;
        info!(
            team = self.turn.active_team,
            left = %spectrum.left,
            right = %spectrum.right,
            "Turn started"
        );
        self.turn.spectrum = Some(spectrum);
        self.cover_closed = false;
        self.confirming_guess = false;
        self.phase = Phase::PsychicView;
        self.timer.start(now);
        true
    }

    /// Show or hide the target while the psychic holds the device.
    pub fn toggle_cover(&mut self) -> bool {
        if self.phase != Phase::PsychicView {
            return self.reject("toggle cover");
        }
        self.cover_closed = !self.cover_closed;
        true
    }

    /// Pass the device to the team. Requires the target to be hidden.
    pub fn hand_off(&mut self, now: Instant) -> bool {
        if self.phase != Phase::PsychicView || !self.cover_closed {
            return self.reject("hand off");
        }
        self.phase = Phase::Guessing;
        self.timer.start(now);
        debug!(team = self.turn.active_team, "Guessing started");
        true
    }

    /// Move the needle to `value`, clamped to the scale.
    pub fn set_guess(&mut self, value: f64) -> bool {
        if !self.dial_interactive() || value.is_nan() {
            return false;
        }
        self.turn.guess = value.clamp(0.0, 100.0);
        true
    }

    pub fn nudge_guess(&mut self, delta: f64) -> bool {
        self.set_guess(self.turn.guess + delta)
    }

    /// First step of locking in: freezes the dial until confirmed or cancelled.
    pub fn lock_in(&mut self) -> bool {
        if !self.dial_interactive() {
            return self.reject("lock in");
        }
        self.confirming_guess = true;
        true
    }

    pub fn cancel_lock(&mut self) -> bool {
        if self.phase != Phase::Guessing || !self.confirming_guess {
            return self.reject("cancel lock");
        }
        self.confirming_guess = false;
        true
    }

    /// Second step of locking in: score the guess and reveal.
    ///
    /// The timer is polled first, so a countdown that has already run out wins
    /// over the confirmation.
    pub fn finalize_guess(&mut self, now: Instant) -> bool {
        if self.poll_timer(now) == TimerStatus::Expired {
            debug!("Confirmation arrived after the timer expired");
            return false;
        }
        if self.phase != Phase::Guessing || !self.confirming_guess {
            return self.reject("finalize guess");
        }

        let points = scoring::score(self.turn.guess, f64::from(self.turn.target));
        info!(
            guess = self.turn.guess,
            target = self.turn.target,
            points,
            "Guess locked in"
        );
        self.finish_round(points, false);
        true
    }

    /// Advance the countdown; on expiry during a timed phase the turn is
    /// forced to `Reveal` with zero points.
    pub fn poll_timer(&mut self, now: Instant) -> TimerStatus {
        let status = self.timer.poll(now);
        if status == TimerStatus::Expired && self.phase.is_timed() {
            info!(team = self.turn.active_team, "Time expired");
            self.confirm.cancel();
            self.finish_round(0, true);
        }
        status
    }

    /// Ask to skip the current turn. Only the psychic can skip.
    pub fn request_skip(&mut self) -> bool {
        if self.phase != Phase::PsychicView {
            return self.reject("skip");
        }
        self.confirm.request(
            GameAction::SkipTurn,
            "Are you sure you want to skip this turn? No points will be awarded.",
        );
        true
    }

    pub fn request_end_game(&mut self) -> bool {
        if self.phase != Phase::Reveal {
            return self.reject("end game");
        }
        self.confirm
            .request(GameAction::EndGame, "End the game and see final results?");
        true
    }

    /// Carry out the pending action, if it still applies to the current phase.
    pub fn confirm(&mut self) -> bool {
        match self.confirm.confirm() {
            Some(GameAction::SkipTurn) if self.phase == Phase::PsychicView => {
                info!(team = self.turn.active_team, "Turn skipped");
                self.timer.stop();
                self.advance_team();
                true
            }
            Some(GameAction::EndGame) if self.phase == Phase::Reveal => {
                info!("Game finished");
                self.phase = Phase::GameOver;
                true
            }
            Some(action) => {
                debug!(?action, phase = ?self.phase, "Stale confirmation dropped");
                false
            }
            None => false,
        }
    }

    pub fn cancel_confirmation(&mut self) {
        self.confirm.cancel();
    }

    /// Hand over to the next team after a reveal.
    pub fn next_team(&mut self) -> bool {
        if self.phase != Phase::Reveal {
            return self.reject("next team");
        }
        self.advance_team();
        true
    }

    fn finish_round(&mut self, points: u32, timed_out: bool) {
        self.timer.stop();
        self.turn.round_score = points;
        self.turn.timed_out = timed_out;
        self.roster.update_score(self.turn.active_team, points);
        self.confirming_guess = false;
        self.phase = Phase::Reveal;
    }

    fn advance_team(&mut self) {
        self.turn.active_team = self.roster.next_index(self.turn.active_team);
        self.turn.spectrum = None;
        self.phase = Phase::TurnStart;
    }

    fn reject(&self, action: &str) -> bool {
        debug!(action, phase = ?self.phase, "Action not allowed");
        false
    }

    #[cfg(test)]
    fn set_target(&mut self, target: u8) {
        self.turn.target = target;
    }
}
