//! The playing loop: one screen per turn phase around a shared dial.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Screen, Transition};
use crate::{
    game::{Game, Phase},
    tui::components::{dial, ConfirmDialog, Dial, Palette, DIAL_HEIGHT},
};

/// Dial movement for arrow keys, and with Shift / PageUp / PageDown.
const FINE_STEP: f64 = 1.0;
const COARSE_STEP: f64 = 5.0;

pub struct PlayScreen {
    game: Game,
    /// Track area from the last render, for mouse input.
    track: Rect,
}

impl PlayScreen {
    pub const fn new(game: Game) -> Self {
        Self {
            game,
            track: Rect::ZERO,
        }
    }

    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Advance the turn timer.
    pub fn tick(&mut self, now: Instant) {
        self.game.poll_timer(now);
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.game.confirm();
                if self.game.phase() == Phase::GameOver {
                    return Some(Transition::GameOver(self.game.roster().clone()));
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.game.cancel_confirmation(),
            _ => {}
        }
        None
    }

    fn handle_guess_key(&mut self, key: KeyEvent, now: Instant) {
        if self.game.is_confirming_guess() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.game.finalize_guess(now);
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.game.cancel_lock();
                }
                _ => {}
            }
            return;
        }

        let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
        let step = if coarse { COARSE_STEP } else { FINE_STEP };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.game.nudge_guess(-step);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.game.nudge_guess(step);
            }
            KeyCode::PageDown => {
                self.game.nudge_guess(-COARSE_STEP);
            }
            KeyCode::PageUp => {
                self.game.nudge_guess(COARSE_STEP);
            }
            KeyCode::Home => {
                self.game.set_guess(0.0);
            }
            KeyCode::End => {
                self.game.set_guess(100.0);
            }
            KeyCode::Enter => {
                self.game.lock_in();
            }
            _ => {}
        }
    }

    fn prompt(&self) -> Vec<Line<'static>> {
        let team = self
            .game
            .active_team()
            .map_or_else(String::new, |team| team.name.clone());
        let team_style = Style::new()
            .fg(Palette::team(self.game.turn().active_team))
            .add_modifier(Modifier::BOLD);

        match self.game.phase() {
            Phase::TurnStart => vec![
                Line::styled("Up next", Palette::DIM),
                Line::styled(team, team_style),
                Line::default(),
                Line::from("Pass the device to your Psychic."),
                Line::styled("Only the Psychic should see the next screen!", Palette::DIM),
            ],
            Phase::PsychicView => vec![
                Line::styled(format!("{team}: Psychic"), team_style),
                Line::from("1. Look at the target zone.  2. Think of a clue."),
                Line::from("3. Hide the target.  4. Say your clue out loud."),
            ],
            Phase::Guessing => vec![
                Line::styled(team, team_style),
                Line::styled("Listen to the clue and position the dial.", Palette::DIM),
            ],
            Phase::Reveal => {
                let turn = self.game.turn();
                let band = turn.band();
                let verdict = if turn.timed_out { "TIME'S UP!" } else { band.label() };
                let style = Style::new()
                    .fg(Palette::band(band))
                    .add_modifier(Modifier::BOLD);
                vec![
                    Line::styled(format!("+{}", turn.round_score), style),
                    Line::styled(verdict, style),
                    Line::styled(
                        format!("Target {}  ·  Guess {:.0}", turn.target, turn.guess),
                        Palette::DIM,
                    ),
                ]
            }
            Phase::GameOver => vec![Line::from("Game over")],
        }
    }

    fn render_dial(&mut self, frame: &mut Frame, area: Rect) {
        let turn = self.game.turn();
        let card = turn.spectrum.as_ref();
        let widget = match self.game.phase() {
            Phase::TurnStart | Phase::GameOver => return,
            Phase::PsychicView => Dial::new(card)
                .target(turn.target)
                .covered(self.game.cover_closed()),
            Phase::Guessing => Dial::new(card).needle(turn.guess),
            Phase::Reveal => Dial::new(card).target(turn.target).needle(turn.guess),
        };
        frame.render_widget(widget, area);
        self.track = Dial::track_area(area);
    }

    fn status_line(&self) -> Line<'static> {
        match self.game.phase() {
            Phase::TurnStart => Line::styled(
                format!("{} cards left before the deck reshuffles", self.game.deck().remaining()),
                Palette::DIM,
            ),
            Phase::PsychicView if !self.game.cover_closed() => {
                Line::styled("Hide the target (t) before handing over.", Palette::DIM)
            }
            Phase::PsychicView => Line::styled("Target hidden. Enter: give device to team.", Palette::DIM),
            Phase::Guessing if self.game.is_confirming_guess() => Line::from(vec![
                Span::styled("Lock in this guess? ", Palette::NORMAL),
                Span::styled("Enter", Palette::KEY),
                Span::raw(": confirm  "),
                Span::styled("Esc", Palette::KEY),
                Span::raw(": keep adjusting"),
            ]),
            Phase::Guessing => Line::styled(format!("Guess: {:.0}", self.game.turn().guess), Palette::NORMAL),
            _ => Line::default(),
        }
    }
}

impl Screen for PlayScreen {
    const NAME: &'static str = "Play";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.game.pending_confirmation().is_some() {
            return &[("y", "confirm"), ("n", "cancel")];
        }
        match self.game.phase() {
            Phase::TurnStart => &[("Enter", "I am the Psychic"), ("q", "quit")],
            Phase::PsychicView => &[
                ("t", "hide/show target"),
                ("Enter", "give device to team"),
                ("s", "skip turn"),
                ("q", "quit"),
            ],
            Phase::Guessing if self.game.is_confirming_guess() => {
                &[("Enter", "confirm"), ("Esc", "cancel")]
            }
            Phase::Guessing => &[
                ("←/→", "move dial"),
                ("Shift", "move faster"),
                ("mouse", "drag dial"),
                ("Enter", "lock in guess"),
                ("q", "quit"),
            ],
            Phase::Reveal => &[("Enter", "next team"), ("f", "finish game"), ("q", "quit")],
            Phase::GameOver => &[],
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Transition> {
        // Let an expired countdown win over whatever this key would do.
        self.game.poll_timer(now);

        if self.game.pending_confirmation().is_some() {
            return self.handle_confirm_key(key);
        }
        if key.code == KeyCode::Char('q') {
            return Some(Transition::RequestQuit);
        }

        match self.game.phase() {
            Phase::TurnStart => {
                if key.code == KeyCode::Enter {
                    self.game.start_turn(now);
                }
            }
            Phase::PsychicView => match key.code {
                KeyCode::Char('t') => {
                    self.game.toggle_cover();
                }
                KeyCode::Enter => {
                    self.game.hand_off(now);
                }
                KeyCode::Char('s') => {
                    self.game.request_skip();
                }
                _ => {}
            },
            Phase::Guessing => self.handle_guess_key(key, now),
            Phase::Reveal => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => {
                    self.game.next_team();
                }
                KeyCode::Char('f') => {
                    self.game.request_end_game();
                }
                _ => {}
            },
            Phase::GameOver => {
                return Some(Transition::GameOver(self.game.roster().clone()));
            }
        }
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        self.game.poll_timer(now);
        let track = self.track;
        match mouse.kind {
            // A press has to land on the track; a drag may wander off it.
            MouseEventKind::Down(MouseButton::Left)
                if track.contains(Position::new(mouse.column, mouse.row)) => {}
            MouseEventKind::Drag(MouseButton::Left) => {}
            _ => return false,
        }
        let offset = mouse.column.saturating_sub(track.x);
        self.game.set_guess(dial::column_value(offset, track.width))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [prompt_area, _, dial_area, status_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(DIAL_HEIGHT),
            Constraint::Length(2),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(self.prompt()).centered(), prompt_area);
        self.render_dial(frame, dial_area);
        frame.render_widget(Paragraph::new(self.status_line()).centered(), status_area);

        if let Some(pending) = self.game.pending_confirmation() {
            frame.render_widget(ConfirmDialog::new(pending.message), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::{Deck, Roster, Team, Theme};

    fn timed_screen(timer_seconds: u32) -> PlayScreen {
        let roster = Roster::new(vec![Team::new(0, "A"), Team::new(1, "B")]);
        let theme = Theme::from_pairs("t", &[("a", "b"), ("c", "d"), ("e", "f")]);
        PlayScreen::new(Game::new(roster, Deck::new(theme), timer_seconds))
    }

    fn screen() -> PlayScreen {
        timed_screen(0)
    }

    fn press(screen: &mut PlayScreen, code: KeyCode) -> Option<Transition> {
        press_at(screen, code, Instant::now())
    }

    fn press_at(screen: &mut PlayScreen, code: KeyCode, now: Instant) -> Option<Transition> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys_walk_through_a_turn() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.game().phase(), Phase::PsychicView);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.game().phase(), Phase::PsychicView, "Target not hidden yet");
        press(&mut screen, KeyCode::Char('t'));
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.game().phase(), Phase::Guessing);

        press(&mut screen, KeyCode::Right);
        assert!((screen.game().turn().guess - 51.0).abs() < f64::EPSILON);

        press(&mut screen, KeyCode::Enter);
        assert!(screen.game().is_confirming_guess());
        press(&mut screen, KeyCode::Right);
        assert!(
            (screen.game().turn().guess - 51.0).abs() < f64::EPSILON,
            "Dial frozen while confirming"
        );
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.game().phase(), Phase::Reveal);

        press(&mut screen, KeyCode::Char('f'));
        match press(&mut screen, KeyCode::Char('y')) {
            Some(Transition::GameOver(roster)) => assert_eq!(roster.len(), 2),
            other => panic!("unexpected transition {other:?}"),
        }
    }

    #[test]
    fn test_mouse_moves_dial_only_while_guessing() {
        let mut screen = screen();
        screen.track = Rect::new(10, 5, 101, 3);
        let click = left_click(35, 6);
        assert!(!screen.handle_mouse(click, Instant::now()));

        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Char('t'));
        press(&mut screen, KeyCode::Enter);
        assert!(screen.handle_mouse(click, Instant::now()));
        assert!((screen.game().turn().guess - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mouse_after_deadline_does_not_move_dial() {
        let mut screen = timed_screen(10);
        screen.track = Rect::new(10, 5, 101, 3);
        let start = Instant::now();
        press_at(&mut screen, KeyCode::Enter, start);
        press_at(&mut screen, KeyCode::Char('t'), start);
        press_at(&mut screen, KeyCode::Enter, start);
        assert_eq!(screen.game().phase(), Phase::Guessing);

        // No tick between the deadline and the click.
        let late = start + Duration::from_secs(10);
        assert!(!screen.handle_mouse(left_click(35, 6), late));
        assert_eq!(screen.game().phase(), Phase::Reveal);
        assert!(screen.game().turn().timed_out);
        assert!((screen.game().turn().guess - 50.0).abs() < f64::EPSILON);
    }
}
