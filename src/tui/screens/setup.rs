//! Team and timer setup before a game.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{step_selection, Screen, Transition};
use crate::{
    game::timer::MAX_SECONDS,
    setup::{TeamSetup, MAX_TEAMS},
    store::MAX_LABEL_CHARS,
    tui::components::Palette,
};

pub struct SetupScreen {
    setup: TeamSetup,
    theme_name: String,
    theme_cards: usize,
    selected: usize,
}

impl SetupScreen {
    pub fn new(theme_name: String, theme_cards: usize) -> Self {
        Self {
            setup: TeamSetup::default(),
            theme_name,
            theme_cards,
            selected: 0,
        }
    }

    fn start(&self) -> Transition {
        Transition::StartGame {
            roster: self.setup.roster(),
            timer_seconds: self.setup.timer_seconds(),
        }
    }

    fn handle_ctrl(&mut self, code: KeyCode) -> Option<Transition> {
        match code {
            KeyCode::Char('a') => {
                if self.setup.add_team() {
                    self.selected = self.setup.names().len() - 1;
                }
            }
            KeyCode::Char('d') => {
                if self.setup.remove_team(self.selected) {
                    self.selected = self.selected.min(self.setup.names().len() - 1);
                }
            }
            KeyCode::Char('t') => return Some(Transition::ShowThemes),
            _ => {}
        }
        None
    }

    fn timer_label(&self) -> String {
        match self.setup.timer_seconds() {
            0 => "Disabled".to_string(),
            seconds => format!("{seconds}s"),
        }
    }
}

impl Screen for SetupScreen {
    const NAME: &'static str = "Game setup";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("↑/↓", "team"),
            ("←/→", "timer"),
            ("Ctrl+A", "add team"),
            ("Ctrl+D", "remove team"),
            ("Ctrl+T", "change theme"),
            ("Enter", "start"),
            ("Esc", "back"),
        ]
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Option<Transition> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_ctrl(key.code);
        }
        match key.code {
            KeyCode::Enter => return Some(self.start()),
            KeyCode::Esc => return Some(Transition::ShowThemes),
            KeyCode::Up => {
                self.selected = step_selection(self.selected, -1, self.setup.names().len());
            }
            KeyCode::Down => {
                self.selected = step_selection(self.selected, 1, self.setup.names().len());
            }
            KeyCode::Left => self.setup.decrease_timer(),
            KeyCode::Right => self.setup.increase_timer(),
            KeyCode::Backspace => {
                if let Some(name) = self.setup.name_mut(self.selected) {
                    name.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(name) = self.setup.name_mut(self.selected) {
                    if name.chars().count() < MAX_LABEL_CHARS {
                        name.push(c);
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        #[allow(clippy::cast_possible_truncation)]
        let teams_height = MAX_TEAMS as u16 + 2;
        let [theme_area, teams_area, timer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(teams_height),
            Constraint::Length(3),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Theme: ", Palette::DIM),
                Span::styled(self.theme_name.as_str(), Palette::NORMAL),
                Span::styled(format!("  ({} cards)", self.theme_cards), Palette::DIM),
            ])),
            theme_area,
        );

        let team_lines: Vec<Line> = self
            .setup
            .names()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let selected = idx == self.selected;
                let marker = if selected { "▶ " } else { "  " };
                let cursor = if selected { "▏" } else { "" };
                let style = if selected { Palette::SELECTION } else { Palette::NORMAL };
                Line::from(vec![
                    Span::styled(format!("{marker}{}. ", idx + 1), Style::new().fg(Palette::team(idx))),
                    Span::styled(format!("{name}{cursor}"), style),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(team_lines).block(
                Block::bordered()
                    .title(format!(" Teams ({}/{MAX_TEAMS}) ", self.setup.names().len()))
                    .border_style(Style::new().fg(Palette::BORDER)),
            ),
            teams_area,
        );

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (f64::from(self.setup.timer_seconds()) / f64::from(MAX_SECONDS) * 30.0) as usize;
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("█".repeat(filled), Palette::TIMER),
                Span::styled("─".repeat(30 - filled), Palette::TRACK),
                Span::styled(format!("  {}", self.timer_label()), Palette::NORMAL),
            ]))
            .block(
                Block::bordered()
                    .title(" Turn timer ")
                    .border_style(Style::new().fg(Palette::BORDER)),
            ),
            timer_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_selected_team() {
        let mut screen = SetupScreen::new("General".to_string(), 20);
        let now = Instant::now();
        screen.handle_key(key(KeyCode::Down), now);
        for _ in 0..40 {
            screen.handle_key(key(KeyCode::Backspace), now);
        }
        for c in "Owls".chars() {
            screen.handle_key(key(KeyCode::Char(c)), now);
        }
        match screen.handle_key(key(KeyCode::Enter), now) {
            Some(Transition::StartGame { roster, timer_seconds }) => {
                assert_eq!(roster.teams()[1].name, "Owls");
                assert_eq!(timer_seconds, 60);
            }
            other => panic!("unexpected transition {other:?}"),
        }
    }

    #[test]
    fn test_control_keys_manage_teams() {
        let mut screen = SetupScreen::new("General".to_string(), 20);
        let now = Instant::now();
        screen.handle_key(ctrl('a'), now);
        assert_eq!(screen.setup.names().len(), 3);
        assert_eq!(screen.selected, 2);
        screen.handle_key(ctrl('d'), now);
        screen.handle_key(ctrl('d'), now);
        assert_eq!(screen.setup.names().len(), 2, "Never below two teams");
        assert!(matches!(
            screen.handle_key(ctrl('t'), now),
            Some(Transition::ShowThemes)
        ));
    }
}
