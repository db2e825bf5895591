//! Rules screen shown on first launch.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{Screen, Transition};
use crate::tui::components::Palette;

const RULES: &[&str] = &[
    "Split into teams. Each turn one player is the Psychic.",
    "",
    "The Psychic secretly sees where the target sits on a spectrum",
    "between two opposing ideas, then gives a one-word clue.",
    "",
    "The rest of the team turns the dial to where they think the target is.",
    "",
];

#[derive(Default)]
pub struct Intro {
    dont_show_again: bool,
}

impl Screen for Intro {
    const NAME: &'static str = "How to play";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        &[("Enter", "continue"), ("d", "don't show again"), ("q", "exit")]
    }

    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Option<Transition> {
        match key.code {
            KeyCode::Enter => Some(Transition::FinishIntro {
                skip_intro: self.dont_show_again,
            }),
            KeyCode::Char('d') => {
                self.dont_show_again = !self.dont_show_again;
                None
            }
            KeyCode::Char('q') => Some(Transition::Exit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        let mut lines: Vec<Line> = vec![
            Line::styled("Get on the same wavelength", Palette::TITLE),
            Line::default(),
        ];
        lines.extend(RULES.iter().map(|text| Line::from(*text)));
        lines.extend([
            Line::from(vec![
                Span::styled("5", Palette::NORMAL),
                Span::raw(" points for a bullseye, "),
                Span::styled("3", Palette::NORMAL),
                Span::raw(" for close, "),
                Span::styled("1", Palette::NORMAL),
                Span::raw(" for nearby."),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw(if self.dont_show_again { "[x]" } else { "[ ]" }),
                Span::styled(" Don't show this again", Palette::DIM),
            ]),
        ]);

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_toggle_then_continue() {
        let mut intro = Intro::default();
        let now = Instant::now();
        intro.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE), now);
        let transition = intro.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
        assert!(matches!(
            transition,
            Some(Transition::FinishIntro { skip_intro: true })
        ));
    }
}
