//! Final standings after a game.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph},
    Frame,
};

use super::{Screen, Transition};
use crate::{
    game::{Roster, Team},
    tui::components::Palette,
};

const BAR_WIDTH: u16 = 9;

pub struct Scoreboard {
    roster: Roster,
}

impl Scoreboard {
    pub const fn new(roster: Roster) -> Self {
        Self { roster }
    }

    /// Teams sharing the top score, or none if nobody scored.
    fn winners(&self) -> Vec<&Team> {
        let standings = self.roster.standings();
        let Some(best) = standings.first().map(|team| team.score) else {
            return Vec::new();
        };
        if best == 0 {
            return Vec::new();
        }
        standings.into_iter().take_while(|team| team.score == best).collect()
    }

    fn headline(&self) -> Line<'static> {
        let winners = self.winners();
        let text = match winners.as_slice() {
            [] => "Nobody scored. Try again!".to_string(),
            [team] => format!("{} wins!", team.name),
            teams => {
                let names: Vec<&str> = teams.iter().map(|team| team.name.as_str()).collect();
                format!("Tie between {}", names.join(" & "))
            }
        };
        Line::styled(text, Palette::TITLE).centered()
    }
}

impl Screen for Scoreboard {
    const NAME: &'static str = "Final scores";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        &[("Enter", "play again"), ("q", "exit")]
    }

    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Option<Transition> {
        match key.code {
            KeyCode::Enter => Some(Transition::ShowThemes),
            KeyCode::Char('q') | KeyCode::Esc => Some(Transition::Exit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [headline_area, chart_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
        frame.render_widget(Paragraph::new(self.headline()), headline_area);

        // Bars keep seating order; colors follow the team.
        let bars: Vec<Bar> = self
            .roster
            .teams()
            .iter()
            .enumerate()
            .map(|(idx, team)| {
                let color = Palette::team(idx);
                Bar::default()
                    .value(u64::from(team.score))
                    .label(Line::from(team.name.clone()))
                    .text_value(team.score.to_string())
                    .style(Style::new().fg(color))
                    .value_style(Style::new().bg(color).add_modifier(Modifier::BOLD))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::bordered().border_style(Style::new().fg(Palette::BORDER)))
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_WIDTH)
            .bar_gap(3);
        frame.render_widget(chart, chart_area);
    }
}
