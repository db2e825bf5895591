//! Status bar with keybindings and team scores.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};
use crate::game::Team;

/// Input for the status bar.
#[derive(Default)]
pub struct StatusInput {
    pub keybindings: &'static [(&'static str, &'static str)],
    /// Teams in play, with the active one, when a game is running.
    pub scores: Option<(Vec<Team>, usize)>,
}

#[derive(Default)]
pub struct StatusBar {
    input: StatusInput,
}

impl Component for StatusBar {
    type Input = StatusInput;
    type Event = ();

    fn update(&mut self, input: Self::Input) {
        self.input = input;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let score_line = self.input.scores.as_ref().map(|(teams, active)| score_spans(teams, *active));
        let [keys_area, scores_area] = if score_line.is_some() {
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area)
        } else {
            [area, Rect::default()]
        };

        let separator = Span::styled(" │ ", Palette::DIM);
        let keybind_spans = self.input.keybindings.iter().enumerate().flat_map(|(i, (key, desc))| {
            let prefix = (i > 0).then(|| separator.clone());
            prefix.into_iter().chain([
                Span::styled(*key, Palette::KEY),
                Span::raw(format!(": {desc}")),
            ])
        });
        let help_prefix = (!self.input.keybindings.is_empty()).then(|| separator.clone());
        let help = help_prefix
            .into_iter()
            .chain([Span::styled("?", Palette::KEY), Span::raw(": help")]);
        let spans: Vec<Span> = keybind_spans.chain(help).collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), keys_area);

        if let Some(line) = score_line {
            frame.render_widget(Paragraph::new(line), scores_area);
        }
    }
}

fn score_spans(teams: &[Team], active: usize) -> Line<'static> {
    let spans: Vec<Span> = teams
        .iter()
        .enumerate()
        .flat_map(|(idx, team)| {
            let mut style = Style::new().fg(Palette::team(idx));
            if idx == active {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            [
                Span::styled(format!(" {} ", team.name), style),
                Span::styled(format!("{}  ", team.score), Palette::NORMAL),
            ]
        })
        .collect();
    Line::from(spans)
}
