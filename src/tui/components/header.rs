//! Header component showing the game title, active theme and turn timer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Palette};

/// Seconds at which the timer turns urgent.
const URGENT_SECONDS: u32 = 10;

#[derive(Default)]
pub struct HeaderInput {
    pub theme: Option<String>,
    pub time_left: Option<u32>,
}

#[derive(Default)]
pub struct Header {
    input: HeaderInput,
}

impl Component for Header {
    type Input = HeaderInput;
    type Event = ();

    fn update(&mut self, input: Self::Input) {
        self.input = input;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, timer_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(area);

        let mut title = vec![Span::styled("Spectral Mind", Palette::TITLE)];
        if let Some(theme) = &self.input.theme {
            title.push(Span::styled("  ·  ", Palette::DIM));
            title.push(Span::styled(theme.clone(), Palette::NORMAL));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), title_area);

        let Some(left) = self.input.time_left else {
            return;
        };
        let timer = if left == 0 {
            Span::styled("TIME'S UP!", Palette::ERROR)
        } else if left <= URGENT_SECONDS {
            Span::styled(format!("{left}s"), Palette::TIMER_URGENT)
        } else {
            Span::styled(format!("{left}s"), Palette::TIMER)
        };
        frame.render_widget(Paragraph::new(Line::from(timer)).right_aligned(), timer_area);
    }
}
