//! HelpMenu component - overlay showing keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{Component, Palette};

const GLOBAL_KEYBINDINGS: &[(&str, &str)] = &[("?/F1", "toggle help"), ("Ctrl+C", "exit")];

/// Help menu popup listing the keys of the current screen.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
    keybindings: &'static [(&'static str, &'static str)],
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for HelpMenu {
    type Input = &'static [(&'static str, &'static str)];
    type Event = KeyEvent;

    fn update(&mut self, input: Self::Input) {
        self.keybindings = input;
    }

    fn handle_event(&mut self, key: KeyEvent) -> bool {
        if !self.visible {
            return false;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
            self.visible = false;
        }
        // Swallow everything else while the overlay is open.
        true
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let bindings = || self.keybindings.iter().chain(GLOBAL_KEYBINDINGS);
        let key_width = bindings().map(|(key, _)| key.len()).max().unwrap_or(0);
        let desc_width = bindings().map(|(_, desc)| desc.len()).max().unwrap_or(0);

        #[allow(clippy::cast_possible_truncation)]
        let width = ((key_width + desc_width + 6) as u16).min(area.width);
        #[allow(clippy::cast_possible_truncation)]
        let height = ((self.keybindings.len() + GLOBAL_KEYBINDINGS.len()) as u16 + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 1);
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(Color::Cyan));

        let help_lines: Vec<Line> = bindings()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>key_width$}"), Palette::KEY),
                    Span::raw(format!("  {desc}")),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
