//! Modal asking to confirm a destructive action.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use super::Palette;

const WIDTH: u16 = 44;
const HEIGHT: u16 = 7;

pub struct ConfirmDialog<'a> {
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

/// `area` shrunk to a `width` x `height` box in its center.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, WIDTH, HEIGHT);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Confirm ")
            .border_style(Style::new().fg(Color::Yellow));

        let text = vec![
            Line::from(self.message),
            Line::default(),
            Line::from(vec![
                Span::styled("y", Palette::KEY),
                Span::raw(": confirm   "),
                Span::styled("n", Palette::KEY),
                Span::raw(": cancel"),
            ])
            .centered(),
        ];

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .centered()
            .render(popup, buf);
    }
}
