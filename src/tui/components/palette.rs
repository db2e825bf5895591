//! Centralized colors and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::game::ScoreBand;

/// Styling constants shared by all screens.
pub struct Palette;

impl Palette {
    // Base text
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const NORMAL: Style = Style::new().fg(Color::White);
    pub const TITLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new().fg(Color::Cyan);
    pub const ERROR: Style = Style::new().fg(Color::Red);

    // Selection highlighting
    pub const SELECTION: Style = Style::new().bg(Color::Rgb(40, 40, 60)).fg(Color::White);

    // Chrome
    pub const BORDER: Color = Color::DarkGray;
    pub const BORDER_FOCUSED: Color = Color::Magenta;

    // Dial
    pub const TRACK: Style = Style::new().fg(Color::Rgb(70, 70, 90));
    pub const COVER: Style = Style::new().fg(Color::Rgb(90, 60, 130));
    pub const NEEDLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
    pub const LEFT_LABEL: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
    pub const RIGHT_LABEL: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

    // Timer
    pub const TIMER: Style = Style::new().fg(Color::Green);
    pub const TIMER_URGENT: Style = Style::new().fg(Color::Rgb(255, 140, 0));

    /// Color for a scoring band, on the dial and the reveal banner.
    pub const fn band(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Perfect => Color::Green,
            ScoreBand::Great => Color::Blue,
            ScoreBand::Close => Color::Yellow,
            ScoreBand::Miss => Color::Red,
        }
    }

    /// Bar color for the team at `index`.
    pub const fn team(index: usize) -> Color {
        match index % 4 {
            0 => Color::Rgb(139, 92, 246),
            1 => Color::Rgb(236, 72, 153),
            2 => Color::Rgb(59, 130, 246),
            _ => Color::Rgb(16, 185, 129),
        }
    }
}
