//! Horizontal dial: the spectrum as a track with a needle.
//!
//! Column `0` of the track is the left pole (0) and the last column is the
//! right pole (100).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::Palette;
use crate::game::{ScoreBand, SpectrumCard};

/// Rows needed to draw the dial.
pub const DIAL_HEIGHT: u16 = 5;

const TRACK_ROWS: u16 = 3;

/// Value under track column `offset` on a track `width` columns wide.
#[allow(clippy::cast_precision_loss)]
pub fn column_value(offset: u16, width: u16) -> f64 {
    if width <= 1 {
        return 50.0;
    }
    (f64::from(offset) / f64::from(width - 1) * 100.0).clamp(0.0, 100.0)
}

/// Track column closest to `value`.
#[allow(clippy::cast_sign_loss)]
pub fn value_column(value: f64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let column = (value.clamp(0.0, 100.0) / 100.0 * f64::from(width - 1)).round();
    column as u16
}

/// What the dial shows for the current phase.
pub struct Dial<'a> {
    card: Option<&'a SpectrumCard>,
    target: Option<u8>,
    needle: Option<f64>,
    covered: bool,
}

impl<'a> Dial<'a> {
    pub const fn new(card: Option<&'a SpectrumCard>) -> Self {
        Self {
            card,
            target: None,
            needle: None,
            covered: false,
        }
    }

    /// Draw the scoring zones around `target`.
    pub const fn target(mut self, target: u8) -> Self {
        self.target = Some(target);
        self
    }

    pub const fn needle(mut self, value: f64) -> Self {
        self.needle = Some(value);
        self
    }

    /// Hide the track behind the cover.
    pub const fn covered(mut self, covered: bool) -> Self {
        self.covered = covered;
        self
    }

    /// Area of the track inside `area`, for mapping mouse input.
    pub fn track_area(area: Rect) -> Rect {
        let [_, track, _] = Self::rows(area);
        track
    }

    fn rows(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(TRACK_ROWS),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn track_style(&self, value: f64) -> (&'static str, Style) {
        if self.covered {
            return ("▒", Palette::COVER);
        }
        let Some(target) = self.target else {
            return ("─", Palette::TRACK);
        };
        match ScoreBand::for_distance((value - f64::from(target)).abs()) {
            ScoreBand::Miss => ("─", Palette::TRACK),
            band => ("█", Style::new().fg(Palette::band(band))),
        }
    }
}

impl Widget for Dial<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label_area, track_area, needle_area] = Self::rows(area);

        if let Some(card) = self.card {
            Line::from(Span::styled(format!("◀ {}", card.left), Palette::LEFT_LABEL))
                .render(label_area, buf);
            Line::from(Span::styled(format!("{} ▶", card.right), Palette::RIGHT_LABEL))
                .alignment(Alignment::Right)
                .render(label_area, buf);
        }

        let width = track_area.width;
        for offset in 0..width {
            let (symbol, style) = self.track_style(column_value(offset, width));
            for row in 0..track_area.height {
                if let Some(cell) = buf.cell_mut((track_area.x + offset, track_area.y + row)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }

        let Some(value) = self.needle else {
            return;
        };
        let x = track_area.x + value_column(value, width);
        for row in 0..track_area.height {
            if let Some(cell) = buf.cell_mut((x, track_area.y + row)) {
                cell.set_symbol("┃").set_style(Palette::NEEDLE);
            }
        }
        if let Some(cell) = buf.cell_mut((x, needle_area.y)) {
            cell.set_symbol("▲").set_style(Palette::NEEDLE);
        }
    }
}
