//! Full-window screens, one per stage of the app.

mod custom_editor;
mod intro;
mod play;
mod scoreboard;
mod setup;
mod theme_picker;

use std::time::Instant;

pub use custom_editor::CustomEditor;
use crossterm::event::{KeyEvent, MouseEvent};
pub use intro::Intro;
pub use play::PlayScreen;
use ratatui::{layout::Rect, Frame};
pub use scoreboard::Scoreboard;
pub use setup::SetupScreen;
pub use theme_picker::ThemePicker;

use crate::game::{Roster, Theme};

/// Request from a screen to move the app somewhere else.
#[derive(Debug)]
pub enum Transition {
    /// Leave the rules screen, optionally never showing it again.
    FinishIntro { skip_intro: bool },
    ShowThemes,
    ChooseTheme(Theme),
    OpenCustomEditor,
    StartGame { roster: Roster, timer_seconds: u32 },
    GameOver(Roster),
    /// Ask before abandoning the game in progress.
    RequestQuit,
    Exit,
}

/// A screen owns its state and turns input into transitions.
pub trait Screen {
    /// Title shown in the border.
    const NAME: &'static str;

    /// Keys valid right now, as (key, description) pairs.
    fn keybindings(&self) -> &'static [(&'static str, &'static str)];

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Transition>;

    /// Whether printable keys go to a text field, so global shortcuts like
    /// `?` must not steal them.
    fn captures_text(&self) -> bool {
        false
    }

    /// Handle a mouse event. Returns true if the event was consumed.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _now: Instant) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, now: Instant);
}

/// Index after moving `delta` rows through a list of `len`, clamped to it.
pub(crate) fn step_selection(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}
