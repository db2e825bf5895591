//! Reusable pieces of the UI.
//!
//! Components keep their own state and render into a `Frame`; plain widgets
//! (dial, confirm dialog) are built fresh each frame from game state.

mod confirm_dialog;
pub mod dial;
mod header;
mod help_menu;
mod palette;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use dial::{Dial, DIAL_HEIGHT};
pub use header::{Header, HeaderInput};
pub use help_menu::HelpMenu;
pub use palette::Palette;
use ratatui::{layout::Rect, Frame};
pub use status_bar::{StatusBar, StatusInput};

/// A UI component with co-located state, rendering, and event handling.
pub trait Component {
    /// Data pushed into the component before rendering.
    type Input;
    /// Event type handled (use `()` for display-only components).
    type Event;

    fn update(&mut self, input: Self::Input);

    /// Handle an event. Returns true if the event was consumed.
    fn handle_event(&mut self, _event: Self::Event) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect);
}
