//! Theme selection: the built-in decks plus the custom one.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{step_selection, Screen, Transition};
use crate::{
    game::{themes, Theme},
    store,
    tui::components::Palette,
};

pub struct ThemePicker {
    themes: Vec<Theme>,
    custom_cards: usize,
    state: ListState,
}

impl ThemePicker {
    pub fn new(custom_cards: usize) -> Self {
        Self {
            themes: themes::built_in(),
            custom_cards,
            state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Entries: every built-in theme, then "Custom".
    fn len(&self) -> usize {
        self.themes.len() + 1
    }

    fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    /// Blurb for the highlighted entry.
    fn description(&self) -> &str {
        self.themes
            .get(self.selected())
            .map_or(store::THEME_DESCRIPTION, |theme| theme.description.as_str())
    }

    fn choose(&self) -> Transition {
        self.themes
            .get(self.selected())
            .map_or(Transition::OpenCustomEditor, |theme| {
                Transition::ChooseTheme(theme.clone())
            })
    }
}

impl Screen for ThemePicker {
    const NAME: &'static str = "Choose a theme";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        &[("j/k", "move"), ("Enter", "select"), ("q", "exit")]
    }

    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Option<Transition> {
        let delta = match key.code {
            KeyCode::Up | KeyCode::Char('k') => -1,
            KeyCode::Down | KeyCode::Char('j') => 1,
            KeyCode::Enter => return Some(self.choose()),
            KeyCode::Char('q') => return Some(Transition::Exit),
            _ => return None,
        };
        let next = step_selection(self.selected(), delta, self.len());
        self.state.select(Some(next));
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [title_area, list_area, description_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled("Pick a deck of spectrum cards", Palette::TITLE)),
            title_area,
        );

        let custom_note = if self.custom_cards >= store::MIN_PLAYABLE {
            format!("{} cards", self.custom_cards)
        } else {
            format!("{} cards, needs {}", self.custom_cards, store::MIN_PLAYABLE)
        };
        let items: Vec<ListItem> = self
            .themes
            .iter()
            .map(|theme| (theme.name.as_str(), format!("{} cards", theme.len())))
            .chain([(store::THEME_NAME, custom_note)])
            .map(|(name, note)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<28}"), Palette::NORMAL),
                    Span::styled(note, Palette::DIM),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Palette::SELECTION)
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, list_area, &mut self.state);
        frame.render_widget(
            Paragraph::new(Line::styled(self.description().to_string(), Palette::DIM)),
            description_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(picker: &mut ThemePicker, code: KeyCode) -> Option<Transition> {
        picker.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    #[test]
    fn test_enter_selects_built_in_theme() {
        let mut picker = ThemePicker::new(0);
        press(&mut picker, KeyCode::Down);
        match press(&mut picker, KeyCode::Enter) {
            Some(Transition::ChooseTheme(theme)) => assert_eq!(theme.name, "Food & Drink"),
            other => panic!("unexpected transition {other:?}"),
        }
    }

    #[test]
    fn test_last_entry_opens_custom_editor() {
        let mut picker = ThemePicker::new(5);
        for _ in 0..20 {
            press(&mut picker, KeyCode::Char('j'));
        }
        assert!(matches!(
            press(&mut picker, KeyCode::Enter),
            Some(Transition::OpenCustomEditor)
        ));
    }

    #[test]
    fn test_description_follows_selection() {
        let mut picker = ThemePicker::new(0);
        assert_eq!(picker.description(), themes::general().description);
        press(&mut picker, KeyCode::Down);
        assert_eq!(picker.description(), themes::find("food & drink").unwrap().description);
        for _ in 0..20 {
            press(&mut picker, KeyCode::Down);
        }
        assert_eq!(picker.description(), store::THEME_DESCRIPTION);
    }
}
