//! Editor for the user's own spectrum cards.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::warn;

use super::{step_selection, Screen, Transition};
use crate::{
    game::{ConfirmGate, SpectrumCard},
    store::{CardStore, MAX_LABEL_CHARS, MIN_PLAYABLE},
    tui::components::{ConfirmDialog, Palette},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Left,
    Right,
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorAction {
    ClearAll,
}

pub struct CustomEditor {
    store: CardStore,
    cards: Vec<SpectrumCard>,
    left: String,
    right: String,
    focus: Focus,
    list: ListState,
    error: Option<String>,
    confirm: ConfirmGate<EditorAction>,
}

impl CustomEditor {
    pub fn new(store: CardStore) -> Self {
        let cards = store.load();
        Self {
            store,
            cards,
            left: String::new(),
            right: String::new(),
            focus: Focus::Left,
            list: ListState::default(),
            error: None,
            confirm: ConfirmGate::new(),
        }
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Left => Some(&mut self.left),
            Focus::Right => Some(&mut self.right),
            Focus::Cards => None,
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Left => Focus::Right,
            Focus::Right if self.cards.is_empty() => Focus::Left,
            Focus::Right => Focus::Cards,
            Focus::Cards => Focus::Left,
        };
        if self.focus == Focus::Cards && self.list.selected().is_none() {
            self.list.select(Some(0));
        }
    }

    fn add_card(&mut self) {
        match self.store.add(&self.left, &self.right) {
            Ok(cards) => {
                self.cards = cards;
                self.left.clear();
                self.right.clear();
                self.focus = Focus::Left;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn remove_selected(&mut self) {
        let Some(index) = self.list.selected() else {
            return;
        };
        match self.store.remove(index) {
            Ok(cards) => {
                self.cards = cards;
                if self.cards.is_empty() {
                    self.list.select(None);
                    self.focus = Focus::Left;
                } else {
                    self.list.select(Some(index.min(self.cards.len() - 1)));
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn clear_all(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear custom cards: {e}");
            self.error = Some(e.to_string());
            return;
        }
        self.cards.clear();
        self.list.select(None);
        self.focus = Focus::Left;
    }

    fn play(&mut self) -> Option<Transition> {
        let Some(theme) = self.store.theme() else {
            self.error = Some(format!("Add at least {MIN_PLAYABLE} cards to play"));
            return None;
        };
        Some(Transition::ChooseTheme(theme))
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.confirm.confirm() == Some(EditorAction::ClearAll) {
                    self.clear_all();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.confirm.cancel(),
            _ => {}
        }
    }

    fn handle_cards_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let next = step_selection(self.list.selected().unwrap_or(0), -1, self.cards.len());
                self.list.select(Some(next));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = step_selection(self.list.selected().unwrap_or(0), 1, self.cards.len());
                self.list.select(Some(next));
            }
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('c') if !self.cards.is_empty() => self.confirm.request(
                EditorAction::ClearAll,
                "Clear all custom cards? This cannot be undone.",
            ),
            KeyCode::Char('p') => return self.play(),
            _ => {}
        }
        None
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Transition> {
        match key.code {
            KeyCode::Enter if self.focus == Focus::Left => self.focus = Focus::Right,
            KeyCode::Enter => self.add_card(),
            KeyCode::Backspace => {
                if let Some(input) = self.input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.input_mut() {
                    if input.chars().count() < MAX_LABEL_CHARS {
                        input.push(c);
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, title: &str, value: &str, focus: Focus) {
        let border = if self.focus == focus {
            Palette::BORDER_FOCUSED
        } else {
            Palette::BORDER
        };
        let cursor = if self.focus == focus { "▏" } else { "" };
        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(Style::new().fg(border));
        frame.render_widget(Paragraph::new(format!("{value}{cursor}")).block(block), area);
    }
}

impl Screen for CustomEditor {
    const NAME: &'static str = "Custom cards";

    fn keybindings(&self) -> &'static [(&'static str, &'static str)] {
        if self.confirm.is_open() {
            return &[("y", "confirm"), ("n", "cancel")];
        }
        match self.focus {
            Focus::Cards => &[
                ("j/k", "move"),
                ("d", "delete"),
                ("c", "clear all"),
                ("p", "play"),
                ("Tab", "edit"),
                ("Esc", "back"),
            ],
            _ => &[("Tab", "next field"), ("Enter", "add card"), ("Esc", "back")],
        }
    }

    fn captures_text(&self) -> bool {
        self.focus != Focus::Cards && !self.confirm.is_open()
    }

    fn handle_key(&mut self, key: KeyEvent, _now: Instant) -> Option<Transition> {
        if self.confirm.is_open() {
            self.handle_confirm_key(key);
            return None;
        }
        match key.code {
            KeyCode::Esc => Some(Transition::ShowThemes),
            KeyCode::Tab => {
                self.cycle_focus();
                None
            }
            _ if self.focus == Focus::Cards => self.handle_cards_key(key),
            _ => self.handle_input_key(key),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [inputs_area, message_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inputs_area);
        self.render_input(frame, left_area, "Left", &self.left, Focus::Left);
        self.render_input(frame, right_area, "Right", &self.right, Focus::Right);

        if let Some(error) = &self.error {
            frame.render_widget(Paragraph::new(error.as_str()).style(Palette::ERROR), message_area);
        }

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    Span::styled(card.left.clone(), Palette::LEFT_LABEL),
                    Span::styled("  ↔  ", Palette::DIM),
                    Span::styled(card.right.clone(), Palette::RIGHT_LABEL),
                ]))
            })
            .collect();
        let border = if self.focus == Focus::Cards {
            Palette::BORDER_FOCUSED
        } else {
            Palette::BORDER
        };
        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(format!(" Your cards ({}) ", self.cards.len()))
                    .border_style(Style::new().fg(border)),
            )
            .highlight_style(Palette::SELECTION);
        frame.render_stateful_widget(list, list_area, &mut self.list);

        let missing = MIN_PLAYABLE.saturating_sub(self.cards.len());
        let footer = if missing == 0 {
            Line::styled("Ready to play with the custom theme", Palette::TIMER)
        } else {
            Line::styled(
                format!("Add {missing} more card{}", if missing == 1 { "" } else { "s" }),
                Palette::DIM,
            )
        };
        frame.render_widget(Paragraph::new(footer), footer_area);

        if let Some(pending) = self.confirm.pending() {
            frame.render_widget(ConfirmDialog::new(pending.message), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::config::tests::scratch_dir;

    fn press(editor: &mut CustomEditor, code: KeyCode) -> Option<Transition> {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    fn type_text(editor: &mut CustomEditor, text: &str) {
        for c in text.chars() {
            press(editor, KeyCode::Char(c));
        }
    }

    fn add(editor: &mut CustomEditor, left: &str, right: &str) {
        type_text(editor, left);
        press(editor, KeyCode::Enter);
        type_text(editor, right);
        press(editor, KeyCode::Enter);
    }

    #[test]
    fn test_play_requires_three_cards() {
        let dir = scratch_dir("editor-play");
        let mut editor = CustomEditor::new(CardStore::new(&dir));
        add(&mut editor, "Hot", "Cold");
        add(&mut editor, "Wet", "Dry");
        assert_eq!(editor.cards.len(), 2);

        press(&mut editor, KeyCode::Tab);
        press(&mut editor, KeyCode::Tab);
        assert!(press(&mut editor, KeyCode::Char('p')).is_none());
        assert!(editor.error.is_some());

        press(&mut editor, KeyCode::Tab);
        add(&mut editor, "Big", "Small");
        press(&mut editor, KeyCode::Tab);
        press(&mut editor, KeyCode::Tab);
        match press(&mut editor, KeyCode::Char('p')) {
            Some(Transition::ChooseTheme(theme)) => assert_eq!(theme.len(), 3),
            other => panic!("unexpected transition {other:?}"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clear_asks_first() {
        let dir = scratch_dir("editor-clear");
        let mut editor = CustomEditor::new(CardStore::new(&dir));
        add(&mut editor, "Hot", "Cold");
        press(&mut editor, KeyCode::Tab);
        press(&mut editor, KeyCode::Tab);

        press(&mut editor, KeyCode::Char('c'));
        press(&mut editor, KeyCode::Char('n'));
        assert_eq!(editor.cards.len(), 1, "Cancel keeps the cards");

        press(&mut editor, KeyCode::Char('c'));
        press(&mut editor, KeyCode::Char('y'));
        assert!(editor.cards.is_empty());
        assert!(editor.store.load().is_empty());
        let _ = fs::remove_dir_all(&dir);
    }
}
