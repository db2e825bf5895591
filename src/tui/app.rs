//! Application state: the active screen and the chrome drawn around it.

use std::{
    mem,
    path::{Path, PathBuf},
    time::Instant,
};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
use tracing::{info, warn};

use super::{
    components::{
        Component, ConfirmDialog, Header, HeaderInput, HelpMenu, Palette, StatusBar, StatusInput,
    },
    screens::{
        CustomEditor, Intro, PlayScreen, Scoreboard, Screen, SetupScreen, ThemePicker, Transition,
    },
};
use crate::{
    config::Settings,
    game::{ConfirmGate, Deck, Game},
    store::CardStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppAction {
    LeaveGame,
}

/// Which screen is showing.
enum Stage {
    Intro(Intro),
    Themes(ThemePicker),
    CustomEditor(CustomEditor),
    Setup(SetupScreen),
    Playing(PlayScreen),
    GameOver(Scoreboard),
}

/// Run `$body` with `$screen` bound to whichever screen is active.
macro_rules! with_screen {
    ($stage:expr, $screen:ident => $body:expr) => {
        match $stage {
            Stage::Intro($screen) => $body,
            Stage::Themes($screen) => $body,
            Stage::CustomEditor($screen) => $body,
            Stage::Setup($screen) => $body,
            Stage::Playing($screen) => $body,
            Stage::GameOver($screen) => $body,
        }
    };
}

const fn screen_name<S: Screen>(_: &S) -> &'static str {
    S::NAME
}

pub struct App {
    data_dir: PathBuf,
    settings: Settings,
    store: CardStore,
    /// Deck for the chosen theme. Starting a game hands it over and keeps a
    /// fresh one for the next game.
    deck: Deck,
    stage: Stage,
    help: HelpMenu,
    header: Header,
    status: StatusBar,
    quit: ConfirmGate<AppAction>,
    pub should_exit: bool,
}

impl App {
    pub fn new(data_dir: &Path) -> Self {
        let settings = Settings::load(data_dir).unwrap_or_else(|e| {
            warn!("Ignoring unreadable settings: {e}");
            Settings::default()
        });
        let store = CardStore::new(data_dir);
        let stage = if settings.skip_intro {
            Stage::Themes(ThemePicker::new(store.load().len()))
        } else {
            Stage::Intro(Intro::default())
        };
        Self {
            data_dir: data_dir.to_path_buf(),
            settings,
            store,
            deck: Deck::default(),
            stage,
            help: HelpMenu::default(),
            header: Header::default(),
            status: StatusBar::default(),
            quit: ConfirmGate::new(),
            should_exit: false,
        }
    }

    /// Advance time-driven state. Called before every draw.
    pub fn tick(&mut self, now: Instant) {
        if let Stage::Playing(play) = &mut self.stage {
            play.tick(now);
        }
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key, now),
            Event::Mouse(mouse) if !self.help.is_visible() && !self.quit.is_open() => {
                with_screen!(&mut self.stage, screen => screen.handle_mouse(*mouse, now));
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }
        if self.quit.is_open() {
            self.handle_quit_key(key);
            return;
        }
        if self.help.handle_event(key) {
            return;
        }
        let captures_text = with_screen!(&self.stage, screen => screen.captures_text());
        if key.code == KeyCode::F(1) || (key.code == KeyCode::Char('?') && !captures_text) {
            self.help.toggle();
            return;
        }

        let transition = with_screen!(&mut self.stage, screen => screen.handle_key(key, now));
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn handle_quit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.quit.confirm() == Some(AppAction::LeaveGame) {
                    info!("Game abandoned");
                    self.show_themes();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.quit.cancel(),
            _ => {}
        }
    }

    fn show_themes(&mut self) {
        self.stage = Stage::Themes(ThemePicker::new(self.store.load().len()));
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::FinishIntro { skip_intro } => {
                if skip_intro != self.settings.skip_intro {
                    self.settings.skip_intro = skip_intro;
                    if let Err(e) = self.settings.save(&self.data_dir) {
                        warn!("Failed to save settings: {e}");
                    }
                }
                self.show_themes();
            }
            Transition::ShowThemes => self.show_themes(),
            Transition::ChooseTheme(theme) => {
                let name = theme.name.clone();
                let cards = theme.len();
                self.deck.set_theme(theme);
                self.stage = Stage::Setup(SetupScreen::new(name, cards));
            }
            Transition::OpenCustomEditor => {
                self.stage = Stage::CustomEditor(CustomEditor::new(self.store.clone()));
            }
            Transition::StartGame {
                roster,
                timer_seconds,
            } => {
                let theme = self.deck.theme().clone();
                let deck = mem::replace(&mut self.deck, Deck::new(theme));
                self.stage = Stage::Playing(PlayScreen::new(Game::new(roster, deck, timer_seconds)));
            }
            Transition::GameOver(roster) => {
                self.stage = Stage::GameOver(Scoreboard::new(roster));
            }
            Transition::RequestQuit => self
                .quit
                .request(AppAction::LeaveGame, "Quit this game? Scores will be lost."),
            Transition::Exit => self.should_exit = true,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let name = with_screen!(&self.stage, screen => screen_name(screen));
        let block = Block::bordered()
            .title(format!(" {name} "))
            .border_style(Style::new().fg(Palette::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let playing = match &self.stage {
            Stage::Playing(play) => Some(play.game()),
            _ => None,
        };
        let status_height = if playing.is_some() { 2 } else { 1 };
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(status_height),
        ])
        .areas(inner);

        let theme = match &self.stage {
            Stage::Setup(_) => Some(self.deck.theme().name.clone()),
            Stage::Playing(play) => Some(play.game().deck().theme().name.clone()),
            _ => None,
        };
        self.header.update(HeaderInput {
            theme,
            time_left: playing.and_then(|game| game.time_left(now)),
        });
        self.header.render(frame, header_area);

        let keybindings = if self.quit.is_open() {
            &[("y", "confirm"), ("n", "cancel")][..]
        } else {
            with_screen!(&self.stage, screen => screen.keybindings())
        };
        self.status.update(StatusInput {
            keybindings,
            scores: playing.map(|game| (game.roster().teams().to_vec(), game.turn().active_team)),
        });
        self.status.render(frame, status_area);

        with_screen!(&mut self.stage, screen => screen.render(frame, body_area, now));

        if let Some(pending) = self.quit.pending() {
            frame.render_widget(ConfirmDialog::new(pending.message), area);
        }

        self.help.update(keybindings);
        self.help.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::tests::scratch_dir;

    fn press(app: &mut App, code: KeyCode) {
        let key = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        app.handle_event(&key, Instant::now());
    }

    #[test]
    fn test_intro_choice_is_persisted() {
        let dir = scratch_dir("app-intro");
        let mut app = App::new(&dir);
        assert!(matches!(app.stage, Stage::Intro(_)));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.stage, Stage::Themes(_)));

        let app = App::new(&dir);
        assert!(matches!(app.stage, Stage::Themes(_)), "Intro skipped next time");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_quit_mid_game_asks_then_returns_to_themes() {
        let dir = scratch_dir("app-quit");
        let mut app = App::new(&dir);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.stage, Stage::Setup(_)));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.stage, Stage::Playing(_)));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit.is_open());
        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.stage, Stage::Playing(_)), "Cancel keeps playing");

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(matches!(app.stage, Stage::Themes(_)));
        assert!(!app.should_exit);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_help_does_not_steal_typed_question_marks() {
        let dir = scratch_dir("app-help");
        let mut app = App::new(&dir);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help.is_visible());
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.stage, Stage::Intro(_)), "Help swallows keys");
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.help.is_visible());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.help.is_visible(), "Setup is typing a team name");
        let _ = fs::remove_dir_all(&dir);
    }
}
