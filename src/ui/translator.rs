//! Interactive translator state: the input editor wired to the scheduler.

use std::sync::Arc;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;
use tui_textarea::{CursorMove, Input, TextArea};

use crate::core::backend::TranslationBackend;
use crate::core::languages::next_code;
use crate::core::scheduler::{DebounceScheduler, SchedulerEvent, SchedulerOptions};
use crate::core::session::TranslationSession;

pub enum UiEvent {
    Crossterm(Event),
}

#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    pub source_language: String,
    pub target_language: String,
    pub scheduler: SchedulerOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Swap,
    CycleSource,
    CycleTarget,
    Clear,
    Edit,
}

pub fn key_action(key: &KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('s') if ctrl => KeyAction::Swap,
        KeyCode::Char('f') if ctrl => KeyAction::CycleSource,
        KeyCode::Char('t') if ctrl => KeyAction::CycleTarget,
        KeyCode::Char('l') if ctrl => KeyAction::Clear,
        _ => KeyAction::Edit,
    }
}

pub struct TranslatorApp {
    scheduler: DebounceScheduler,
    input: TextArea<'static>,
    exit_requested: bool,
}

impl TranslatorApp {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        options: TranslatorOptions,
    ) -> (Self, UnboundedReceiver<SchedulerEvent>) {
        let session = TranslationSession::new(options.source_language, options.target_language);
        let (scheduler, rx) = DebounceScheduler::new(backend, session, options.scheduler);
        let app = Self {
            scheduler,
            input: TextArea::default(),
            exit_requested: false,
        };
        (app, rx)
    }

    pub fn session(&self) -> &TranslationSession {
        self.scheduler.session()
    }

    pub fn scheduler(&self) -> &DebounceScheduler {
        &self.scheduler
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Returns true when the screen needs a redraw.
    pub fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key)
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                self.input.insert_str(text);
                self.sync_input();
                true
            }
            UiEvent::Crossterm(Event::Resize(_, _)) => true,
            UiEvent::Crossterm(_) => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key_action(&key) {
            KeyAction::Quit => {
                self.exit_requested = true;
                return false;
            }
            KeyAction::Swap => {
                self.scheduler.swap_languages();
                self.reload_input();
            }
            KeyAction::CycleSource => {
                let next = next_code(&self.session().source_language);
                self.scheduler.on_source_language_changed(next);
            }
            KeyAction::CycleTarget => {
                let next = next_code(&self.session().target_language);
                self.scheduler.on_target_language_changed(next);
            }
            KeyAction::Clear => {
                self.scheduler.clear();
                self.reload_input();
            }
            KeyAction::Edit => {
                self.input.input(Input::from(key));
                self.sync_input();
            }
        }
        true
    }

    pub fn handle_scheduler_event(&mut self, event: SchedulerEvent) -> bool {
        self.scheduler.handle_event(event)
    }

    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
    }

    fn current_input(&self) -> String {
        self.input.lines().join("\n")
    }

    /// Cursor movement leaves the text alone and must not restart the timer.
    fn sync_input(&mut self) {
        let text = self.current_input();
        if text != self.session().source_text {
            self.scheduler.on_input_changed(text);
        }
    }

    fn reload_input(&mut self) {
        let lines: Vec<String> = self
            .session()
            .source_text
            .split('\n')
            .map(str::to_string)
            .collect();
        self.input = TextArea::from(lines);
        self.input.move_cursor(CursorMove::Bottom);
        self.input.move_cursor(CursorMove::End);
    }
}
