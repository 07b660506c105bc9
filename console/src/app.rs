use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pingview::{HealthProbe, Notice, Notifier, PingView};

use crate::event::Event;

/// Which control receives key input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

/// Console application state wrapping the ping view.
pub struct App<P, N> {
    pub view: PingView<P, N>,
    pub focus: Focus,
    /// Cursor position in the input, counted in characters.
    pub cursor: usize,
    /// Alert currently shown on top of everything; blocks other input.
    pub modal: Option<Notice>,
    pub should_quit: bool,
}

impl<P, N> App<P, N>
where
    P: HealthProbe,
    N: Notifier,
{
    pub fn new(view: PingView<P, N>) -> Self {
        Self {
            view,
            focus: Focus::Input,
            cursor: 0,
            modal: None,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Notice(notice) => self.modal = Some(notice),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Event::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.modal = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('p') if ctrl => self.ping(),
            _ => match self.focus {
                Focus::Input => self.edit_input(key),
                Focus::Button => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.ping();
                    }
                }
            },
        }
    }

    fn ping(&mut self) {
        // A missing base URL has already been routed to the notifier.
        let _ = self.view.ping();
    }

    fn edit_input(&mut self, key: KeyEvent) {
        let mut chars: Vec<char> = self.view.input().chars().collect();
        let cursor = self.cursor.min(chars.len());

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                chars.insert(cursor, c);
                self.cursor = cursor + 1;
            }
            KeyCode::Backspace if cursor > 0 => {
                chars.remove(cursor - 1);
                self.cursor = cursor - 1;
            }
            KeyCode::Delete if cursor < chars.len() => {
                chars.remove(cursor);
            }
            KeyCode::Left => {
                self.cursor = cursor.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                self.cursor = (cursor + 1).min(chars.len());
                return;
            }
            KeyCode::Home => {
                self.cursor = 0;
                return;
            }
            KeyCode::End => {
                self.cursor = chars.len();
                return;
            }
            _ => return,
        }

        self.view.update_input(chars.into_iter().collect::<String>());
    }
}
