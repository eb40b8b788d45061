use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model, Screen};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'q') => Some(Message::Quit),
                KeyCode::Char('d') => Some(Message::PageDown),
                KeyCode::Char('u') => Some(Message::PageUp),
                KeyCode::Char('r') => Some(Message::Refresh),
                _ => None,
            };
        }

        let common = match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('v') => Some(Message::ToggleRegions),
            KeyCode::Char('p') => Some(Message::TogglePin),
            KeyCode::Char('s') => Some(Message::Save),
            KeyCode::Char('e') => Some(Message::SimulateSaveError),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Message::Refresh),
            _ => None,
        };
        if common.is_some() {
            return common;
        }

        match model.screen {
            Screen::Detail(_) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                    Some(Message::Back)
                }
                _ => None,
            },
            Screen::List => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),
                KeyCode::Char('g') | KeyCode::Home => Some(Message::SelectFirst),
                KeyCode::Char('G') | KeyCode::End => Some(Message::SelectLast),
                KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
                KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                    Some(Message::OpenSelected)
                }
                _ => None,
            },
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible || model.screen != Screen::List {
            return None;
        }

        let frame_area = Rect::new(
            0,
            0,
            model.width,
            model.viewport.height().saturating_add(crate::ui::CHROME_ROWS),
        );
        let layout = crate::ui::list_layout(model, crate::ui::list_inner_area(frame_area));
        // Indicator rows are not part of the list.
        let in_list = point_in_rect(mouse.column, mouse.row, layout.rows);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if in_list => {
                Some(Message::PullStart(mouse.row))
            }
            MouseEventKind::Drag(MouseButton::Left) if model.pull.is_pulling() => {
                Some(Message::PullMove(mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if model.pull.is_pulling() && model.pull.distance() > 0.0 {
                    return Some(Message::PullEnd);
                }
                if in_list
                    && let Some(index) = layout.index_at(mouse.row)
                    && index < model.notes.len()
                {
                    return Some(Message::SelectRow(index));
                }
                model.pull.is_pulling().then_some(Message::PullEnd)
            }
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
            _ => None,
        }
    }
}

const fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
