use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

/// Maps a terminal key press onto a sidebar event. Plain characters fall
/// through to the focused form field.
pub fn key_event(input: Input) -> Event {
    match input {
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLC();
        }
        Input {
            key: Key::Char(c),
            ctrl: true,
            alt: false,
        } => {
            return Event::KeyboardCTRL(c);
        }
        Input { key: Key::Down, .. } | Input {
            key: Key::MouseScrollDown,
            ..
        } => {
            return Event::UIScrollDown();
        }
        Input { key: Key::Up, .. } | Input {
            key: Key::MouseScrollUp,
            ..
        } => {
            return Event::UIScrollUp();
        }
        Input {
            key: Key::PageDown, ..
        } => {
            return Event::UIScrollPageDown();
        }
        Input {
            key: Key::PageUp, ..
        } => {
            return Event::UIScrollPageUp();
        }
        Input { key: Key::Tab, .. } => {
            return Event::KeyboardTab();
        }
        Input { key: Key::Esc, .. } => {
            return Event::KeyboardEsc();
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Event::KeyboardEnter();
        }
        input => {
            return Event::KeyboardCharInput(input);
        }
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp());
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown());
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                if keyevent.code == crossterm::event::KeyCode::BackTab {
                    return Some(Event::KeyboardBackTab());
                }
                return Some(key_event(keyevent.into()));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
