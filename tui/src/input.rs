//! Input handling for the contact book TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use contacts_engine::{App, Route};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Terminals differ on paste newlines; fold `\r\n` and bare `\r` into `\n`.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking worker and hands them to the UI loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a send blocked on capacity returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take()
            && tokio::time::timeout(Duration::from_secs(2), join)
                .await
                .is_err()
        {
            tracing::warn!("Input thread did not stop within 2s");
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to the app.
///
/// Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            // The alert is modal: nothing reaches the screen until it is dismissed.
            if app.alert().is_some() {
                handle_alert(app, key);
                return app.should_quit();
            }

            match app.route() {
                Route::AddContact => handle_add_screen(app, key),
                Route::ContactList => handle_list_screen(app, key),
                Route::ContactDetail => handle_detail_screen(app, key),
            }
        }
        Event::Paste(text) => {
            if app.alert().is_none() && app.route() == Route::AddContact {
                // Form fields are single-line.
                let normalized = normalize_line_endings(&text);
                let single_line = normalized.lines().collect::<Vec<_>>().join(" ");
                app.edit_focused(|draft| draft.enter_text(&single_line));
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_alert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o' | 'O' | ' ') => app.dismiss_alert(),
        _ => {}
    }
}

fn handle_add_screen(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => app.save_contact(),
        KeyCode::Esc => app.go_to_contacts_list(),
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev_field(),
        KeyCode::Left => app.edit_focused(|draft| draft.move_cursor_left()),
        KeyCode::Right => app.edit_focused(|draft| draft.move_cursor_right()),
        KeyCode::Home => app.edit_focused(|draft| draft.reset_cursor()),
        KeyCode::End => app.edit_focused(|draft| draft.move_cursor_end()),
        KeyCode::Backspace => app.edit_focused(|draft| draft.delete_char()),
        KeyCode::Delete => app.edit_focused(|draft| draft.delete_char_forward()),
        KeyCode::Char('w') if ctrl => app.edit_focused(|draft| draft.delete_word_backwards()),
        KeyCode::Char('a') if ctrl => app.edit_focused(|draft| draft.reset_cursor()),
        KeyCode::Char('e') if ctrl => app.edit_focused(|draft| draft.move_cursor_end()),
        KeyCode::Char(c) if !ctrl && c != '\r' => app.edit_focused(|draft| draft.enter_char(c)),
        _ => {}
    }
}

fn handle_list_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('k') | KeyCode::Up => app.list_move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.list_move_down(),
        KeyCode::Enter => app.select_at_cursor(),
        KeyCode::Char('a' | 'n') => app.go_to_add_contact(),
        _ => {}
    }
}

fn handle_detail_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_back(),
        KeyCode::Char('a' | 'n') => app.go_to_add_contact(),
        KeyCode::Char('l') => app.go_to_contacts_list(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use contacts_engine::{App, FormField, Route, UiOptions};

    use super::apply_event;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            apply_event(app, key(KeyCode::Char(c)));
        }
    }

    fn app_on(route: Route) -> App {
        App::new(UiOptions::default(), route)
    }

    #[test]
    fn typing_fills_focused_field_and_tab_moves_focus() {
        let mut app = app_on(Route::AddContact);
        type_str(&mut app, "Alice");
        apply_event(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "a@x.com");

        assert_eq!(app.field(FormField::Name).text(), "Alice");
        assert_eq!(app.field(FormField::Email).text(), "a@x.com");
        assert_eq!(app.focused_field(), FormField::Email);
    }

    #[test]
    fn enter_on_add_screen_saves_and_shows_list() {
        let mut app = app_on(Route::AddContact);
        type_str(&mut app, "Bob");
        apply_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.route(), Route::ContactList);
        assert_eq!(app.contacts().len(), 1);
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = app_on(Route::AddContact);
        apply_event(&mut app, key(KeyCode::Enter));
        assert!(app.alert().is_some());

        type_str(&mut app, "x");
        assert_eq!(app.field(FormField::Name).text(), "");

        apply_event(&mut app, key(KeyCode::Enter));
        assert!(app.alert().is_none());
        type_str(&mut app, "x");
        assert_eq!(app.field(FormField::Name).text(), "x");
    }

    #[test]
    fn list_and_detail_navigation() {
        let mut app = app_on(Route::ContactList);
        apply_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.route(), Route::AddContact);
        type_str(&mut app, "Carol");
        apply_event(&mut app, key(KeyCode::Enter));

        apply_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.route(), Route::ContactDetail);

        apply_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.route(), Route::ContactList);
    }

    #[test]
    fn q_on_add_screen_is_text_not_quit() {
        let mut app = app_on(Route::AddContact);
        let quit = apply_event(&mut app, key(KeyCode::Char('q')));
        assert!(!quit);
        assert_eq!(app.field(FormField::Name).text(), "q");
    }

    #[test]
    fn q_on_list_quits_and_ctrl_c_quits_anywhere() {
        let mut app = app_on(Route::ContactList);
        assert!(apply_event(&mut app, key(KeyCode::Char('q'))));

        let mut app = app_on(Route::AddContact);
        assert!(apply_event(&mut app, ctrl('c')));
    }

    #[test]
    fn ctrl_w_deletes_word() {
        let mut app = app_on(Route::AddContact);
        type_str(&mut app, "old friend");
        apply_event(&mut app, ctrl('w'));
        assert_eq!(app.field(FormField::Name).text(), "old ");
    }

    #[test]
    fn paste_is_flattened_to_one_line() {
        let mut app = app_on(Route::AddContact);
        apply_event(&mut app, Event::Paste("line one\nline two".to_string()));
        assert_eq!(app.field(FormField::Name).text(), "line one line two");
    }

    #[test]
    fn paste_with_carriage_returns_is_flattened() {
        let mut app = app_on(Route::AddContact);
        apply_event(&mut app, Event::Paste("Alice\rSmith\r\nJr".to_string()));
        let text = app.field(FormField::Name).text();
        assert!(!text.contains('\r'), "{text:?}");
        assert_eq!(text, "Alice Smith Jr");
    }

    #[test]
    fn carriage_return_key_is_not_inserted() {
        let mut app = app_on(Route::AddContact);
        type_str(&mut app, "a\rb");
        assert_eq!(app.field(FormField::Name).text(), "ab");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app_on(Route::AddContact);
        let mut release = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        apply_event(&mut app, Event::Key(release));
        assert_eq!(app.field(FormField::Name).text(), "");
    }
}
