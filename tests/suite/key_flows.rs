//! Keyboard-driven flows through the view model.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use contacts_engine::{App, FormField, Route, UiOptions};
use contacts_tui::apply_event;

fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut App, fields: [&str; 4]) {
    press(app, KeyCode::Char('a'));
    for value in fields {
        type_str(app, value);
        press(app, KeyCode::Tab);
    }
    press(app, KeyCode::Enter);
}

#[test]
fn add_two_contacts_then_open_the_second() {
    let mut app = App::new(UiOptions::default(), Route::ContactList);
    add(&mut app, ["Bob", "bob@x.com", "555-2222", ""]);
    add(&mut app, ["Carol", "carol@x.com", "555-3333", "neighbor"]);

    assert_eq!(app.route(), Route::ContactList);
    assert_eq!(app.list_cursor(), 1);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), Route::ContactDetail);
    let carol = app.selected_contact().expect("selection");
    assert_eq!(carol.description(), "neighbor");
}

#[test]
fn rejected_save_keeps_draft_and_returns_to_form() {
    let mut app = App::new(UiOptions::default(), Route::AddContact);
    type_str(&mut app, "  ");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "nobody@x.com");
    press(&mut app, KeyCode::Enter);

    assert!(app.alert().is_some());
    assert_eq!(app.route(), Route::AddContact);

    press(&mut app, KeyCode::Char('o'));
    assert!(app.alert().is_none());
    assert_eq!(app.field(FormField::Name).text(), "  ");
    assert_eq!(app.field(FormField::Email).text(), "nobody@x.com");
    assert!(app.contacts().is_empty());
}

#[test]
fn escape_from_add_keeps_draft_but_add_again_clears_it() {
    let mut app = App::new(UiOptions::default(), Route::ContactList);
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "Half");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), Route::ContactList);
    assert_eq!(app.field(FormField::Name).text(), "Half");

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.field(FormField::Name).text(), "");
}
