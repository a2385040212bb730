use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn typing_inserts_at_cursor() {
    let mut input = Input::default();
    for c in "hllo".chars() {
        input.handle_key(key(KeyCode::Char(c)));
    }
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));
    assert!(input.handle_key(key(KeyCode::Char('e'))));
    assert_eq!(input.buf, "hello");
    assert_eq!(input.cursor, 2);
}

#[test]
fn backspace_and_delete_respect_multibyte_chars() {
    let mut input = Input::with_value("héllo");
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));
    assert!(input.handle_key(key(KeyCode::Delete)));
    assert_eq!(input.buf, "hllo");

    input.handle_key(key(KeyCode::End));
    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.buf, "hll");
    assert_eq!(input.cursor, 3);
}

#[test]
fn edits_at_the_edges_report_no_change() {
    let mut input = Input::with_value("ab");
    assert!(!input.handle_key(key(KeyCode::Delete)));
    input.handle_key(key(KeyCode::Home));
    assert!(!input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.buf, "ab");
}

#[test]
fn ctrl_u_clears_and_control_chars_are_ignored() {
    let mut input = Input::with_value("secret");
    assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    assert_eq!(input.buf, "secret");

    assert!(input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
    assert!(input.buf.is_empty());
    assert_eq!(input.cursor, 0);
}

#[test]
fn masked_hides_every_char() {
    let input = Input::with_value("pässword");
    assert_eq!(input.masked(), "********");
}
