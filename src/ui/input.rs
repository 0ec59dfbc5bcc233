use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.request_reload();
        return;
    }

    match app.focus() {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Esc => {
            if app.is_editing() {
                app.cancel_edit();
            } else {
                app.focus_list();
            }
        }
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            // While editing, the input box keeps the keyboard.
            if !app.is_editing() {
                app.focus_list();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.input_char(c);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Tab | KeyCode::Char('i') => app.focus_input(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{PersistedStore, SnapshotFile};
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let snapshot = SnapshotFile::at(dir.path().join("state.json"));
        App::new(PersistedStore::open(snapshot), None)
    }

    fn app_with_items(dir: &TempDir, texts: &[&str]) -> App {
        let mut app = test_app(dir);
        for text in texts {
            app.input_paste(text);
            app.submit();
        }
        app.focus_list();
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits_from_either_focus() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());

        let mut app = app_with_items(&dir, &["a"]);
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        let mut key = ctrl('q');
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);

        assert!(!app.should_quit());
    }

    #[test]
    fn typed_chars_land_in_the_draft() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.state().draft, "hi");

        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.state().draft, "h");
    }

    #[test]
    fn ctrl_chords_do_not_insert_text() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        handle_key(&mut app, ctrl('x'));

        assert_eq!(app.state().draft, "");
    }

    #[test]
    fn q_only_quits_in_list_focus() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.state().draft, "q");

        app.focus_list();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn tab_switches_between_regions() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        assert_eq!(app.focus(), Focus::Input);

        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::List);

        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Input);
    }

    #[test]
    fn space_toggles_the_selected_item() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a"]);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.state().items[0].done);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.state().items[0].done);
    }

    #[test]
    fn d_removes_the_selected_item() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a", "b"]);

        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('d')));

        assert_eq!(app.state().items.len(), 1);
        assert_eq!(app.state().items[0].text, "a");
    }

    #[test]
    fn enter_in_list_starts_an_edit() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a"]);

        handle_key(&mut app, press(KeyCode::Enter));

        assert!(app.is_editing());
        assert_eq!(app.focus(), Focus::Input);
    }

    #[test]
    fn esc_cancels_an_edit_before_leaving_input() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a"]);
        handle_key(&mut app, press(KeyCode::Enter));

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.is_editing());
        assert_eq!(app.focus(), Focus::List);

        app.focus_input();
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn arrows_stay_in_the_input_while_editing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a"]);
        handle_key(&mut app, press(KeyCode::Enter));

        handle_key(&mut app, press(KeyCode::Down));

        assert_eq!(app.focus(), Focus::Input);
        assert!(app.is_editing());
    }

    #[test]
    fn r_in_list_requests_a_reload() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a"]);

        handle_key(&mut app, press(KeyCode::Char('r')));

        // No feed is configured in tests, which is itself reported.
        let (text, _) = app.notice().unwrap();
        assert_eq!(text, "No feed URL configured");
    }
}
