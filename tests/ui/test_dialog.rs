//! Rendering tests for Dialog components

use ratatui::{Terminal, backend::TestBackend};

use backfill::ui::components::dialog::{Dialog, DialogCallback};

use super::{screen_rows, screen_text};

#[test]
fn test_confirm_dialog_shows_title_message_and_choices() {
    let dialog = Dialog::confirm(
        "Quit",
        "A run is in progress. Cancel it and quit?",
        DialogCallback::QuitDuringRun,
    );

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| {
            dialog.render(frame, frame.area());
        })
        .unwrap();

    let text = screen_text(terminal.backend());
    assert!(text.contains(" Quit "));
    assert!(text.contains("A run is in progress. Cancel it and quit?"));
    assert!(text.contains("[Y]es"));
    assert!(text.contains("[N]o"));
}

#[test]
fn test_confirm_dialog_is_centered() {
    let dialog = Dialog::confirm("Quit", "Sure?", DialogCallback::QuitDuringRun);

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();

    let rows = screen_rows(terminal.backend());
    // 7 rows tall in a 12 row area: rows 2..9
    assert!(rows[0].is_empty());
    assert!(rows[1].is_empty());
    assert!(rows[2].contains("Quit"));
    assert!(rows[11].is_empty());
}

#[test]
fn test_alert_dialog_lists_every_problem() {
    let dialog = Dialog::alert(
        "Invalid input",
        vec![
            "Repository path is required".to_string(),
            "Max commits is required".to_string(),
        ],
    );

    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();

    let text = screen_text(terminal.backend());
    assert!(text.contains(" Invalid input "));
    assert!(text.contains("• Repository path is required"));
    assert!(text.contains("• Max commits is required"));
    assert!(text.contains("[Enter] Close"));
}
