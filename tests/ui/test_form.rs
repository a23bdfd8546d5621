//! Rendering tests for the form screen

use ratatui::{Terminal, backend::TestBackend};

use backfill::app::App;
use backfill::config::{Field, Settings};
use backfill::model::Notification;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::screen_text;

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    screen_text(terminal.backend())
}

#[test]
fn test_form_shows_every_field_label() {
    let app = App::new(Settings::default());
    let text = draw(&app, 80, 30);

    assert!(text.contains("backfill: backdated commit sequence"));
    for field in Field::ALL {
        assert!(text.contains(field.label()), "missing {field}");
    }
}

#[test]
fn test_form_prefills_step_bounds_from_settings() {
    let settings = Settings {
        min_step_minutes: 42,
        max_step_minutes: 420,
        ..Settings::default()
    };
    let app = App::new(settings);
    let text = draw(&app, 80, 30);

    assert!(text.contains("42"));
    assert!(text.contains("420"));
}

#[test]
fn test_form_typed_text_is_rendered() {
    let mut app = App::new(Settings::default());
    for c in "/srv/site".chars() {
        app.on_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    let text = draw(&app, 80, 30);
    assert!(text.contains("/srv/site"));
}

#[test]
fn test_form_status_bar_shows_hints() {
    let app = App::new(Settings::default());
    let text = draw(&app, 100, 30);
    let last = text.lines().last().unwrap_or_default();

    assert!(last.contains("Enter"), "{last}");
    assert!(last.contains("Tab"), "{last}");
}

#[test]
fn test_form_title_carries_notification() {
    let mut app = App::new(Settings::default());
    app.notification = Some(Notification::success("3/3 commits pushed"));

    let text = draw(&app, 100, 30);
    assert!(text.contains("3/3 commits pushed"));
}

#[test]
fn test_invalid_submit_renders_alert_over_form() {
    let mut app = App::new(Settings::default());
    app.on_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    let text = draw(&app, 100, 30);
    assert!(text.contains("Invalid input"));
    assert!(text.contains("Repository path is required"));
}
