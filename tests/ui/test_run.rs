//! Rendering tests for the run screen

use ratatui::{Terminal, backend::TestBackend};

use backfill::model::{LogLevel, RunEvent, RunId, RunReport, StopReason};
use backfill::ui::views::RunView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{screen_rows, screen_text};

fn draw(view: &RunView, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    screen_text(terminal.backend())
}

fn report(successes: usize, attempts: usize, stop: StopReason) -> RunReport {
    RunReport {
        run_id: RunId::generate(&mut StdRng::seed_from_u64(3)),
        attempts,
        successes,
        stop,
    }
}

#[test]
fn test_run_view_shows_repo_progress_and_log() {
    let mut view = RunView::new("/srv/site", 4);
    view.apply(RunEvent::log(LogLevel::Info, "Starting commit sequence"));
    view.apply(RunEvent::log(LogLevel::Success, "git push origin HEAD"));
    view.apply(RunEvent::Progress { done: 1, total: 4 });

    let text = draw(&view, 70, 16);
    assert!(text.contains("Run /srv/site"));
    assert!(text.contains("1/4"));
    assert!(text.contains("[*] Starting commit sequence"));
    assert!(text.contains("[+] git push origin HEAD"));
    assert!(text.contains("Running"));
}

#[test]
fn test_run_view_log_follows_tail() {
    let mut view = RunView::new("repo", 50);
    for i in 1..=40 {
        view.apply(RunEvent::log(LogLevel::Info, format!("line {i:02}")));
    }

    // 12 rows: title, gauge (3), log (7 = 5 visible), status
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    let text = screen_rows(terminal.backend()).join("\n");

    assert!(text.contains("line 40"));
    assert!(text.contains("line 36"));
    assert!(!text.contains("line 35"));
}

#[test]
fn test_run_view_shows_cancelling_state() {
    let mut view = RunView::new("repo", 10);
    view.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

    let text = draw(&view, 70, 12);
    assert!(text.contains("Cancelling after the current attempt"));
}

#[test]
fn test_run_view_shows_summary_when_finished() {
    let mut view = RunView::new("repo", 5);
    let finished = report(
        2,
        2,
        StopReason::EndDateReached {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        },
    );
    let summary = finished.summary();
    view.apply(RunEvent::Progress { done: 2, total: 5 });
    view.apply(RunEvent::Finished(finished));

    let text = draw(&view, 100, 12);
    assert!(text.contains(&summary));
    assert!(text.contains("end date 2024-01-04 reached"));
    assert!(text.contains("2/5"));
}

#[test]
fn test_run_view_shows_fatal_as_error() {
    let mut view = RunView::new("repo", 5);
    view.apply(RunEvent::Finished(report(
        0,
        0,
        StopReason::Fatal("cannot create log directory".to_string()),
    )));

    let text = draw(&view, 120, 12);
    assert!(text.contains("Error:"));
    assert!(text.contains("fatal: cannot create log directory"));
}
