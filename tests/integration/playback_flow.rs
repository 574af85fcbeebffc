//! App-level playback: key actions in, rendered frames out.

use std::time::Duration;

use super::common::fixtures::test_app;
use super::common::terminal::{create_test_terminal_sized, draw_app, row};
use ytmcp_demo::player::{segments_text, EntryKind};
use ytmcp_demo::ui::{Action, AppEvent};
use ytmcp_demo::{App, PlaybackState, PlaybackTiming, StarBadge};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn assistant_text(app: &App) -> Option<String> {
    app.transcript()
        .lock()
        .entries()
        .iter()
        .find_map(|entry| match &entry.kind {
            EntryKind::Assistant { segments, .. } => Some(segments_text(segments)),
            _ => None,
        })
}

#[test]
fn test_idle_screen_shows_placeholder_and_selector() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);
    let screen = draw_app(&mut terminal, &mut app);

    assert!(row(&screen, 0).contains("YouTube Connector MCP"));
    assert!(screen.contains("Search Videos"));
    assert!(screen.contains("Quick Search"));
    assert!(screen.contains("1-7 play scenario"));
    assert!(screen.contains("Select a scenario above"));
    // Stars disabled: no badge
    assert!(!screen.contains('★'));
    assert_eq!(app.session().state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_scenario_plays_to_completion() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_action(Action::ActivateScenario(0));
    tokio::time::sleep(Duration::from_millis(500)).await;
    let screen = draw_app(&mut terminal, &mut app);
    assert!(screen.contains("Starting demo..."));
    assert!(screen.contains("PLAYING"));
    assert!(screen.contains("Find Rust talks"));

    app.session_mut().wait_for_completion().await;
    let screen = draw_app(&mut terminal, &mut app);
    assert!(!screen.contains("Starting demo..."));
    assert!(screen.contains("Find talks about async Rust"));
    assert!(screen.contains("TOOL search_videos"));
    assert!(screen.contains("▸ Async Rust in Practice"));
    assert!(screen.contains("RustConf | 12K views"));
    assert!(screen.contains("Found one talk."));
    assert!(screen.contains("DONE"));
    assert_eq!(app.session().state(), PlaybackState::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_activating_current_scenario_resets() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_action(Action::ActivateScenario(0));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    app.handle_action(Action::ActivateScenario(0));

    assert_eq!(app.session().state(), PlaybackState::Idle);
    assert!(app.transcript().lock().is_idle());

    tokio::time::sleep(Duration::from_secs(10)).await;
    let screen = draw_app(&mut terminal, &mut app);
    assert!(screen.contains("Select a scenario above"));
    assert!(!screen.contains("Find talks about async Rust"));
}

#[tokio::test(start_paused = true)]
async fn test_switching_scenarios_keeps_only_new_content() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_action(Action::ActivateScenario(0));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    app.handle_action(Action::ActivateScenario(1));
    app.session_mut().wait_for_completion().await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    let screen = draw_app(&mut terminal, &mut app);
    assert!(screen.contains("TOOL get_video_details"));
    assert!(screen.contains("Duration: 42:00"));
    assert!(screen.contains("Look up one video"));
    assert!(!screen.contains("Find talks about async Rust"));
    assert_eq!(app.session().selected(), Some("video_details_demo"));
}

#[tokio::test(start_paused = true)]
async fn test_switching_scenarios_without_waiting() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_action(Action::ActivateScenario(0));
    app.handle_action(Action::ActivateScenario(1));
    app.session_mut().wait_for_completion().await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    let screen = draw_app(&mut terminal, &mut app);
    assert!(screen.contains("TOOL get_video_details"));
    assert!(!screen.contains("Starting demo..."));
    assert!(!screen.contains("Find talks about async Rust"));
    assert!(!screen.contains("search_videos"));
    assert_eq!(app.transcript().lock().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_reveal_until_resumed() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_action(Action::ActivateScenario(0));
    // banner + user bubble + thinking, then part of the reveal
    tokio::time::sleep(Duration::from_millis(1000 + 1200 + 600 + 45)).await;
    app.handle_action(Action::TogglePause);
    assert_eq!(app.session().state(), PlaybackState::Paused);
    assert!(draw_app(&mut terminal, &mut app).contains("PAUSED"));

    let frozen = assistant_text(&app).unwrap_or_default();
    let revision = app.transcript().lock().revision();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(app.transcript().lock().revision(), revision);
    assert_eq!(assistant_text(&app).unwrap_or_default(), frozen);
    assert_ne!(frozen, "Found one talk.");

    app.handle_action(Action::TogglePause);
    app.session_mut().wait_for_completion().await;
    assert_eq!(assistant_text(&app).as_deref(), Some("Found one talk."));

    app.handle_action(Action::Reset);
    assert_eq!(app.session().state(), PlaybackState::Idle);
    assert!(draw_app(&mut terminal, &mut app).contains("Select a scenario above"));
}

#[tokio::test(start_paused = true)]
async fn test_pause_without_selection_is_ignored() {
    let mut app = test_app(PlaybackTiming::default());
    app.handle_action(Action::TogglePause);
    assert!(!app.session().is_paused());
    assert_eq!(app.session().state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_selector_entry_missing_from_script_is_noop() {
    let mut app = test_app(PlaybackTiming::default());
    // The fixture script only has the first two scenarios
    app.handle_action(Action::ActivateScenario(4));
    assert_eq!(app.session().selected(), None);
    assert!(app.transcript().lock().is_idle());

    app.handle_action(Action::ActivateScenario(42));
    assert_eq!(app.session().state(), PlaybackState::Idle);
}

#[test]
fn test_star_event_updates_header() {
    let mut app = test_app(PlaybackTiming::default());
    let mut terminal = create_test_terminal_sized(WIDTH, HEIGHT);

    app.handle_app_event(AppEvent::StarsLoaded(StarBadge::Ready(1500)));
    let screen = draw_app(&mut terminal, &mut app);
    assert!(row(&screen, 0).contains("★ 1.5k"));

    app.handle_app_event(AppEvent::StarsLoaded(StarBadge::Hidden));
    let screen = draw_app(&mut terminal, &mut app);
    assert!(!screen.contains('★'));
}

#[test]
fn test_quit_action() {
    let mut app = test_app(PlaybackTiming::default());
    assert!(!app.should_quit());
    app.handle_action(Action::Quit);
    assert!(app.should_quit());
}
