//! Unit tests for the web app detail screen: URL preparation, title, load progress and the
//! load-failure notice.

use rstest::rstest;

use smartweb::screens::web_app::WebAppScreen;
use smartweb::types::errors::BrowserError;
use smartweb::types::navigation::{LoadState, Screen};

#[rstest]
#[case("news.example.com", "https://news.example.com/")]
#[case("http://news.example.com", "https://news.example.com/")]
#[case("https://news.example.com/path?q=1", "https://news.example.com/path?q=1")]
#[case("  mail.example.com  ", "https://mail.example.com/")]
fn test_url_is_normalized_before_loading(#[case] input: &str, #[case] expected: &str) {
    let screen = WebAppScreen::new(input, "News").unwrap();
    assert_eq!(screen.url(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("https://")]
fn test_unparseable_url_is_rejected(#[case] input: &str) {
    let result = WebAppScreen::new(input, "Broken");
    assert!(matches!(result, Err(BrowserError::InvalidUrl(_))));
}

#[test]
fn test_title_is_name_or_fallback() {
    let named = WebAppScreen::new("x.com", "X").unwrap();
    assert_eq!(named.title(), "X");

    let unnamed = WebAppScreen::new("x.com", "").unwrap();
    assert_eq!(unnamed.title(), "WebApp");
    assert_eq!(
        unnamed.screen(),
        Screen::WebApp {
            url: "https://x.com/".into(),
            name: String::new(),
        }
    );
}

#[test]
fn test_starts_loading_with_progress_bar() {
    let screen = WebAppScreen::new("x.com", "X").unwrap();
    assert_eq!(*screen.state(), LoadState::Loading);
    assert!(screen.show_progress_bar());
    assert_eq!(screen.progress(), 0.0);
    assert_eq!(screen.notice(), None);
}

#[rstest]
#[case(0.4, 0.4)]
#[case(-1.0, 0.0)]
#[case(7.5, 1.0)]
fn test_progress_is_clamped(#[case] reported: f64, #[case] expected: f64) {
    let mut screen = WebAppScreen::new("x.com", "X").unwrap();
    screen.on_load_progress(reported);
    assert_eq!(screen.progress(), expected);
}

#[test]
fn test_nan_progress_is_ignored() {
    let mut screen = WebAppScreen::new("x.com", "X").unwrap();
    screen.on_load_progress(0.3);
    screen.on_load_progress(f64::NAN);
    assert_eq!(screen.progress(), 0.3);
}

#[test]
fn test_progress_bar_hides_once_loaded() {
    let mut screen = WebAppScreen::new("x.com", "X").unwrap();
    screen.on_load_progress(0.5);
    screen.on_load_finished();

    assert_eq!(*screen.state(), LoadState::Loaded);
    assert!(!screen.show_progress_bar());
    assert_eq!(screen.progress(), 1.0);

    screen.on_load_progress(0.2);
    assert_eq!(screen.progress(), 1.0, "progress after load is ignored");
}

#[test]
fn test_load_error_notice_names_the_failing_url() {
    let mut screen = WebAppScreen::new("down.example.com", "Down").unwrap();

    let err = screen.on_load_error("https://down.example.com/login");

    assert_eq!(err.to_string(), "Unable to connect to https://down.example.com/login");
    assert!(!screen.show_progress_bar());
    assert_eq!(
        screen.notice().as_deref(),
        Some("Unable to connect to https://down.example.com/login")
    );
}

#[test]
fn test_load_error_without_url_uses_screen_url() {
    let mut screen = WebAppScreen::new("down.example.com", "Down").unwrap();

    let err = screen.on_load_error("");

    assert_eq!(err, BrowserError::LoadFailed("https://down.example.com/".into()));
}

#[test]
fn test_finished_after_error_keeps_failure() {
    let mut screen = WebAppScreen::new("down.example.com", "Down").unwrap();
    screen.on_load_error("");
    screen.on_load_finished();
    assert!(matches!(screen.state(), LoadState::Failed { .. }));
}
