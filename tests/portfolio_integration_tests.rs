use termfolio::core::action::{Action, Effect, update};
use termfolio::core::animation::{AnimPhase, AnimationDriver, AnimationTiming};
use termfolio::core::i18n::Language;
use termfolio::core::state::{App, Screen, Tab, ViewModel};
use termfolio::tui::content::{ContentProvider, PortfolioContent};
use termfolio::tui::frame::compose;
use termfolio::tui::text::{display_width, plain_text};

// ============================================================================
// Helper Functions
// ============================================================================

fn view(width: u16, height: u16, tab: Tab, language: Language) -> ViewModel {
    ViewModel {
        width,
        height,
        tab,
        scroll: 0,
        language,
    }
}

/// Plain rows of the built-in portfolio at the given view.
fn rows(view: ViewModel) -> Vec<String> {
    compose(view, &PortfolioContent)
        .lines
        .iter()
        .map(plain_text)
        .collect()
}

// ============================================================================
// Frame Geometry
// ============================================================================

#[test]
fn test_every_tab_and_language_fills_the_terminal_exactly() {
    let sizes = [(80, 20), (81, 21), (100, 30), (137, 45), (200, 60)];
    for (width, height) in sizes {
        for language in [Language::En, Language::Fr] {
            for tab in Tab::ALL {
                let frame = compose(view(width, height, tab, language), &PortfolioContent);
                assert_eq!(frame.lines.len(), usize::from(height), "{width}x{height} {tab:?}");
                for line in &frame.lines {
                    assert_eq!(display_width(line), usize::from(width), "{width}x{height} {tab:?}");
                }
            }
        }
    }
}

#[test]
fn test_tiny_terminal_renders_minimum_frame() {
    let frame = compose(view(10, 5, Tab::Experience, Language::En), &PortfolioContent);
    assert_eq!(frame.lines.len(), 20);
    assert!(frame.lines.iter().all(|line| display_width(line) == 80));
}

#[test]
fn test_minimum_size_experience_shows_thirteen_rows_from_the_top() {
    let rows = rows(view(80, 20, Tab::Experience, Language::En));

    // Three header rows, then the body
    assert!(rows[0].contains('╭'));
    assert!(rows[1].contains("termfolio.dev"));
    assert!(rows[3].contains("Experience"));
    assert!(rows[3].contains("(↑↓ to scroll)"));

    let body_rows = rows.iter().skip(3).take_while(|r| r.trim_start().starts_with('│'));
    assert_eq!(body_rows.count(), 13);
    assert!(rows[16].contains('╰'));
}

#[test]
fn test_scrolling_past_the_end_is_clamped() {
    let base = view(80, 20, Tab::Experience, Language::En);
    let bound = compose(base, &PortfolioContent).max_scroll;
    assert!(bound > 0);

    let far = compose(ViewModel { scroll: bound + 50, ..base }, &PortfolioContent);
    assert_eq!(far.scroll, bound);
    let last = compose(ViewModel { scroll: bound, ..base }, &PortfolioContent);
    assert_eq!(far.lines, last.lines);
}

#[test]
fn test_french_frame_is_translated() {
    let rows = rows(view(100, 30, Tab::Education, Language::Fr));
    assert!(rows[1].contains("Parcours_Académique"));
    assert!(rows.iter().any(|r| r.contains("FR")));
}

#[test]
fn test_footer_hint_is_centered_below_the_frame() {
    let hint = PortfolioContent.footer_hint(Language::En);
    let rows = rows(view(120, 30, Tab::Skills, Language::En));
    let footer = rows.iter().find(|r| r.contains(hint.as_str())).unwrap();
    assert!(footer.contains('╰'));
}

// ============================================================================
// Application Flow
// ============================================================================

#[test]
fn test_welcome_then_portfolio_session() {
    let mut app = App::new();
    assert_eq!(app.screen, Screen::Welcome);

    let timing = AnimationTiming::default();
    for _ in 0..timing.initial_blink {
        update(&mut app, Action::Tick);
    }
    assert_eq!(app.animation.state().phase, AnimPhase::TypingDomain);
    for _ in 0..13 {
        update(&mut app, Action::Tick);
    }
    let state = app.animation.state();
    assert_eq!(state.phase, AnimPhase::BlinkFirst);
    assert_eq!(state.cursor_position, 13);

    update(&mut app, Action::DismissWelcome);
    assert_eq!(app.screen, Screen::Portfolio);

    let measured = compose(app.view, &PortfolioContent).max_scroll;
    update(&mut app, Action::ScrollBoundMeasured(measured));
    update(&mut app, Action::ScrollDown);
    update(&mut app, Action::NextTab);
    assert_eq!(app.view.tab, Tab::Education);
    assert_eq!(app.view.scroll, 0);

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_animation_loops_back_to_typing() {
    let mut driver = AnimationDriver::new("ab.c", "me@", AnimationTiming::default());
    let mut seen_restart = false;
    for _ in 0..500 {
        driver.advance();
        let state = driver.state();
        assert!(state.cursor_position <= driver.full_len());
        if state.phase == AnimPhase::Restart {
            seen_restart = true;
        }
        if seen_restart && state.phase == AnimPhase::TypingDomain {
            return;
        }
    }
    panic!("animation never restarted");
}
