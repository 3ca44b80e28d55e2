//! Capy Catch entry point
//!
//! Headless demo: runs a short session with the canned question source and
//! the trace renderer, auto-answering any interrupt, then prints the score.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;

use capy_catch::app::{App, FrameLoop};
use capy_catch::i18n::{Language, translate};
use capy_catch::input::Key;
use capy_catch::provider::StaticQuestionSource;
use capy_catch::render::LogRenderer;
use capy_catch::{SessionConfig, SessionMode};

const DEMO_PAYLOAD: &str = r#"{
    "question": "Which animal is the largest rodent?",
    "options": ["Beaver", "Capybara", "Porcupine", "Rat"],
    "correctAnswer": "Capybara"
}"#;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let language = std::env::args()
        .nth(1)
        .and_then(|arg| Language::from_str(&arg))
        .unwrap_or_default();

    log::info!("{}", translate("title", language));

    let source = Arc::new(StaticQuestionSource::new(DEMO_PAYLOAD));
    let mut app = App::new(rand::random(), source, LogRenderer::default());
    app.resize(900, 600);
    app.submit_config(SessionConfig {
        language,
        prompt: "Ask a simple question about animals for a 5-year-old".into(),
        questions_enabled: true,
    });

    let app = Arc::new(Mutex::new(app));
    let shared = Arc::clone(&app);
    let mut frame_loop = FrameLoop::spawn(move || {
        let mut app = shared.lock().unwrap();
        app.frame();

        // Stand-in for the player: answer whatever question appears and
        // wiggle toward the falling oranges
        if let Some(question) = app.session().question().cloned() {
            log::info!(
                "{} {}",
                translate("questionTime", language),
                question.question
            );
            app.answer(&question.correct_answer);
            log::info!("{}", translate("correct", language));
            return;
        }
        if app.session().mode() == SessionMode::Playing {
            let chasing_left = app
                .state()
                .items
                .first()
                .is_some_and(|item| item.pos.x < app.state().avatar.pos.x);
            if chasing_left {
                app.key_down(Key::Left);
                app.key_up(Key::Right);
            } else {
                app.key_down(Key::Right);
                app.key_up(Key::Left);
            }
        }
    });

    std::thread::sleep(Duration::from_secs(10));
    frame_loop.cancel();

    let app = app.lock().unwrap();
    println!("{}: {}", translate("score", language), app.score());
    Ok(())
}
