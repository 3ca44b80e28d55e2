//! Frame wiring and loop scheduling
//!
//! [`App`] owns the whole core and exposes the per-frame step the host
//! scheduler drives once per display refresh. [`FrameLoop`] is that
//! scheduler for headless/native runs: an explicitly cancellable repeating
//! task with an owned handle, so teardown is deterministic rather than
//! left to whatever captured the callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::consts::FRAME_RATE;
use crate::input::{InputState, Key};
use crate::provider::QuestionSource;
use crate::render::{Renderer, SceneLayout, build_scene};
use crate::session::{Session, SessionConfig};
use crate::sim::{GameEvent, GameState, tick};
use crate::viewport::Viewport;

pub struct App<R: Renderer> {
    viewport: Viewport,
    input: InputState,
    session: Session,
    state: GameState,
    layout: SceneLayout,
    renderer: R,
}

impl<R: Renderer> App<R> {
    pub fn new(seed: u64, source: Arc<dyn QuestionSource>, renderer: R) -> Self {
        let viewport = Viewport::new();
        let state = GameState::new(seed);
        let layout = SceneLayout::from_width(viewport.scene_width());
        Self {
            viewport,
            input: InputState::new(),
            session: Session::new(source),
            state,
            layout,
            renderer,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn submit_config(&mut self, config: SessionConfig) {
        self.session.submit_config(config);
    }

    /// Submit an answer to the displayed question
    pub fn answer(&mut self, text: &str) -> bool {
        self.session.answer(text)
    }

    /// Host-area resize notification
    ///
    /// Resizes the render surface and recomputes scene width and layout
    /// before the next tick consumes them. Zero-width passes are no-ops.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.viewport.observe(width, height) {
            return;
        }
        self.renderer.resize(width, height);
        self.state.set_scene_width(self.viewport.scene_width());
        self.layout = SceneLayout::from_width(self.viewport.scene_width());
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key, self.session.is_paused());
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// One display-refresh invocation
    ///
    /// Always polls the session so a resolved question unpauses work on the
    /// very next frame. Simulation and rendering run only while unpaused and
    /// in `Playing`; the caller keeps rescheduling regardless.
    pub fn frame(&mut self) {
        self.session.poll();

        if !self.session.simulating() {
            return;
        }

        let interrupts = self
            .session
            .config()
            .is_some_and(|c| c.questions_enabled);
        let events = tick(&mut self.state, &self.input.tick_input(interrupts), false);

        for event in events {
            if event == GameEvent::QuestionRequested {
                self.session.request_interrupt();
            }
        }

        let scene = build_scene(&self.state, &self.layout);
        self.renderer.render(&scene);
    }
}

/// Cancellable repeating frame task
///
/// Runs a callback at [`FRAME_RATE`] on a worker thread until cancelled.
/// Cancellation is idempotent and happens automatically on drop.
pub struct FrameLoop {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameLoop {
    pub fn spawn<F>(mut frame: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let period = Duration::from_secs(1) / FRAME_RATE;

        let handle = thread::spawn(move || {
            while flag.load(Ordering::SeqCst) {
                frame();
                thread::sleep(period);
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop rescheduling and join the worker; safe to call repeatedly
    pub fn cancel(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        !self.running.load(Ordering::SeqCst)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::i18n::Language;
    use crate::provider::StaticQuestionSource;
    use crate::render::LogRenderer;
    use crate::session::SessionMode;
    use glam::Vec3;
    use std::sync::atomic::AtomicU64;
    use std::time::Duration;

    const PAYLOAD: &str =
        r#"{"question": "2+2?", "options": ["3", "4"], "correctAnswer": "4"}"#;

    fn demo_app(questions_enabled: bool) -> App<LogRenderer> {
        let mut app = App::new(
            42,
            Arc::new(StaticQuestionSource::new(PAYLOAD)),
            LogRenderer::default(),
        );
        app.submit_config(SessionConfig {
            language: Language::En,
            prompt: "x".into(),
            questions_enabled,
        });
        app
    }

    #[test]
    fn resize_pushes_width_into_sim_and_layout() {
        let mut app = demo_app(false);
        app.resize(900, 600);
        assert_eq!(app.state().scene_width, 600.0);
        assert_eq!(app.layout, SceneLayout::from_width(600.0));

        // Transient zero-size layout pass changes nothing
        app.resize(0, 600);
        assert_eq!(app.state().scene_width, 600.0);
    }

    #[test]
    fn frames_advance_simulation_when_playing() {
        let mut app = demo_app(false);
        app.key_down(Key::Right);
        let x0 = app.state().avatar.pos.x;
        app.frame();
        assert_eq!(app.state().avatar.pos.x, x0 + AVATAR_SPEED);
        assert_eq!(app.renderer.frames, 1);
    }

    #[test]
    fn frames_are_inert_while_loading_pre_game_question() {
        let mut app = demo_app(true);
        assert_eq!(app.session().mode(), SessionMode::LoadingQuestion);
        app.key_down(Key::Right); // ignored: paused
        let before = app.state().clone();

        // Question may resolve during these frames; simulation must not
        // advance until it is answered either way
        for _ in 0..10 {
            app.frame();
        }
        assert_eq!(app.state().avatar.pos, before.avatar.pos);
        assert_eq!(app.renderer.frames, 0);
    }

    #[test]
    fn pre_game_question_gates_play_until_answered() {
        let mut app = demo_app(true);
        for _ in 0..500 {
            app.frame();
            if app.session().question().is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(app.session().mode(), SessionMode::AwaitingPreGameQuestion);

        assert!(!app.answer("3"));
        assert!(app.answer("4"));
        assert_eq!(app.session().mode(), SessionMode::Playing);

        app.frame();
        assert_eq!(app.renderer.frames, 1);
    }

    #[test]
    fn catch_interrupt_pauses_until_answered() {
        let mut app = demo_app(true);
        for _ in 0..500 {
            app.frame();
            if app.session().question().is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert!(app.answer("4"));

        // Force catches until one rolls the 20% interrupt
        let mut interrupted = false;
        for _ in 0..300 {
            let avatar_pos = app.state().avatar.pos;
            app.state.items[0].pos = avatar_pos.with_z(ITEM_PLANE_Z);
            app.state.items[0].speed = 0.0;
            app.frame();
            if app.session().is_paused() {
                interrupted = true;
                break;
            }
        }
        assert!(interrupted, "a catch interrupt should have fired");
        assert_eq!(app.session().mode(), SessionMode::Playing);

        let score_at_pause = app.score();
        for _ in 0..500 {
            app.frame();
            if app.session().question().is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(app.score(), score_at_pause, "paused frames do not score");
        assert!(app.answer("4"));
        assert!(app.session().simulating());
    }

    #[test]
    fn frame_loop_runs_and_cancels_idempotently() {
        let counter = Arc::new(AtomicU64::new(0));
        let shared = Arc::clone(&counter);
        let mut frame_loop = FrameLoop::spawn(move || {
            shared.fetch_add(1, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(100));
        frame_loop.cancel();
        let frames = counter.load(Ordering::SeqCst);
        assert!(frames > 0, "loop never ran");
        assert!(frame_loop.is_cancelled());

        // Second cancel is a no-op
        frame_loop.cancel();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(counter.load(Ordering::SeqCst), frames);
    }

    #[test]
    fn item_positions_frozen_while_paused() {
        let mut app = demo_app(true);
        // Pre-game fetch in flight: paused
        let items: Vec<Vec3> = app.state().items.iter().map(|i| i.pos).collect();
        app.frame();
        let after: Vec<Vec3> = app.state().items.iter().map(|i| i.pos).collect();
        assert_eq!(items, after);
    }
}
