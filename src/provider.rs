//! Question provider collaborator
//!
//! The external question generator is asynchronous and unreliable. Requests
//! run on a worker thread and resolved questions come back over a channel
//! polled by the session each frame. Every failure path - provider error,
//! malformed payload, answer not among the options - resolves to the fixed
//! fallback question; the fetch itself never fails from the session's view.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;

use crate::i18n::Language;
use crate::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Network or backend failure
    #[error("question provider unavailable")]
    Unavailable,
    /// Payload failed to parse or was schema-invalid
    #[error("invalid question payload")]
    InvalidPayload,
    /// Designated correct answer is not among the options
    #[error("correct answer missing from options")]
    MissingAnswer,
}

/// External text-model boundary: returns a raw JSON question payload
pub trait QuestionSource: Send + Sync + 'static {
    fn generate(&self, prompt: &str, language: Language) -> Result<String, ProviderError>;
}

/// Canned source for demos and tests, with an invocation counter
pub struct StaticQuestionSource {
    payload: String,
    calls: AtomicUsize,
}

impl StaticQuestionSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source that always fails, forcing the fallback question
    pub fn unavailable() -> Self {
        Self::new("")
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuestionSource for StaticQuestionSource {
    fn generate(&self, _prompt: &str, _language: Language) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.payload.is_empty() {
            Err(ProviderError::Unavailable)
        } else {
            Ok(self.payload.clone())
        }
    }
}

/// Dispatches question fetches and delivers results back to the session
///
/// At-most-one-in-flight is enforced by the session's pending flag, not
/// here. If the service is dropped while a fetch is in flight, the worker's
/// send fails silently and the result is discarded.
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
    tx: Sender<Question>,
    rx: Receiver<Question>,
}

impl QuestionService {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        let (tx, rx) = unbounded();
        Self { source, tx, rx }
    }

    /// Start an asynchronous fetch; the result arrives via [`try_recv`](Self::try_recv)
    pub fn request(&self, prompt: &str, language: Language) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let full_prompt = format!(
            "{prompt}. The question should be in {}. Provide 4 multiple choice options.",
            language.display_name()
        );

        thread::spawn(move || {
            let question = match source.generate(&full_prompt, language) {
                Ok(payload) => Question::from_payload(&payload).unwrap_or_else(|err| {
                    log::warn!("provider payload rejected ({err}), using fallback");
                    Question::fallback()
                }),
                Err(err) => {
                    log::warn!("question fetch failed ({err}), using fallback");
                    Question::fallback()
                }
            };
            // Receiver may be gone after teardown; drop the result then
            let _ = tx.send(question);
        });
    }

    /// Non-blocking poll for a resolved question
    pub fn try_recv(&self) -> Option<Question> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn recv_with_timeout(service: &QuestionService) -> Question {
        for _ in 0..500 {
            if let Some(q) = service.try_recv() {
                return q;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("no question delivered within a second");
    }

    #[test]
    fn valid_source_delivers_its_question() {
        let source = Arc::new(StaticQuestionSource::new(
            r#"{"question": "2+2?", "options": ["3", "4"], "correctAnswer": "4"}"#,
        ));
        let service = QuestionService::new(source.clone());
        service.request("math", Language::En);

        let q = recv_with_timeout(&service);
        assert_eq!(q.question, "2+2?");
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn failing_source_delivers_fallback() {
        let service = QuestionService::new(Arc::new(StaticQuestionSource::unavailable()));
        service.request("anything", Language::Es);
        assert_eq!(recv_with_timeout(&service), Question::fallback());
    }

    #[test]
    fn invalid_payload_delivers_fallback() {
        let service = QuestionService::new(Arc::new(StaticQuestionSource::new(
            r#"{"question": "Pick", "options": ["A"], "correctAnswer": "B"}"#,
        )));
        service.request("anything", Language::Pt);
        assert_eq!(recv_with_timeout(&service), Question::fallback());
    }

    #[test]
    fn full_prompt_carries_language() {
        struct CapturingSource(std::sync::Mutex<Option<String>>, Sender<()>);
        impl QuestionSource for CapturingSource {
            fn generate(&self, prompt: &str, _language: Language) -> Result<String, ProviderError> {
                *self.0.lock().unwrap() = Some(prompt.to_string());
                let _ = self.1.send(());
                Err(ProviderError::Unavailable)
            }
        }

        let (done_tx, done_rx) = unbounded();
        let source = Arc::new(CapturingSource(std::sync::Mutex::new(None), done_tx));
        let service = QuestionService::new(source.clone());
        service.request("Ask about animals", Language::Es);

        done_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("source invoked");
        let prompt = source.0.lock().unwrap().take().unwrap();
        assert!(prompt.starts_with("Ask about animals."));
        assert!(prompt.contains("Spanish"));
    }
}
