//! Test doubles shared by handler and relay tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::{Generation, GenerationRequest, LlmError, TextGenerator};

type Outcome = Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>;

/// Records every request and answers with a fixed outcome.
pub struct FakeGenerator {
    outcome: Outcome,
    calls: AtomicUsize,
    last: Mutex<Option<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with(Box::new(move || Ok(text.clone())))
    }

    pub fn failing(err: fn() -> LlmError) -> Self {
        Self::with(Box::new(move || Err(err())))
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        (self.outcome)().map(|text| Generation {
            text,
            model: request.model.clone(),
            elapsed: Duration::from_millis(1),
        })
    }
}
