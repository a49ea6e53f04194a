//! Scriptable relay for tests
//!
//! Enable with the `test-helpers` feature from other crates' dev-dependencies.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::Semaphore;

use crate::error::RelayError;
use crate::relay::{MailRelay, RelayReceipt, TemplateParams};

/// One recorded call to [`FakeRelay::send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSend {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

#[derive(Debug, Default)]
struct Inner {
    outcomes: VecDeque<Result<RelayReceipt, RelayError>>,
    calls: Vec<RecordedSend>,
}

/// In-memory [`MailRelay`] with scripted outcomes.
///
/// Outcomes are consumed in order; once the script runs out every call
/// succeeds. A held relay parks each call until [`FakeRelay::release`] is
/// called, which lets tests observe the `Submitting` window.
#[derive(Debug, Clone)]
pub struct FakeRelay {
    inner: Arc<Mutex<Inner>>,
    gate: Option<Arc<Semaphore>>,
}

impl Default for FakeRelay {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl FakeRelay {
    /// Every call succeeds
    pub fn succeeding() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            gate: None,
        }
    }

    /// The first call fails with `error`
    pub fn failing(error: RelayError) -> Self {
        let relay = Self::succeeding();
        relay.push_outcome(Err(error));
        relay
    }

    /// Calls wait for [`FakeRelay::release`] before completing
    pub fn held() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            gate: Some(Arc::new(Semaphore::new(0))),
        }
    }

    pub fn push_outcome(&self, outcome: Result<RelayReceipt, RelayError>) {
        self.lock().outcomes.push_back(outcome);
    }

    /// Let `count` parked calls complete
    pub fn release(&self, count: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(count);
        }
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn calls(&self) -> Vec<RecordedSend> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MailRelay for FakeRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError> {
        self.lock().calls.push(RecordedSend {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            params: params.clone(),
        });

        if let Some(gate) = &self.gate {
            match gate.acquire().await {
                Ok(permit) => permit.forget(),
                Err(_) => return Err(RelayError::Transport("fake relay gate closed".into())),
            }
        }

        self.lock()
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Ok(RelayReceipt::ok()))
    }
}
