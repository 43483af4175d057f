//! Mock entity client for resolver testing.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use entity::EntityClient;
use shared::{Authentication, AuthzError, EntityResponse, Result, Urn};
use tokio::sync::Notify;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Respond(Option<EntityResponse>),
    Fail(String),
    Panic,
}

/// One recorded `get_v2` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub entity_name: String,
    pub urn: Urn,
    pub aspect_names: HashSet<String>,
    pub authentication: Authentication,
}

/// Mock entity client that records calls and can hold them until released.
pub struct MockEntityClient {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedCall>>,
    gate: Option<Arc<Notify>>,
    completed: Arc<AtomicBool>,
    done: Arc<Notify>,
}

impl MockEntityClient {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
            gate: None,
            completed: Arc::new(AtomicBool::new(false)),
            done: Arc::new(Notify::new()),
        }
    }

    /// Hold every call until `gate.notify_one()` is called.
    pub fn gated(behavior: MockBehavior, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(behavior)
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    /// Wait until a call has finished.
    pub async fn wait_completed(&self) {
        let notified = self.done.notified();
        if self.is_completed() {
            return;
        }
        notified.await;
    }
}

#[async_trait]
impl EntityClient for MockEntityClient {
    async fn get_v2(
        &self,
        entity_name: &str,
        urn: &Urn,
        aspect_names: &HashSet<String>,
        authentication: &Authentication,
    ) -> Result<Option<EntityResponse>> {
        self.calls.lock().unwrap().push(RecordedCall {
            entity_name: entity_name.to_string(),
            urn: urn.clone(),
            aspect_names: aspect_names.clone(),
            authentication: authentication.clone(),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let result = match &self.behavior {
            MockBehavior::Respond(response) => Ok(response.clone()),
            MockBehavior::Fail(message) => Err(AuthzError::RemoteInvocation(message.clone())),
            MockBehavior::Panic => panic!("entity client exploded"),
        };

        self.completed.store(true, Ordering::SeqCst);
        self.done.notify_waiters();
        result
    }
}
