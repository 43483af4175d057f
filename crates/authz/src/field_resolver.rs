//! FieldResolver - the pending values of one field of a resource
//!
//! A resolver is handed to the caller as soon as resolution has started.
//! The work runs on the current tokio runtime, or on a shared fallback
//! runtime when the caller is outside of one, so it always starts right away
//! and keeps running when the resolver is dropped. The resolver always
//! completes with a (possibly empty) [`FieldValues`]; it has no failed state.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use std::task::{Context, Poll};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::{JoinError, JoinHandle};
use tracing::error;

/// Resolved values of a field, e.g. group URNs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: HashSet<String>,
}

impl FieldValues {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &HashSet<String> {
        &self.values
    }

    pub fn into_values(self) -> HashSet<String> {
        self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values in lexical order, for stable output
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.values.iter().map(|s| s.as_str()).collect();
        sorted.sort_unstable();
        sorted
    }
}

impl From<HashSet<String>> for FieldValues {
    fn from(values: HashSet<String>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Runtime for resolutions started outside of any tokio runtime
fn fallback_runtime() -> Option<&'static Runtime> {
    static FALLBACK: OnceLock<std::io::Result<Runtime>> = OnceLock::new();
    let runtime = FALLBACK.get_or_init(|| {
        Builder::new_multi_thread()
            .thread_name("field-resolver")
            .enable_all()
            .build()
    });

    match runtime {
        Ok(runtime) => Some(runtime),
        Err(err) => {
            error!(error = %err, "Failed to build fallback field resolver runtime");
            None
        }
    }
}

enum Pending {
    Ready(FieldValues),
    Spawned(JoinHandle<FieldValues>),
}

/// Single-use handle producing the values of one field
///
/// A `FieldResolver` is itself a future. It is `Unpin`, so it can be polled
/// through `&mut` and a lookup that was dropped mid-await can be resumed.
pub struct FieldResolver {
    pending: Pending,
}

impl FieldResolver {
    /// Resolver that is already complete
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: Pending::Ready(values.into_iter().collect()),
        }
    }

    /// Resolver that completes with no values
    pub fn empty() -> Self {
        Self {
            pending: Pending::Ready(FieldValues::empty()),
        }
    }

    /// Start `resolution` now, on the current tokio runtime or on the
    /// fallback runtime.
    ///
    /// Dropping the returned resolver does not cancel the resolution.
    pub fn spawn<F>(resolution: F) -> Self
    where
        F: Future<Output = FieldValues> + Send + 'static,
    {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => match fallback_runtime() {
                Some(runtime) => runtime.handle().clone(),
                None => return Self::empty(),
            },
        };

        Self {
            pending: Pending::Spawned(handle.spawn(resolution)),
        }
    }

    /// Wait for the field values
    pub async fn field_values(self) -> FieldValues {
        self.await
    }

    /// Whether the values are available without waiting
    pub fn is_ready(&self) -> bool {
        match &self.pending {
            Pending::Ready(_) => true,
            Pending::Spawned(handle) => handle.is_finished(),
        }
    }
}

// A task that panicked or was aborted still resolves, to no values.
fn joined(result: Result<FieldValues, JoinError>) -> FieldValues {
    match result {
        Ok(values) => values,
        Err(err) => {
            error!(error = %err, "Field resolution task did not complete");
            FieldValues::empty()
        }
    }
}

impl Future for FieldResolver {
    type Output = FieldValues;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<FieldValues> {
        let values = match &mut self.pending {
            Pending::Ready(values) => std::mem::take(values),
            Pending::Spawned(handle) => match Pin::new(handle).poll(cx) {
                Poll::Ready(result) => joined(result),
                Poll::Pending => return Poll::Pending,
            },
        };
        self.pending = Pending::Ready(FieldValues::empty());
        Poll::Ready(values)
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.pending {
            Pending::Ready(_) => "ready",
            Pending::Spawned(_) => "spawned",
        };
        f.debug_struct("FieldResolver").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_values_deduplicate() {
        let values: FieldValues = ["urn:li:corpGroup:a", "urn:li:corpGroup:a", "urn:li:corpGroup:b"]
            .into_iter()
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values.contains("urn:li:corpGroup:a"));
        assert_eq!(values.sorted(), vec!["urn:li:corpGroup:a", "urn:li:corpGroup:b"]);
    }

    #[test]
    fn test_field_values_serialize_as_list() {
        let values = FieldValues::from_iter(["urn:li:corpGroup:a"]);
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!(["urn:li:corpGroup:a"]));
    }

    #[tokio::test]
    async fn test_ready_resolvers() {
        let resolver = FieldResolver::from_values(["x"]);
        assert!(resolver.is_ready());
        assert_eq!(resolver.await, FieldValues::from_iter(["x"]));

        assert!(FieldResolver::empty().field_values().await.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_resolution() {
        let resolver = FieldResolver::spawn(async { FieldValues::from_iter(["y"]) });
        assert_eq!(format!("{:?}", resolver), "FieldResolver { state: \"spawned\" }");
        assert_eq!(resolver.field_values().await, FieldValues::from_iter(["y"]));
    }

    async fn explode() -> FieldValues {
        panic!("resolution blew up");
    }

    #[tokio::test]
    async fn test_panicking_resolution_yields_empty() {
        let resolver = FieldResolver::spawn(explode());
        assert!(resolver.field_values().await.is_empty());
    }

    #[test]
    fn test_spawned_outside_runtime() {
        let resolver = FieldResolver::spawn(async { FieldValues::from_iter(["z"]) });
        assert_eq!(format!("{:?}", resolver), "FieldResolver { state: \"spawned\" }");

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let values = runtime.block_on(resolver.field_values());
        assert_eq!(values, FieldValues::from_iter(["z"]));
    }

    #[test]
    fn test_panicking_resolution_outside_runtime_yields_empty() {
        let resolver = FieldResolver::spawn(explode());

        let runtime = tokio::runtime::Runtime::new().unwrap();
        assert!(runtime.block_on(resolver.field_values()).is_empty());
    }

    #[tokio::test]
    async fn test_resumes_after_interrupted_poll() {
        let gate = std::sync::Arc::new(tokio::sync::Notify::new());
        let released = gate.clone();
        let mut resolver = FieldResolver::spawn(async move {
            released.notified().await;
            FieldValues::from_iter(["late"])
        });

        let interrupted =
            tokio::time::timeout(std::time::Duration::from_millis(20), &mut resolver).await;
        assert!(interrupted.is_err());

        gate.notify_one();
        assert_eq!((&mut resolver).await, FieldValues::from_iter(["late"]));
    }
}
