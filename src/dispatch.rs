//! Concurrent fan-out of one theme to every registered backend.

use std::collections::BTreeMap;

use crate::backends::{BackendKey, BackendRegistry};
use crate::error::{BackendError, BackendStage};

/// Outcome of one backend's apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub backend: BackendKey,
    pub error: Option<BackendError>,
}

impl DispatchResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply each value to its backend, all backends at once.
///
/// Only keys present both in `values` and in `backends` run. Every started
/// backend is awaited; one failing never cancels another. Results come back
/// in registration order.
pub async fn dispatch(
    values: &BTreeMap<BackendKey, String>,
    backends: &BackendRegistry,
) -> Vec<DispatchResult> {
    let handles: Vec<_> = backends
        .iter()
        .filter_map(|(key, backend)| {
            let value = values.get(&key)?.clone();
            let backend = backend.clone();
            tracing::debug!(backend = %key, value = %value, "dispatching theme value");
            let handle = tokio::spawn(async move { backend.apply(&value).await });
            Some((key, handle))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (backend, handle) in handles {
        let error = match handle.await {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(err),
            // A panicking backend only takes itself down.
            Err(join_err) => Some(BackendError {
                stage: BackendStage::Task,
                message: format!("backend task failed: {join_err}"),
            }),
        };
        match &error {
            None => tracing::info!(backend = %backend, "backend switched"),
            Some(err) => tracing::warn!(backend = %backend, error = %err, "backend failed"),
        }
        results.push(DispatchResult { backend, error });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::ThemeBackend;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Barrier;

    /// Records applied values; fails when asked to.
    struct Recording {
        applied: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Recording {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                applied: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn applied(&self) -> Vec<String> {
            self.applied.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ThemeBackend for Recording {
        async fn apply(&self, value: &str) -> Result<(), BackendError> {
            if self.fail {
                return Err(BackendError::new(BackendStage::Dump, "always fails"));
            }
            self.applied.lock().unwrap().push(value.to_string());
            Ok(())
        }
    }

    struct Panics;

    #[async_trait]
    impl ThemeBackend for Panics {
        async fn apply(&self, _value: &str) -> Result<(), BackendError> {
            panic!("backend blew up");
        }
    }

    /// Only completes once every sibling has started too.
    struct Rendezvous(Arc<Barrier>);

    #[async_trait]
    impl ThemeBackend for Rendezvous {
        async fn apply(&self, _value: &str) -> Result<(), BackendError> {
            self.0.wait().await;
            Ok(())
        }
    }

    fn values(pairs: &[(BackendKey, &str)]) -> BTreeMap<BackendKey, String> {
        pairs
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn failing_backend_does_not_stop_sibling() {
        let failing = Recording::new(true);
        let working = Recording::new(false);
        let mut registry = BackendRegistry::new();
        registry.register(BackendKey::Terminal, failing.clone());
        registry.register(BackendKey::Editor, working.clone());

        let results = dispatch(
            &values(&[(BackendKey::Terminal, "dark"), (BackendKey::Editor, "Arc Dark")]),
            &registry,
        )
        .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].backend, BackendKey::Terminal);
        assert_eq!(
            results[0].error.as_ref().map(|e| e.stage),
            Some(BackendStage::Dump)
        );
        assert_eq!(results[1].backend, BackendKey::Editor);
        assert!(results[1].is_ok());
        assert_eq!(working.applied(), vec!["Arc Dark"]);
    }

    #[tokio::test]
    async fn only_keys_in_both_maps_run() {
        let terminal = Recording::new(false);
        let triggers = Recording::new(false);
        let mut registry = BackendRegistry::new();
        registry.register(BackendKey::Terminal, terminal.clone());
        registry.register(BackendKey::Triggers, triggers.clone());

        let results = dispatch(
            &values(&[(BackendKey::Terminal, "dark"), (BackendKey::Editor, "Arc Dark")]),
            &registry,
        )
        .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].backend, BackendKey::Terminal);
        assert_eq!(terminal.applied(), vec!["dark"]);
        assert!(triggers.applied().is_empty());
    }

    #[tokio::test]
    async fn panicking_backend_is_reported_as_task_failure() {
        let working = Recording::new(false);
        let mut registry = BackendRegistry::new();
        registry.register(BackendKey::Terminal, Arc::new(Panics));
        registry.register(BackendKey::Editor, working.clone());

        let results = dispatch(
            &values(&[(BackendKey::Terminal, "dark"), (BackendKey::Editor, "x")]),
            &registry,
        )
        .await;

        assert_eq!(
            results[0].error.as_ref().map(|e| e.stage),
            Some(BackendStage::Task)
        );
        assert!(results[1].is_ok());
        assert_eq!(working.applied(), vec!["x"]);
    }

    #[tokio::test]
    async fn backends_run_concurrently() {
        // Sequential execution would deadlock on the barrier.
        let barrier = Arc::new(Barrier::new(3));
        let mut registry = BackendRegistry::new();
        for key in BackendKey::ALL {
            registry.register(key, Arc::new(Rendezvous(barrier.clone())));
        }

        let results = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            dispatch(
                &values(&[
                    (BackendKey::Terminal, "a"),
                    (BackendKey::Editor, "b"),
                    (BackendKey::Triggers, "c"),
                ]),
                &registry,
            ),
        )
        .await
        .expect("backends should run side by side");

        assert!(results.iter().all(DispatchResult::is_ok));
    }

    #[tokio::test]
    async fn empty_registry_dispatches_nothing() {
        let results = dispatch(&values(&[(BackendKey::Editor, "x")]), &BackendRegistry::new()).await;
        assert!(results.is_empty());
    }
}
