use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

struct State<E> {
    remaining: usize,
    tx: Option<oneshot::Sender<Result<(), E>>>,
}

/// Completion side of a fan-out of N concurrent sub-operations.
///
/// Constructed with the number of sub-operations; each of them reports its
/// outcome exactly once through a cloned [`Reporter`]. The join completes
/// with `Ok(())` on the Nth success, or with the first reported failure.
/// Completion fires at most once: reports arriving after it are no-ops.
///
/// A failure does not cancel in-flight siblings — they run to completion
/// against their stores, and only their effect on the join outcome is
/// suppressed.
pub struct FanIn<E> {
    rx: oneshot::Receiver<Result<(), E>>,
}

/// Shared handle through which one sub-operation reports its outcome.
pub struct Reporter<E> {
    state: Arc<Mutex<State<E>>>,
}

impl<E> FanIn<E> {
    /// Create a fan-in over `count` sub-operations.
    ///
    /// `count` must be at least 1; an empty fan-out has nothing to wait for
    /// and is the caller's case to short-circuit.
    pub fn new(count: usize) -> (Self, Reporter<E>) {
        assert!(count > 0, "fan-in requires at least one sub-operation");
        let (tx, rx) = oneshot::channel();
        let state = Arc::new(Mutex::new(State {
            remaining: count,
            tx: Some(tx),
        }));
        (Self { rx }, Reporter { state })
    }

    /// Wait for the combined outcome.
    pub async fn join(self) -> Result<(), E> {
        self.rx
            .await
            .expect("fan-in reporters dropped without reporting")
    }
}

impl<E> Reporter<E> {
    /// Report one sub-operation outcome.
    pub fn report(&self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => self.success(),
            Err(err) => self.failure(err),
        }
    }

    /// Report one successful sub-operation.
    pub fn success(&self) {
        let mut state = self.state.lock().expect("fan-in lock poisoned");
        if state.tx.is_none() {
            // Already completed; late report.
            return;
        }
        state.remaining -= 1;
        if state.remaining == 0 {
            if let Some(tx) = state.tx.take() {
                let _ = tx.send(Ok(()));
            }
        }
    }

    /// Report one failed sub-operation. The first failure decides the
    /// combined outcome.
    pub fn failure(&self, err: E) {
        let mut state = self.state.lock().expect("fan-in lock poisoned");
        if let Some(tx) = state.tx.take() {
            let _ = tx.send(Err(err));
        }
    }
}

impl<E> Clone for Reporter<E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_after_nth_success() {
        let (fan_in, reporter) = FanIn::<String>::new(3);
        reporter.success();
        reporter.success();
        reporter.success();
        assert!(fan_in.join().await.is_ok());
    }

    #[tokio::test]
    async fn first_failure_wins() {
        let (fan_in, reporter) = FanIn::<String>::new(3);
        reporter.success();
        reporter.failure("boom".to_string());
        assert_eq!(fan_in.join().await.unwrap_err(), "boom");
    }

    #[tokio::test]
    async fn reports_after_completion_are_ignored() {
        let (fan_in, reporter) = FanIn::<String>::new(2);
        reporter.failure("first".to_string());
        reporter.failure("second".to_string());
        reporter.success();
        assert_eq!(fan_in.join().await.unwrap_err(), "first");
    }

    #[tokio::test]
    async fn single_operation_fan_in() {
        let (fan_in, reporter) = FanIn::<String>::new(1);
        reporter.report(Ok(()));
        assert!(fan_in.join().await.is_ok());
    }

    #[tokio::test]
    async fn concurrent_reporters_complete_exactly_once() {
        let (fan_in, reporter) = FanIn::<usize>::new(16);
        let mut handles = Vec::new();
        for i in 0..16 {
            let reporter = reporter.clone();
            handles.push(tokio::spawn(async move {
                // Half report success, half race to be the first failure.
                if i % 2 == 0 {
                    reporter.success();
                } else {
                    reporter.failure(i);
                }
            }));
        }
        drop(reporter);
        let err = fan_in.join().await.unwrap_err();
        assert!(err % 2 == 1);
        for h in handles {
            h.await.unwrap();
        }
    }

    #[test]
    #[should_panic(expected = "at least one sub-operation")]
    fn zero_count_is_rejected() {
        let _ = FanIn::<String>::new(0);
    }
}
