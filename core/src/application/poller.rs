//! Background liveness polling.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::ports::ProcessHandle;

/// Interval between existence checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Watches a process until it disappears.
pub struct LivenessPoller;

impl LivenessPoller {
    /// Spawn a task that checks `handle.exists()` every `interval`.
    ///
    /// The task reports through the returned guard the first time the
    /// process is observed missing, or the check itself fails. It is
    /// aborted when the guard is stopped or dropped.
    pub fn spawn<H>(handle: H, interval: Duration) -> PollGuard
    where
        H: ProcessHandle + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let pid = handle.pid().as_raw();

        let task = tokio::spawn(async move {
            loop {
                sleep(interval).await;
                match handle.exists() {
                    Ok(true) => trace!(pid, "Process still running"),
                    Ok(false) => {
                        debug!(pid, "Process exited");
                        break;
                    }
                    Err(e) => {
                        debug!(pid, error = %e, "Liveness check failed, treating process as exited");
                        break;
                    }
                }
            }
            let _ = tx.send(());
        });

        PollGuard {
            task,
            exited: Some(rx),
            seen_exit: false,
        }
    }
}

/// Owns a running poll task.
pub struct PollGuard {
    task: JoinHandle<()>,
    /// Taken once the poll task has reported or gone away.
    exited: Option<oneshot::Receiver<()>>,
    seen_exit: bool,
}

impl PollGuard {
    /// Resolves once the process has been observed gone, and immediately
    /// on every later call.
    ///
    /// Never resolves if the poll task was stopped first.
    pub async fn exited(&mut self) {
        if self.seen_exit {
            return;
        }
        let Some(rx) = self.exited.as_mut() else {
            return std::future::pending().await;
        };
        let result = rx.await;
        self.exited = None;
        match result {
            Ok(()) => self.seen_exit = true,
            Err(_) => std::future::pending().await,
        }
    }

    /// Stop polling. Idempotent.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeProcess;
    use crate::domain::SignalKind;
    use crate::error::SignalError;
    use tokio::time::{timeout, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_detects_exit() {
        let process = FakeProcess::exits_after(Duration::from_millis(500));
        process.signal(SignalKind::Graceful).unwrap();

        let start = Instant::now();
        let mut guard = LivenessPoller::spawn(process.clone(), DEFAULT_POLL_INTERVAL);
        guard.exited().await;

        // Detected on the first poll at or after 500ms
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(start.elapsed() <= Duration::from_millis(600));
        assert!(process.exists_calls() >= 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_error_counts_as_exit() {
        let process =
            FakeProcess::ignores_interrupt().fail_exists(SignalError::Os("EINVAL".to_string()));

        let mut guard = LivenessPoller::spawn(process.clone(), DEFAULT_POLL_INTERVAL);
        guard.exited().await;
        assert_eq!(process.exists_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_process_never_reports_exit() {
        let process = FakeProcess::ignores_interrupt();
        let mut guard = LivenessPoller::spawn(process.clone(), DEFAULT_POLL_INTERVAL);

        let result = timeout(Duration::from_secs(2), guard.exited()).await;
        assert!(result.is_err());
        assert!(process.exists_calls() >= 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_polling() {
        let process = FakeProcess::ignores_interrupt();
        let guard = LivenessPoller::spawn(process.clone(), DEFAULT_POLL_INTERVAL);

        sleep(Duration::from_secs(1)).await;
        guard.stop();
        tokio::task::yield_now().await;
        let calls = process.exists_calls();
        assert!(calls >= 4);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(process.exists_calls(), calls);
        assert!(guard.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_halts_polling() {
        let process = FakeProcess::ignores_interrupt();
        let guard = LivenessPoller::spawn(process.clone(), DEFAULT_POLL_INTERVAL);

        sleep(Duration::from_millis(450)).await;
        drop(guard);
        let calls = process.exists_calls();
        assert_eq!(calls, 2);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(process.exists_calls(), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exited_resolves_again_after_exit() {
        let mut guard = LivenessPoller::spawn(FakeProcess::gone(), DEFAULT_POLL_INTERVAL);
        guard.exited().await;

        let start = Instant::now();
        guard.exited().await;
        guard.exited().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_guard_exited_stays_pending_on_retry() {
        let process = FakeProcess::ignores_interrupt();
        let mut guard = LivenessPoller::spawn(process, DEFAULT_POLL_INTERVAL);
        guard.stop();

        assert!(timeout(Duration::from_secs(1), guard.exited()).await.is_err());
        assert!(timeout(Duration::from_secs(1), guard.exited()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_guard_exited_stays_pending() {
        let process = FakeProcess::ignores_interrupt();
        let mut guard = LivenessPoller::spawn(process, DEFAULT_POLL_INTERVAL);
        guard.stop();

        let result = timeout(Duration::from_secs(1), guard.exited()).await;
        assert!(result.is_err());
    }
}
