#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

/// Receives user facing progress lines while an operation runs.
pub type ProgressSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Emits one canned message per period until the messages run out or the
/// ticker is stopped. Nothing is emitted once `stop` has returned.
pub struct ProgressTicker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn start(
        messages: &'static [&'static str],
        period: Duration,
        sink: ProgressSink,
    ) -> ProgressTicker {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            for message in messages {
                tokio::select! {
                    biased;
                    _ = task_cancel.cancelled() => return,
                    _ = interval.tick() => {}
                }

                sink(message);
            }
        });

        return ProgressTicker {
            cancel,
            handle: Some(handle),
        };
    }

    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    tracing::warn!(error = ?err, "progress ticker failed");
                }
            }
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
