//! One-shot session deadline.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A timer that fires once, `duration` after [`Deadline::start`].
///
/// Dropping the deadline stops the timer task, so a session that finished
/// early leaves nothing running.
pub struct Deadline {
    fired: oneshot::Receiver<()>,
    has_fired: bool,
    timer: JoinHandle<()>,
}

impl Deadline {
    /// Start the timer. Must be called from within a tokio runtime.
    pub fn start(duration: Duration) -> Self {
        let (fire_tx, fired) = oneshot::channel();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            tracing::debug!("deadline of {duration:?} elapsed");
            let _ = fire_tx.send(());
        });
        Self {
            fired,
            has_fired: false,
            timer,
        }
    }

    /// Wait until the deadline has passed.
    ///
    /// Cancel-safe: dropping this future and calling it again keeps waiting
    /// for the same deadline. Once it has fired, later calls return at once.
    pub async fn elapsed(&mut self) {
        if self.has_fired {
            return;
        }
        if (&mut self.fired).await.is_err() {
            // The timer task is gone without firing; only happens while the
            // runtime shuts down, so never resolve.
            std::future::pending::<()>().await;
        }
        self.has_fired = true;
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
