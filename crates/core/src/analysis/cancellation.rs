use std::future::Future;
use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Cooperative cancellation signal shared between a caller and an in-flight
/// analysis. Clones observe the same signal.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once `cancel` has been called on any clone.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only ends on cancel.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Await `analysis` unless `token` fires first.
///
/// Returns `None` when cancelled, before or during the call. The caller must
/// then drop the result: nothing is cached and nothing goes to history.
pub async fn run_cancellable_analysis<F, T>(token: &CancellationToken, analysis: F) -> Option<T>
where
    F: Future<Output = T>,
{
    if token.is_cancelled() {
        return None;
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            info!("Analysis cancelled before completion");
            None
        }
        result = analysis => Some(result),
    }
}
