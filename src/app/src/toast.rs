use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Dismissal token a one-shot timer posts back to the session. Carries the
/// epoch of the toast it was armed for, so a timer that outlives its toast
/// cannot take down a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismiss(u64);

/// The transient notification area. At most one toast is visible and at
/// most one dismissal is pending; arming a new toast aborts the previous
/// timer before it fires.
pub struct Toasts {
    current: Option<String>,
    epoch: u64,
    timer: Option<JoinHandle<()>>,
    dismiss_after: Duration,
    tx: UnboundedSender<Dismiss>,
}

impl Toasts {
    pub fn new(tx: UnboundedSender<Dismiss>, dismiss_after: Duration) -> Self {
        Toasts {
            current: None,
            epoch: 0,
            timer: None,
            dismiss_after,
            tx,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.epoch += 1;
        self.current = Some(message.into());

        let token = Dismiss(self.epoch);
        let tx = self.tx.clone();
        let delay = self.dismiss_after;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(token);
        }));
    }

    pub fn dismiss(&mut self, token: Dismiss) {
        if token.0 == self.epoch {
            self.current = None;
            self.timer = None;
        }
    }
}

impl Drop for Toasts {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    const SHORT: Duration = Duration::from_millis(20);

    #[tokio::test]
    async fn a_toast_is_dismissed_once_its_timer_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toasts = Toasts::new(tx, SHORT);

        toasts.show("Event created successfully!");
        assert_eq!(toasts.current(), Some("Event created successfully!"));

        let token = rx.recv().await.unwrap();
        toasts.dismiss(token);
        assert_eq!(toasts.current(), None);
    }

    #[tokio::test]
    async fn a_new_toast_cancels_the_pending_dismissal() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toasts = Toasts::new(tx, SHORT);

        toasts.show("first");
        toasts.show("second");

        // exactly one timer survives, and its token belongs to "second"
        let token = rx.recv().await.unwrap();
        tokio::time::sleep(SHORT * 3).await;
        assert!(rx.try_recv().is_err());

        toasts.dismiss(token);
        assert_eq!(toasts.current(), None);
    }

    #[tokio::test]
    async fn a_stale_token_does_not_dismiss_a_newer_toast() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toasts = Toasts::new(tx, Duration::from_secs(60));

        toasts.show("first");
        let stale = Dismiss(0);
        toasts.dismiss(stale);
        assert_eq!(toasts.current(), Some("first"));

        drop(toasts);
        assert!(rx.recv().await.is_none());
    }
}
