//! Push notifications of the full word list.

use std::sync::Arc;

use palavras_core::Word;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Latest known word list and the last refresh error, if any.
///
/// A failed refresh keeps the previous words.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub words: Arc<Vec<Word>>,
    pub error: Option<String>,
}

/// Broadcasts the word list to subscribers after every change.
#[derive(Debug)]
pub struct WordFeed {
    tx: watch::Sender<FeedSnapshot>,
}

impl Default for WordFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeedSnapshot::default());
        Self { tx }
    }

    /// Replace the list and clear any error.
    pub fn publish(&self, words: Vec<Word>) {
        tracing::debug!(count = words.len(), "publishing word list");
        self.tx.send_replace(FeedSnapshot {
            words: Arc::new(words),
            error: None,
        });
    }

    /// Record a refresh failure without dropping the last known list.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "word list refresh failed");
        self.tx.send_modify(|snapshot| snapshot.error = Some(message));
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.tx.borrow().clone()
    }

    /// Call `on_change` with the current list now and after every change, or
    /// `on_error` while the feed is in an error state.
    ///
    /// Must be called inside a Tokio runtime. Dropping the returned
    /// [`Subscription`] stops delivery.
    pub fn subscribe<C, E>(&self, on_change: C, on_error: E) -> Subscription
    where
        C: Fn(Arc<Vec<Word>>) + Send + 'static,
        E: Fn(String) + Send + 'static,
    {
        let mut rx = self.tx.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                match snapshot.error {
                    Some(error) => on_error(error),
                    None => on_change(snapshot.words),
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
        Subscription { handle }
    }
}

/// Cancellation handle returned by [`WordFeed::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn word(id: &str) -> Word {
        Word {
            id: id.to_string(),
            portuguese: format!("pt-{id}"),
            french: format!("fr-{id}"),
            examples: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    async fn next<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> T {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("feed delivery timed out")
            .expect("feed closed")
    }

    #[tokio::test]
    async fn subscriber_gets_current_and_new_lists() {
        let feed = WordFeed::new();
        feed.publish(vec![word("a")]);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let _sub = feed.subscribe(move |words| tx.send(words.len()).unwrap(), |_| {});

        assert_eq!(next(&mut rx).await, 1);
        feed.publish(vec![word("b"), word("a")]);
        assert_eq!(next(&mut rx).await, 2);
    }

    #[tokio::test]
    async fn errors_keep_last_known_list() {
        let feed = WordFeed::new();
        feed.publish(vec![word("a")]);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let _sub = feed.subscribe(|_| {}, move |error| tx.send(error).unwrap());

        feed.fail("connection reset");
        assert_eq!(next(&mut rx).await, "connection reset");

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.words.len(), 1);
        assert_eq!(snapshot.error.as_deref(), Some("connection reset"));

        feed.publish(vec![]);
        assert!(feed.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let feed = WordFeed::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sub = feed.subscribe(
            move |words| {
                let _ = tx.send(words.len());
            },
            |_| {},
        );

        assert_eq!(next(&mut rx).await, 0);
        sub.unsubscribe();
        feed.publish(vec![word("a")]);

        let delivered = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(!matches!(delivered, Ok(Some(_))));
    }
}
