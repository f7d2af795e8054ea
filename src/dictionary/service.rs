//! Runs lookups off the event loop.
//!
//! Each submission gets its own task. The task never touches `AppState`; it
//! reports back through the event channel tagged with its request id, and the
//! handler decides whether the result is still wanted.

use crate::app::event::{AppEvent, RequestId};
use crate::dictionary::client::DictionaryClient;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct LookupService {
    client: Arc<dyn DictionaryClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl LookupService {
    pub fn new(client: Arc<dyn DictionaryClient>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn spawn_lookup(&self, request_id: RequestId, word: String) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            tracing::info!(request_id, word = %word, "lookup started");
            let outcome = client.lookup(&word).await;
            match &outcome {
                Ok(entries) => {
                    tracing::info!(request_id, entries = entries.len(), "lookup succeeded")
                }
                Err(e) => tracing::warn!(request_id, error = %e, "lookup failed"),
            }
            let _ = event_tx.send(AppEvent::LookupFinished {
                request_id,
                word,
                outcome,
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::error::LookupError;
    use crate::dictionary::model::DictionaryEntry;
    use async_trait::async_trait;

    struct EchoClient;

    #[async_trait]
    impl DictionaryClient for EchoClient {
        async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
            if word == "offline" {
                return Err(LookupError::Transport("unreachable".into()));
            }
            Ok(vec![DictionaryEntry {
                word: word.to_string(),
                phonetic: None,
                meanings: vec![],
            }])
        }
    }

    #[tokio::test]
    async fn test_spawned_lookup_reports_back_with_request_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = LookupService::new(Arc::new(EchoClient), tx);

        service.spawn_lookup(7, "crab".into()).await.unwrap();

        match rx.recv().await {
            Some(AppEvent::LookupFinished {
                request_id,
                word,
                outcome,
            }) => {
                assert_eq!(request_id, 7);
                assert_eq!(word, "crab");
                assert_eq!(outcome.unwrap()[0].word, "crab");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawned_lookup_reports_failures() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = LookupService::new(Arc::new(EchoClient), tx);

        service.spawn_lookup(1, "offline".into()).await.unwrap();

        match rx.recv().await {
            Some(AppEvent::LookupFinished { outcome, .. }) => {
                assert_eq!(outcome, Err(LookupError::Transport("unreachable".into())));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
