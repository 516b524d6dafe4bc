//! The chat transcript: an ordered, append-only log replayed on startup.

use crate::storage;
use crate::types::ChatRecord;
use tracing::warn;

const HISTORY_KEY: &str = "chat_history";

/// In-memory transcript backed by durable storage. Every append persists the
/// full sequence; records are never removed individually, only cleared as a
/// whole on "new chat".
pub struct ChatStore {
    namespace: String,
    records: Vec<ChatRecord>,
}

impl ChatStore {
    /// Open the transcript for a namespace, replaying whatever was stored.
    /// Unreadable history is treated as empty rather than blocking startup.
    pub fn open(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let records = match storage::get(&namespace, HISTORY_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("stored chat history unreadable, starting empty: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { namespace, records }
    }

    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Append one record and persist the full sequence synchronously.
    pub fn append(&mut self, record: ChatRecord) {
        self.records.push(record);
        self.persist();
    }

    /// Drop the whole transcript, in memory and in storage.
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(err) = storage::delete(&self.namespace, HISTORY_KEY) {
            warn!("failed to clear stored chat history: {err}");
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.records) {
            Ok(raw) => {
                if let Err(err) = storage::set(&self.namespace, HISTORY_KEY, &raw) {
                    warn!("failed to persist chat history: {err}");
                }
            }
            Err(err) => warn!("failed to encode chat history: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;

    #[test]
    fn append_then_reopen_replays_in_order() {
        let namespace = "history-test-replay";
        storage::clear(namespace).ok();

        let mut store = ChatStore::open(namespace);
        assert!(store.is_empty());
        store.append(ChatRecord::user_text("one"));
        store.append(ChatRecord::assistant_text("two"));
        store.append(ChatRecord::Image {
            url: "https://example.com/x.png".to_string(),
            sender: Sender::Assistant,
            caption: Some("three".to_string()),
        });

        let reopened = ChatStore::open(namespace);
        assert_eq!(reopened.len(), 3);
        assert_eq!(reopened.records(), store.records());
        assert_eq!(reopened.records()[0], ChatRecord::user_text("one"));

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn clear_empties_memory_and_storage() {
        let namespace = "history-test-clear";
        storage::clear(namespace).ok();

        let mut store = ChatStore::open(namespace);
        store.append(ChatRecord::user_text("hello"));
        store.clear();
        assert!(store.is_empty());

        let reopened = ChatStore::open(namespace);
        assert!(reopened.is_empty());

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn unreadable_history_starts_empty() {
        let namespace = "history-test-garbage";
        storage::set(namespace, "chat_history", "[{broken").expect("seed");
        let store = ChatStore::open(namespace);
        assert!(store.is_empty());
        storage::clear(namespace).expect("cleanup");
    }
}
