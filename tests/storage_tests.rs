//! Integration tests for the local storage backend and the stores built on
//! top of it. Each test uses its own namespace so runs stay isolated.

use dimple::history::ChatStore;
use dimple::storage;
use dimple::types::{ChatRecord, Sender, UserProfile};
use dimple::{api, profile};

mod storage_backend {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let namespace = "it-storage-roundtrip";
        storage::clear(namespace).ok();

        storage::set(namespace, "answer", r#"{"value":42}"#).expect("set");
        assert_eq!(
            storage::get(namespace, "answer"),
            Some(r#"{"value":42}"#.to_string())
        );

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn get_missing_key_is_none() {
        assert_eq!(storage::get("it-storage-missing", "nothing"), None);
    }

    #[test]
    fn delete_removes_only_the_key() {
        let namespace = "it-storage-delete";
        storage::clear(namespace).ok();

        storage::set(namespace, "keep", "a").expect("set keep");
        storage::set(namespace, "drop", "b").expect("set drop");
        storage::delete(namespace, "drop").expect("delete");

        assert_eq!(storage::get(namespace, "keep"), Some("a".to_string()));
        assert_eq!(storage::get(namespace, "drop"), None);

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn delete_missing_key_is_ok() {
        storage::delete("it-storage-delete-missing", "ghost").expect("delete absent key");
    }
}

mod transcript {
    use super::*;

    #[test]
    fn appended_records_replay_in_order_across_reopen() {
        let namespace = "it-transcript-replay";
        storage::clear(namespace).ok();

        let mut store = ChatStore::open(namespace);
        let records = [
            ChatRecord::user_text("generate an image of a fox"),
            ChatRecord::Image {
                url: "https://img.example/fox.png".to_string(),
                sender: Sender::Assistant,
                caption: Some("A fox!".to_string()),
            },
            ChatRecord::user_text("thanks"),
            ChatRecord::assistant_text("Anytime!"),
        ];
        for record in &records {
            store.append(record.clone());
        }

        let reopened = ChatStore::open(namespace);
        assert_eq!(reopened.records(), &records);

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn new_chat_clears_persisted_history() {
        let namespace = "it-transcript-clear";
        storage::clear(namespace).ok();

        let mut store = ChatStore::open(namespace);
        store.append(ChatRecord::user_text("hello"));
        store.append(ChatRecord::assistant_text("hi"));
        store.clear();

        assert!(ChatStore::open(namespace).is_empty());
        assert_eq!(storage::get(namespace, "chat_history"), None);

        storage::clear(namespace).expect("cleanup");
    }

    #[test]
    fn fallback_reply_persists_like_any_record() {
        let namespace = "it-transcript-fallback";
        storage::clear(namespace).ok();

        let mut store = ChatStore::open(namespace);
        store.append(ChatRecord::assistant_text(api::FALLBACK_MESSAGE));

        let reopened = ChatStore::open(namespace);
        assert_eq!(
            reopened.records(),
            &[ChatRecord::assistant_text(api::FALLBACK_MESSAGE)]
        );

        storage::clear(namespace).expect("cleanup");
    }
}

mod profile_store {
    use super::*;

    #[test]
    fn profile_persists_across_loads() {
        let namespace = "it-profile-persist";
        storage::clear(namespace).ok();

        let saved = UserProfile {
            name: "Dimple".to_string(),
            role: "CEO & FOUNDER".to_string(),
            avatar: Some(profile::avatar_data_uri("me.png", &[1, 2, 3])),
        };
        profile::save(namespace, &saved).expect("save");
        assert_eq!(profile::load(namespace), saved);

        // A transcript clear must never touch the profile.
        let mut store = ChatStore::open(namespace);
        store.append(ChatRecord::user_text("hi"));
        store.clear();
        assert_eq!(profile::load(namespace), saved);

        storage::clear(namespace).expect("cleanup");
    }
}
