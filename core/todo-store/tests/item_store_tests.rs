//! Behavior every `ItemStore` backend must share. Each scenario runs against
//! the memory store and an in-memory DuckDB store.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use todo_store::{DeleteOutcome, DuckDbItemStore, ItemStore, MemoryItemStore, StoreError};
use todo_types::{ItemId, ItemUpdate, NewItem, ValidationError};

fn backends() -> Vec<Box<dyn ItemStore>> {
    vec![
        Box::new(MemoryItemStore::new()),
        Box::new(DuckDbItemStore::open_in_memory().unwrap()),
    ]
}

// ── Create ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_item_with_fresh_id() {
    for store in backends() {
        let item = store.create(NewItem::new("Buy milk")).await.unwrap();
        assert_eq!(item.title, "Buy milk", "{}", store.backend_name());
        assert!(!item.completed);
        assert!(!item.id.to_string().is_empty());

        let other = store.create(NewItem::new("Buy milk")).await.unwrap();
        assert_ne!(item.id, other.id);
    }
}

#[tokio::test]
async fn create_empty_title_is_rejected_without_persisting() {
    for store in backends() {
        let err = store.create(NewItem::new("")).await.unwrap_err();
        assert!(
            matches!(err, StoreError::Validation(ValidationError::MissingTitle)),
            "{}: {err:?}",
            store.backend_name()
        );
        assert!(store.list().await.unwrap().is_empty());
    }
}

// ── List ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
    for store in backends() {
        assert!(store.list().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn list_returns_exactly_the_created_items_in_order() {
    for store in backends() {
        let mut created = Vec::new();
        for n in 0..5 {
            created.push(store.create(NewItem::new(format!("item {n}"))).await.unwrap());
        }

        let listed = store.list().await.unwrap();
        assert_eq!(listed, created, "{}", store.backend_name());

        let ids: HashSet<ItemId> = listed.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 5);
    }
}

// ── Replace ─────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_fields_under_same_id() {
    for store in backends() {
        let item = store.create(NewItem::new("Buy milk")).await.unwrap();
        let updated = store
            .replace(item.id, ItemUpdate::new("Buy oat milk", true))
            .await
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![updated], "{}", store.backend_name());
    }
}

#[tokio::test]
async fn replace_can_clear_completed() {
    for store in backends() {
        let item = store.create(NewItem::new("a")).await.unwrap();
        store.replace(item.id, ItemUpdate::new("a", true)).await.unwrap();
        let back = store.replace(item.id, ItemUpdate::new("a", false)).await.unwrap();
        assert!(!back.completed);
    }
}

#[tokio::test]
async fn replace_keeps_position_in_listing() {
    for store in backends() {
        let a = store.create(NewItem::new("a")).await.unwrap();
        let b = store.create(NewItem::new("b")).await.unwrap();
        store.replace(a.id, ItemUpdate::new("a2", false)).await.unwrap();

        let titles: Vec<String> = store.list().await.unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["a2".to_string(), b.title.clone()]);
    }
}

#[tokio::test]
async fn replace_missing_id_is_not_found_and_creates_nothing() {
    for store in backends() {
        let missing = ItemId::new();
        let err = store
            .replace(missing, ItemUpdate::new("ghost", true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == missing));
        assert!(store.list().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn replace_with_empty_title_is_rejected() {
    for store in backends() {
        let item = store.create(NewItem::new("keep me")).await.unwrap();
        let err = store.replace(item.id, ItemUpdate::new("", true)).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.list().await.unwrap(), vec![item]);
    }
}

// ── Delete ──────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_item_from_listing() {
    for store in backends() {
        let a = store.create(NewItem::new("a")).await.unwrap();
        let b = store.create(NewItem::new("b")).await.unwrap();

        assert_eq!(store.delete(a.id).await.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.list().await.unwrap(), vec![b]);
    }
}

#[tokio::test]
async fn delete_missing_id_is_idempotent() {
    for store in backends() {
        let item = store.create(NewItem::new("a")).await.unwrap();
        assert!(store.delete(item.id).await.unwrap().was_deleted());

        let again = store.delete(item.id).await.unwrap();
        assert_eq!(again, DeleteOutcome::Absent);
        assert!(!again.was_deleted());
        assert_eq!(store.delete(ItemId::new()).await.unwrap(), DeleteOutcome::Absent);
    }
}

// ── End to end ──────────────────────────────────────────────────

#[tokio::test]
async fn create_replace_list_delete_scenario() {
    for store in backends() {
        let item = store.create(NewItem::new("Buy milk")).await.unwrap();
        let x = item.id;

        let updated = store.replace(x, ItemUpdate::new("Buy oat milk", true)).await.unwrap();
        assert_eq!(updated.id, x);

        assert_eq!(store.list().await.unwrap(), vec![updated]);
        assert!(store.delete(x).await.unwrap().was_deleted());
        assert!(store.list().await.unwrap().iter().all(|i| i.id != x));
    }
}

#[tokio::test]
async fn concurrent_creates_are_all_persisted() {
    let store = std::sync::Arc::new(DuckDbItemStore::open_in_memory().unwrap());
    let mut handles = Vec::new();
    for n in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(NewItem::new(format!("t{n}"))).await.unwrap()
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(store.list().await.unwrap().len(), 16);
}
