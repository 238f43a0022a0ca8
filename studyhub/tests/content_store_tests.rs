use studyhub::models::Language;

mod common;

#[tokio::test]
async fn roadmap_lists_sorted_ascending_by_order() {
    let (mut store, _storage) = common::empty_store().await;

    store
        .upsert_roadmap_item(common::sample_roadmap_item(1, 30))
        .await
        .unwrap();
    store
        .upsert_roadmap_item(common::sample_roadmap_item(2, 10))
        .await
        .unwrap();
    store
        .upsert_roadmap_item(common::sample_roadmap_item(3, 20))
        .await
        .unwrap();

    let orders: Vec<i32> = store.list_roadmap().iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![10, 20, 30]);
}

#[tokio::test]
async fn upsert_roadmap_item_replaces_by_id_in_place() {
    let (mut store, _storage) = common::empty_store().await;

    store
        .upsert_roadmap_item(common::sample_roadmap_item(1, 1))
        .await
        .unwrap();
    store
        .upsert_roadmap_item(common::sample_roadmap_item(2, 2))
        .await
        .unwrap();

    let mut updated = common::sample_roadmap_item(1, 1);
    updated.title_en = "Renamed".to_string();
    store.upsert_roadmap_item(updated).await.unwrap();

    let items = store.list_roadmap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "step-1");
    assert_eq!(items[0].title_en, "Renamed");
}

#[tokio::test]
async fn delete_returns_false_for_unknown_id() {
    let (mut store, _storage) = common::empty_store().await;
    assert!(!store.delete_roadmap_item("missing").await.unwrap());
    assert!(!store.delete_question("missing").await.unwrap());
}

#[tokio::test]
async fn delete_removes_only_the_named_record() {
    let (mut store, _storage) = common::empty_store().await;
    store
        .upsert_question(common::sample_question(1, 0))
        .await
        .unwrap();
    store
        .upsert_question(common::sample_question(2, 0))
        .await
        .unwrap();

    assert!(store.delete_question("q1").await.unwrap());

    let ids: Vec<&str> = store.list_questions().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["q2"]);
}

#[tokio::test]
async fn language_change_is_persisted() {
    let (mut store, storage) = common::empty_store().await;

    store.set_language(Language::En).await.unwrap();

    let saved = storage.snapshot().expect("state must be saved");
    assert_eq!(saved.lang, Language::En);
}

#[tokio::test]
async fn replace_all_roadmap_rejects_duplicate_ids() {
    let (mut store, _storage) = common::empty_store().await;

    let mut duplicate = common::sample_roadmap_item(2, 2);
    duplicate.id = "step-1".to_string();

    let result = store
        .replace_all_roadmap(vec![common::sample_roadmap_item(1, 1), duplicate])
        .await;

    assert!(result.is_err());
    assert!(store.list_roadmap().is_empty());
}
