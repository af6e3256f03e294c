use super::*;

#[test]
fn keys_are_lowercased_on_insert_and_fetch() {
    let mut store = StaticClipStore::new();
    store.insert("Volcano", ClipData(vec![1, 2, 3]));

    assert_eq!(store.len(), 1);
    assert_eq!(
        store.fetch("volcano").unwrap(),
        Some(ClipData(vec![1, 2, 3]))
    );
    assert_eq!(store.fetch("VOLCANO").unwrap(), Some(ClipData(vec![1, 2, 3])));
    assert_eq!(store.fetch("lava").unwrap(), None);
}

#[test]
fn empty_store_misses_everything() {
    let mut store = StaticClipStore::new();
    assert!(store.is_empty());
    assert_eq!(store.fetch("anything").unwrap(), None);
}
