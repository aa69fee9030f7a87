use crate::model::{NewPage, PageUpdate};
use crate::store::{Latency, PageStore};

fn store() -> PageStore {
    PageStore::new(Vec::new()).with_latency(Latency::off())
}

fn new_page(site_id: u64, title: &str, slug: &str) -> NewPage {
    NewPage {
        site_id,
        title: title.to_string(),
        slug: slug.to_string(),
    }
}

#[tokio::test]
async fn first_page_of_a_site_becomes_default() {
    let mut store = store();
    let home = store.create(new_page(1, "Home", "home")).await;
    let about = store.create(new_page(1, "About", "about")).await;

    assert!(home.is_default);
    assert_eq!(home.order, 1);
    assert!(!about.is_default);
    assert_eq!(about.order, 2);
}

#[tokio::test]
async fn default_flag_is_scoped_per_site() {
    let mut store = store();
    store.create(new_page(1, "Home", "home")).await;
    let other = store.create(new_page(2, "Home", "home")).await;

    // First page of a different site is that site's default
    assert!(other.is_default);
    assert_eq!(other.order, 1);
}

#[tokio::test]
async fn list_filters_by_site_and_sorts_by_order() {
    let mut store = store();
    let a = store.create(new_page(1, "Home", "home")).await;
    let b = store.create(new_page(1, "About", "about")).await;
    store.create(new_page(2, "Other", "other")).await;

    store.update(a.id, PageUpdate { order: Some(5), ..PageUpdate::default() })
        .await
        .unwrap();

    let pages = store.get_by_site_id(1).await;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id, b.id);
    assert_eq!(pages[1].id, a.id);
}

#[tokio::test]
async fn update_merges_only_named_fields() {
    let mut store = store();
    let created = store.create(new_page(1, "Home", "home")).await;

    let updated = store
        .update(
            created.id,
            PageUpdate {
                title: Some("Start".to_string()),
                ..PageUpdate::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Start");
    assert_eq!(updated.slug, "home");
    assert!(updated.is_default);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let mut store = store();
    let created = store.create(new_page(1, "Home", "home")).await;

    let removed = store.delete(created.id).await.unwrap();
    assert_eq!(removed.id, created.id);
    assert!(store.get_by_id(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn reorder_skips_unknown_ids_and_returns_sorted_list() {
    let mut store = store();
    let home = store.create(new_page(1, "Home", "home")).await;
    let about = store.create(new_page(1, "About", "about")).await;

    let pages = store
        .reorder(1, &[(about.id, 1), (home.id, 2), (999, 3)])
        .await;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].id, about.id);
    assert_eq!(pages[1].id, home.id);
}
