use todoey_core::db::open_db_in_memory;
use todoey_core::{
    CategoryService, Item, ItemRepository, ItemService, RepoError, SqliteCategoryRepository,
    SqliteItemRepository,
};
use uuid::Uuid;

fn titles(items: Vec<Item>) -> Vec<String> {
    items.into_iter().map(|item| item.title).collect()
}

#[test]
fn search_matches_case_insensitively_and_sorts_by_creation_time() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let category = categories.add_category("Fruit").unwrap();

    repo.create_item(category.id, &Item::with_id(Uuid::new_v4(), "Pineapple", 1_000))
        .unwrap();
    repo.create_item(category.id, &Item::with_id(Uuid::new_v4(), "APPLE pie", 2_000))
        .unwrap();
    repo.create_item(category.id, &Item::with_id(Uuid::new_v4(), "Banana", 3_000))
        .unwrap();

    let items = ItemService::new(repo);
    let hits = items.search(category.id, "apple").unwrap();
    assert_eq!(titles(hits), vec!["Pineapple", "APPLE pie"]);
}

#[test]
fn search_order_follows_creation_time_not_insertion() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let category = categories.add_category("Clock").unwrap();

    repo.create_item(category.id, &Item::with_id(Uuid::new_v4(), "late note", 9_000))
        .unwrap();
    repo.create_item(category.id, &Item::with_id(Uuid::new_v4(), "early note", 1_000))
        .unwrap();

    let items = ItemService::new(repo);
    assert_eq!(
        titles(items.search(category.id, "NOTE").unwrap()),
        vec!["early note", "late note"]
    );
    assert_eq!(
        titles(items.load_items(category.id).unwrap()),
        vec!["early note", "late note"]
    );
}

#[test]
fn search_ignores_diacritics() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let category = categories.add_category("Cafés").unwrap();

    items.add_item(category.id, "Visit Café Noir").unwrap();
    items.add_item(category.id, "Buy tea").unwrap();

    assert_eq!(
        titles(items.search(category.id, "cafe").unwrap()),
        vec!["Visit Café Noir"]
    );
    assert_eq!(
        titles(items.search(category.id, "CAFÉ").unwrap()),
        vec!["Visit Café Noir"]
    );
}

#[test]
fn search_treats_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let category = categories.add_category("Deals").unwrap();

    items.add_item(category.id, "50% off shoes").unwrap();
    items.add_item(category.id, "500 receipts").unwrap();

    assert_eq!(
        titles(items.search(category.id, "0%").unwrap()),
        vec!["50% off shoes"]
    );
    assert!(items.search(category.id, "_").unwrap().is_empty());
}

#[test]
fn search_is_scoped_to_category() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let work = categories.add_category("Work").unwrap();
    let home = categories.add_category("Home").unwrap();

    items.add_item(work.id, "Report draft").unwrap();
    items.add_item(home.id, "Report taxes").unwrap();

    assert_eq!(
        titles(items.search(work.id, "report").unwrap()),
        vec!["Report draft"]
    );
}

#[test]
fn empty_search_returns_title_sorted_list() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let category = categories.add_category("Blank").unwrap();

    items.add_item(category.id, "b").unwrap();
    items.add_item(category.id, "a").unwrap();

    assert_eq!(titles(items.search(category.id, "").unwrap()), vec!["a", "b"]);
}

#[test]
fn whitespace_in_search_text_is_matched_literally() {
    let conn = open_db_in_memory().unwrap();
    let categories = CategoryService::new(SqliteCategoryRepository::try_new(&conn).unwrap());
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let category = categories.add_category("Spaces").unwrap();

    items.add_item(category.id, "Pineapple").unwrap();
    items.add_item(category.id, "apple pie").unwrap();

    assert_eq!(
        titles(items.search(category.id, "apple ").unwrap()),
        vec!["apple pie"]
    );
    assert_eq!(titles(items.search(category.id, " ").unwrap()), vec!["apple pie"]);
    assert!(items.search(category.id, "  ").unwrap().is_empty());
}

#[test]
fn search_in_unknown_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let err = items.search(Uuid::new_v4(), "anything").unwrap_err();
    assert!(matches!(err, RepoError::CategoryNotFound(_)));
}
