use hhub_database::migration::{HeroPowers, Heroes, Powers};
use hhub_database::{Database, DatabaseError};
use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::prelude::{Iden, SchemaManager};

#[tokio::test]
async fn in_memory_store_is_migrated() {
    let db = Database::builder().url("sqlite::memory:").init().await.expect("open sqlite::memory:");
    db.ping_store().await.expect("ping");

    let manager = SchemaManager::new(&*db);
    let tables =
        [Heroes::Table.to_string(), Powers::Table.to_string(), HeroPowers::Table.to_string()];
    for table in tables {
        assert!(manager.has_table(&table).await.expect("inspect schema"), "missing table {table}");
    }
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("hhub.db").display());

    let db =
        Database::builder().url(&url).max_connections(2).init().await.expect("open file store");
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "INSERT INTO heroes (name, super_name) VALUES ('Kamala Khan', 'Ms. Marvel')",
    ))
    .await
    .expect("insert hero");
    drop(db);

    let reopened = Database::builder().url(&url).init().await.expect("reopen file store");
    let row = reopened
        .query_one(Statement::from_string(
            reopened.get_database_backend(),
            "SELECT COUNT(*) AS total FROM heroes",
        ))
        .await
        .expect("count heroes")
        .expect("one row");
    let total: i64 = row.try_get("", "total").expect("total column");
    assert_eq!(total, 1);
}

#[tokio::test]
async fn missing_url_fails_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn empty_pool_fails_validation() {
    let err =
        Database::builder().url("sqlite::memory:").max_connections(0).init().await.unwrap_err();
    assert_eq!(err.kind(), "Validation");
}
