//! Repository Integration Tests
//!
//! Tests for EntryRepository with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::repository::{init_db, EntryRepository, EntryStore};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn setup_test_repo() -> EntryRepository {
        // Use in-memory database for tests
        let db_state = init_db(":memory:").await.expect("Failed to init test DB");
        EntryRepository::new(Arc::new(Mutex::new(db_state.connection())))
    }

    #[tokio::test]
    async fn test_create_entry() {
        let repo = setup_test_repo().await;

        let created = repo
            .create("Hooks", "Learned about hooks")
            .await
            .expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.title, "Hooks");
        assert_eq!(created.description, "Learned about hooks");
        assert!(created.created_at > 0);
    }

    #[tokio::test]
    async fn test_create_then_list_contains_entry() {
        let repo = setup_test_repo().await;

        let created = repo
            .create("Ownership", "Borrowing rules finally clicked")
            .await
            .expect("Failed to create");

        let entries = repo.list_all().await.expect("List failed");
        assert!(entries
            .iter()
            .any(|e| e.id == created.id
                && e.title == "Ownership"
                && e.description == "Borrowing rules finally clicked"));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = setup_test_repo().await;

        let entries = repo.list_all().await.expect("List failed");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = setup_test_repo().await;

        let first = repo.create("First", "one").await.unwrap();
        let second = repo.create("Second", "two").await.unwrap();
        let third = repo.create("Third", "three").await.unwrap();

        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[tokio::test]
    async fn test_stores_exact_text() {
        let repo = setup_test_repo().await;

        let title = "Quotes \"and\" ticks'";
        let description = "Multi\nline, with  spaces and ünïcode";
        let created = repo.create(title, description).await.unwrap();

        let entries = repo.list_all().await.unwrap();
        let stored = entries.iter().find(|e| e.id == created.id).unwrap();
        assert_eq!(stored.title, title);
        assert_eq!(stored.description, description);
    }

    #[tokio::test]
    async fn test_created_at_is_recent() {
        let repo = setup_test_repo().await;

        let before = chrono::Utc::now().timestamp();
        let created = repo.create("Now", "timestamp check").await.unwrap();
        let after = chrono::Utc::now().timestamp();

        assert!(created.created_at >= before);
        assert!(created.created_at <= after);
    }
}
