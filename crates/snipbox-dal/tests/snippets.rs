use snipbox_dal::{
    Error,
    snippet::{SnippetRepository, SnippetRepositoryImpl},
};
use snipbox_types::{SnippetPayload, TagsInput};
use tracing_test::traced_test;

async fn init_db() -> SnippetRepository {
    let pool = snipbox_dal::new_pool("sqlite::memory:").await.unwrap();
    snipbox_dal::migrate(&pool).await.unwrap();
    SnippetRepositoryImpl::new(pool)
}

fn payload(title: &str, tags: &str) -> SnippetPayload {
    SnippetPayload {
        title: title.to_string(),
        description: format!("{title} description"),
        code: "fn main() {}".to_string(),
        language: "rust".to_string(),
        tags: Some(tags.into()),
    }
}

#[tokio::test]
#[traced_test]
async fn test_create_and_get() {
    let repo = init_db().await;

    let created = repo.create(payload("Hello", "a, b ,,c")).await.unwrap();
    assert_eq!(created.title, "Hello");
    assert_eq!(created.description, "Hello description");
    assert_eq!(created.code, "fn main() {}");
    assert_eq!(created.language, "rust");
    assert_eq!(created.tags, vec!["a", "b", "c"]);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.id.len(), 36);

    let fetched = repo.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing() {
    let repo = init_db().await;
    let res = repo.get("no-such-id").await;
    assert!(matches!(res, Err(Error::RecordNotFound(_))));
}

#[tokio::test]
#[traced_test]
async fn test_update_keeps_created() {
    let repo = init_db().await;
    let created = repo.create(payload("Original", "x")).await.unwrap();

    let mut previous = created.clone();
    for i in 0..3 {
        let updated = repo
            .update(&created.id, payload(&format!("Update {i}"), ""))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, format!("Update {i}"));
        assert!(updated.tags.is_empty());
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= previous.updated_at);
        assert!(updated.created_at <= updated.updated_at);
        previous = updated;
    }

    let fetched = repo.get(&created.id).await.unwrap();
    assert_eq!(fetched, previous);
}

#[tokio::test]
async fn test_update_missing() {
    let repo = init_db().await;
    let res = repo.update("no-such-id", payload("Nothing", "")).await;
    assert!(matches!(res, Err(Error::RecordNotFound(_))));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_order_and_delete() {
    let repo = init_db().await;
    assert!(repo.list().await.unwrap().is_empty());

    let mut ids = Vec::new();
    for i in 0..5 {
        let s = repo.create(payload(&format!("Snippet {i}"), "")).await.unwrap();
        ids.push(s.id);
    }

    assert!(repo.delete(&ids[1]).await.unwrap());
    assert!(repo.delete(&ids[3]).await.unwrap());
    assert!(!repo.delete(&ids[3]).await.unwrap());

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(repo.count().await.unwrap(), 3);
    let titles: Vec<_> = listed.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Snippet 4", "Snippet 2", "Snippet 0"]);
    assert!(listed
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn test_hostile_input_is_stored_verbatim() {
    let repo = init_db().await;
    let title = "x'); DROP TABLE snippet; --";
    let created = repo
        .create(SnippetPayload {
            tags: Some(TagsInput::List(vec!["'quoted'".to_string()])),
            ..payload(title, "")
        })
        .await
        .unwrap();
    assert_eq!(created.title, title);
    assert_eq!(created.tags, vec!["'quoted'"]);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_serialized_form() {
    let repo = init_db().await;
    let created = repo.create(payload("Json", "react, hooks")).await.unwrap();
    let value = serde_json::to_value(&created).unwrap();
    assert_eq!(value["tags"], serde_json::json!(["react", "hooks"]));
    let created_at = value["created_at"].as_str().unwrap();
    assert!(created_at.ends_with('Z'));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[traced_test]
async fn test_concurrent_updates_last_write_wins() {
    let data_dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}/snippets.db", data_dir.path().display());
    let pool = snipbox_dal::new_pool(&url).await.unwrap();
    snipbox_dal::migrate(&pool).await.unwrap();
    let repo = SnippetRepositoryImpl::new(pool.clone());
    let created = repo.create(payload("Shared", "")).await.unwrap();

    let tasks = (0..40)
        .map(|i| {
            let repo = SnippetRepositoryImpl::new(pool.clone());
            let id = created.id.clone();
            tokio::spawn(async move {
                repo.update(&id, payload(&format!("Writer {i}"), "w"))
                    .await
                    .map(|s| s.title)
            })
        })
        .collect::<Vec<_>>();

    let mut titles = Vec::new();
    for task in tasks {
        titles.push(task.await.unwrap().unwrap());
    }
    assert_eq!(titles.len(), 40);

    let stored = repo.get(&created.id).await.unwrap();
    assert!(titles.contains(&stored.title));
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at >= created.updated_at);
    assert_eq!(repo.count().await.unwrap(), 1);
}
