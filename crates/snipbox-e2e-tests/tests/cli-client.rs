use snipbox_cli::{
    client::ApiClient,
    commands::{form_fields, submit},
};
use snipbox_types::form::{Field, FormAction, FormState, reduce};
use snipbox_e2e_tests::launch_env;
use tracing_test::traced_test;

fn fill(state: FormState, values: &[(Field, &str)]) -> FormState {
    values.iter().fold(state, |state, (field, value)| {
        reduce(state, FormAction::SetField(*field, value.to_string()))
    })
}

#[tokio::test]
#[traced_test]
async fn test_cli_client_round() {
    let (_client, base_url, _guard) = launch_env("test_cli_client_round").await.unwrap();
    let client = ApiClient::new(base_url);

    let state = reduce(FormState::default(), FormAction::Open);
    let state = fill(
        state,
        &[
            (Field::Title, "Quick sort"),
            (Field::Description, "Classic recursion"),
            (Field::Code, "def qs(xs): ..."),
            (Field::Language, "python"),
            (Field::Tags, "sort, , algo "),
        ],
    );
    let created = submit(&client, state).await.unwrap();
    assert_eq!(created.tags, vec!["sort", "algo"]);

    let existing = client.get(&created.id).await.unwrap();
    let state = reduce(
        FormState::default(),
        FormAction::Edit {
            id: existing.id.clone(),
            fields: form_fields(&existing),
        },
    );
    let state = fill(state, &[(Field::Tags, "")]);
    let updated = submit(&client, state).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert!(updated.tags.is_empty());
    assert_eq!(updated.title, "Quick sort");

    let list = client.list().await.unwrap();
    assert_eq!(list.len(), 1);

    client.delete(&created.id).await.unwrap();
    client.delete(&created.id).await.unwrap();
    let err = client.get(&created.id).await.unwrap_err();
    assert!(err.to_string().contains("Not found"));
}

#[tokio::test]
#[traced_test]
async fn test_cli_client_rejects_invalid_form() {
    let (_client, base_url, _guard) = launch_env("test_cli_client_rejects_invalid_form")
        .await
        .unwrap();
    let client = ApiClient::new(base_url);

    let state = reduce(FormState::default(), FormAction::Open);
    let state = fill(state, &[(Field::Title, "No code")]);
    let err = submit(&client, state).await.unwrap_err();
    assert!(err.to_string().contains("Code is required"));
    assert!(client.list().await.unwrap().is_empty());
}
