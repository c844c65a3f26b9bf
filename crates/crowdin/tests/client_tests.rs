//! HTTP mock tests for the Crowdin client.
//!
//! Uses wiremock to simulate the Crowdin v2 API.

use crowdin::{Client, Error, NewTask};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new("test-token")
        .unwrap()
        .with_base_url(server.uri())
}

fn wrapped_list(items: &[serde_json::Value]) -> serde_json::Value {
    json!({
        "data": items.iter().map(|item| json!({"data": item})).collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn list_projects_peels_envelopes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrapped_list(&[
            json!({"id": 7, "targetLanguageIds": ["de", "fr"]}),
            json!({"id": 9, "targetLanguageIds": ["es"]}),
        ])))
        .mount(&server)
        .await;

    let projects = client_for(&server).list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, 7);
    assert_eq!(projects[0].target_language_ids, vec!["de", "fr"]);
}

#[tokio::test]
async fn list_branches_filters_by_exact_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/branches"))
        .and(query_param("name", "[SpringCare.arceus] feature.x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrapped_list(&[
            json!({"id": 21, "name": "[SpringCare.arceus] feature.x"}),
        ])))
        .mount(&server)
        .await;

    let branches = client_for(&server)
        .list_branches(7, "[SpringCare.arceus] feature.x")
        .await
        .unwrap();

    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].id, 21);
}

#[tokio::test]
async fn list_directories_passes_branch_filter_and_recursion() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/directories"))
        .and(query_param("branchId", "21"))
        .and(query_param("filter", "en"))
        .and(query_param("recursion", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wrapped_list(&[json!({"id": 33, "name": "en"})])),
        )
        .mount(&server)
        .await;

    let directories = client_for(&server)
        .list_directories(7, 21, "en", true)
        .await
        .unwrap();

    assert_eq!(directories.len(), 1);
    assert_eq!(directories[0].id, 33);
}

#[tokio::test]
async fn list_files_preserves_listing_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/7/files"))
        .and(query_param("directoryId", "33"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrapped_list(&[
            json!({"id": 102, "name": "b.json"}),
            json!({"id": 101, "name": "a.json"}),
            json!({"id": 103, "name": "c.json"}),
        ])))
        .mount(&server)
        .await;

    let files = client_for(&server).list_files(7, 33).await.unwrap();

    let ids: Vec<u64> = files.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![102, 101, 103]);
}

#[tokio::test]
async fn create_task_sends_exact_payload() {
    let server = MockServer::start().await;

    let expected = json!({
        "title": "SH Internal Task",
        "type": 2,
        "fileIds": [101, 102],
        "languageId": "de",
        "vendor": "oht",
        "skipAssignedStrings": true,
        "skipUntranslatedStrings": false,
        "includeUntranslatedStringsOnly": false
    });

    Mock::given(method("POST"))
        .and(path("/projects/7/tasks"))
        .and(body_json(&expected))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"id": 900, "status": "todo"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let task = NewTask {
        title: "SH Internal Task".to_string(),
        task_type: 2,
        file_ids: vec![101, 102],
        language_id: "de".to_string(),
        vendor: "oht".to_string(),
        skip_assigned_strings: true,
        skip_untranslated_strings: false,
        include_untranslated_strings_only: false,
    };

    let created = client_for(&server).create_task(7, &task).await.unwrap();
    assert_eq!(created.id, 900);
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_projects().await;

    match result.unwrap_err() {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_projects().await;

    match result.unwrap_err() {
        Error::Auth { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_projects().await;

    assert!(matches!(result.unwrap_err(), Error::Serialization(_)));
}
