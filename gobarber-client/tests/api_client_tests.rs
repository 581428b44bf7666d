use std::sync::Arc;

use gobarber_client::domains::profile::{
    AvatarOutcome, ProfileWorkflow, SubmissionPhase,
};
use gobarber_client::infra::errors::RequestError;
use gobarber_client::infra::services::{
    AvatarUpload, HistoryNavigator, InMemorySession, ProfileApiAdapter,
    ProfileService, Route, SessionStore, ToastKind, ToastQueue,
};
use gobarber_client::infra::ApiClient;
use gobarber_core::profile::{
    ProfileField, ProfileFormInput, ProfileSubmission, ProfileUpdatePayload,
    prepare_submission,
};
use gobarber_core::security::SecureCredential;
use gobarber_core::users::UserRecord;
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::json;

const USER_BODY: &str = r#"{
    "id": "f3a9",
    "name": "Ana Souza",
    "email": "ana@x.com",
    "avatar": "ana.png",
    "avatar_url": "http://localhost:3333/files/ana.png",
    "created_at": "2020-07-01T12:00:00.000Z",
    "updated_at": "2020-07-06T10:00:00.000Z"
}"#;

const OLD_PASSWORD_MISMATCH: &str =
    r#"{"status":"error","message":"Old password does not match."}"#;

async fn authorized_client(server: &mockito::Server) -> Arc<ApiClient> {
    let client = ApiClient::new(server.url()).unwrap();
    client
        .set_token(Some(SecureCredential::from("session-token")))
        .await;
    Arc::new(client)
}

fn payload_for(input: ProfileFormInput) -> ProfileUpdatePayload {
    match prepare_submission(input) {
        ProfileSubmission::Valid(payload) => payload,
        ProfileSubmission::Invalid(errors) => {
            panic!("unexpected errors: {errors}")
        }
    }
}

#[tokio::test]
async fn update_profile_puts_json_with_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/profile")
        .match_header("authorization", "Bearer session-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Ana Souza",
            "email": "ana@x.com",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(USER_BODY)
        .create_async()
        .await;

    let adapter = ProfileApiAdapter::new(authorized_client(&server).await);
    let payload = payload_for(ProfileFormInput::new("Ana Souza", "ana@x.com"));

    let user = adapter.update_profile(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.name, "Ana Souza");
    assert_eq!(user.id(), Some("f3a9"));
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("http://localhost:3333/files/ana.png")
    );
    assert_eq!(user.field("avatar"), Some(&json!("ana.png")));
}

#[tokio::test]
async fn update_profile_includes_password_change() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/profile")
        .match_body(Matcher::Json(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "old_password": "old1",
            "password": "new1",
            "password_confirmation": "new1",
        })))
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;

    let adapter = ProfileApiAdapter::new(authorized_client(&server).await);
    let payload = payload_for(
        ProfileFormInput::new("Ana", "ana@x.com")
            .with_passwords("old1", "new1", "new1"),
    );

    adapter.update_profile(&payload).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn client_without_token_sends_no_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/profile")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;

    let client = Arc::new(ApiClient::new(server.url()).unwrap());
    assert!(!client.has_token().await);
    let adapter = ProfileApiAdapter::new(client);
    let payload = payload_for(ProfileFormInput::new("Ana", "ana@x.com"));

    adapter.update_profile(&payload).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PUT", "/profile")
        .with_status(400)
        .with_body(OLD_PASSWORD_MISMATCH)
        .create_async()
        .await;

    let adapter = ProfileApiAdapter::new(authorized_client(&server).await);
    let payload = payload_for(ProfileFormInput::new("Ana", "ana@x.com"));

    let err = adapter.update_profile(&payload).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    match err {
        RequestError::Status { body, .. } => {
            assert!(body.contains("Old password does not match."))
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PUT", "/profile")
        .with_status(200)
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let adapter = ProfileApiAdapter::new(authorized_client(&server).await);
    let payload = payload_for(ProfileFormInput::new("Ana", "ana@x.com"));

    let err = adapter.update_profile(&payload).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn avatar_is_patched_as_multipart() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/avatar")
        .match_header("authorization", "Bearer session-token")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="avatar"; filename="me.png""#.to_string()),
            Matcher::Regex("Content-Type: image/png".to_string()),
        ]))
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, b"not really a png").unwrap();
    let upload = AvatarUpload::from_path(&path).await.unwrap();
    assert_eq!(upload.file_name, "me.png");

    let adapter = ProfileApiAdapter::new(authorized_client(&server).await);
    let user = adapter.update_avatar(upload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.field("avatar"), Some(&json!("ana.png")));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port
    let client = Arc::new(ApiClient::new("http://127.0.0.1:9").unwrap());
    let adapter = ProfileApiAdapter::new(client);
    let payload = payload_for(ProfileFormInput::new("Ana", "ana@x.com"));

    let err = adapter.update_profile(&payload).await.unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)));
}

#[tokio::test]
async fn workflow_against_live_api_replaces_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/profile")
        .with_status(200)
        .with_body(USER_BODY)
        .expect(1)
        .create_async()
        .await;

    let session = Arc::new(InMemorySession::signed_in(UserRecord::new(
        "Ana", "ana@x.com",
    )));
    let toasts = Arc::new(ToastQueue::new());
    let navigator = Arc::new(HistoryNavigator::starting_at(Route::Profile));
    let workflow = ProfileWorkflow::new(
        Arc::new(ProfileApiAdapter::new(authorized_client(&server).await)),
        session.clone(),
        toasts.clone(),
        navigator.clone(),
    );

    let mut form = workflow.initial_form();
    form.set_field(ProfileField::Name, "Ana Souza");
    let phase = workflow.submit(&mut form).await;

    mock.assert_async().await;
    assert_eq!(phase, SubmissionPhase::Succeeded);
    let user = session.current_user().unwrap();
    assert_eq!(user.name, "Ana Souza");
    assert_eq!(user.id(), Some("f3a9"));
    assert_eq!(navigator.current(), Some(Route::Dashboard));
    assert_eq!(toasts.visible()[0].kind, ToastKind::Success);
}

#[tokio::test]
async fn workflow_reports_failed_avatar_upload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/users/avatar")
        .with_status(500)
        .with_body(r#"{"status":"error","message":"Internal server error"}"#)
        .create_async()
        .await;

    let original = UserRecord::new("Ana", "ana@x.com");
    let session = Arc::new(InMemorySession::signed_in(original.clone()));
    let toasts = Arc::new(ToastQueue::new());
    let workflow = ProfileWorkflow::new(
        Arc::new(ProfileApiAdapter::new(authorized_client(&server).await)),
        session.clone(),
        toasts.clone(),
        Arc::new(HistoryNavigator::starting_at(Route::Profile)),
    );

    let outcome = workflow
        .change_avatar(Some(AvatarUpload::new("me.png", vec![1, 2, 3])))
        .await;

    assert_eq!(outcome, AvatarOutcome::Failed);
    assert_eq!(session.current_user(), Some(original));
    assert_eq!(toasts.visible()[0].kind, ToastKind::Error);
}
