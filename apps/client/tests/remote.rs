use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use intervue_client::{ClientError, Config, RemoteClient};

fn client_for(server: &MockServer) -> RemoteClient {
    RemoteClient::new(&Config {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    })
}

#[tokio::test]
async fn upload_returns_result_set_in_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-resume-public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": ["Tell me about Rust", "Describe a hard bug"],
            "skills": ["Rust", "SQL", "Rust"],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .upload_resume("resume.pdf", b"%PDF-1.4 fake".to_vec())
        .await
        .expect("upload ok");

    assert_eq!(
        results.questions,
        vec![
            "Tell me about Rust".to_string(),
            "Describe a hard bug".to_string()
        ]
    );
    // Order preserved, duplicates untouched.
    assert_eq!(
        results.skills,
        vec!["Rust".to_string(), "SQL".to_string(), "Rust".to_string()]
    );
}

#[tokio::test]
async fn upload_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-resume-public"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload_resume("resume.pdf", b"data".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
}

#[tokio::test]
async fn upload_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-resume-public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload_resume("resume.pdf", b"data".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
}

#[tokio::test]
async fn empty_file_is_rejected_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-resume-public"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.upload_resume("resume.pdf", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
}

#[tokio::test]
async fn transcript_is_submitted_as_a_transcription_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-voice-public"))
        .and(body_json(json!({ "transcription": "hello world " })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": ["Q1"],
            "skills": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client.submit_transcript("hello world ").await.expect("ok");
    assert_eq!(results.questions, vec!["Q1".to_string()]);
    assert!(results.skills.is_empty());
}

#[tokio::test]
async fn history_parses_entries_with_and_without_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/question-history-public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "timestamp": "2025-04-02T10:30:00Z",
                "questions": ["Q1", "Q2"],
                "skills": ["SQL"],
            },
            { "questions": ["Q3"] },
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let history = client.fetch_history().await.expect("history ok");

    assert_eq!(history.len(), 2);
    assert!(history[0].timestamp.is_some());
    assert_eq!(history[0].questions, vec!["Q1".to_string(), "Q2".to_string()]);
    assert_eq!(history[0].skills, vec!["SQL".to_string()]);
    assert!(history[1].timestamp.is_none());
    assert!(history[1].skills.is_empty());
}

#[tokio::test]
async fn history_with_a_non_array_body_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/question-history-public"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "nothing here" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let history = client.fetch_history().await.expect("lenient parse");
    assert!(history.is_empty());
}

#[tokio::test]
async fn history_skips_malformed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/question-history-public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "questions": ["Q1"] },
            { "questions": "not an array" },
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let history = client.fetch_history().await.expect("lenient parse");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].questions, vec!["Q1".to_string()]);
}

#[tokio::test]
async fn history_failure_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/question-history-public"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_history().await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
}

// ── Auth client ─────────────────────────────────────────────────────────

mod auth {
    use super::*;
    use intervue_client::AuthClient;
    use pretty_assertions::assert_eq;

    fn auth_for(server: &MockServer) -> AuthClient {
        AuthClient::new(&client_for(server))
    }

    #[tokio::test]
    async fn login_returns_the_user_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({
                "email": "a@b.c",
                "password": "hunter2",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": { "id": "u-1", "username": "ada", "email": "a@b.c" },
            })))
            .mount(&server)
            .await;

        let user = auth_for(&server).login("a@b.c", "hunter2").await.expect("login ok");
        assert_eq!(user.id, "u-1");
        assert_eq!(user.username, "ada");
    }

    #[tokio::test]
    async fn login_surfaces_the_backend_message_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Invalid email or password" })),
            )
            .mount(&server)
            .await;

        let err = auth_for(&server).login("a@b.c", "wrong").await.unwrap_err();
        match err {
            ClientError::Auth(message) => assert_eq!(message, "Invalid email or password"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_falls_back_to_a_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = auth_for(&server)
            .register("ada", "a@b.c", "hunter2")
            .await
            .unwrap_err();
        match err {
            ClientError::Auth(message) => assert_eq!(message, "Registration failed"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn profile_probe_degrades_to_none_on_any_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let restored = auth_for(&server).get_profile().await.expect("probe never errors");
        assert!(restored.is_none());
    }

    #[tokio::test]
    async fn profile_probe_restores_an_existing_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u-1",
                "username": "ada",
                "email": "a@b.c",
                "created_at": "2025-01-01T00:00:00Z",
            })))
            .mount(&server)
            .await;

        let restored = auth_for(&server).get_profile().await.expect("probe ok");
        let user = restored.expect("session restored");
        assert_eq!(user.username, "ada");
        assert!(user.created_at.is_some());
    }

    #[tokio::test]
    async fn logout_failures_are_swallowed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        // Must not panic or surface anything.
        auth_for(&server).logout().await;
    }

    #[tokio::test]
    async fn change_password_surfaces_the_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/change-password"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Current password is incorrect" })),
            )
            .mount(&server)
            .await;

        let err = auth_for(&server)
            .change_password("old", "new")
            .await
            .unwrap_err();
        match err {
            ClientError::Auth(message) => assert_eq!(message, "Current password is incorrect"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }
}
