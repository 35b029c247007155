//! Integration tests for the interactive session
//!
//! The controller is driven with key presses while its commands are
//! executed against a wiremock server, the same way the terminal loop does.

use bdo_profile::config::Config;
use bdo_profile::session::{run_command, Command, Envelope, Key, SessionController, SessionState};
use bdo_profile::ProfileClient;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_PAGE: &str = r#"<html><body>
<div class="profile_detail">
  <div class="nick_wrap"><p class="nick">Tarkus</p></div>
  <ul class="line_list">
    <li><span class="title">PA/PD</span><span class="desc">Privado</span></li>
  </ul>
</div>
<ul class="character_list">
  <li>
    <p class="character_name">Arrow</p>
    <span class="character_symbol"><em>icon</em><em>Arqueiro</em></span>
    <span class="character_info"><span>Nv</span><span>62</span></span>
  </li>
</ul>
</body></html>"#;

const EMPTY_SEARCH: &str =
    r#"<html><body><div class="box_list_area"><ul></ul></div></body></html>"#;

fn search_result(href: &str) -> String {
    format!(
        r#"<html><body><div class="box_list_area"><ul>
        <li><div class="title"><a href="{}">Tarkus</a></div></li>
        </ul></div></body></html>"#,
        href
    )
}

fn create_test_client(base_url: &str, debug_json: &str) -> ProfileClient {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.output.debug_json = debug_json.to_string();
    ProfileClient::new(config).expect("Failed to build client")
}

fn type_text(controller: &mut SessionController, text: &str) {
    for c in text.chars() {
        assert!(controller.handle_key(Key::Char(c)).is_none());
    }
}

/// Runs a command chain to completion, feeding each envelope back
async fn drive(controller: &mut SessionController, client: &ProfileClient, command: Command) {
    let mut next = Some(command);
    while let Some(command) = next.take() {
        let Some(envelope) = run_command(client, command).await else {
            continue;
        };
        next = controller.handle_completion(envelope);
    }
}

async fn mount_search(server: &MockServer, keyword: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/pt-BR/Adventure"))
        .and(query_param("searchKeyword", keyword))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_to_profile_view_and_back() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;
    Mock::given(method("GET"))
        .and(path("/profile/tarkus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri(), "");
    let mut controller = SessionController::default();
    controller.resize(100, 30);

    type_text(&mut controller, "Tarkus");
    let command = controller.handle_key(Key::Enter).unwrap();
    assert_eq!(controller.state(), SessionState::Loading);

    drive(&mut controller, &client, command).await;

    assert_eq!(controller.state(), SessionState::ProfileView);
    let profile = controller.profile().unwrap();
    assert_eq!(profile.family_info.name, "Tarkus");
    assert_eq!(profile.family_info.papd, "Privado");
    assert_eq!(controller.viewport().offset(), 0);
    assert!(!controller.viewport().visible_lines().is_empty());

    assert!(controller.handle_key(Key::Backspace).is_none());
    assert_eq!(controller.state(), SessionState::Search);
    assert!(controller.profile().is_none());
    assert!(controller.input().is_empty());
}

#[tokio::test]
async fn test_not_found_then_retry() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Ghost", EMPTY_SEARCH.to_string()).await;

    let client = create_test_client(&mock_server.uri(), "");
    let mut controller = SessionController::default();

    type_text(&mut controller, "Ghost");
    let command = controller.handle_key(Key::Enter).unwrap();
    drive(&mut controller, &client, command).await;

    assert_eq!(controller.state(), SessionState::Error);
    assert!(controller.error_message().contains("'Ghost'"));

    let first_generation = controller.generation();
    match controller.handle_key(Key::Enter) {
        Some(Command::Resolve { generation, family }) => {
            assert_eq!(generation, first_generation + 1);
            assert_eq!(family, "Ghost");
        }
        other => panic!("expected a new resolve, got {:?}", other),
    }
    assert_eq!(controller.state(), SessionState::Loading);
    assert!(controller.error_message().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_shows_status() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;
    Mock::given(method("GET"))
        .and(path("/profile/tarkus"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri(), "");
    let mut controller = SessionController::default();

    type_text(&mut controller, "Tarkus");
    let command = controller.handle_key(Key::Enter).unwrap();
    drive(&mut controller, &client, command).await;

    assert_eq!(controller.state(), SessionState::Error);
    assert!(controller
        .error_message()
        .starts_with("server returned status: 503"));
}

#[tokio::test]
async fn test_result_of_abandoned_lookup_is_ignored() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Ghost", EMPTY_SEARCH.to_string()).await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;

    let client = create_test_client(&mock_server.uri(), "");
    let mut controller = SessionController::default();

    type_text(&mut controller, "Ghost");
    let old = controller.handle_key(Key::Enter).unwrap();
    let old_envelope = run_command(&client, old).await.unwrap();
    controller.handle_completion(old_envelope.clone());
    assert_eq!(controller.state(), SessionState::Error);

    // Second lookup in flight; the first one's result arrives again
    let _ = controller.handle_key(Key::Enter).unwrap();
    assert!(controller.handle_completion(old_envelope).is_none());
    assert_eq!(controller.state(), SessionState::Loading);
}

#[tokio::test]
async fn test_fetched_profile_written_to_debug_file() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;
    Mock::given(method("GET"))
        .and(path("/profile/tarkus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let debug_path = dir.path().join("debug_output.json");
    let client = create_test_client(&mock_server.uri(), debug_path.to_str().unwrap());
    let mut controller = SessionController::default();

    type_text(&mut controller, "Tarkus");
    let command = controller.handle_key(Key::Enter).unwrap();
    drive(&mut controller, &client, command).await;

    let saved = bdo_profile::export::read_profile_json(&debug_path).unwrap();
    assert_eq!(&saved, controller.profile().unwrap());
}

#[tokio::test]
async fn test_debug_write_failure_does_not_fail_lookup() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;
    Mock::given(method("GET"))
        .and(path("/profile/tarkus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("missing").join("debug.json");
    let client = create_test_client(&mock_server.uri(), bad_path.to_str().unwrap());
    let mut controller = SessionController::default();

    type_text(&mut controller, "Tarkus");
    let command = controller.handle_key(Key::Enter).unwrap();
    drive(&mut controller, &client, command).await;

    assert_eq!(controller.state(), SessionState::ProfileView);
    assert!(!bad_path.exists());
}

#[tokio::test]
async fn test_stale_profile_is_not_saved() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Tarkus", search_result("/profile/tarkus")).await;
    Mock::given(method("GET"))
        .and(path("/profile/tarkus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let debug_path = dir.path().join("debug_output.json");
    let client = create_test_client(&mock_server.uri(), debug_path.to_str().unwrap());
    let mut controller = SessionController::default();

    type_text(&mut controller, "Tarkus");
    let resolve = controller.handle_key(Key::Enter).unwrap();
    let resolved = run_command(&client, resolve).await.unwrap();
    let fetch = controller.handle_completion(resolved).unwrap();
    let fetched = run_command(&client, fetch).await.unwrap();

    // Same result tagged with a lookup the controller never started
    let stale = Envelope::new(fetched.generation + 1, fetched.completion);
    assert!(controller.handle_completion(stale).is_none());
    assert_eq!(controller.state(), SessionState::Loading);
    assert!(!debug_path.exists());
}
