//! Integration tests for profile retrieval
//!
//! These tests use wiremock to serve search, profile and guild pages and
//! exercise the client end-to-end.

use bdo_profile::config::Config;
use bdo_profile::export::{read_roster, run_batch, write_roster};
use bdo_profile::{ProfileClient, ProfileError};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_PAGE: &str = r#"<html><body>
<div class="profile_detail">
  <div class="nick_wrap"><p class="nick">Tarkus</p></div>
  <ul class="line_list">
    <li><span class="title">Criação da família</span><span class="desc">2019-03-02</span></li>
    <li><span class="title">Guilda</span><span class="guild"><a href="/g">Nocturne</a></span></li>
    <li><span class="title">PA/PD</span><span class="desc">712</span></li>
    <li><span class="title">Energia</span><span class="desc">350</span></li>
    <li><span class="title">Pontos de Contribuição</span><span class="desc">400</span></li>
  </ul>
</div>
<ul class="character_data_box">
  <li><span class="spec_name">Coleta</span><span class="spec_level">MestreNv.12</span><span class="spec_stat">1200</span></li>
</ul>
<ul class="character_list">
  <li>
    <p class="character_name">Arrow<span class="selected_label">Personagem Principal</span></p>
    <span class="character_symbol"><em>icon</em><em>Arqueiro</em></span>
    <span class="character_info"><span>Nv</span><span>62</span></span>
  </li>
</ul>
</body></html>"#;

/// Creates a client pointed at the mock server
fn create_test_client(base_url: &str) -> ProfileClient {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.output.debug_json = String::new();
    ProfileClient::new(config).expect("Failed to build client")
}

fn search_page(href: &str) -> String {
    format!(
        r#"<html><body><div class="box_list_area"><ul>
        <li><div class="title"><a href="{}">Tarkus</a></div></li>
        </ul></div></body></html>"#,
        href
    )
}

async fn mount_search(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/pt-BR/Adventure"))
        .and(query_param("searchKeyword", "Tarkus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_lookup_resolves_and_fetches() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        search_page("/pt-BR/Adventure/Profile?profileTarget=abc"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/pt-BR/Adventure/Profile"))
        .and(query_param("profileTarget", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let profile = client.lookup("Tarkus").await.unwrap();

    assert_eq!(profile.family_info.name, "Tarkus");
    assert_eq!(profile.family_info.papd, "712");
    assert_eq!(profile.family_info.guild, "Nocturne");
    assert_eq!(profile.life_skills[0].level_name, "Mestre");
    assert_eq!(profile.life_skills[0].level_value, "12");
    assert_eq!(profile.characters.len(), 1);
    assert!(profile.characters[0].is_main);
    assert_eq!(profile.characters[0].level, "62 Personagem Principal");
}

#[tokio::test]
async fn test_resolve_returns_absolute_url() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, search_page("/pt-BR/Adventure/Profile?profileTarget=xyz")).await;

    let client = create_test_client(&mock_server.uri());
    let url = client.resolve("Tarkus").await.unwrap();

    assert_eq!(
        url.as_str(),
        format!("{}/pt-BR/Adventure/Profile?profileTarget=xyz", mock_server.uri())
    );
}

#[tokio::test]
async fn test_search_without_results_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        r#"<html><body><div class="box_list_area"><ul></ul></div></body></html>"#.to_string(),
    )
    .await;

    let client = create_test_client(&mock_server.uri());
    let err = client.resolve("Tarkus").await.unwrap_err();

    assert!(matches!(err, ProfileError::ProfileNotFound { ref family } if family == "Tarkus"));
    assert_eq!(
        err.to_string(),
        "Could not find profile link for 'Tarkus'. May not exist or profile is private"
    );
}

#[tokio::test]
async fn test_non_200_status_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client.resolve("Tarkus").await.unwrap_err();

    assert!(matches!(err, ProfileError::HttpStatus { .. }));
    assert!(err.to_string().starts_with("server returned status: 404"));
}

#[tokio::test]
async fn test_requests_carry_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "ProfileTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.site.base_url = mock_server.uri();
    config.fetch.user_agent = "ProfileTest/1.0".to_string();
    let client = ProfileClient::new(config).unwrap();

    let profile = client.fetch_profile_ref("/p").await.unwrap();
    assert_eq!(profile.family_info.energy, "350");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = create_test_client("http://127.0.0.1:1");
    let err = client.resolve("Tarkus").await.unwrap_err();
    assert!(matches!(err, ProfileError::Network { .. }));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PROFILE_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.site.base_url = mock_server.uri();
    config.fetch.timeout_secs = 1;
    let client = ProfileClient::new(config).unwrap();

    let err = client.fetch_profile_ref("/slow").await.unwrap_err();
    match err {
        ProfileError::Network { message, .. } => assert_eq!(message, "Request timeout"),
        other => panic!("expected a network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_guild_members_roster() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Adventure/Guild/GuildProfile"))
        .and(query_param("guildName", "Nocturne"))
        .and(query_param("region", "SA"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <a href="/Adventure/Profile?profileTarget=a">Alpha</a>
            <a href="/Adventure/Profile?profileTarget=b">Beta</a>
            <a href="/Adventure/Profile?profileTarget=a2">Alpha</a>
            <a href="/Adventure/Guild">Not a member</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let members = client.fetch_guild_members("Nocturne").await.unwrap();

    let names: Vec<&str> = members.iter().map(|m| m.nickname.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert!(members[0].url.ends_with("profileTarget=a"));

    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path(), "Nocturne", &members).unwrap();
    assert_eq!(read_roster(&path).unwrap(), members);
}

#[tokio::test]
async fn test_batch_continues_past_failures() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_PAGE))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("roster.csv");
    std::fs::write(&input, "Nickname,Ref\nAlpha,/ok\nBroken\nBeta,/gone\n").unwrap();
    let out_dir = dir.path().join("out");

    let client = create_test_client(&mock_server.uri());
    let report = run_batch(&client, &input, &out_dir).await.unwrap();

    assert_eq!(report.written, vec![out_dir.join("Alpha.json")]);
    assert_eq!(report.failed, vec!["Beta".to_string()]);

    let saved = bdo_profile::export::read_profile_json(&out_dir.join("Alpha.json")).unwrap();
    assert_eq!(saved.family_info.name, "Tarkus");
}
