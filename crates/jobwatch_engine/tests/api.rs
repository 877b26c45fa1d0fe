use std::time::Duration;

use jobwatch_core::{QueryData, QueryKey};
use jobwatch_engine::{ApiClient, ClientSettings, DataSource};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientSettings {
        base_url: server.uri(),
        scrape_before_stats: false,
        ..ClientSettings::default()
    })
    .expect("client")
}

const STATS_BODY: &str = r#"{"total_jobs": 3, "companies": 2, "total_scrapes": 1,
    "scrape_durations_seconds": 2.5, "last_scrape": "2025-10-12 22:44:00"}"#;

#[tokio::test]
async fn fetch_jobs_parses_companies_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Stripe": [{"title": "SRE", "link": "https://stripe/1"}], "Atlassian": []}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let jobs = client_for(&server).fetch_jobs().await.expect("jobs");
    let companies: Vec<&str> = jobs.iter().map(|g| g.company.as_str()).collect();
    assert_eq!(companies, vec!["Stripe", "Atlassian"]);
    assert_eq!(jobs.total_jobs(), 1);
}

#[tokio::test]
async fn fetch_logs_defaults_to_500_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("lines", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a\nb\n"))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).fetch_logs(None).await.expect("logs");
    assert_eq!(text, "a\nb\n");
}

#[tokio::test]
async fn fetch_logs_passes_explicit_line_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("lines", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tail"))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).fetch_logs(Some(10)).await.expect("logs");
    assert_eq!(text, "tail");
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_stats().await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_payload_is_rejected_at_the_boundary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top_jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"jobs": 7}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_top_jobs().await.unwrap_err();
    assert_eq!(err.status, None);
    assert!(err.message.starts_with("invalid /top_jobs payload"));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(STATS_BODY),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");
    let err = client.fetch_stats().await.unwrap_err();
    assert!(err.message.contains("timed out"));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATS_BODY))
        .expect(2)
        .mount(&server)
        .await;

    for base in [format!("{}/api", server.uri()), format!("{}/api/", server.uri())] {
        let client = ApiClient::new(ClientSettings {
            base_url: base,
            scrape_before_stats: false,
            ..ClientSettings::default()
        })
        .expect("client");
        let stats = client.fetch_stats().await.expect("stats");
        assert_eq!(stats.total_jobs, 3);
    }
}

#[tokio::test]
async fn stats_query_triggers_scrape_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATS_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client");
    let data = client.fetch(QueryKey::Stats).await.expect("stats");
    assert!(matches!(data, QueryData::Stats(ref s) if s.companies == 2));
}

#[tokio::test]
async fn data_source_maps_logs_key_to_line_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("lines", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x INFO y"))
        .mount(&server)
        .await;

    let data = client_for(&server)
        .fetch(QueryKey::Logs { lines: 25 })
        .await
        .expect("logs");
    assert_eq!(data, QueryData::Logs("x INFO y".into()));
}

#[test]
fn rejects_unusable_base_url() {
    let err = ApiClient::new(ClientSettings {
        base_url: "mailto:ops@example.com".into(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert!(err.message.contains("invalid api url"));
    assert!(ApiClient::new(ClientSettings {
        base_url: "not a url".into(),
        ..ClientSettings::default()
    })
    .is_err());
}
