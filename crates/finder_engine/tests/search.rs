use std::time::Duration;

use finder_core::UNKNOWN;
use finder_engine::{MovieSearch, SearchError, TmdbClient, TmdbSettings, NO_SYNOPSIS};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> TmdbSettings {
    TmdbSettings {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..TmdbSettings::default()
    }
}

fn detail(director: &str, runtime: u32, genres: &[&str]) -> serde_json::Value {
    json!({
        "runtime": runtime,
        "genres": genres.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
        "credits": {
            "crew": [
                { "job": "Screenplay", "name": "Jon Spaihts" },
                { "job": "Director", "name": director },
                { "job": "Director", "name": "Second Director" }
            ]
        }
    })
}

async fn mount_search(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Dune"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "it-IT"))
        .and(query_param("include_adult", "false"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, id: u64, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/movie/{id}")))
        .and(query_param("append_to_response", "credits"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn three_results() -> serde_json::Value {
    json!({
        "results": [
            {
                "id": 438631,
                "title": "Dune",
                "original_title": "Dune",
                "release_date": "2021-09-15",
                "overview": "Paul Atreides, a brilliant and gifted young man...",
                "vote_average": 7.8,
                "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
            },
            {
                "id": 693134,
                "title": "Dune - Parte due",
                "original_title": "Dune: Part Two",
                "release_date": "2024-02-27",
                "overview": "",
                "vote_average": 8.2,
                "poster_path": null
            },
            {
                "id": 841,
                "title": "Dune",
                "release_date": "",
                "overview": "x".repeat(200),
                "vote_average": 6.2
            }
        ]
    })
}

#[tokio::test]
async fn search_enriches_results_in_provider_order() {
    let server = MockServer::start().await;
    mount_search(&server, three_results()).await;
    mount_detail(
        &server,
        438631,
        ResponseTemplate::new(200).set_body_json(detail("Denis Villeneuve", 155, &["Science Fiction"])),
    )
    .await;
    mount_detail(
        &server,
        693134,
        ResponseTemplate::new(200).set_body_json(detail("Denis Villeneuve", 167, &[])),
    )
    .await;
    mount_detail(
        &server,
        841,
        ResponseTemplate::new(200).set_body_json(detail("David Lynch", 137, &["Adventure"])),
    )
    .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    let movies = client.try_search("Dune", 10).await.expect("search ok");

    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![438631, 693134, 841]);

    let first = &movies[0];
    assert_eq!(first.director, "Denis Villeneuve");
    assert_eq!(first.release_year, "2021");
    assert_eq!(first.runtime_minutes, Some(155));
    assert_eq!(first.genres, vec!["Science Fiction".to_string()]);
    assert_eq!(first.poster_reference, "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg");
    assert!(!first.has_alternate_title());

    let second = &movies[1];
    assert_eq!(second.original_title, "Dune: Part Two");
    assert!(second.has_alternate_title());
    assert_eq!(second.synopsis, NO_SYNOPSIS);
    assert_eq!(second.poster_reference, "");

    let third = &movies[2];
    assert_eq!(third.director, "David Lynch");
    assert_eq!(third.original_title, "Dune");
    assert_eq!(third.release_year, UNKNOWN);
    assert_eq!(third.synopsis, format!("{}...", "x".repeat(150)));
}

#[tokio::test]
async fn one_failed_detail_lookup_degrades_only_that_item() {
    let server = MockServer::start().await;
    mount_search(&server, three_results()).await;
    mount_detail(
        &server,
        438631,
        ResponseTemplate::new(200).set_body_json(detail("Denis Villeneuve", 155, &[])),
    )
    .await;
    mount_detail(&server, 693134, ResponseTemplate::new(500)).await;
    mount_detail(
        &server,
        841,
        ResponseTemplate::new(200).set_body_json(detail("David Lynch", 137, &["Adventure"])),
    )
    .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    let movies = client.search("Dune", 10).await;

    assert_eq!(movies.len(), 3);
    let unknown: Vec<u64> = movies
        .iter()
        .filter(|m| m.director == UNKNOWN)
        .map(|m| m.id)
        .collect();
    assert_eq!(unknown, vec![693134]);
    assert_eq!(movies[1].runtime_minutes, None);
    assert!(movies[1].genres.is_empty());
    assert_eq!(movies[0].director, "Denis Villeneuve");
    assert_eq!(movies[2].genres, vec!["Adventure".to_string()]);
}

#[tokio::test]
async fn malformed_detail_and_missing_director_both_yield_unknown() {
    let server = MockServer::start().await;
    mount_search(&server, three_results()).await;
    mount_detail(
        &server,
        438631,
        ResponseTemplate::new(200).set_body_raw("{not json", "application/json"),
    )
    .await;
    mount_detail(
        &server,
        693134,
        ResponseTemplate::new(200).set_body_json(json!({ "runtime": 0, "credits": { "crew": [] } })),
    )
    .await;
    mount_detail(
        &server,
        841,
        ResponseTemplate::new(200).set_body_json(detail("David Lynch", 137, &[])),
    )
    .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    let movies = client.search("Dune", 10).await;

    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].director, UNKNOWN);
    assert_eq!(movies[1].director, UNKNOWN);
    assert_eq!(movies[1].runtime_minutes, None);
    assert_eq!(movies[2].director, "David Lynch");
}

#[tokio::test]
async fn max_results_bounds_the_list_and_the_detail_calls() {
    let server = MockServer::start().await;
    mount_search(&server, three_results()).await;
    Mock::given(method("GET"))
        .and(path("/movie/438631"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail("Denis Villeneuve", 155, &[])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/693134"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    let movies = client.search("Dune", 1).await;

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 438631);
    server.verify().await;
}

#[tokio::test]
async fn concurrent_detail_lookups_keep_relevance_order() {
    let server = MockServer::start().await;
    mount_search(&server, three_results()).await;
    mount_detail(
        &server,
        438631,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(200))
            .set_body_json(detail("Denis Villeneuve", 155, &[])),
    )
    .await;
    mount_detail(
        &server,
        693134,
        ResponseTemplate::new(200).set_body_json(detail("Denis Villeneuve", 167, &[])),
    )
    .await;
    mount_detail(
        &server,
        841,
        ResponseTemplate::new(200).set_body_json(detail("David Lynch", 137, &[])),
    )
    .await;

    let client = TmdbClient::new(TmdbSettings {
        detail_concurrency: 3,
        ..settings(&server)
    })
    .unwrap();
    let movies = client.search("Dune", 10).await;

    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![438631, 693134, 841]);
}

#[tokio::test]
async fn primary_search_failure_is_reported_as_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    let err = client.try_search("Dune", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::HttpStatus(503)));
    assert!(client.search("Dune", 10).await.is_empty());
}

#[tokio::test]
async fn slow_search_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(three_results()),
        )
        .mount(&server)
        .await;

    let client = TmdbClient::new(TmdbSettings {
        search_timeout: Duration::from_millis(50),
        ..settings(&server)
    })
    .unwrap();
    let err = client.try_search("Dune", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::Timeout));
}

#[tokio::test]
async fn unreachable_provider_yields_empty_list() {
    let client = TmdbClient::new(TmdbSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: Duration::from_millis(200),
        ..TmdbSettings::default()
    })
    .unwrap();
    assert!(client.search("Dune", 10).await.is_empty());
}

#[tokio::test]
async fn zero_matches_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let client = TmdbClient::new(settings(&server)).unwrap();
    assert!(client.try_search("Dune", 10).await.unwrap().is_empty());
}
