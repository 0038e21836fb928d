//! Fetch state machine tests
//!
//! Redirect following, redirect bounds, scheme fallback, short-circuiting,
//! and outcome classification against mock servers.

use txtripper::config::FetchConfig;
use txtripper::fetch::{AttemptOutcome, FetchOutcome, RobotsFetcher, Scheme};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> RobotsFetcher {
    RobotsFetcher::new(&FetchConfig::default()).expect("failed to build fetcher")
}

fn fetcher_with_limit(redirect_limit: u32) -> RobotsFetcher {
    let config = FetchConfig {
        redirect_limit,
        ..FetchConfig::default()
    };
    RobotsFetcher::new(&config).expect("failed to build fetcher")
}

/// Builds the candidate list the fetcher would try for a mock server,
/// labeled with the scheme slot each candidate stands in for.
fn candidates(first: &MockServer, second: Option<&MockServer>) -> Vec<(Scheme, String)> {
    let mut list = vec![(Scheme::Https, format!("{}/robots.txt", first.uri()))];
    if let Some(second) = second {
        list.push((Scheme::Http, format!("{}/robots.txt", second.uri())));
    }
    list
}

#[tokio::test]
async fn test_success_returns_body_and_final_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /x"))
        .mount(&server)
        .await;

    let outcome = fetcher()
        .fetch_candidates("test-host", &candidates(&server, None))
        .await;

    match outcome {
        FetchOutcome::Fetched(file) => {
            assert_eq!(file.body, "User-agent: *\nDisallow: /x");
            assert!(file.final_url.as_str().ends_with("/robots.txt"));
        }
        FetchOutcome::CouldNotFetch(failure) => panic!("expected success, got: {}", failure),
    }
}

#[tokio::test]
async fn test_scheme_fallback_over_real_transport_failure() {
    // The HTTPS attempt against a plain-HTTP server dies in the handshake;
    // the HTTP fallback must then win.
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /fallback"))
        .mount(&server)
        .await;

    let host = server.address().to_string();
    let outcome = fetcher().fetch(&host).await;

    match outcome {
        FetchOutcome::Fetched(file) => {
            assert_eq!(file.final_url.scheme(), "http");
            assert_eq!(file.body, "Disallow: /fallback");
        }
        FetchOutcome::CouldNotFetch(failure) => panic!("expected fallback success: {}", failure),
    }
}

#[tokio::test]
async fn test_first_success_short_circuits_second_candidate() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /a"))
        .mount(&first)
        .await;

    // The second candidate fails loudly if it is ever contacted
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("wrong server"))
        .expect(0)
        .mount(&second)
        .await;

    let outcome = fetcher()
        .fetch_candidates("test-host", &candidates(&first, Some(&second)))
        .await;

    assert!(matches!(outcome, FetchOutcome::Fetched(_)));
    // expect(0) on `second` is verified when the mock server drops
}

#[tokio::test]
async fn test_relative_redirect_is_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/moved/robots.txt"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/moved/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /moved"))
        .mount(&server)
        .await;

    let outcome = fetcher()
        .fetch_candidates("test-host", &candidates(&server, None))
        .await;

    match outcome {
        FetchOutcome::Fetched(file) => {
            assert!(file.final_url.path().starts_with("/moved"));
            assert_eq!(file.body, "Disallow: /moved");
        }
        FetchOutcome::CouldNotFetch(failure) => panic!("expected success, got: {}", failure),
    }
}

#[tokio::test]
async fn test_redirect_loop_stops_at_limit() {
    let server = MockServer::start().await;

    // A server that always redirects back to itself. With a limit of 3 the
    // fetcher issues exactly 3 requests: the initial one plus two follows,
    // then refuses the third follow.
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/robots.txt"))
        .expect(3)
        .mount(&server)
        .await;

    let outcome = fetcher_with_limit(3)
        .fetch_candidates("loop-host", &candidates(&server, None))
        .await;

    match outcome {
        FetchOutcome::CouldNotFetch(failure) => {
            assert_eq!(failure.attempts.len(), 1);
            assert!(matches!(
                failure.attempts[0].outcome,
                AttemptOutcome::RedirectLimitExceeded
            ));
        }
        FetchOutcome::Fetched(_) => panic!("expected redirect limit failure"),
    }
}

#[tokio::test]
async fn test_redirect_loop_on_both_candidates_yields_could_not_fetch() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    // Both "schemes" redirect back to themselves forever; each attempt must
    // stop at the limit and the overall result is the synthesized failure.
    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/robots.txt"))
            .expect(3)
            .mount(server)
            .await;
    }

    let outcome = fetcher_with_limit(3)
        .fetch_candidates("loop-host", &candidates(&first, Some(&second)))
        .await;

    match outcome {
        FetchOutcome::CouldNotFetch(failure) => {
            assert_eq!(failure.input, "loop-host");
            assert_eq!(failure.attempts.len(), 2);
            for attempt in &failure.attempts {
                assert!(matches!(
                    attempt.outcome,
                    AttemptOutcome::RedirectLimitExceeded
                ));
            }
            assert!(failure.to_string().contains("Could not fetch"));
        }
        FetchOutcome::Fetched(_) => panic!("expected redirect limit failure on both candidates"),
    }
}

#[tokio::test]
async fn test_404_on_both_candidates_is_not_found() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(server)
            .await;
    }

    let outcome = fetcher()
        .fetch_candidates("example.com", &candidates(&first, Some(&second)))
        .await;

    match outcome {
        FetchOutcome::CouldNotFetch(failure) => {
            assert_eq!(failure.input, "example.com");
            assert!(failure.is_not_found());
            assert!(failure.to_string().contains("No robots.txt found"));
        }
        FetchOutcome::Fetched(_) => panic!("expected not-found failure"),
    }
}

#[tokio::test]
async fn test_404_then_success_falls_through_to_second() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&first)
        .await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /second"))
        .mount(&second)
        .await;

    let outcome = fetcher()
        .fetch_candidates("example.com", &candidates(&first, Some(&second)))
        .await;

    match outcome {
        FetchOutcome::Fetched(file) => assert_eq!(file.body, "Disallow: /second"),
        FetchOutcome::CouldNotFetch(failure) => panic!("expected fallback success: {}", failure),
    }
}

#[tokio::test]
async fn test_redirect_without_location_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(302))
        .mount(&server)
        .await;

    let outcome = fetcher()
        .fetch_candidates("example.com", &candidates(&server, None))
        .await;

    match outcome {
        FetchOutcome::CouldNotFetch(failure) => {
            assert!(matches!(
                failure.attempts[0].outcome,
                AttemptOutcome::HttpError(302)
            ));
        }
        FetchOutcome::Fetched(_) => panic!("expected HTTP error"),
    }
}

#[tokio::test]
async fn test_server_error_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let outcome = fetcher()
        .fetch_candidates("example.com", &candidates(&server, None))
        .await;

    match outcome {
        FetchOutcome::CouldNotFetch(failure) => {
            assert!(matches!(
                failure.attempts[0].outcome,
                AttemptOutcome::HttpError(503)
            ));
        }
        FetchOutcome::Fetched(_) => panic!("expected HTTP error"),
    }
}
