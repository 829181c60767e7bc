#[path = "../common/mod.rs"]
mod common;

use alotame_application::use_cases::{QueryDomainUseCase, RunResolverCheckUseCase};
use alotame_domain::{classify_arguments, PolicyOutcome, QueryStatus, RetryPolicy, Verdict};
use alotame_infrastructure::dns::DnsForwarder;
use common::{MockDnsServer, MockReply};
use std::sync::Arc;
use std::time::Duration;

fn check_use_case(retry: RetryPolicy) -> RunResolverCheckUseCase {
    let query = QueryDomainUseCase::new(Arc::new(DnsForwarder::new()), retry);
    RunResolverCheckUseCase::new(Arc::new(query))
}

fn quick_retry() -> RetryPolicy {
    RetryPolicy::new(Duration::from_millis(300), 2, Duration::from_millis(10))
}

#[tokio::test]
async fn test_blocking_resolver_meets_policy() {
    let server = MockDnsServer::start(vec![
        ("github.com", MockReply::address("20.27.177.113")),
        ("yahoo.com", MockReply::address("74.6.231.21")),
        ("tracker.example", MockReply::address("0.0.0.0")),
        ("ads.example", MockReply::Empty),
    ])
    .await
    .unwrap();

    let args = classify_arguments(&[
        "--require-allow",
        "github.com, yahoo.com",
        "--require-deny",
        "tracker.example,ads.example,unknowndomain.com",
    ]);

    let report = check_use_case(quick_retry())
        .execute(&server.addr().to_string(), &args)
        .await
        .unwrap();

    assert_eq!(report.outcome, Some(PolicyOutcome::Passed));
    assert_eq!(report.exit_code(), 0);

    let summary: Vec<(&str, QueryStatus, &str)> = report
        .results
        .iter()
        .map(|r| (r.domain.as_str(), r.status, r.detail.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("github.com", QueryStatus::Allowed, "20.27.177.113"),
            ("yahoo.com", QueryStatus::Allowed, "74.6.231.21"),
            ("tracker.example", QueryStatus::Blocked, "only null addresses"),
            ("ads.example", QueryStatus::Blocked, "no answer"),
            ("unknowndomain.com", QueryStatus::Blocked, "NXDOMAIN"),
        ]
    );
}

#[tokio::test]
async fn test_leaky_resolver_fails_policy() {
    let server = MockDnsServer::start(vec![("tracker.example", MockReply::address("203.0.113.7"))])
        .await
        .unwrap();

    let args = classify_arguments(&["--require-deny", "tracker.example", "plain.example"]);

    let report = check_use_case(quick_retry())
        .execute(&server.addr().to_string(), &args)
        .await
        .unwrap();

    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.results[0].verdict, Some(Verdict::Fail));
    assert_eq!(report.results[1].verdict, Some(Verdict::Undetermined));
}

#[tokio::test]
async fn test_dropped_queries_recover_through_retries() {
    let server = MockDnsServer::start(vec![(
        "flaky.example",
        MockReply::DropFirst {
            count: 2,
            then: Box::new(MockReply::address("198.51.100.4")),
        },
    )])
    .await
    .unwrap();

    let args = classify_arguments(&["--require-allow", "flaky.example"]);

    let report = check_use_case(quick_retry())
        .execute(&server.addr().to_string(), &args)
        .await
        .unwrap();

    assert_eq!(report.results[0].status, QueryStatus::Allowed);
    assert_eq!(report.results[0].verdict, Some(Verdict::Pass));
    assert_eq!(server.received("flaky.example"), 3);
}

#[tokio::test]
async fn test_retry_budget_exhaustion_is_error_and_fails_requirement() {
    let server = MockDnsServer::start(vec![("slow.example", MockReply::Silent)])
        .await
        .unwrap();

    let args = classify_arguments(&["--require-allow", "slow.example"]);
    let retry = RetryPolicy::new(Duration::from_millis(100), 1, Duration::ZERO);

    let report = check_use_case(retry)
        .execute(&server.addr().to_string(), &args)
        .await
        .unwrap();

    assert_eq!(report.results[0].status, QueryStatus::Error);
    assert_eq!(report.results[0].verdict, Some(Verdict::Fail));
    assert_eq!(report.exit_code(), 1);
    assert_eq!(server.received("slow.example"), 2);
}

#[tokio::test]
async fn test_report_serializes_like_cli_output() {
    let server = MockDnsServer::start(vec![("github.com", MockReply::address("20.27.177.113"))])
        .await
        .unwrap();

    let args = classify_arguments(&["github.com"]);
    let report = check_use_case(quick_retry())
        .execute(&server.addr().to_string(), &args)
        .await
        .unwrap();

    let json = serde_json::to_value(&report.results).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "domain": "github.com", "status": "ALLOWED", "detail": "20.27.177.113" }
        ])
    );
}
