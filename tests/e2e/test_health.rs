use crate::e2e::helpers;

use hanzimaster_tts::domain::tts::AnnotationStyle;
use helpers::stub_synthesizer::StubSynthesizer;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(body.get("configured").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body.get("provider").and_then(|v| v.as_str()), Some("stub"));
    assert_eq!(body.get("voiceCount").and_then(|v| v.as_u64()), Some(7));
}

#[tokio::test]
async fn it_should_report_unconfigured_provider() {
    let ctx = TestContext::with_synthesizer(
        StubSynthesizer::new(AnnotationStyle::Inline).with_configured(false),
    )
    .await;

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("configured").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/voices").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
