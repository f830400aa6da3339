// Integration tests for the process() retry loop
//
// Approved and declined responses end the loop, error and unmapped codes
// resend the identical request, and a missing response body ends the loop
// at once with the error flag set.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{approved_body, test_client, ScriptedTransport, DECLINED_BODY, ERROR_BODY};

#[tokio::test]
async fn test_error_responses_are_retried_until_approved() {
    let approved = approved_body("TXN3");
    let transport = ScriptedTransport::new(vec![
        Some(ERROR_BODY),
        Some(ERROR_BODY),
        Some(approved.as_str()),
    ]);
    let mut client = test_client(transport.clone());

    client.process(3).await;

    assert_eq!(transport.calls(), 3);
    assert!(client.is_approved());
    assert!(!client.is_error());
    assert_eq!(client.transaction_id(), "TXN3");
}

#[tokio::test]
async fn test_retries_resend_identical_body() {
    let transport = ScriptedTransport::always(ERROR_BODY);
    let mut client = test_client(transport.clone());
    client.set_parameter("x_amount", "10.00");

    client.process(3).await;

    let bodies = transport.bodies();
    assert_eq!(bodies.len(), 3);
    assert!(bodies.iter().all(|b| b == &bodies[0]));
}

#[tokio::test]
async fn test_exhausted_retries_surface_as_error() {
    let transport = ScriptedTransport::always(ERROR_BODY);
    let mut client = test_client(transport.clone());

    client.process(2).await;

    assert_eq!(transport.calls(), 2);
    assert!(client.is_error());
    assert!(!client.is_approved());
    assert!(!client.is_declined());
    assert_eq!(client.response_text(), "The credit card number is invalid.");
}

#[tokio::test]
async fn test_unmapped_code_is_retried() {
    let approved = approved_body("TXN9");
    let transport = ScriptedTransport::new(vec![Some(""), Some("4,1,1,Held for review"), Some(approved.as_str())]);
    let mut client = test_client(transport.clone());

    client.process(3).await;

    assert_eq!(transport.calls(), 3);
    assert!(client.is_approved());
}

#[tokio::test]
async fn test_decline_is_terminal() {
    let approved = approved_body("TXN1");
    let transport = ScriptedTransport::new(vec![Some(DECLINED_BODY), Some(approved.as_str())]);
    let mut client = test_client(transport.clone());

    client.process(3).await;

    assert_eq!(transport.calls(), 1);
    assert!(client.is_declined());
    assert!(!client.is_approved());
    assert!(!client.is_error());
}

#[tokio::test]
async fn test_missing_body_stops_without_retry() {
    let approved = approved_body("TXN1");
    let transport = ScriptedTransport::new(vec![None, Some(approved.as_str())]);
    let mut client = test_client(transport.clone());

    client.process(3).await;

    assert_eq!(transport.calls(), 1);
    assert!(client.is_error());
    assert!(!client.is_approved());
}

#[tokio::test]
async fn test_missing_body_after_error_keeps_last_response() {
    let transport = ScriptedTransport::new(vec![Some(ERROR_BODY), None]);
    let mut client = test_client(transport.clone());

    client.process(3).await;

    assert_eq!(transport.calls(), 2);
    assert!(client.is_error());
    assert_eq!(client.gateway_response(), "3");
}

#[tokio::test]
async fn test_single_attempt_by_default() {
    let transport = ScriptedTransport::always(ERROR_BODY);
    let factory = helpers::test_factory(transport.clone());
    let mut client = factory.create_client();

    client.process(factory.retries()).await;

    assert_eq!(transport.calls(), 1);
    assert!(client.is_error());
}
