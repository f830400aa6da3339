// Integration tests for the reqwest transport against a local stand-in
// for the gateway endpoint.

use httpmock::prelude::*;
use marketpress_aim::config::{AimSettings, GatewayMode};
use marketpress_aim::gateways::{AimClientFactory, AimLineItem};
use rust_decimal_macros::dec;

fn settings_for(endpoint: String) -> AimSettings {
    let mut settings = AimSettings::new("test_login", "test_key", GatewayMode::Sandbox);
    settings.endpoint_override = Some(endpoint);
    settings
}

#[tokio::test]
async fn test_approved_transaction_over_http() {
    let server = MockServer::start_async().await;
    let gateway = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/gateway/transact.dll")
                .header("content-type", "application/x-www-form-urlencoded")
                .header_exists("user-agent")
                .body_contains("x_login=test_login")
                .body_contains("x_card_num=4007000000027")
                .body_contains("x_line_item=SKU-1<|>Mug<|><|>2<|>9.99<|>1");
            then.status(200)
                .body("1,1,1,This transaction has been approved.,AUTH123,Y,TXN789");
        })
        .await;

    let factory =
        AimClientFactory::with_reqwest(settings_for(server.url("/gateway/transact.dll"))).unwrap();
    let mut client = factory.create_client();
    client.transaction("4007000000027");
    client.add_line_item(&AimLineItem::new("SKU-1", "Mug", "", 2, dec!(9.99), true));
    client.set_parameter("x_amount", "19.98");
    client.process(1).await;

    gateway.assert_async().await;
    assert!(client.is_approved());
    assert!(!client.is_error());
    assert_eq!(client.response_text(), "This transaction has been approved.");
    assert_eq!(client.transaction_id(), "TXN789");
}

#[tokio::test]
async fn test_user_agent_names_plugin() {
    let server = MockServer::start_async().await;
    let gateway = server
        .mock_async(|when, then| {
            when.method(POST).header(
                "user-agent",
                marketpress_aim::gateways::services::transport::user_agent(),
            );
            then.status(200).body("2,1,2,This transaction has been declined.");
        })
        .await;

    let factory = AimClientFactory::with_reqwest(settings_for(server.url("/"))).unwrap();
    let mut client = factory.create_client();
    client.process(1).await;

    gateway.assert_async().await;
    assert!(client.is_declined());
}

#[tokio::test]
async fn test_encapsulated_pipe_delimited_response() {
    let server = MockServer::start_async().await;
    let gateway = server
        .mock_async(|when, then| {
            when.method(POST)
                .body_contains("x_delim_char=%7C")
                .body_contains("x_encap_char=%22");
            then.status(200).body(
                "\"1\"|\"1\"|\"1\"|\"This transaction has been approved.\"|\"AB12\"|\"Y\"|\"2149186848\"",
            );
        })
        .await;

    let mut settings = settings_for(server.url("/"));
    settings.delim_char = "|".to_string();
    settings.encap_char = "\"".to_string();
    let factory = AimClientFactory::with_reqwest(settings).unwrap();

    let mut client = factory.create_client();
    client.process(1).await;

    gateway.assert_async().await;
    assert!(client.is_approved());
    assert_eq!(client.auth_code(), "AB12");
    assert_eq!(client.transaction_id(), "2149186848");
    assert_eq!(client.gateway_response(), "1");
    // reason text keeps its encapsulation
    assert_eq!(client.response_text(), "\"This transaction has been approved.\"");
}

#[tokio::test]
async fn test_server_error_body_is_still_parsed() {
    let server = MockServer::start_async().await;
    let gateway = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("Internal Server Error");
        })
        .await;

    let factory = AimClientFactory::with_reqwest(settings_for(server.url("/"))).unwrap();
    let mut client = factory.create_client();
    client.process(2).await;

    // a body came back, so the loop retried instead of stopping
    gateway.assert_hits_async(2).await;
    assert!(client.is_error());
    assert!(!client.is_approved());
}

#[tokio::test]
async fn test_unreachable_gateway_is_an_error_without_retry() {
    let endpoint = "http://127.0.0.1:1/gateway/transact.dll".to_string();
    let factory = AimClientFactory::with_reqwest(settings_for(endpoint)).unwrap();
    let mut client = factory.create_client();
    client.process(3).await;

    assert!(client.is_error());
    assert_eq!(client.attempts(), 1);
    assert_eq!(client.response_text(), "");
}
