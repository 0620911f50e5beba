use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sublink_core::{
    ClientConfig, ClientError, ExternalSubscription, ExternalSubscriptionClient, GroupClient,
    HttpDispatcher, NewGroup,
};

#[tokio::test]
async fn nodes_by_group_hits_query_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/nodes/group/nodes"))
        .and(query_param("groupId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "00000",
            "msg": "ok",
            "data": [{"ID": 1, "Name": "jp-01", "Link": "vless://a@b:443"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(Client::new(), &server.uri()).unwrap();
    let client = GroupClient::new(dispatcher);

    let resp = client.nodes_by_group(42).await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data.unwrap()[0].link, "vless://a@b:443");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn add_group_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/nodes/group/add"))
        .and(body_json(json!({"name": "EU"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": "00000", "msg": "added"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(Client::new(), &server.uri()).unwrap();
    let client = GroupClient::new(dispatcher);

    let resp = client.add(&NewGroup { name: "EU".into() }).await.unwrap();
    assert_eq!(resp.msg, "added");
}

#[tokio::test]
async fn delete_subscription_encodes_id_in_query() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/external-subscription/delete"))
        .and(query_param("id", "7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": "00000", "msg": "deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    let client = ExternalSubscriptionClient::new(HttpDispatcher::from_config(&config).unwrap());

    assert!(client.delete(7).await.unwrap().is_success());
}

#[tokio::test]
async fn non_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/external-subscription/add"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "40002",
            "msg": "name or url already exists"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(Client::new(), &server.uri()).unwrap();
    let client = ExternalSubscriptionClient::new(dispatcher);

    let sub = ExternalSubscription::new("airport", "https://example.com/sub");
    match client.add(&sub).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("40002"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/external-subscription/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(Client::new(), &server.uri()).unwrap();
    let client = ExternalSubscriptionClient::new(dispatcher);

    assert!(matches!(client.list().await, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let dispatcher = HttpDispatcher::new(Client::new(), "http://127.0.0.1:9").unwrap();
    let client = GroupClient::new(dispatcher);

    assert!(matches!(client.list().await, Err(ClientError::Network(_))));
}
