//! HTTP gateway → gRPC listener → repository, over real sockets.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum_helpers::ShutdownCoordinator;
use domain_todo::{InMemoryTodoRepository, MockTodoRepository, TodoRepository};
use grpc_client::server::ServerConfig;
use grpc_client::{JwtVerifier, TokenVerifier, create_channel_lazy};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;
use tower::ServiceExt;

use todo_server::{gateway, serve_grpc};

const SECRET: &[u8] = b"end-to-end-secret";

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    exp: u64,
}

fn token_for(user: &str) -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 3600;
    encode(
        &Header::default(),
        &Claims { sub: user, exp },
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

struct TestServer {
    gateway: Router,
    grpc_uri: String,
    shutdown: ShutdownCoordinator,
    handle: JoinHandle<eyre::Result<()>>,
}

impl TestServer {
    async fn start<R: TodoRepository + 'static>(repository: R) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = ServerConfig::new().with_host("127.0.0.1").with_port(port);
        let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtVerifier::hs256(SECRET));
        let (shutdown, _) = ShutdownCoordinator::new();

        let handle = tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                serve_grpc(listener, Arc::new(repository), verifier, &config, shutdown).await
            }
        });

        let grpc_uri = format!("http://127.0.0.1:{port}");
        let channel = create_channel_lazy(grpc_uri.clone()).unwrap();
        let gateway = gateway::router(channel, &["*".to_string()]).unwrap();

        Self {
            gateway,
            grpc_uri,
            shutdown,
            handle,
        }
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.gateway.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn stop(self) {
        self.shutdown.shutdown();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("gRPC server did not drain in time")
            .unwrap()
            .unwrap();
    }
}

#[tokio::test]
async fn test_item_and_project_lifecycle() {
    let server = TestServer::start(InMemoryTodoRepository::new()).await;
    let alice = token_for("alice");
    let token = Some(alice.as_str());

    let (status, project) = server
        .call(Method::POST, "/v1/projects", token, Some(json!({ "name": "home" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project["owner_id"], "alice");
    let project_id = project["id"].as_str().unwrap().to_string();

    let (status, item) = server
        .call(
            Method::POST,
            "/v1/items",
            token,
            Some(json!({ "title": "water plants", "project_id": project_id })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["id"].as_str().unwrap().to_string();

    let (status, fetched) = server
        .call(Method::GET, &format!("/v1/items/{item_id}"), token, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["project"], project);
    assert_eq!(fetched["is_done"], false);

    let (_, undone) = server.call(Method::GET, "/v1/items/undone", token, None).await;
    assert_eq!(undone["items"].as_array().unwrap().len(), 1);

    let (status, updated) = server
        .call(
            Method::PUT,
            &format!("/v1/items/{item_id}"),
            token,
            Some(json!({ "title": "water plants", "is_done": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_done"], true);
    assert_eq!(updated["owner_id"], "alice");

    let (_, done) = server
        .call(
            Method::GET,
            &format!("/v1/items?done=done&project_ids={project_id}"),
            token,
            None,
        )
        .await;
    assert_eq!(done["items"][0]["id"], item_id.as_str());

    let (status, info) = server
        .call(Method::GET, &format!("/v1/projects/{project_id}"), token, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["items"].as_array().unwrap().len(), 1);

    let (status, _) = server
        .call(Method::DELETE, &format!("/v1/projects/{project_id}"), token, None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The item outlives its project
    let (_, orphan) = server
        .call(Method::GET, &format!("/v1/items/{item_id}"), token, None)
        .await;
    assert_eq!(orphan["project"], Value::Null);

    let (status, _) = server
        .call(Method::DELETE, &format!("/v1/items/{item_id}"), token, None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = server
        .call(Method::GET, &format!("/v1/items/{item_id}"), token, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    server.stop().await;
}

#[tokio::test]
async fn test_unauthenticated_calls_never_reach_the_repository() {
    // Any repository call would panic the handler and surface as a 500
    let server = TestServer::start(MockTodoRepository::new()).await;

    let (status, body) = server
        .call(Method::POST, "/v1/projects", None, Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");

    let (status, _) = server
        .call(Method::GET, "/v1/items/undone", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600;
        encode(
            &Header::default(),
            &Claims { sub: "mallory", exp },
            &EncodingKey::from_secret(b"some other secret"),
        )
        .unwrap()
    };
    let (status, _) = server
        .call(Method::GET, "/v1/projects", Some(&forged), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    server.stop().await;
}

#[tokio::test]
async fn test_tenants_only_see_and_change_their_own_data() {
    let server = TestServer::start(InMemoryTodoRepository::new()).await;
    let alice = token_for("alice");
    let bob = token_for("bob");

    let (_, project) = server
        .call(Method::POST, "/v1/projects", Some(&alice), Some(json!({ "name": "home" })))
        .await;
    let project_id = project["id"].as_str().unwrap().to_string();
    let (_, item) = server
        .call(
            Method::POST,
            "/v1/items",
            Some(&alice),
            Some(json!({ "title": "private", "project_id": project_id })),
        )
        .await;
    let item_id = item["id"].as_str().unwrap().to_string();
    let item_uri = format!("/v1/items/{item_id}");
    let project_uri = format!("/v1/projects/{project_id}");

    let (status, _) = server.call(Method::GET, &item_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, bobs) = server.call(Method::GET, "/v1/items", Some(&bob), None).await;
    assert!(bobs["items"].as_array().unwrap().is_empty());

    let (_, projects) = server.call(Method::GET, "/v1/projects", Some(&bob), None).await;
    assert!(projects["projects"].as_array().unwrap().is_empty());

    let (status, _) = server
        .call(
            Method::PUT,
            &item_uri,
            Some(&bob),
            Some(json!({ "title": "overwritten", "is_done": true })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.call(Method::DELETE, &item_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .call(Method::PUT, &project_uri, Some(&bob), Some(json!({ "name": "taken" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.call(Method::DELETE, &project_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .call(
            Method::POST,
            "/v1/items",
            Some(&bob),
            Some(json!({ "title": "intruder", "project_id": project_id })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Alice's data is untouched
    let (status, fetched) = server.call(Method::GET, &item_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "private");
    assert_eq!(fetched["is_done"], false);

    let (_, info) = server.call(Method::GET, &project_uri, Some(&alice), None).await;
    assert_eq!(info["project"]["name"], "home");
    assert_eq!(info["items"].as_array().unwrap().len(), 1);

    server.stop().await;
}

#[tokio::test]
async fn test_error_statuses_are_relayed() {
    let server = TestServer::start(InMemoryTodoRepository::new()).await;
    let alice = token_for("alice");
    let token = Some(alice.as_str());

    let (status, body) = server
        .call(Method::GET, "/v1/items/not-a-uuid", token, None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");

    let id = "6f1b7c1e-7a0b-4a5e-9d2e-0c8f6b1a2d3c";
    let project = json!({ "id": id, "name": "dup" });
    let (status, _) = server
        .call(Method::POST, "/v1/projects", token, Some(project.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = server
        .call(Method::POST, "/v1/projects", token, Some(project))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (status, _) = server
        .call(
            Method::POST,
            "/v1/items",
            token,
            Some(json!({ "title": "t", "project_id": "00000000-0000-0000-0000-000000000001" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .call(
            Method::PUT,
            &format!("/v1/projects/{id}"),
            token,
            Some(json!({ "name": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    server.stop().await;
}

#[tokio::test]
async fn test_token_verification_is_public() {
    let server = TestServer::start(MockTodoRepository::new()).await;

    let (status, body) = server
        .call(
            Method::POST,
            "/v1/auth/verify",
            None,
            Some(json!({ "token": token_for("carol") })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "carol");

    let (status, _) = server
        .call(
            Method::POST,
            "/v1/auth/verify",
            None,
            Some(json!({ "token": "garbage" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    server.stop().await;
}

#[tokio::test]
async fn test_health_reports_serving() {
    let server = TestServer::start(InMemoryTodoRepository::new()).await;
    let channel = create_channel_lazy(server.grpc_uri.clone()).unwrap();
    let mut health = HealthClient::new(channel);

    for service in ["", "todo.v1.TodoService", "auth.v1.AuthService"] {
        let response = health
            .check(HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status, ServingStatus::Serving as i32, "{service}");
    }

    server.stop().await;
}
