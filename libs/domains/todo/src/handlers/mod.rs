//! HTTP/JSON gateway over the todo RPC services
//!
//! Each route forwards to exactly one RPC through a shared channel, copying
//! `authorization` and `x-request-id` into call metadata. RPC statuses come
//! back as HTTP statuses through [`TodoError`]; no business logic runs here.

mod auth;
mod items;
mod projects;

use axum::{
    Json, Router,
    routing::{get, post},
};
use axum_helpers::{AppError, ErrorResponse};
use rpc::auth::v1::auth_service_client::AuthServiceClient;
use rpc::todo::v1::todo_service_client::TodoServiceClient;
use tonic::Status;
use tonic::transport::Channel;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::TodoError;
use crate::models::{
    CreateProjectBody, CreateTodoItemBody, DoneFilter, Project, ProjectInfo, ProjectList,
    TodoItem, TodoItemList, UpdateProjectBody, UpdateTodoItemBody, VerifiedIdentity,
    VerifyTokenBody,
};

/// OpenAPI documentation for the gateway
#[derive(OpenApi)]
#[openapi(
    paths(
        items::create_item,
        items::search_items,
        items::list_undone_items,
        items::get_item,
        items::update_item,
        items::delete_item,
        projects::create_project,
        projects::list_projects,
        projects::get_project,
        projects::update_project,
        projects::delete_project,
        auth::verify_token,
    ),
    components(schemas(
        TodoItem,
        Project,
        ProjectInfo,
        DoneFilter,
        TodoItemList,
        ProjectList,
        CreateTodoItemBody,
        UpdateTodoItemBody,
        CreateProjectBody,
        UpdateProjectBody,
        VerifyTokenBody,
        VerifiedIdentity,
        ErrorResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "items", description = "Todo items"),
        (name = "projects", description = "Projects and their items"),
        (name = "auth", description = "Credential verification")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// RPC clients shared by every route; cloning is cheap.
#[derive(Clone)]
pub struct GatewayState {
    pub todo: TodoServiceClient<Channel>,
    pub auth: AuthServiceClient<Channel>,
}

impl GatewayState {
    pub fn new(channel: Channel) -> Self {
        Self {
            todo: TodoServiceClient::new(channel.clone()),
            auth: AuthServiceClient::new(channel),
        }
    }
}

/// Create the gateway router (CORS and tracing are layered by the caller)
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/items", get(items::search_items).post(items::create_item))
        .route("/v1/items/undone", get(items::list_undone_items))
        .route(
            "/v1/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route(
            "/v1/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/v1/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/v1/auth/verify", post(auth::verify_token))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn rpc_error(status: Status) -> AppError {
    TodoError::from(status).into()
}
