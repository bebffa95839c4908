//! `todo.v1.TodoService` on top of a [`TodoRepository`]
//!
//! Every handler parses its wire input first, so malformed ids never reach
//! storage. Calls addressed by id only see entities the caller owns: another
//! tenant's item or project answers `NotFound`, for reads and mutations alike.

use std::sync::Arc;

use domain_todo::{Project, ProjectInfo, TodoError, TodoItem, TodoItemQuery, TodoRepository};
use grpc_client::Identity;
use grpc_client::conversions::{parse_opt_uuid, parse_uuid, parse_uuids};
use rpc::todo::v1::{
    self as proto, CreateProjectRequest, CreateProjectResponse, CreateTodoItemRequest,
    CreateTodoItemResponse, DeleteProjectRequest, DeleteProjectResponse, DeleteTodoItemRequest,
    DeleteTodoItemResponse, GetProjectRequest, GetProjectResponse, GetTodoItemRequest,
    GetTodoItemResponse, ListProjectsRequest, ListProjectsResponse, ListUndoneTodoItemsRequest,
    ListUndoneTodoItemsResponse, SearchTodoItemsRequest, SearchTodoItemsResponse,
    UpdateProjectRequest, UpdateProjectResponse, UpdateTodoItemRequest, UpdateTodoItemResponse,
    todo_service_server::TodoService,
};
use tonic::{Request, Response, Status};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct TodoServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    pub fn from_arc(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn owned_item(&self, id: Uuid, owner_id: &str) -> Result<TodoItem, Status> {
        let item = self.repository.get_item_by_id(id).await?;
        if item.owner_id != owner_id {
            return Err(TodoError::item_not_found(id).into());
        }
        Ok(item)
    }

    async fn owned_project(&self, id: Uuid, owner_id: &str) -> Result<ProjectInfo, Status> {
        let info = self.repository.get_project(id).await?;
        if info.project.owner_id != owner_id {
            return Err(TodoError::project_not_found(id).into());
        }
        Ok(info)
    }
}

/// Owner of everything the call creates or lists.
fn caller<T>(request: &Request<T>) -> Result<String, Status> {
    Identity::from_request(request).map(|identity| identity.user_id.clone())
}

/// Only the id of a project reference is read by the repository.
fn project_ref(id: Uuid) -> Project {
    Project {
        id,
        name: String::new(),
        owner_id: String::new(),
    }
}

fn validated<T: Validate>(value: T) -> Result<T, Status> {
    value.validate().map_err(TodoError::from)?;
    Ok(value)
}

fn done_filter(raw: i32) -> Result<domain_todo::DoneFilter, Status> {
    proto::DoneFilter::try_from(raw)
        .map(Into::into)
        .map_err(|_| Status::invalid_argument(format!("done: unknown filter value {raw}")))
}

#[tonic::async_trait]
impl<R> TodoService for TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn create_todo_item(
        &self,
        request: Request<CreateTodoItemRequest>,
    ) -> Result<Response<CreateTodoItemResponse>, Status> {
        let owner_id = caller(&request)?;
        let req = request.into_inner();

        let id = parse_opt_uuid("id", req.id.as_deref())?.unwrap_or_else(Uuid::new_v4);
        let project = parse_opt_uuid("project_id", req.project_id.as_deref())?.map(project_ref);

        let item = validated(TodoItem {
            id,
            title: req.title,
            owner_id,
            is_done: false,
            project,
        })?;
        if let Some(project) = &item.project {
            self.owned_project(project.id, &item.owner_id).await?;
        }

        let item = self.repository.create_item(item).await?;

        Ok(Response::new(CreateTodoItemResponse {
            item: Some(item.into()),
        }))
    }

    async fn get_todo_item(
        &self,
        request: Request<GetTodoItemRequest>,
    ) -> Result<Response<GetTodoItemResponse>, Status> {
        let owner_id = caller(&request)?;
        let id = parse_uuid("id", &request.get_ref().id)?;

        let item = self.owned_item(id, &owner_id).await?;

        Ok(Response::new(GetTodoItemResponse {
            item: Some(item.into()),
        }))
    }

    async fn list_undone_todo_items(
        &self,
        request: Request<ListUndoneTodoItemsRequest>,
    ) -> Result<Response<ListUndoneTodoItemsResponse>, Status> {
        let owner_id = caller(&request)?;

        let items = self.repository.all_undone_items(&owner_id).await?;

        Ok(Response::new(ListUndoneTodoItemsResponse {
            items: items.into_iter().map(Into::into).collect(),
        }))
    }

    async fn search_todo_items(
        &self,
        request: Request<SearchTodoItemsRequest>,
    ) -> Result<Response<SearchTodoItemsResponse>, Status> {
        let owner_id = caller(&request)?;
        let req = request.into_inner();

        let query = TodoItemQuery {
            id: parse_opt_uuid("id", req.id.as_deref())?,
            title: req.title,
            done: done_filter(req.done)?,
            project_ids: parse_uuids("project_ids", &req.project_ids)?,
            owner_id: Some(owner_id),
        };

        let items = self.repository.get_items(query).await?;

        Ok(Response::new(SearchTodoItemsResponse {
            items: items.into_iter().map(Into::into).collect(),
        }))
    }

    async fn update_todo_item(
        &self,
        request: Request<UpdateTodoItemRequest>,
    ) -> Result<Response<UpdateTodoItemResponse>, Status> {
        let owner_id = caller(&request)?;
        let req = request.into_inner();
        let id = parse_uuid("id", &req.id)?;

        // Owner and project are carried for validation only; the repository
        // writes title and done flag.
        let update = validated(TodoItem {
            id,
            title: req.title,
            owner_id,
            is_done: req.is_done,
            project: None,
        })?;
        self.owned_item(id, &update.owner_id).await?;

        let item = self.repository.update_item(id, update).await?;

        Ok(Response::new(UpdateTodoItemResponse {
            item: Some(item.into()),
        }))
    }

    async fn delete_todo_item(
        &self,
        request: Request<DeleteTodoItemRequest>,
    ) -> Result<Response<DeleteTodoItemResponse>, Status> {
        let owner_id = caller(&request)?;
        let id = parse_uuid("id", &request.get_ref().id)?;

        self.owned_item(id, &owner_id).await?;
        self.repository.delete_item(id).await?;

        info!(item_id = %id, "Todo item deleted");
        Ok(Response::new(DeleteTodoItemResponse {}))
    }

    async fn create_project(
        &self,
        request: Request<CreateProjectRequest>,
    ) -> Result<Response<CreateProjectResponse>, Status> {
        let owner_id = caller(&request)?;
        let req = request.into_inner();

        let project = validated(Project {
            id: parse_opt_uuid("id", req.id.as_deref())?.unwrap_or_else(Uuid::new_v4),
            name: req.name,
            owner_id,
        })?;

        let project = self.repository.create_project(project).await?;

        Ok(Response::new(CreateProjectResponse {
            project: Some(project.into()),
        }))
    }

    async fn list_projects(
        &self,
        request: Request<ListProjectsRequest>,
    ) -> Result<Response<ListProjectsResponse>, Status> {
        let owner_id = caller(&request)?;

        let projects = self.repository.get_all_member_projects(&owner_id).await?;

        Ok(Response::new(ListProjectsResponse {
            projects: projects.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_project(
        &self,
        request: Request<GetProjectRequest>,
    ) -> Result<Response<GetProjectResponse>, Status> {
        let owner_id = caller(&request)?;
        let id = parse_uuid("id", &request.get_ref().id)?;

        let info = self.owned_project(id, &owner_id).await?;

        Ok(Response::new(info.into()))
    }

    async fn update_project(
        &self,
        request: Request<UpdateProjectRequest>,
    ) -> Result<Response<UpdateProjectResponse>, Status> {
        let owner_id = caller(&request)?;
        let req = request.into_inner();
        let id = parse_uuid("id", &req.id)?;

        let renamed = validated(Project {
            id,
            name: req.name,
            owner_id,
        })?;
        self.owned_project(id, &renamed.owner_id).await?;

        let project = self
            .repository
            .update_project_by_id(id, renamed.name)
            .await?;

        Ok(Response::new(UpdateProjectResponse {
            project: Some(project.into()),
        }))
    }

    async fn delete_project(
        &self,
        request: Request<DeleteProjectRequest>,
    ) -> Result<Response<DeleteProjectResponse>, Status> {
        let owner_id = caller(&request)?;
        let id = parse_uuid("id", &request.get_ref().id)?;

        self.owned_project(id, &owner_id).await?;
        self.repository.delete_project(id).await?;

        info!(project_id = %id, "Project deleted");
        Ok(Response::new(DeleteProjectResponse {}))
    }
}
